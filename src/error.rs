//! Error type shared by the session manager, transport, and storage layers.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request failed with status {status}")]
    Status { status: u16 },
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("token must not be empty")]
    EmptyToken,
}
