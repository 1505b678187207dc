//! Login/register wire schema.
//!
//! DESIGN
//! ======
//! The server wraps its user payload as `{"response": {"user": {...}}}`.
//! Decoding goes through typed structs so a shape mismatch surfaces as
//! `AuthError::UnexpectedResponse` rather than a missing-field panic.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::Deserialize;

use crate::error::AuthError;

/// JSON body posted to the login and register endpoints.
pub fn credentials_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

#[derive(Debug, Deserialize)]
struct Envelope {
    response: ResponseBody,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    user: UserPayload,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    #[serde(default)]
    authentication_token: Option<String>,
    #[serde(default)]
    id: Option<i64>,
}

/// Decoded result of a successful login/register call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginGrant {
    /// `None` when the server reported success without issuing a token.
    pub token: Option<String>,
    pub user_id: Option<i64>,
}

/// Decode a login/register response body.
///
/// # Errors
///
/// Returns `AuthError::UnexpectedResponse` if the body is not JSON, lacks
/// `response.user`, or carries a token without a user `id`.
pub fn decode_login_response(body: &str) -> Result<LoginGrant, AuthError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| AuthError::UnexpectedResponse(e.to_string()))?;
    let user = envelope.response.user;
    let token = user.authentication_token.filter(|t| !t.is_empty());
    if token.is_some() && user.id.is_none() {
        return Err(AuthError::UnexpectedResponse("token issued without user id".to_owned()));
    }
    Ok(LoginGrant { token, user_id: user.id })
}
