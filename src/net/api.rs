//! HTTP transport for the authentication endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: every request fails with
//! `AuthError::Transport`, since the endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Network failures map to `AuthError::Transport`, non-2xx responses to
//! `AuthError::Status`. Callers decide whether to propagate or swallow.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::AuthError;

/// Minimal HTTP surface the session manager needs.
///
/// Futures are not required to be `Send`; browser fetch futures are
/// single-threaded.
pub trait AuthTransport {
    /// `POST` a JSON body and return the response body text.
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<String, AuthError>;

    /// `GET` a URL and return the response body text.
    async fn get(&self, url: &str) -> Result<String, AuthError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), AuthError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(AuthError::Status { status }) }
}

/// Browser fetch transport. Requests are same-origin unless the config
/// carries absolute URLs.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl AuthTransport for GlooTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<String, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(body)
                .map_err(|e| AuthError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            check_status(resp.status())?;
            resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(AuthError::Transport("not available on server".to_owned()))
        }
    }

    async fn get(&self, url: &str) -> Result<String, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(url)
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            check_status(resp.status())?;
            resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(AuthError::Transport("not available on server".to_owned()))
        }
    }
}
