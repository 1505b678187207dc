//! Endpoint and storage-key configuration for the session manager.
//!
//! Defaults match the authentication server's fixed contract: relative
//! endpoints (proxied in development) and three `localStorage` keys.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_LOGIN_ENDPOINT: &str = "/login";
pub const DEFAULT_LOGOUT_ENDPOINT: &str = "/logout";
pub const DEFAULT_REGISTER_ENDPOINT: &str = "/register";
pub const DEFAULT_TOKEN_KEY: &str = "auth_token";
pub const DEFAULT_EMAIL_KEY: &str = "user_email";
pub const DEFAULT_USER_ID_KEY: &str = "user_id";
pub const DEFAULT_TOKEN_HEADER: &str = "Authentication-Token";

/// Query flag asking the server to include the token in the login response.
const INCLUDE_TOKEN_QUERY: &str = "include_auth_token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub token: String,
    pub email: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub login_endpoint: String,
    pub logout_endpoint: String,
    pub register_endpoint: String,
    pub keys: StorageKeys,
    /// Request header carrying the token on authenticated API calls.
    pub token_header: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_endpoint: DEFAULT_LOGIN_ENDPOINT.to_owned(),
            logout_endpoint: DEFAULT_LOGOUT_ENDPOINT.to_owned(),
            register_endpoint: DEFAULT_REGISTER_ENDPOINT.to_owned(),
            keys: StorageKeys {
                token: DEFAULT_TOKEN_KEY.to_owned(),
                email: DEFAULT_EMAIL_KEY.to_owned(),
                user_id: DEFAULT_USER_ID_KEY.to_owned(),
            },
            token_header: DEFAULT_TOKEN_HEADER.to_owned(),
        }
    }
}

impl SessionConfig {
    /// Prefix every endpoint with an absolute origin, for deployments that
    /// do not proxy auth routes through the page's own origin.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        for endpoint in [&mut self.login_endpoint, &mut self.logout_endpoint, &mut self.register_endpoint] {
            *endpoint = join_url(base, endpoint);
        }
        self
    }

    pub fn login_url(&self) -> String {
        with_token_query(&self.login_endpoint)
    }

    pub fn register_url(&self) -> String {
        with_token_query(&self.register_endpoint)
    }

    pub fn logout_url(&self) -> String {
        self.logout_endpoint.clone()
    }
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

fn with_token_query(endpoint: &str) -> String {
    let sep = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{sep}{INCLUDE_TOKEN_QUERY}")
}
