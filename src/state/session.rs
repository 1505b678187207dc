//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionManager` is constructed once per page and handed to components
//! through Leptos context. It owns the in-memory session signal and writes
//! through to persistent storage on every change; storage is read only at
//! construction.
//!
//! INVARIANT
//! =========
//! `token`, `email` and `user_id` are set together and cleared together.
//! The session counts as authenticated iff a token is present.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::{SessionConfig, StorageKeys};
use crate::error::AuthError;
use crate::net::api::AuthTransport;
use crate::net::wire::{credentials_payload, decode_login_response};
use crate::util::storage::KeyValueStore;

/// Identity of the signed-in user, or all `None` when anonymous.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub email: Option<String>,
    pub user_id: Option<i64>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Rebuild the session persisted under `keys`.
    ///
    /// An empty token and an unparsable user id read as absent. A record
    /// missing any of the three fields loads as anonymous and its leftover
    /// keys are removed, so storage never holds a partial session.
    pub fn load(store: &impl KeyValueStore, keys: &StorageKeys) -> Self {
        let token = store.get(&keys.token).filter(|t| !t.is_empty());
        let email = store.get(&keys.email);
        let user_id = store.get(&keys.user_id).and_then(|raw| parse_user_id(&raw));

        if let (Some(token), Some(email), Some(user_id)) = (token, email, user_id) {
            return Self { token: Some(token), email: Some(email), user_id: Some(user_id) };
        }

        let keys = [&keys.token, &keys.email, &keys.user_id];
        if keys.iter().any(|key| store.get(key).is_some()) {
            log::warn!("session: discarding incomplete persisted session");
            for key in keys {
                if let Err(e) = store.remove(key) {
                    log::warn!("session: failed to remove {key}: {e}");
                }
            }
        }
        Self::default()
    }
}

fn parse_user_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Explicitly constructed session context.
///
/// Overlapping `login` calls are not serialized; whichever completes last
/// determines the stored session.
pub struct SessionManager<S, T> {
    config: Arc<SessionConfig>,
    store: Arc<S>,
    transport: Arc<T>,
    state: RwSignal<SessionState>,
}

impl<S, T> Clone for SessionManager<S, T> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            store: Arc::clone(&self.store),
            transport: Arc::clone(&self.transport),
            state: self.state,
        }
    }
}

impl<S: KeyValueStore, T: AuthTransport> SessionManager<S, T> {
    /// Create a manager, loading any session already persisted in `store`.
    pub fn new(config: SessionConfig, store: S, transport: T) -> Self {
        let initial = SessionState::load(&store, &config.keys);
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            transport: Arc::new(transport),
            state: RwSignal::new(initial),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Read-only view of the whole session record.
    pub fn session(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    pub fn token(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.token.clone()))
    }

    pub fn email(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.email.clone()))
    }

    pub fn user_id(&self) -> Signal<Option<i64>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.user_id))
    }

    /// Derived flag, recomputed whenever the token changes.
    pub fn is_authenticated(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(SessionState::is_authenticated))
    }

    /// Current session without subscribing to changes.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Header pair authenticating API calls, while signed in.
    pub fn auth_header(&self) -> Option<(String, String)> {
        let token = self.state.with_untracked(|s| s.token.clone())?;
        Some((self.config.token_header.clone(), token))
    }

    /// Replace the session and persist all three fields.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmptyToken` (with no state change) for an empty
    /// token, or `AuthError::Storage` if persisting fails. In the storage
    /// case the in-memory session has already been replaced.
    pub fn set_auth(&self, token: &str, email: &str, user_id: i64) -> Result<(), AuthError> {
        if token.is_empty() {
            return Err(AuthError::EmptyToken);
        }
        self.state.set(SessionState {
            token: Some(token.to_owned()),
            email: Some(email.to_owned()),
            user_id: Some(user_id),
        });

        let keys = &self.config.keys;
        self.store.set(&keys.token, token)?;
        self.store.set(&keys.email, email)?;
        self.store.set(&keys.user_id, &user_id.to_string())
    }

    /// Drop the session from memory and storage.
    pub fn clear_auth(&self) {
        if self.state.with_untracked(|s| *s != SessionState::default()) {
            self.state.set(SessionState::default());
        }

        let keys = &self.config.keys;
        for key in [&keys.token, &keys.email, &keys.user_id] {
            if let Err(e) = self.store.remove(key) {
                log::warn!("session: failed to remove {key}: {e}");
            }
        }
    }

    /// Exchange credentials for a token.
    ///
    /// Returns `Ok(false)` when the server accepts the request but issues no
    /// token; the existing session is left as it was.
    ///
    /// # Errors
    ///
    /// Transport and HTTP status failures propagate unchanged, as do
    /// malformed responses and storage failures from `set_auth`.
    pub async fn login(&self, email: &str, password: &str) -> Result<bool, AuthError> {
        let url = self.config.login_url();
        self.authenticate(&url, email, password).await
    }

    /// Create an account and sign in with it in one step.
    ///
    /// # Errors
    ///
    /// Same as [`SessionManager::login`].
    pub async fn register(&self, email: &str, password: &str) -> Result<bool, AuthError> {
        let url = self.config.register_url();
        self.authenticate(&url, email, password).await
    }

    /// End the session. The server call is best-effort; local state is
    /// cleared regardless of its outcome.
    pub async fn logout(&self) {
        if let Err(e) = self.transport.get(&self.config.logout_url()).await {
            log::debug!("session: logout request failed: {e}");
        }
        self.clear_auth();
        log::info!("session: signed out");
    }

    async fn authenticate(&self, url: &str, email: &str, password: &str) -> Result<bool, AuthError> {
        let body = self.transport.post_json(url, &credentials_payload(email, password)).await?;
        let grant = decode_login_response(&body)?;

        let (Some(token), Some(user_id)) = (grant.token, grant.user_id) else {
            log::warn!("session: server accepted credentials without issuing a token");
            return Ok(false);
        };
        // Caller-supplied email wins over any echoed by the server.
        self.set_auth(&token, email, user_id)?;
        log::info!("session: signed in as user {user_id}");
        Ok(true)
    }
}
