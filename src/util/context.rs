//! Leptos context wiring for the browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component calls `provide_session` once; descendants fetch the
//! same manager with `use_session` instead of reaching for a global.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use crate::config::SessionConfig;
use crate::net::api::GlooTransport;
use crate::state::session::SessionManager;
use crate::util::storage::BrowserStore;

/// Session manager backed by `localStorage` and browser fetch.
pub type BrowserSession = SessionManager<BrowserStore, GlooTransport>;

/// Build the browser session from persisted storage and provide it to the
/// current reactive owner's descendants.
pub fn provide_session(config: SessionConfig) -> BrowserSession {
    let session = SessionManager::new(config, BrowserStore, GlooTransport);
    provide_context(session.clone());
    session
}

/// Fetch the session provided by an ancestor, if any.
pub fn use_session() -> Option<BrowserSession> {
    use_context::<BrowserSession>()
}
