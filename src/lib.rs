//! # session-client
//!
//! Browser-side authentication session for a Leptos single-page app.
//!
//! The crate keeps a bearer token and basic user identity mirrored between
//! a reactive [`SessionState`] signal and `localStorage`, and wraps the
//! login/logout calls against the authentication server.
//!
//! Browser-only code (`gloo-net`, `web-sys`) sits behind the `hydrate`
//! feature; native and SSR builds get inert fallbacks so pure session logic
//! stays unit-testable.

#![allow(async_fn_in_trait)]

pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use config::SessionConfig;
pub use error::AuthError;
pub use net::api::{AuthTransport, GlooTransport};
pub use pages::login::LoginForm;
pub use state::session::{SessionManager, SessionState};
pub use util::context::{BrowserSession, provide_session, use_session};
pub use util::logging::init_logging;
pub use util::storage::{BrowserStore, KeyValueStore, MemoryStore};
