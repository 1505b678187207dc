//! Networking modules for the authentication server.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` sends HTTP requests, `wire` defines and decodes the request/response
//! schema so the session manager never touches raw JSON.

pub mod api;
pub mod wire;
