//! Utility helpers shared across the session modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, console
//! logging, Leptos context) from session logic to keep it testable.

pub mod context;
pub mod logging;
pub mod storage;
