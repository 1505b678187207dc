//! Route-level UI built on the session manager.

pub mod login;
