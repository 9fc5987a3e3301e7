//! Application layer coordinating the record store with its storage.
//!
//! The presentation layer talks to this module only; it never touches the
//! snapshot file directly.

pub mod service;

pub use service::*;
