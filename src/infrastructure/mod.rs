//! Infrastructure layer providing external service integrations.
//!
//! Snapshot file storage, runtime configuration and log setup.

pub mod persistence;
pub mod config;
pub mod logging;

pub use persistence::*;
pub use config::*;
pub use logging::*;
