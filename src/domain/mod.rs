//! Domain layer: subscribers and the in-memory record store.

pub mod models;
pub mod directory;
pub mod errors;

pub use models::*;
pub use directory::*;
pub use errors::*;
