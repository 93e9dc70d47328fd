//! Domain models for the Paddy Damage Analysis Platform
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
