//! Shared types and models for the Paddy Damage Analysis Platform
//!
//! This crate contains the pure domain layer shared across the system:
//! footprint and polygon geometry, the yield scoring pipeline, and the
//! validation helpers used at the request boundary.

pub mod geo;
pub mod models;
pub mod types;
pub mod validation;

pub use geo::*;
pub use models::*;
pub use types::*;
pub use validation::*;
