//! External API integrations

pub mod elevation;

pub use elevation::ElevationClient;
