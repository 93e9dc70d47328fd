//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// East/north offsets in meters from a projection reference point.
///
/// Only meaningful for the reference that produced it; never persisted and
/// never compared across references, so it carries no serde support.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalPoint {
    pub east_m: f64,
    pub north_m: f64,
}

impl LocalPoint {
    pub fn new(east_m: f64, north_m: f64) -> Self {
        Self { east_m, north_m }
    }
}
