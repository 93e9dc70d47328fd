//! Farm planting geometry

use serde::{Deserialize, Serialize};

/// Planting geometry of the paddy under analysis
///
/// Density is derived from row and plant spacing, so both must be validated
/// positive at the boundary before any arithmetic runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FarmModel {
    /// Total planted area in square meters
    pub farm_area_m2: f64,
    /// Distance between planting rows in meters
    pub row_spacing_m: f64,
    /// Distance between plants within a row in meters
    pub plant_spacing_m: f64,
}

impl FarmModel {
    /// Plants per square meter.
    pub fn plant_density(&self) -> f64 {
        1.0 / (self.row_spacing_m * self.plant_spacing_m)
    }

    /// Total plant count over the whole farm area.
    pub fn total_plants(&self) -> f64 {
        self.plant_density() * self.farm_area_m2
    }
}
