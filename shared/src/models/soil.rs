//! Soil sensor models

use serde::{Deserialize, Serialize};

/// Point-in-time soil sensor readings
///
/// Any subset of sensors may be absent; scoring treats a fully absent
/// reading the same as no reading at all.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SoilReading {
    /// Volumetric moisture as a percentage
    pub moisture_percent: Option<f64>,
    pub ph: Option<f64>,
    /// Electrical conductivity in dS/m
    pub ec_ds_per_m: Option<f64>,
    pub nitrogen_mg_kg: Option<f64>,
    pub phosphorus_mg_kg: Option<f64>,
    pub potassium_mg_kg: Option<f64>,
}

impl SoilReading {
    /// True when no sensor value is present at all.
    pub fn is_empty(&self) -> bool {
        self.moisture_percent.is_none()
            && self.ph.is_none()
            && self.ec_ds_per_m.is_none()
            && self.nitrogen_mg_kg.is_none()
            && self.phosphorus_mg_kg.is_none()
            && self.potassium_mg_kg.is_none()
    }
}
