//! Validation utilities for the Paddy Damage Analysis Platform
//!
//! The geometry engine is total over validated input, so everything with no
//! recovery path (zero spacings, malformed coordinates) is rejected here at
//! the boundary before the engine runs.

use crate::models::{DamageRegion, DronePose, FarmModel};
use crate::types::GeoPoint;

/// Minimum vertex count for a ground polygon to enclose area.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Validate farm geometry parameters. Spacings of zero would make plant
/// density undefined, so they are hard errors.
pub fn validate_farm_model(farm: &FarmModel) -> Result<(), &'static str> {
    if !farm.farm_area_m2.is_finite() || farm.farm_area_m2 <= 0.0 {
        return Err("Farm area must be positive");
    }
    if !farm.row_spacing_m.is_finite() || farm.row_spacing_m <= 0.0 {
        return Err("Row spacing must be positive");
    }
    if !farm.plant_spacing_m.is_finite() || farm.plant_spacing_m <= 0.0 {
        return Err("Plant spacing must be positive");
    }
    Ok(())
}

/// Validate a geographic coordinate pair
pub fn validate_geo_point(point: &GeoPoint) -> Result<(), &'static str> {
    if !point.latitude.is_finite() || !(-90.0..=90.0).contains(&point.latitude) {
        return Err("Latitude must be between -90 and 90 degrees");
    }
    if !point.longitude.is_finite() || !(-180.0..=180.0).contains(&point.longitude) {
        return Err("Longitude must be between -180 and 180 degrees");
    }
    Ok(())
}

/// Validate a drone pose before footprint derivation
pub fn validate_drone_pose(pose: &DronePose) -> Result<(), &'static str> {
    validate_geo_point(&pose.position)?;

    if !pose.altitude_msl_m.is_finite() {
        return Err("Drone altitude must be a finite number");
    }
    if !pose.heading_deg.is_finite() {
        return Err("Compass heading must be a finite number");
    }
    if !pose.tilt_deg.is_finite() || pose.tilt_deg < 0.0 {
        return Err("Mount tilt must be zero or more degrees from nadir");
    }
    if !pose.fov_vertical_deg.is_finite()
        || pose.fov_vertical_deg < 0.0
        || pose.fov_vertical_deg >= 180.0
    {
        return Err("Vertical field of view must be between 0 and 180 degrees");
    }
    if !pose.fov_horizontal_deg.is_finite()
        || pose.fov_horizontal_deg < 0.0
        || pose.fov_horizontal_deg >= 180.0
    {
        return Err("Horizontal field of view must be between 0 and 180 degrees");
    }
    // The far edge of the view must intersect the ground plane in front of
    // the camera, otherwise the footprint is unbounded.
    if pose.tilt_deg + pose.fov_vertical_deg / 2.0 >= 90.0 {
        return Err("Camera view must stay below the horizon");
    }
    Ok(())
}

/// Validate a damage region of either kind
pub fn validate_damage_region(region: &DamageRegion) -> Result<(), &'static str> {
    match region {
        DamageRegion::Manual { points } => {
            if points.len() < MIN_POLYGON_POINTS {
                return Err("A manual damage polygon needs at least 3 points");
            }
            for point in points {
                validate_geo_point(point)?;
            }
            Ok(())
        }
        DamageRegion::Drone(pose) => validate_drone_pose(pose),
    }
}

/// Validate an externally supplied pest risk score (0-1 scale)
pub fn validate_pest_risk_score(score: f64) -> Result<(), &'static str> {
    if !score.is_finite() || !(0.0..=1.0).contains(&score) {
        return Err("Pest risk score must be between 0 and 1");
    }
    Ok(())
}
