//! Damage region models

use serde::{Deserialize, Serialize};

use crate::types::GeoPoint;

/// Pose of the drone photograph a damage region was reported from
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DronePose {
    /// Horizontal position of the drone
    pub position: GeoPoint,
    /// Altitude above mean sea level in meters
    pub altitude_msl_m: f64,
    /// Compass heading in degrees, 0 = north, clockwise-positive
    pub heading_deg: f64,
    /// Camera mount tilt in degrees from vertical nadir
    pub tilt_deg: f64,
    /// Vertical field of view of the camera in degrees
    pub fov_vertical_deg: f64,
    /// Horizontal field of view of the camera in degrees
    pub fov_horizontal_deg: f64,
}

/// A damaged area of the paddy as reported by the client
///
/// Exactly one kind per region. Drone regions are resolved to a geographic
/// polygon before any area computation runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DamageRegion {
    /// Explicit ground polygon traced by the operator
    Manual { points: Vec<GeoPoint> },
    /// Drone photograph; the ground footprint is derived from the pose
    Drone(DronePose),
}

impl DamageRegion {
    /// Short label for the region kind, used in response breakdowns.
    pub fn kind(&self) -> &'static str {
        match self {
            DamageRegion::Manual { .. } => "manual",
            DamageRegion::Drone(_) => "drone",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_region_tagged_serialization() {
        let manual = DamageRegion::Manual {
            points: vec![
                GeoPoint::new(18.788, 98.985),
                GeoPoint::new(18.789, 98.986),
                GeoPoint::new(18.790, 98.985),
            ],
        };
        let json = serde_json::to_value(&manual).unwrap();
        assert_eq!(json["type"], "manual");
        assert_eq!(json["points"].as_array().unwrap().len(), 3);

        let drone = DamageRegion::Drone(DronePose {
            position: GeoPoint::new(18.7883, 98.9853),
            altitude_msl_m: 120.0,
            heading_deg: 45.0,
            tilt_deg: 30.0,
            fov_vertical_deg: 40.0,
            fov_horizontal_deg: 60.0,
        });
        let json = serde_json::to_value(&drone).unwrap();
        assert_eq!(json["type"], "drone");
        assert_eq!(json["altitude_msl_m"], 120.0);
    }

    #[test]
    fn test_damage_region_round_trip() {
        let json = r#"{
            "type": "drone",
            "position": { "latitude": 18.7883, "longitude": 98.9853 },
            "altitude_msl_m": 105.0,
            "heading_deg": 0.0,
            "tilt_deg": 45.0,
            "fov_vertical_deg": 10.0,
            "fov_horizontal_deg": 60.0
        }"#;

        let region: DamageRegion = serde_json::from_str(json).unwrap();
        assert_eq!(region.kind(), "drone");
    }
}
