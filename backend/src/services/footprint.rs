//! Drone footprint resolution service

use shared::geo::camera_footprint;
use shared::models::DronePose;
use shared::types::GeoPoint;

use crate::external::elevation::ElevationClient;

/// Resolves drone poses to ground-footprint polygons
#[derive(Clone)]
pub struct FootprintService {
    elevation: ElevationClient,
    min_height_m: f64,
}

impl FootprintService {
    /// Create a new FootprintService instance
    pub fn new(elevation: ElevationClient, min_height_m: f64) -> Self {
        Self {
            elevation,
            min_height_m,
        }
    }

    /// Derive the ground polygon observed by the camera for this pose.
    ///
    /// Total over its input: an unavailable elevation service degrades to
    /// sea level and the underlying geometry clamps the remaining edge
    /// cases, so every pose resolves to a polygon.
    pub async fn resolve_footprint(&self, pose: &DronePose) -> Vec<GeoPoint> {
        let ground_elevation = self.resolve_ground_elevation(&pose.position).await;
        camera_footprint(pose, ground_elevation, self.min_height_m)
    }

    /// Ground elevation under the drone, 0.0 m when the lookup fails.
    async fn resolve_ground_elevation(&self, position: &GeoPoint) -> f64 {
        match self
            .elevation
            .get_ground_elevation(position.latitude, position.longitude)
            .await
        {
            Ok(elevation) => elevation,
            Err(err) => {
                tracing::warn!(
                    "Elevation lookup failed at ({}, {}), assuming 0 m: {}",
                    position.latitude,
                    position.longitude,
                    err
                );
                0.0
            }
        }
    }
}
