//! Flat-earth geometry for farm-scale polygons and camera footprints
//!
//! Everything here uses a local equirectangular approximation: one degree of
//! latitude is a fixed 111320 m and one degree of longitude is 111320 m
//! scaled by the cosine of a reference latitude. The error is negligible at
//! farm-plot extents (sub-kilometer); no curvature or ellipsoid correction
//! is applied. Polygons crossing the antimeridian or adjacent to the poles
//! are not handled and will mis-project.

use crate::models::DronePose;
use crate::types::{GeoPoint, LocalPoint};

/// Meters per degree of latitude under the flat-earth approximation.
pub const METERS_PER_DEG_LAT: f64 = 111_320.0;

/// Floor for the near-edge look angle in degrees. Keeps the near ground
/// intersection in front of the camera when tilt minus half the vertical
/// field of view reaches zero or goes negative.
const MIN_LOOK_ANGLE_DEG: f64 = 0.0001;

/// Reference point anchoring a local tangent-plane projection.
///
/// The meters-per-degree-longitude scale depends on the reference latitude
/// and is recomputed per reference, never cached across references.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionReference {
    pub latitude: f64,
    pub longitude: f64,
}

impl ProjectionReference {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Reference for projecting a polygon: the mean of the vertex latitudes
    /// and the longitude of the first vertex. Returns `None` for an empty
    /// vertex list.
    pub fn for_polygon(points: &[GeoPoint]) -> Option<Self> {
        let first = points.first()?;
        let mean_lat =
            points.iter().map(|p| p.latitude).sum::<f64>() / points.len() as f64;
        Some(Self::new(mean_lat, first.longitude))
    }

    fn meters_per_deg_lon(&self) -> f64 {
        METERS_PER_DEG_LAT * self.latitude.to_radians().cos()
    }

    /// Project a geographic point to east/north meters from this reference.
    pub fn to_local(&self, point: &GeoPoint) -> LocalPoint {
        LocalPoint {
            east_m: (point.longitude - self.longitude) * self.meters_per_deg_lon(),
            north_m: (point.latitude - self.latitude) * METERS_PER_DEG_LAT,
        }
    }

    /// Map east/north meter offsets back to geographic coordinates.
    pub fn to_geo(&self, local: &LocalPoint) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude + local.north_m / METERS_PER_DEG_LAT,
            longitude: self.longitude + local.east_m / self.meters_per_deg_lon(),
        }
    }
}

/// Planar area in square meters of a simple polygon given in geographic
/// coordinates.
///
/// Fewer than three vertices is a degenerate polygon with zero area, not an
/// error. The result is unsigned, so vertex winding does not matter.
pub fn polygon_area_m2(points: &[GeoPoint]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let Some(reference) = ProjectionReference::for_polygon(points) else {
        return 0.0;
    };
    let local: Vec<LocalPoint> = points.iter().map(|p| reference.to_local(p)).collect();

    // Shoelace over the implicitly closed ring.
    let mut doubled = 0.0;
    for (i, a) in local.iter().enumerate() {
        let b = &local[(i + 1) % local.len()];
        doubled += a.east_m * b.north_m - b.east_m * a.north_m;
    }
    doubled.abs() * 0.5
}

/// Ground-intersection corners of a drone camera's view frustum, assuming a
/// locally flat ground plane at `ground_elevation_m`.
///
/// Corners are ordered near-left, near-right, far-right, far-left, which
/// traces a simple quadrilateral for any pose. The function is total: a
/// drone at or below the recorded ground level falls back to `min_height_m`
/// above ground, and a near edge that would reach the horizon is floored
/// just off nadir.
pub fn camera_footprint(
    pose: &DronePose,
    ground_elevation_m: f64,
    min_height_m: f64,
) -> Vec<GeoPoint> {
    let mut height = pose.altitude_msl_m - ground_elevation_m;
    if height <= 0.0 {
        height = min_height_m;
    }

    let half_fov_v = pose.fov_vertical_deg / 2.0;
    let near_angle_deg = (pose.tilt_deg - half_fov_v).max(MIN_LOOK_ANGLE_DEG);
    let far_angle_deg = pose.tilt_deg + half_fov_v;

    // Distances along the camera's forward axis to the near and far edges.
    let near_dist = height * near_angle_deg.to_radians().tan();
    let far_dist = height * far_angle_deg.to_radians().tan();

    let tan_half_fov_h = (pose.fov_horizontal_deg / 2.0).to_radians().tan();
    let half_width_near = near_dist * tan_half_fov_h;
    let half_width_far = far_dist * tan_half_fov_h;

    let heading = pose.heading_deg.to_radians();
    let reference = ProjectionReference::new(pose.position.latitude, pose.position.longitude);

    let corners = [
        (near_dist, -half_width_near),
        (near_dist, half_width_near),
        (far_dist, half_width_far),
        (far_dist, -half_width_far),
    ];

    corners
        .iter()
        .map(|&(forward, right)| {
            // Heading-to-ENU rotation: forward maps to (sin h, cos h) and
            // right to (cos h, -sin h). Heading 0 is north, clockwise.
            let east_m = forward * heading.sin() + right * heading.cos();
            let north_m = forward * heading.cos() - right * heading.sin();
            reference.to_geo(&LocalPoint { east_m, north_m })
        })
        .collect()
}
