//! Drone footprint integration tests
//!
//! Covers the ground-intersection geometry the footprint endpoint exposes:
//! height clamping, degenerate fields of view, and the pose validation that
//! guards the endpoint.

use shared::geo::{camera_footprint, polygon_area_m2, ProjectionReference};
use shared::models::{DamageRegion, DronePose};
use shared::types::GeoPoint;
use shared::validation::{validate_damage_region, validate_drone_pose};

const MIN_HEIGHT_M: f64 = 5.0;

fn survey_pose() -> DronePose {
    DronePose {
        position: GeoPoint::new(18.7883, 98.9853),
        altitude_msl_m: 120.0,
        heading_deg: 0.0,
        tilt_deg: 30.0,
        fov_vertical_deg: 40.0,
        fov_horizontal_deg: 60.0,
    }
}

#[test]
fn test_effective_height_above_terrain() {
    // 105 m MSL over 100 m terrain: 5 m of height through the non-clamped
    // branch, identical to the clamp fallback by construction.
    let mut pose = survey_pose();
    pose.altitude_msl_m = 105.0;
    let unclamped = camera_footprint(&pose, 100.0, MIN_HEIGHT_M);

    pose.altitude_msl_m = 100.0;
    let clamped = camera_footprint(&pose, 100.0, MIN_HEIGHT_M);

    for (a, b) in unclamped.iter().zip(clamped.iter()) {
        assert!((a.latitude - b.latitude).abs() < 1e-12);
        assert!((a.longitude - b.longitude).abs() < 1e-12);
    }
}

#[test]
fn test_below_ground_pose_still_produces_footprint() {
    let mut pose = survey_pose();
    pose.altitude_msl_m = 40.0;

    // Recorded terrain above the drone altitude: a sensor or lookup
    // inconsistency, resolved by the height fallback rather than an error.
    let footprint = camera_footprint(&pose, 250.0, MIN_HEIGHT_M);
    assert_eq!(footprint.len(), 4);
    assert!(polygon_area_m2(&footprint) > 0.0);
}

#[test]
fn test_footprint_area_scales_with_height() {
    let mut low = survey_pose();
    low.altitude_msl_m = 50.0;
    let mut high = survey_pose();
    high.altitude_msl_m = 100.0;

    let area_low = polygon_area_m2(&camera_footprint(&low, 0.0, MIN_HEIGHT_M));
    let area_high = polygon_area_m2(&camera_footprint(&high, 0.0, MIN_HEIGHT_M));

    // Ground distances and widths both scale linearly with height, so the
    // area scales with its square.
    assert!((area_high / area_low - 4.0).abs() < 1e-6);
}

#[test]
fn test_degenerate_horizontal_fov_collapses_area() {
    let mut pose = survey_pose();
    pose.tilt_deg = 45.0;
    pose.fov_vertical_deg = 10.0;
    pose.fov_horizontal_deg = 1e-9;

    let footprint = camera_footprint(&pose, 0.0, MIN_HEIGHT_M);
    assert_eq!(footprint.len(), 4);
    assert!(polygon_area_m2(&footprint) < 1e-6);
}

#[test]
fn test_footprint_area_invariant_under_reversal() {
    let footprint = camera_footprint(&survey_pose(), 0.0, MIN_HEIGHT_M);
    let mut reversed = footprint.clone();
    reversed.reverse();

    let area = polygon_area_m2(&footprint);
    assert!(area > 0.0);
    assert!((area - polygon_area_m2(&reversed)).abs() < 1e-9 * area.max(1.0));
}

#[test]
fn test_footprint_centered_along_heading() {
    let reference = ProjectionReference::new(18.7883, 98.9853);

    for heading in [0.0, 90.0, 180.0, 270.0, 37.5] {
        let mut pose = survey_pose();
        pose.heading_deg = heading;
        let footprint = camera_footprint(&pose, 0.0, MIN_HEIGHT_M);

        // The footprint centroid lies along the heading direction: its
        // bearing from the drone matches the compass heading.
        let centroid_east = footprint
            .iter()
            .map(|p| reference.to_local(p).east_m)
            .sum::<f64>()
            / 4.0;
        let centroid_north = footprint
            .iter()
            .map(|p| reference.to_local(p).north_m)
            .sum::<f64>()
            / 4.0;

        let bearing = centroid_east.atan2(centroid_north).to_degrees();
        let normalized = (bearing + 360.0) % 360.0;
        // Circular difference, so a bearing of 359.999... matches heading 0.
        let diff = (normalized - heading).abs();
        assert!(diff.min(360.0 - diff) < 1e-6);
    }
}

#[test]
fn test_drone_region_validation() {
    let valid = DamageRegion::Drone(survey_pose());
    assert!(validate_damage_region(&valid).is_ok());

    // A view reaching the horizon has no bounded ground intersection.
    let mut pose = survey_pose();
    pose.tilt_deg = 75.0;
    assert!(validate_drone_pose(&pose).is_err());

    let mut pose = survey_pose();
    pose.fov_vertical_deg = -10.0;
    assert!(validate_drone_pose(&pose).is_err());
}
