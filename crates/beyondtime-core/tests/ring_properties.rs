//! Property tests for time ring geometry.

use beyondtime_core::ring::{hour_to_angle, RingGeometry};
use beyondtime_core::task::ring_samples;
use proptest::prelude::*;

proptest! {
    #[test]
    fn zero_duration_never_errors_and_has_no_area(start in 0.0f64..24.0) {
        let seg = RingGeometry::default().segment(start, 0.0).unwrap();
        prop_assert!(seg.is_degenerate());
        prop_assert_eq!(seg.outer_start, seg.outer_end);
        prop_assert_eq!(seg.inner_start, seg.inner_end);
    }

    #[test]
    fn up_to_twelve_hours_uses_minor_arc(start in 0.0f64..24.0, duration in 0.0f64..=12.0) {
        let seg = RingGeometry::default().segment(start, duration).unwrap();
        prop_assert!(!seg.large_arc);
        prop_assert!(seg.path().contains(" 0 0 1 "));
    }

    #[test]
    fn over_twelve_hours_uses_major_arc(start in 0.0f64..24.0, duration in 12.0001f64..24.0) {
        let seg = RingGeometry::default().segment(start, duration).unwrap();
        prop_assert!(seg.large_arc);
        prop_assert!(seg.path().contains(" 0 1 1 "));
    }

    #[test]
    fn corner_points_lie_on_their_radius(start in 0.0f64..24.0, duration in 0.0f64..24.0) {
        let geo = RingGeometry::default();
        let seg = geo.segment(start, duration).unwrap();
        let dist = |p: beyondtime_core::ring::Point| {
            ((p.x - geo.center_x).powi(2) + (p.y - geo.center_y).powi(2)).sqrt()
        };
        prop_assert!((dist(seg.outer_start) - geo.radius).abs() < 1e-6);
        prop_assert!((dist(seg.outer_end) - geo.radius).abs() < 1e-6);
        prop_assert!((dist(seg.inner_start) - geo.inner_radius()).abs() < 1e-6);
        prop_assert!((dist(seg.inner_end) - geo.inner_radius()).abs() < 1e-6);
    }

    #[test]
    fn start_outside_day_is_rejected(start in prop_oneof![-100.0f64..0.0, 24.0f64..100.0]) {
        prop_assert!(RingGeometry::default().segment(start, 1.0).is_err());
    }

    #[test]
    fn angle_is_linear_in_hours(hour in 0.0f64..24.0) {
        prop_assert!((hour_to_angle(hour + 1.0) - hour_to_angle(hour) - 15.0).abs() < 1e-9);
    }
}

#[test]
fn deep_work_sample_segment() {
    let deep_work = ring_samples()
        .into_iter()
        .find(|t| t.name == "Deep Work")
        .unwrap();
    let seg = RingGeometry::default().segment_for(&deep_work).unwrap();
    assert!((seg.start_angle - 30.0).abs() < 1e-9);
    assert!((seg.end_angle - 75.0).abs() < 1e-9);
    assert!(!seg.large_arc);
}

#[test]
fn every_sample_renders_a_path() {
    let geo = RingGeometry::default();
    for task in ring_samples() {
        let path = geo.segment_for(&task).unwrap().path();
        assert!(path.starts_with("M ") && path.ends_with(" Z"), "{}", task.name);
    }
}
