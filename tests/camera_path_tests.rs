//! Camera Path & Rig Tests
//!
//! Tests for:
//! - CameraPath construction guards
//! - Spline endpoint and control-point interpolation guarantees
//! - CameraRig drive: progress monotonicity, look-target refresh,
//!   single-drive-at-a-time replacement

use glam::Vec3;

use saurian::camera::{CameraMove, CameraPath, CameraRig};
use saurian::errors::StoryError;
use saurian::tween::Easing;

const EPSILON: f32 = 1e-4;

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

fn chase_points() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.75, 3.0),
        Vec3::new(-1.5, 0.4, 4.2),
        Vec3::new(-3.0, 0.5, 5.0),
    ]
}

// ============================================================================
// CameraPath: Construction
// ============================================================================

#[test]
fn path_rejects_single_point() {
    let result = CameraPath::new(vec![Vec3::ZERO]);
    assert!(matches!(
        result,
        Err(StoryError::PathTooShort { count: 1 })
    ));
}

#[test]
fn path_rejects_empty() {
    assert!(matches!(
        CameraPath::new(Vec::new()),
        Err(StoryError::PathTooShort { count: 0 })
    ));
}

#[test]
fn path_accepts_two_points() {
    assert!(CameraPath::new(vec![Vec3::ZERO, Vec3::ONE]).is_ok());
}

// ============================================================================
// CameraPath: Endpoint & Control-Point Guarantees
// ============================================================================

#[test]
fn endpoints_match_first_and_last_control_point() {
    for points in [
        vec![Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0)],
        chase_points(),
        vec![
            Vec3::new(1.2, 0.9, 4.2),
            Vec3::new(6.0, 4.0, 10.0),
            Vec3::new(15.0, 10.0, 20.0),
        ],
    ] {
        let first = points[0];
        let last = *points.last().unwrap();
        let path = CameraPath::new(points).unwrap();
        assert!(
            approx_vec(path.point_at(0.0), first),
            "point_at(0) should equal the first control point"
        );
        assert!(
            approx_vec(path.point_at(1.0), last),
            "point_at(1) should equal the last control point"
        );
    }
}

#[test]
fn curve_passes_through_interior_control_points() {
    let points = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 2.0, 0.0),
        Vec3::new(3.0, 1.0, -1.0),
        Vec3::new(4.0, 4.0, 2.0),
    ];
    let path = CameraPath::new(points.clone()).unwrap();
    let segments = (points.len() - 1) as f32;
    for (k, expected) in points.iter().enumerate() {
        let got = path.point_at(k as f32 / segments);
        assert!(
            approx_vec(got, *expected),
            "control point {k}: expected {expected:?}, got {got:?}"
        );
    }
}

#[test]
fn out_of_range_parameter_clamps() {
    let path = CameraPath::new(chase_points()).unwrap();
    assert!(approx_vec(path.point_at(-0.5), path.point_at(0.0)));
    assert!(approx_vec(path.point_at(1.5), path.point_at(1.0)));
}

#[test]
fn curve_is_continuous_across_segments() {
    let path = CameraPath::new(chase_points()).unwrap();
    // Walk the curve finely; adjacent samples must stay close
    let mut prev = path.point_at(0.0);
    for i in 1..=200 {
        let point = path.point_at(i as f32 / 200.0);
        assert!(
            (point - prev).length() < 0.2,
            "discontinuity near t={}",
            i as f32 / 200.0
        );
        prev = point;
    }
}

#[test]
fn coincident_control_points_do_not_blow_up() {
    let path = CameraPath::new(vec![Vec3::ONE, Vec3::ONE, Vec3::new(2.0, 1.0, 1.0)]).unwrap();
    let mid = path.point_at(0.5);
    assert!(mid.is_finite(), "got {mid:?}");
}

// ============================================================================
// CameraRig: Path Drive
// ============================================================================

#[test]
fn drive_starts_at_first_point_and_ends_at_last() {
    let mut rig = CameraRig::new(Vec3::ZERO, Vec3::ZERO);
    let mv = CameraMove::new(chase_points(), 2.0, Vec3::new(0.0, 1.0, 0.0));
    rig.fly_along(&mv).unwrap();
    assert!(rig.is_flying());

    rig.update(0.0);
    assert!(approx_vec(rig.position, chase_points()[0]));
    assert!(approx_vec(rig.target, Vec3::new(0.0, 1.0, 0.0)));

    for _ in 0..250 {
        rig.update(0.01);
    }
    assert!(!rig.is_flying(), "drive should finish after its duration");
    assert!(approx_vec(rig.position, *chase_points().last().unwrap()));
}

#[test]
fn drive_progress_is_monotonic() {
    let mut rig = CameraRig::new(Vec3::ZERO, Vec3::ZERO);
    let mv = CameraMove::new(chase_points(), 1.0, Vec3::ZERO).with_easing(Easing::QuadInOut);
    rig.fly_along(&mv).unwrap();

    let mut prev = 0.0_f32;
    while let Some(progress) = rig.progress() {
        assert!(progress >= prev, "progress went backwards");
        prev = progress;
        rig.update(0.02);
    }
    assert!(prev > 0.9, "drive ended early at progress {prev}");
}

#[test]
fn new_drive_replaces_the_active_one() {
    let mut rig = CameraRig::new(Vec3::ZERO, Vec3::ZERO);
    rig.fly_along(&CameraMove::new(chase_points(), 5.0, Vec3::ZERO))
        .unwrap();
    rig.update(0.1);

    let throw = vec![Vec3::new(1.0, 1.0, 1.0), Vec3::new(9.0, 9.0, 9.0)];
    rig.fly_along(&CameraMove::new(throw.clone(), 0.5, Vec3::ZERO))
        .unwrap();

    rig.update(0.0);
    assert!(
        approx_vec(rig.position, throw[0]),
        "replacement drive restarts from its own first point"
    );
    for _ in 0..60 {
        rig.update(0.01);
    }
    assert!(approx_vec(rig.position, throw[1]));
}

#[test]
fn fly_along_rejects_degenerate_move() {
    let mut rig = CameraRig::new(Vec3::ZERO, Vec3::ZERO);
    let result = rig.fly_along(&CameraMove::new(vec![Vec3::ZERO], 1.0, Vec3::ZERO));
    assert!(matches!(result, Err(StoryError::PathTooShort { .. })));
    assert!(!rig.is_flying());
}

#[test]
fn view_matrix_is_finite() {
    let rig = CameraRig::new(Vec3::new(0.0, 0.0, 3.5), Vec3::new(0.0, 0.75, 0.0));
    let m = rig.view_matrix();
    assert!(m.is_finite());
}
