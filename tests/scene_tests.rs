//! Stage Accent Tests
//!
//! Tests for:
//! - FloorScroll idle vs. endless rates
//! - RimLight rest value and flash envelope

use saurian::scene::{FloorScroll, RimLight};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// FloorScroll
// ============================================================================

#[test]
fn floor_scrolls_slowly_while_idle() {
    let mut floor = FloorScroll::default();
    floor.advance(1.0, false);
    assert!(approx(floor.time, 0.5), "idle rate is 0.5x, got {}", floor.time);
}

#[test]
fn floor_scrolls_fast_in_endless_state() {
    let mut floor = FloorScroll::default();
    floor.advance(1.0, true);
    assert!(approx(floor.time, 5.0), "endless rate is 5x, got {}", floor.time);
}

#[test]
fn floor_rate_switch_mid_flight() {
    let mut floor = FloorScroll::default();
    floor.advance(2.0, false);
    floor.advance(1.0, true);
    assert!(approx(floor.time, 6.0), "got {}", floor.time);
}

// ============================================================================
// RimLight
// ============================================================================

#[test]
fn rim_light_rests_at_material_default() {
    let rim = RimLight::default();
    assert!(approx(rim.intensity(), 5.4));
    assert!(!rim.is_flashing());
}

#[test]
fn rim_flash_spikes_then_settles() {
    let mut rim = RimLight::default();
    rim.flash(12.0, 0.08, 0.35);
    assert!(rim.is_flashing());

    let mut peak = 0.0_f32;
    for _ in 0..50 {
        rim.update(0.01);
        peak = peak.max(rim.intensity());
    }
    assert!(
        (peak - 12.0).abs() < 0.1,
        "flash should reach its peak, got {peak}"
    );

    for _ in 0..50 {
        rim.update(0.01);
    }
    assert!(
        approx(rim.intensity(), 5.4),
        "back to rest, got {}",
        rim.intensity()
    );
    assert!(!rim.is_flashing());
}
