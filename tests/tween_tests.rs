//! Tween Primitive Tests
//!
//! Tests for:
//! - Easing curve endpoints, symmetry, and monotonicity
//! - Tween clamping and completion polling
//! - Pulse attack/decay envelope

use saurian::tween::{Easing, Pulse, Tween};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Easing Curves
// ============================================================================

#[test]
fn easing_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::ExpoIn,
        Easing::ExpoOut,
        Easing::ExpoInOut,
    ] {
        assert!(
            easing.apply(0.0).abs() < 1e-3,
            "{easing:?}: apply(0) should be ~0, got {}",
            easing.apply(0.0)
        );
        assert!(
            (easing.apply(1.0) - 1.0).abs() < 1e-3,
            "{easing:?}: apply(1) should be ~1, got {}",
            easing.apply(1.0)
        );
    }
}

#[test]
fn easing_symmetric_midpoints() {
    // The symmetric (in-out) curves cross exactly half way
    assert!(approx(Easing::QuadInOut.apply(0.5), 0.5));
    assert!(approx(Easing::ExpoInOut.apply(0.5), 0.5));
    assert!(approx(Easing::Linear.apply(0.5), 0.5));
}

#[test]
fn easing_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::ExpoIn,
        Easing::ExpoOut,
        Easing::ExpoInOut,
    ] {
        let mut prev = easing.apply(0.0);
        for i in 1..=100 {
            let value = easing.apply(i as f32 / 100.0);
            assert!(
                value >= prev - EPSILON,
                "{easing:?}: not monotonic at t={}",
                i as f32 / 100.0
            );
            prev = value;
        }
    }
}

#[test]
fn easing_clamps_out_of_range() {
    assert!(approx(Easing::QuadInOut.apply(-1.0), 0.0));
    assert!(approx(Easing::QuadInOut.apply(2.0), 1.0));
}

// ============================================================================
// Tween
// ============================================================================

#[test]
fn tween_linear_midpoint() {
    let mut tween = Tween::new(0.0, 10.0, 1.0, Easing::Linear);
    let value = tween.update(0.5);
    assert!(approx(value, 5.0), "Expected 5.0, got {value}");
    assert!(!tween.finished());
}

#[test]
fn tween_clamps_at_end() {
    let mut tween = Tween::new(0.0, 10.0, 1.0, Easing::Linear);
    let value = tween.update(5.0);
    assert!(approx(value, 10.0), "Expected 10.0, got {value}");
    assert!(tween.finished());

    // Further updates hold the final value
    let value = tween.update(1.0);
    assert!(approx(value, 10.0));
}

#[test]
fn tween_zero_duration_completes_first_tick() {
    let mut tween = Tween::new(0.0, 1.0, 0.0, Easing::Linear);
    let value = tween.update(0.001);
    assert!(approx(value, 1.0));
    assert!(tween.finished());
}

#[test]
fn tween_reverse_direction() {
    let mut tween = Tween::new(1.0, 0.0, 1.0, Easing::Linear);
    assert!(approx(tween.update(0.25), 0.75));
    assert!(approx(tween.update(0.75), 0.0));
}

#[test]
fn tween_target_accessor() {
    let tween = Tween::new(0.0, 7.5, 1.0, Easing::QuadOut);
    assert!(approx(tween.target(), 7.5));
}

// ============================================================================
// Pulse Envelope
// ============================================================================

#[test]
fn pulse_rests_until_fired() {
    let mut pulse = Pulse::new(0.3);
    assert!(!pulse.is_active());
    assert!(approx(pulse.update(1.0), 0.3));
}

#[test]
fn pulse_reaches_peak_then_returns_to_rest() {
    let mut pulse = Pulse::new(0.0);
    pulse.fire(1.0, 0.1, 0.1);
    assert!(pulse.is_active());

    let mut peak = 0.0_f32;
    for _ in 0..10 {
        peak = peak.max(pulse.update(0.01));
    }
    assert!(
        (peak - 1.0).abs() < 1e-3,
        "Pulse should reach its peak, got {peak}"
    );

    for _ in 0..20 {
        pulse.update(0.01);
    }
    assert!(approx(pulse.value(), 0.0), "got {}", pulse.value());
    assert!(!pulse.is_active());
}

#[test]
fn pulse_nonzero_rest() {
    let mut pulse = Pulse::new(5.4);
    pulse.fire(12.0, 0.08, 0.35);
    for _ in 0..100 {
        pulse.update(0.01);
    }
    assert!(approx(pulse.value(), 5.4), "got {}", pulse.value());
}
