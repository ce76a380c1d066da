//! Scalar property tweening.
//!
//! The sequencing layer never mutates animated properties directly; it arms
//! a [`Tween`] (or a [`Pulse`] for flash accents) and advances it from the
//! host's per-frame tick. Everything time-based in this crate (crossfade
//! weights, camera-path progress, veil coverage, rim flashes) runs on these
//! two primitives.

use serde::{Deserialize, Serialize};

/// Easing curve applied to normalized tween time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    QuadIn,
    QuadOut,
    /// Symmetric slow–fast–slow. The default for camera-path drives.
    QuadInOut,
    ExpoIn,
    ExpoOut,
    /// Sharp symmetric ease used by the transition veil.
    ExpoInOut,
}

impl Easing {
    /// Maps normalized time `t` in [0, 1] to eased progress in [0, 1].
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => t * (2.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    t.mul_add(4.0 - 2.0 * t, -1.0)
                }
            }
            Easing::ExpoIn => {
                if t <= 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * t - 10.0)
                }
            }
            Easing::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Easing::ExpoInOut => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else if t < 0.5 {
                    2.0_f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
        }
    }
}

/// One scalar value animated from `from` to `to` over a fixed duration.
///
/// Advanced cooperatively: `update(dt)` clamps at the end and keeps
/// returning the final value, so callers poll [`Tween::finished`] instead
/// of registering completion callbacks.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    easing: Easing,
    elapsed: f32,
}

impl Tween {
    #[must_use]
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            // zero or negative durations complete on the first tick
            duration: duration.max(f32::EPSILON),
            easing,
            elapsed: 0.0,
        }
    }

    /// Advances the tween by `dt` seconds and returns the current value.
    pub fn update(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    /// Current eased value.
    #[must_use]
    pub fn value(&self) -> f32 {
        let progress = self.easing.apply(self.elapsed / self.duration);
        (self.to - self.from).mul_add(progress, self.from)
    }

    /// Normalized elapsed time in [0, 1], before easing.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.elapsed / self.duration
    }

    #[must_use]
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }
}

#[derive(Debug)]
enum PulsePhase {
    Attack { tween: Tween, decay: f32 },
    Decay(Tween),
}

/// Attack/decay envelope: rest → peak → rest.
///
/// The scripted equivalent of a yoyo-repeat tween; used for the rim-light
/// accent and the impact-flash overlay opacity.
#[derive(Debug)]
pub struct Pulse {
    rest: f32,
    value: f32,
    phase: Option<PulsePhase>,
}

impl Pulse {
    #[must_use]
    pub fn new(rest: f32) -> Self {
        Self {
            rest,
            value: rest,
            phase: None,
        }
    }

    /// Fires the envelope. A pulse already in flight restarts from its
    /// current value.
    pub fn fire(&mut self, peak: f32, attack: f32, decay: f32) {
        self.phase = Some(PulsePhase::Attack {
            tween: Tween::new(self.value, peak, attack, Easing::QuadOut),
            decay,
        });
    }

    /// Advances the envelope and returns the current value.
    pub fn update(&mut self, dt: f32) -> f32 {
        match &mut self.phase {
            None => {}
            Some(PulsePhase::Attack { tween, decay }) => {
                self.value = tween.update(dt);
                if tween.finished() {
                    let decay = *decay;
                    self.phase = Some(PulsePhase::Decay(Tween::new(
                        self.value,
                        self.rest,
                        decay,
                        Easing::QuadIn,
                    )));
                }
            }
            Some(PulsePhase::Decay(tween)) => {
                self.value = tween.update(dt);
                if tween.finished() {
                    self.value = self.rest;
                    self.phase = None;
                }
            }
        }
        self.value
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase.is_some()
    }
}
