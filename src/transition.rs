//! Full-screen transition veil.
//!
//! Two-phase cover → reveal effect used to mask in-place state changes
//! (clip swap, overlay text, camera reposition) from the viewer. The
//! halfway point is reported as a [`VeilEvent`] returned from
//! [`TransitionVeil::update`] and consumed by the sequencer in the same
//! tick, so the veil stays passive state instead of holding a closure.

use crate::tween::{Easing, Tween};

/// Phase durations in seconds.
#[derive(Debug, Clone, Copy)]
pub struct VeilTiming {
    /// Cover ramp: rest → fully obscuring.
    pub cover: f32,
    /// Pause at full coverage after the halfway point.
    pub dwell: f32,
    /// Reveal ramp: fully obscuring → rest.
    pub reveal: f32,
}

impl Default for VeilTiming {
    fn default() -> Self {
        Self {
            cover: 0.8,
            dwell: 0.3,
            reveal: 0.8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VeilEvent {
    /// Full coverage reached. Fired exactly once per `play`, always before
    /// the reveal phase starts. This is the window for invisible state
    /// mutation.
    Halfway,
    /// The veil is back at rest.
    Revealed,
}

#[derive(Debug)]
enum VeilPhase {
    Idle,
    Covering(Tween),
    Dwelling { left: f32 },
    Revealing(Tween),
}

/// State machine: `Idle → Covering → (Halfway) → Dwelling → Revealing → Idle`.
#[derive(Debug)]
pub struct TransitionVeil {
    timing: VeilTiming,
    phase: VeilPhase,
    coverage: f32,
}

impl Default for TransitionVeil {
    fn default() -> Self {
        Self::new(VeilTiming::default())
    }
}

impl TransitionVeil {
    #[must_use]
    pub fn new(timing: VeilTiming) -> Self {
        Self {
            timing,
            phase: VeilPhase::Idle,
            coverage: 0.0,
        }
    }

    /// Starts a cover → reveal cycle. A new invocation takes over whatever
    /// phase was active, ramping from the current coverage.
    pub fn play(&mut self) {
        self.phase = VeilPhase::Covering(Tween::new(
            self.coverage,
            1.0,
            self.timing.cover,
            Easing::ExpoInOut,
        ));
    }

    /// Veil opacity/scale in [0, 1]; the host pushes this to the overlay.
    #[must_use]
    pub fn coverage(&self) -> f32 {
        self.coverage
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, VeilPhase::Idle)
    }

    /// Advances the active phase and reports at most one event.
    pub fn update(&mut self, dt: f32) -> Option<VeilEvent> {
        match &mut self.phase {
            VeilPhase::Idle => None,
            VeilPhase::Covering(tween) => {
                self.coverage = tween.update(dt);
                if tween.finished() {
                    self.phase = VeilPhase::Dwelling {
                        left: self.timing.dwell,
                    };
                    return Some(VeilEvent::Halfway);
                }
                None
            }
            VeilPhase::Dwelling { left } => {
                *left -= dt;
                if *left <= 0.0 {
                    self.phase = VeilPhase::Revealing(Tween::new(
                        self.coverage,
                        0.0,
                        self.timing.reveal,
                        Easing::ExpoInOut,
                    ));
                }
                None
            }
            VeilPhase::Revealing(tween) => {
                self.coverage = tween.update(dt);
                if tween.finished() {
                    self.phase = VeilPhase::Idle;
                    return Some(VeilEvent::Revealed);
                }
                None
            }
        }
    }
}
