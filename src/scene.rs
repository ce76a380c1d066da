//! Shader-uniform accents owned by the story layer.
//!
//! The renderer reads these plain values after each update; nothing here
//! touches the GPU.

use crate::tween::Pulse;

/// Scrolling-time uniform for the floor shader.
///
/// Runs at a slow idle rate until the terminal chapter flips the sequence
/// into its endless state, then the scroll speeds up for the run effect.
#[derive(Debug, Clone, Copy)]
pub struct FloorScroll {
    pub time: f32,
    pub idle_rate: f32,
    pub infinite_rate: f32,
}

impl Default for FloorScroll {
    fn default() -> Self {
        Self {
            time: 0.0,
            idle_rate: 0.5,
            infinite_rate: 5.0,
        }
    }
}

impl FloorScroll {
    pub fn advance(&mut self, dt: f32, infinite: bool) {
        let rate = if infinite {
            self.infinite_rate
        } else {
            self.idle_rate
        };
        self.time += dt * rate;
    }
}

/// Rim-light intensity uniform on the character material, with a flash
/// accent for impact beats.
#[derive(Debug)]
pub struct RimLight {
    pulse: Pulse,
}

impl Default for RimLight {
    fn default() -> Self {
        Self::new(5.4)
    }
}

impl RimLight {
    #[must_use]
    pub fn new(rest: f32) -> Self {
        Self {
            pulse: Pulse::new(rest),
        }
    }

    /// Spikes the intensity to `peak` over `attack` seconds, then settles
    /// back to rest over `decay`.
    pub fn flash(&mut self, peak: f32, attack: f32, decay: f32) {
        self.pulse.fire(peak, attack, decay);
    }

    pub fn update(&mut self, dt: f32) {
        self.pulse.update(dt);
    }

    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.pulse.value()
    }

    #[must_use]
    pub fn is_flashing(&self) -> bool {
        self.pulse.is_active()
    }
}
