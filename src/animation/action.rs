use std::sync::Arc;

use crate::animation::clip::AnimationClip;
use crate::tween::{Easing, Tween};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    Once,
    Loop,
}

/// Runtime playback state for a single clip.
///
/// An action idles (disabled, weight 0) until the mixer plays it. The fade
/// ramp is a linear weight tween; a fade-out that reaches zero disables the
/// action so the mixer's bookkeeping releases it without any caller help.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    pub time: f32,
    pub time_scale: f32,
    pub weight: f32,
    pub loop_mode: LoopMode,
    pub paused: bool,
    pub enabled: bool,

    fade: Option<Tween>,
}

impl AnimationAction {
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        Self {
            clip,
            time: 0.0,
            time_scale: 1.0,
            weight: 0.0,
            loop_mode: LoopMode::Loop,
            paused: false,
            enabled: false,
            fade: None,
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    /// Rewinds to time 0 and clears any fade in flight.
    pub fn reset(&mut self) -> &mut Self {
        self.time = 0.0;
        self.paused = false;
        self.fade = None;
        self
    }

    pub fn play(&mut self) -> &mut Self {
        self.enabled = true;
        self.paused = false;
        self
    }

    /// Ramps the blend weight 0 → 1 over `duration` seconds.
    pub fn fade_in(&mut self, duration: f32) -> &mut Self {
        self.weight = 0.0;
        self.fade = Some(Tween::new(0.0, 1.0, duration, Easing::Linear));
        self
    }

    /// Ramps the blend weight from its current value to 0 over `duration`
    /// seconds, then disables the action.
    pub fn fade_out(&mut self, duration: f32) -> &mut Self {
        self.fade = Some(Tween::new(self.weight, 0.0, duration, Easing::Linear));
        self
    }

    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Core logic: advance the fade ramp and the clip clock.
    pub fn update(&mut self, dt: f32) {
        if let Some(fade) = &mut self.fade {
            self.weight = fade.update(dt);
            if fade.finished() {
                let faded_out = fade.target() <= 0.0;
                self.fade = None;
                if faded_out {
                    self.enabled = false;
                }
            }
        }

        if self.paused || !self.enabled {
            return;
        }

        let duration = self.clip.duration;
        if duration <= 0.0 {
            return;
        }

        self.time += dt * self.time_scale;

        match self.loop_mode {
            LoopMode::Once => {
                // Play once, stop at end or start
                if self.time >= duration {
                    self.time = duration;
                    self.paused = true;
                } else if self.time < 0.0 {
                    self.time = 0.0;
                    self.paused = true;
                }
            }
            LoopMode::Loop => {
                // Standard loop: modulo
                if self.time >= duration {
                    self.time %= duration;
                } else if self.time < 0.0 {
                    // Handle reverse playback loop
                    self.time = duration + (self.time % duration);
                }
            }
        }
    }
}
