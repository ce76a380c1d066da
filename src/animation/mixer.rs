use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::animation::action::AnimationAction;
use crate::animation::clip::AnimationClip;

/// Cross-fading clip player for one skinned model.
///
/// Owns an [`AnimationAction`] per registered clip plus the single "active
/// action" reference. [`fade_to_action`](Self::fade_to_action) hands the
/// active slot over atomically: the new clip becomes active immediately
/// while the old one keeps playing through its fade-out.
pub struct AnimationMixer {
    actions: FxHashMap<String, AnimationAction>,
    active: Option<String>,
}

impl Default for AnimationMixer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationMixer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: FxHashMap::default(),
            active: None,
        }
    }

    /// Registers a clip under its own name. Called by the host loader once
    /// the model's clip set is decoded.
    pub fn register_clip(&mut self, clip: AnimationClip) {
        let name = clip.name.clone();
        self.actions.insert(name, AnimationAction::new(Arc::new(clip)));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[must_use]
    pub fn action(&self, key: &str) -> Option<&AnimationAction> {
        self.actions.get(key)
    }

    /// Name of the current blend target, if any.
    #[must_use]
    pub fn active_clip(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn active_action(&self) -> Option<&AnimationAction> {
        self.active.as_ref().and_then(|key| self.actions.get(key))
    }

    /// Cross-fades to the clip registered under `key` over `duration`
    /// seconds.
    ///
    /// The previous active action (if any, and if different) starts its
    /// fade-out; the requested action is reset to time 0, fades in, and
    /// becomes the active reference before this call returns. An unknown
    /// key is a no-op: a warning is emitted and no state changes.
    pub fn fade_to_action(&mut self, key: &str, duration: f32) {
        if !self.actions.contains_key(key) {
            log::warn!("Animation {key:?} not found; keeping current action");
            return;
        }

        if let Some(prev) = self.active.clone()
            && prev != key
            && let Some(prev_action) = self.actions.get_mut(&prev)
        {
            prev_action.fade_out(duration);
        }

        if let Some(next) = self.actions.get_mut(key) {
            next.reset().fade_in(duration).play();
        }
        self.active = Some(key.to_owned());
    }

    /// Advances every action's clock and fade ramp.
    pub fn update(&mut self, dt: f32) {
        for action in self.actions.values_mut() {
            action.update(dt);
        }
    }
}
