//! Chapter sequencing engine.
//!
//! An explicit finite state machine over the script table: chapter k maps
//! to (entry actions, exit delay, chapter k+1). One cooperative
//! `update(dt)` loop replaces nested timer callbacks: discrete delays are
//! countdown fields decreased by `dt`, and the veil's halfway point is a
//! polled event. Entering a chapter executes, in fixed order: overlay
//! update, clip crossfade, camera-path drive. The next chapter's countdown
//! is armed only after that setup returns, so transitions can never
//! interleave.

pub mod chapter;

pub use chapter::{Chapter, IntroScript, StoryScript, SubBeat};

use glam::Vec3;

use crate::animation::AnimationMixer;
use crate::camera::CameraRig;
use crate::errors::{Result, StoryError};
use crate::overlay::Overlay;
use crate::scene::{FloorScroll, RimLight};
use crate::transition::{TransitionVeil, VeilEvent};
use crate::tween::Pulse;

/// Where in the story we are. Single source of truth, written only by the
/// sequencer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequencerState {
    /// Current chapter ordinal; 0 means not started.
    pub current_chapter: u32,
    /// Set on entering the terminal chapter; alters the floor scroll rate.
    pub running_infinite: bool,
}

/// Aggregates the mutable stage state the sequencer coordinates, with one
/// writer per field: the mixer owns the active-action reference, the rig
/// owns the camera transform, the sequencer drives the rest.
pub struct StageContext {
    pub mixer: AnimationMixer,
    pub camera: CameraRig,
    pub veil: TransitionVeil,
    pub floor: FloorScroll,
    pub rim: RimLight,
}

impl Default for StageContext {
    fn default() -> Self {
        Self::new()
    }
}

impl StageContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mixer: AnimationMixer::new(),
            camera: CameraRig::new(Vec3::new(0.0, 0.0, 3.5), Vec3::new(0.0, 0.75, 0.0)),
            veil: TransitionVeil::default(),
            floor: FloorScroll::default(),
            rim: RimLight::default(),
        }
    }

    /// Advances the continuous stage state (everything except the veil,
    /// which the sequencer drives for its events).
    fn update(&mut self, dt: f32, running_infinite: bool) {
        self.mixer.update(dt);
        self.camera.update(dt);
        self.rim.update(dt);
        self.floor.advance(dt, running_infinite);
    }
}

/// Runtime drive for an [`IntroScript`].
#[derive(Debug)]
struct IntroDrive {
    script: IntroScript,
    elapsed: f32,
    next_word: usize,
    highlight_left: f32,
}

impl IntroDrive {
    fn new(script: IntroScript) -> Self {
        Self {
            script,
            elapsed: 0.0,
            next_word: 0,
            highlight_left: 0.0,
        }
    }

    fn update(&mut self, dt: f32, overlay: &mut dyn Overlay) {
        // drop the highlight flash on the word already showing
        if self.highlight_left > 0.0 {
            self.highlight_left -= dt;
            if self.highlight_left <= 0.0 && self.next_word > 0 {
                overlay.show_caption(&self.script.words[self.next_word - 1], false);
            }
        }

        if self.next_word < self.script.words.len() {
            let boundary = self.next_word as f32 * self.script.interval;
            if self.elapsed >= boundary {
                overlay.show_caption(&self.script.words[self.next_word], true);
                self.highlight_left = self.script.highlight;
                self.next_word += 1;
            }
            self.elapsed += dt;
        }
    }
}

#[derive(Debug)]
enum Phase {
    /// Not started.
    Idle,
    /// Veil covering toward chapter `next`; setup pending at halfway.
    Veiling { next: u32 },
    /// Chapter live, countdowns running. The terminal chapter sits here
    /// forever with no `advance_left`.
    Playing {
        advance_left: Option<f32>,
        sub_beat_left: Option<f32>,
        intro: Option<IntroDrive>,
    },
}

/// The orchestrator: advances through the script, coordinating the clip
/// player, the camera rig, the transition veil, and the overlay.
pub struct StorySequencer {
    script: StoryScript,
    state: SequencerState,
    phase: Phase,
    flash: Pulse,
}

impl StorySequencer {
    /// Validates the script up front; an invalid script never starts.
    pub fn new(script: StoryScript) -> Result<Self> {
        script.validate()?;
        Ok(Self {
            script,
            state: SequencerState::default(),
            phase: Phase::Idle,
            flash: Pulse::new(0.0),
        })
    }

    #[must_use]
    pub fn state(&self) -> SequencerState {
        self.state
    }

    #[must_use]
    pub fn current_chapter(&self) -> u32 {
        self.state.current_chapter
    }

    #[must_use]
    pub fn is_running_infinite(&self) -> bool {
        self.state.running_infinite
    }

    #[must_use]
    pub fn script(&self) -> &StoryScript {
        &self.script
    }

    /// The user start trigger.
    ///
    /// Conditionally available: fails with [`StoryError::SceneNotReady`]
    /// until the host has registered the model's clips, and with
    /// [`StoryError::AlreadyStarted`] on re-entry. On success the start
    /// control is hidden and chapter 1 is entered.
    pub fn start(&mut self, ctx: &mut StageContext, overlay: &mut dyn Overlay) -> Result<()> {
        if !matches!(self.phase, Phase::Idle) {
            return Err(StoryError::AlreadyStarted);
        }
        if ctx.mixer.is_empty() {
            return Err(StoryError::SceneNotReady);
        }
        overlay.hide_start_control();
        self.begin_chapter(1, ctx, overlay);
        Ok(())
    }

    /// One cooperative tick. Order inside the tick: veil phase first (so a
    /// halfway point performs chapter setup before anything else moves),
    /// then the chapter countdowns, then the continuous stage state, then
    /// the per-tick overlay pushes.
    pub fn update(&mut self, dt: f32, ctx: &mut StageContext, overlay: &mut dyn Overlay) {
        if let Some(event) = ctx.veil.update(dt)
            && event == VeilEvent::Halfway
            && let Phase::Veiling { next } = self.phase
        {
            self.enter_chapter(next, ctx, overlay);
        }

        self.run_countdowns(dt, ctx, overlay);

        ctx.update(dt, self.state.running_infinite);

        overlay.set_veil_coverage(ctx.veil.coverage());
        if self.flash.is_active() {
            let opacity = self.flash.update(dt);
            overlay.set_flash_opacity(opacity);
        }
    }

    /// Starts the transition toward chapter `index`: behind the veil when
    /// the script asks for it, in place otherwise.
    fn begin_chapter(&mut self, index: u32, ctx: &mut StageContext, overlay: &mut dyn Overlay) {
        let Some(chapter) = self.script.chapter(index) else {
            return;
        };
        if chapter.veil {
            ctx.veil.play();
            self.phase = Phase::Veiling { next: index };
        } else {
            self.enter_chapter(index, ctx, overlay);
        }
    }

    /// Chapter setup. Runs at the veil's halfway point (or immediately for
    /// bare entries); arms the advance countdown last.
    fn enter_chapter(&mut self, index: u32, ctx: &mut StageContext, overlay: &mut dyn Overlay) {
        let Some(chapter) = self.script.chapter(index).cloned() else {
            return;
        };
        log::info!("Chapter {index}: {}", chapter.title);

        self.state.current_chapter = index;
        if chapter.endless {
            self.state.running_infinite = true;
            overlay.set_marquee_visible(true);
        }

        overlay.set_chapter_text(&chapter.title, &chapter.description);
        overlay.set_nav_active(index);

        ctx.mixer.fade_to_action(&chapter.clip, chapter.blend);

        if let Err(err) = ctx.camera.fly_along(&chapter.camera) {
            log::warn!("Chapter {index}: camera move rejected: {err}");
        }

        self.phase = Phase::Playing {
            advance_left: chapter.hold,
            sub_beat_left: chapter.sub_beat.as_ref().map(|beat| beat.offset),
            intro: chapter.intro.map(IntroDrive::new),
        };
    }

    fn run_countdowns(&mut self, dt: f32, ctx: &mut StageContext, overlay: &mut dyn Overlay) {
        let current = self.state.current_chapter;
        let mut fire_beat = false;
        let mut advance = false;

        if let Phase::Playing {
            advance_left,
            sub_beat_left,
            intro,
        } = &mut self.phase
        {
            if let Some(drive) = intro.as_mut() {
                drive.update(dt, overlay);
            }
            if let Some(left) = sub_beat_left.as_mut() {
                *left -= dt;
                if *left <= 0.0 {
                    *sub_beat_left = None;
                    fire_beat = true;
                }
            }
            if let Some(left) = advance_left.as_mut() {
                *left -= dt;
                if *left <= 0.0 {
                    *advance_left = None;
                    advance = true;
                }
            }
        }

        if fire_beat {
            self.fire_sub_beat(current, ctx);
        }
        if advance {
            if let Phase::Playing { intro, .. } = &mut self.phase
                && intro.take().is_some()
            {
                overlay.hide_caption();
            }
            self.begin_chapter(current + 1, ctx, overlay);
        }
    }

    fn fire_sub_beat(&mut self, index: u32, ctx: &mut StageContext) {
        let Some(beat) = self
            .script
            .chapter(index)
            .and_then(|chapter| chapter.sub_beat.clone())
        else {
            return;
        };
        log::info!("Chapter {index}: sub-beat");

        if beat.flash {
            ctx.rim.flash(12.0, 0.08, 0.35);
            self.flash.fire(1.0, 0.1, 0.1);
        }
        if let Some(mv) = &beat.camera
            && let Err(err) = ctx.camera.fly_along(mv)
        {
            log::warn!("Chapter {index}: sub-beat camera move rejected: {err}");
        }
    }
}
