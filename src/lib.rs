#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod camera;
pub mod errors;
pub mod overlay;
pub mod scene;
pub mod sequencer;
pub mod transition;
pub mod tween;

pub use animation::{AnimationAction, AnimationClip, AnimationMixer, LoopMode};
pub use camera::{CameraMove, CameraPath, CameraRig};
pub use errors::{Result, StoryError};
pub use overlay::{ConsoleOverlay, NullOverlay, Overlay};
pub use scene::{FloorScroll, RimLight};
pub use sequencer::{Chapter, IntroScript, SequencerState, StageContext, StoryScript, StorySequencer, SubBeat};
pub use transition::{TransitionVeil, VeilEvent, VeilTiming};
pub use tween::{Easing, Pulse, Tween};
