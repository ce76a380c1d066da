//! Headless story showcase.
//!
//! Registers the T-Rex clip set, starts the canonical script, and runs the
//! whole cinematic on a fixed timestep, logging every narrative beat and a
//! few camera samples. Doubles as the wiring reference for a windowed
//! host: replace [`ConsoleOverlay`] with a real overlay and feed real
//! frame deltas.

use saurian::{AnimationClip, ConsoleOverlay, StageContext, StoryScript, StorySequencer};

const DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut ctx = StageContext::new();
    // Clip set as decoded from the source asset, keyed the way the script
    // refers to them.
    for (name, duration) in [
        ("IDLE", 4.0),
        ("RUN", 0.8),
        ("ROAR", 2.4),
        ("BITE", 1.2),
        ("TAIL", 1.6),
    ] {
        ctx.mixer.register_clip(AnimationClip::new(name, duration));
    }

    let mut overlay = ConsoleOverlay;
    let mut sequencer =
        StorySequencer::new(StoryScript::trex()).expect("builtin script validates");
    sequencer
        .start(&mut ctx, &mut overlay)
        .expect("clips are registered");

    // Run until the terminal chapter has settled, with a hard cap.
    let mut elapsed = 0.0_f32;
    let mut last_logged_chapter = 0;
    while elapsed < 60.0 {
        sequencer.update(DT, &mut ctx, &mut overlay);
        elapsed += DT;

        if sequencer.current_chapter() != last_logged_chapter {
            last_logged_chapter = sequencer.current_chapter();
            log::info!(
                "t={elapsed:5.2}s  camera at {:?} looking at {:?}",
                ctx.camera.position,
                ctx.camera.target
            );
        }

        if sequencer.is_running_infinite() && !ctx.camera.is_flying() && !ctx.veil.is_active() {
            break;
        }
    }

    // Let the endless state run a moment to show the floor speed-up.
    let before = ctx.floor.time;
    for _ in 0..120 {
        sequencer.update(DT, &mut ctx, &mut overlay);
    }
    log::info!(
        "endless state: floor scroll advanced {:.2}s of shader time in 2.0s of wall time",
        ctx.floor.time - before
    );
    log::info!(
        "story complete at chapter {} after {elapsed:.2}s",
        sequencer.current_chapter()
    );
}
