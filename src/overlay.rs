//! Overlay surface.
//!
//! The narrow seam between the sequencer and whatever renders titles,
//! navigation markers, captions, and the transition veil: a DOM in a
//! browser host, an egui layer on native, a log stream when headless.
//! Calls are stateless pushes; per-chapter text lands once on entry,
//! continuous values (veil coverage, flash opacity) land every tick while
//! they animate. An implementation missing a given element simply skips
//! that update.

/// Host-implemented overlay sink.
pub trait Overlay {
    /// Chapter title and description, pushed once per chapter entry.
    fn set_chapter_text(&mut self, title: &str, description: &str);

    /// Highlights the navigation marker for the given chapter ordinal and
    /// clears the rest.
    fn set_nav_active(&mut self, index: u32);

    /// Transition-veil coverage in [0, 1].
    fn set_veil_coverage(&mut self, coverage: f32);

    /// Impact-flash opacity in [0, 1].
    fn set_flash_opacity(&mut self, opacity: f32);

    /// Shows one caption word; `highlight` carries the brief emphasis flash.
    fn show_caption(&mut self, word: &str, highlight: bool);

    /// Hides the caption element at the end of an intro sequence.
    fn hide_caption(&mut self);

    /// Shows or hides the endless-run marquee.
    fn set_marquee_visible(&mut self, visible: bool);

    /// Hides the start control once the story begins.
    fn hide_start_control(&mut self);
}

/// Overlay that ignores every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullOverlay;

impl Overlay for NullOverlay {
    fn set_chapter_text(&mut self, _title: &str, _description: &str) {}
    fn set_nav_active(&mut self, _index: u32) {}
    fn set_veil_coverage(&mut self, _coverage: f32) {}
    fn set_flash_opacity(&mut self, _opacity: f32) {}
    fn show_caption(&mut self, _word: &str, _highlight: bool) {}
    fn hide_caption(&mut self) {}
    fn set_marquee_visible(&mut self, _visible: bool) {}
    fn hide_start_control(&mut self) {}
}

/// Overlay that logs discrete changes. Continuous per-tick values go to
/// `debug` so an `info`-level run shows just the narrative beats.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleOverlay;

impl Overlay for ConsoleOverlay {
    fn set_chapter_text(&mut self, title: &str, description: &str) {
        log::info!("{title} :: {description}");
    }

    fn set_nav_active(&mut self, index: u32) {
        log::info!("nav: chapter {index}");
    }

    fn set_veil_coverage(&mut self, coverage: f32) {
        log::debug!("veil: {coverage:.2}");
    }

    fn set_flash_opacity(&mut self, opacity: f32) {
        log::debug!("flash: {opacity:.2}");
    }

    fn show_caption(&mut self, word: &str, highlight: bool) {
        if highlight {
            log::info!("caption: {word}");
        }
    }

    fn hide_caption(&mut self) {
        log::info!("caption hidden");
    }

    fn set_marquee_visible(&mut self, visible: bool) {
        log::info!("marquee: {}", if visible { "on" } else { "off" });
    }

    fn hide_start_control(&mut self) {
        log::info!("start control hidden");
    }
}
