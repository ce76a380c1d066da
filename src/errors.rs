//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`StoryError`] covers all failure modes including:
//! - Structural problems in a chapter script, rejected at load time
//! - Sequencer start-gating errors
//! - Script I/O and parsing errors
//!
//! Runtime conditions that the sequence recovers from locally (a missing
//! animation key, an absent overlay element) are deliberately *not* errors:
//! they degrade with a `log::warn!` and the chapter clock keeps running.
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, StoryError>`.

use thiserror::Error;

/// The main error type for the story engine.
#[derive(Error, Debug)]
pub enum StoryError {
    // ========================================================================
    // Script Structure Errors
    // ========================================================================
    /// The chapter script contains no chapters.
    #[error("Chapter script is empty")]
    EmptyScript,

    /// A camera path needs at least two control points to build a curve.
    #[error("Camera path needs at least 2 control points (got {count})")]
    PathTooShort {
        /// Number of control points supplied
        count: usize,
    },

    /// Chapter ordinals must run 1..N without gaps.
    #[error("Chapter indices must be consecutive from 1 (found {found} at position {position})")]
    NonConsecutiveChapter {
        /// The ordinal found in the script
        found: u32,
        /// Zero-based position in the chapter list
        position: usize,
    },

    /// Every chapter except the terminal one must schedule its successor.
    #[error("Chapter {chapter} is not terminal but has no hold time")]
    MissingHold {
        /// Ordinal of the offending chapter
        chapter: u32,
    },

    /// An animation blend must finish before the chapter advances.
    #[error("Chapter {chapter}: blend duration {blend}s exceeds hold time {hold}s")]
    BlendExceedsHold {
        /// Ordinal of the offending chapter
        chapter: u32,
        /// Requested crossfade duration in seconds
        blend: f32,
        /// Scheduled delay to the next chapter in seconds
        hold: f32,
    },

    /// A sub-beat must fire while its chapter is still current.
    #[error("Chapter {chapter}: sub-beat offset {offset}s is past the hold time {hold}s")]
    SubBeatAfterAdvance {
        /// Ordinal of the offending chapter
        chapter: u32,
        /// Sub-beat offset in seconds
        offset: f32,
        /// Scheduled delay to the next chapter in seconds
        hold: f32,
    },

    /// An intro word script must fit inside its chapter's hold time.
    #[error("Chapter {chapter}: intro script runs {intro}s but the hold is {hold}s")]
    IntroExceedsHold {
        /// Ordinal of the offending chapter
        chapter: u32,
        /// Total intro length in seconds
        intro: f32,
        /// Scheduled delay to the next chapter in seconds
        hold: f32,
    },

    // ========================================================================
    // Sequencer State Errors
    // ========================================================================
    /// The start trigger fired twice.
    #[error("Story has already started")]
    AlreadyStarted,

    /// The start trigger fired before the host registered any clips.
    #[error("Scene is not ready: no animation clips registered")]
    SceneNotReady,

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// File I/O error while reading a script.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error in a script file.
    #[error("Script parse error: {0}")]
    ScriptParse(#[from] serde_json::Error),
}

/// Alias for `Result<T, StoryError>`.
pub type Result<T> = std::result::Result<T, StoryError>;
