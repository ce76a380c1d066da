use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::CameraMove;
use crate::errors::{Result, StoryError};
use crate::tween::Easing;

/// Word-by-word caption sequence played during a chapter's hold (the
/// voiceover mock of the opening beat). Each word is shown for `interval`
/// seconds with a brief highlight flash; the chapter advances `tail`
/// seconds after the last word appears.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntroScript {
    pub words: Vec<String>,
    pub interval: f32,
    pub highlight: f32,
    pub tail: f32,
}

impl IntroScript {
    /// Total scripted length: one interval per word plus the tail.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.words.len() as f32 * self.interval + self.tail
    }
}

/// Delayed mid-chapter impact: a sub-beat with its own offset, not a new
/// chapter. Fires a rim/overlay flash and optionally replaces the camera
/// drive (the tail-hit throw).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubBeat {
    pub offset: f32,
    pub flash: bool,
    pub camera: Option<CameraMove>,
}

/// Immutable descriptor for one narrative beat.
///
/// Created from the static script at startup and never mutated. `hold` is
/// the wall-clock delay until the next chapter; `None` marks the terminal
/// chapter, which halts the chain in a steady running state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    /// Ordinal, 1..N.
    pub index: u32,
    pub title: String,
    pub description: String,
    /// Target animation key for the clip player.
    pub clip: String,
    /// Crossfade duration in seconds.
    pub blend: f32,
    pub camera: CameraMove,
    pub hold: Option<f32>,
    /// Whether entry is masked by the transition veil. The opening beat
    /// starts bare at the user trigger; the impact beat is its own
    /// transition.
    pub veil: bool,
    /// Terminal steady-state flag: flips the sequence into its endless
    /// mode on entry.
    pub endless: bool,
    pub intro: Option<IntroScript>,
    pub sub_beat: Option<SubBeat>,
}

/// The full linear script: the sequencer's transition table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryScript {
    pub chapters: Vec<Chapter>,
}

impl StoryScript {
    /// Parses and validates a script from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let script: Self = serde_json::from_str(json)?;
        script.validate()?;
        Ok(script)
    }

    /// Reads and validates a script file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Looks up a chapter by its 1-based ordinal.
    #[must_use]
    pub fn chapter(&self, index: u32) -> Option<&Chapter> {
        index
            .checked_sub(1)
            .and_then(|i| self.chapters.get(i as usize))
    }

    /// Structural validation, run once before playback.
    ///
    /// Enforces the sequencing invariants: consecutive ordinals, holds on
    /// every non-terminal chapter, blends and sub-beats that finish inside
    /// their hold, intro scripts that match their hold, and camera paths
    /// with at least two control points.
    pub fn validate(&self) -> Result<()> {
        if self.chapters.is_empty() {
            return Err(StoryError::EmptyScript);
        }

        let last = self.chapters.len() - 1;
        for (position, chapter) in self.chapters.iter().enumerate() {
            if chapter.index as usize != position + 1 {
                return Err(StoryError::NonConsecutiveChapter {
                    found: chapter.index,
                    position,
                });
            }

            validate_move(&chapter.camera)?;
            if let Some(beat) = &chapter.sub_beat
                && let Some(mv) = &beat.camera
            {
                validate_move(mv)?;
            }

            let Some(hold) = chapter.hold else {
                if position != last {
                    return Err(StoryError::MissingHold {
                        chapter: chapter.index,
                    });
                }
                continue;
            };

            if chapter.blend > hold {
                return Err(StoryError::BlendExceedsHold {
                    chapter: chapter.index,
                    blend: chapter.blend,
                    hold,
                });
            }
            if let Some(beat) = &chapter.sub_beat
                && beat.offset >= hold
            {
                return Err(StoryError::SubBeatAfterAdvance {
                    chapter: chapter.index,
                    offset: beat.offset,
                    hold,
                });
            }
            if let Some(intro) = &chapter.intro
                && intro.length() > hold
            {
                return Err(StoryError::IntroExceedsHold {
                    chapter: chapter.index,
                    intro: intro.length(),
                    hold,
                });
            }
        }
        Ok(())
    }

    /// The canonical five-chapter T-Rex showcase script.
    #[must_use]
    pub fn trex() -> Self {
        let chapters = vec![
            Chapter {
                index: 1,
                title: "The Apex Wakes".to_string(),
                description: "Dawn on the floodplain. The hunter stirs, patient and certain."
                    .to_string(),
                clip: "IDLE".to_string(),
                blend: 0.5,
                camera: CameraMove::new(
                    vec![
                        Vec3::new(0.0, 0.0, 3.5),
                        Vec3::new(0.0, 0.4, 3.2),
                        Vec3::new(0.0, 0.75, 3.0),
                    ],
                    4.0,
                    Vec3::new(0.0, 0.75, 0.0),
                ),
                hold: Some(4.5),
                veil: false,
                endless: false,
                intro: Some(IntroScript {
                    words: vec![
                        "Welcome...".to_string(),
                        "To...".to_string(),
                        "Project...".to_string(),
                        "TREX!".to_string(),
                    ],
                    interval: 1.0,
                    highlight: 0.3,
                    tail: 0.5,
                }),
                sub_beat: None,
            },
            Chapter {
                index: 2,
                title: "The Pursuit Begins".to_string(),
                description: "The T-Rex has spotted its target. Movement is calculated and deadly."
                    .to_string(),
                clip: "RUN".to_string(),
                blend: 0.5,
                camera: CameraMove::new(
                    vec![
                        Vec3::new(0.0, 0.75, 3.0),
                        Vec3::new(-1.5, 0.4, 4.2),
                        Vec3::new(-3.0, 0.5, 5.0),
                    ],
                    2.0,
                    Vec3::new(0.0, 1.0, 0.0),
                ),
                hold: Some(5.0),
                veil: true,
                endless: false,
                intro: None,
                sub_beat: None,
            },
            Chapter {
                index: 3,
                title: "The Primal Scream".to_string(),
                description: "A roar that vibrates through the very ground. Fear takes hold."
                    .to_string(),
                clip: "ROAR".to_string(),
                blend: 0.5,
                // tremor path: the jitter is baked into the control points
                camera: CameraMove::new(
                    vec![
                        Vec3::new(-3.0, 0.5, 5.0),
                        Vec3::new(-1.2, 0.8, 4.4),
                        Vec3::new(0.4, 0.6, 3.8),
                        Vec3::new(-0.2, 0.7, 3.6),
                        Vec3::new(0.0, 0.7, 3.5),
                    ],
                    1.5,
                    Vec3::new(0.0, 1.0, 0.0),
                ),
                hold: Some(4.0),
                veil: true,
                endless: false,
                intro: None,
                sub_beat: None,
            },
            Chapter {
                index: 4,
                title: "The Last Defense".to_string(),
                description: "A sudden whip of the tail sends everything spiraling.".to_string(),
                clip: "TAIL".to_string(),
                blend: 0.5,
                camera: CameraMove::new(
                    vec![
                        Vec3::new(0.0, 0.7, 3.5),
                        Vec3::new(0.6, 0.8, 3.8),
                        Vec3::new(1.2, 0.9, 4.2),
                    ],
                    1.0,
                    Vec3::new(0.0, 1.0, 0.0),
                ),
                hold: Some(4.0),
                veil: false,
                endless: false,
                intro: None,
                sub_beat: Some(SubBeat {
                    offset: 0.8,
                    flash: true,
                    camera: Some(
                        CameraMove::new(
                            vec![
                                Vec3::new(1.2, 0.9, 4.2),
                                Vec3::new(6.0, 4.0, 10.0),
                                Vec3::new(15.0, 10.0, 20.0),
                            ],
                            2.0,
                            Vec3::new(0.0, 1.0, 0.0),
                        )
                        .with_easing(Easing::QuadOut),
                    ),
                }),
            },
            Chapter {
                index: 5,
                title: "Endless Run".to_string(),
                description: "Nothing outlasts the apex. The ground itself gives way.".to_string(),
                clip: "RUN".to_string(),
                blend: 0.5,
                camera: CameraMove::new(
                    vec![
                        Vec3::new(15.0, 10.0, 20.0),
                        Vec3::new(5.0, 3.0, 10.0),
                        Vec3::new(0.0, 1.0, 6.0),
                    ],
                    2.0,
                    Vec3::new(0.0, 1.0, 0.0),
                ),
                hold: None,
                veil: true,
                endless: true,
                intro: None,
                sub_beat: None,
            },
        ];
        Self { chapters }
    }
}

fn validate_move(mv: &CameraMove) -> Result<()> {
    if mv.points.len() < 2 {
        return Err(StoryError::PathTooShort {
            count: mv.points.len(),
        });
    }
    Ok(())
}
