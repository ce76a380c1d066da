/// Opaque descriptor for one animation clip on the loaded model.
///
/// Keyframe decoding and skeletal sampling stay with the host engine; the
/// sequencing layer only triggers playback by key, so a clip here is just
/// its name and length.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}
