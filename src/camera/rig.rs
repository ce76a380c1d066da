use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::path::CameraPath;
use crate::errors::Result;
use crate::tween::{Easing, Tween};

/// One scripted camera move: a spline flight over a fixed duration with an
/// easing curve and a look target. Script data, immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraMove {
    pub points: Vec<Vec3>,
    pub duration: f32,
    pub easing: Easing,
    pub look_at: Vec3,
}

impl CameraMove {
    #[must_use]
    pub fn new(points: Vec<Vec3>, duration: f32, look_at: Vec3) -> Self {
        Self {
            points,
            duration,
            easing: Easing::QuadInOut,
            look_at,
        }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

#[derive(Debug)]
struct PathDrive {
    path: CameraPath,
    progress: Tween,
    look_at: Vec3,
}

/// Director-controlled camera.
///
/// While a drive is active the rig owns the camera transform outright;
/// orbit-style user input is deliberately not consulted so the scripted
/// cuts cannot be disturbed. Only one drive runs at a time; starting a new
/// one replaces the old.
#[derive(Debug)]
pub struct CameraRig {
    pub position: Vec3,
    pub target: Vec3,
    drive: Option<PathDrive>,
}

impl CameraRig {
    #[must_use]
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            drive: None,
        }
    }

    /// Starts flying along `mv`'s spline, replacing any active drive.
    pub fn fly_along(&mut self, mv: &CameraMove) -> Result<()> {
        let path = CameraPath::new(mv.points.clone())?;
        self.drive = Some(PathDrive {
            path,
            progress: Tween::new(0.0, 1.0, mv.duration, mv.easing),
            look_at: mv.look_at,
        });
        Ok(())
    }

    #[must_use]
    pub fn is_flying(&self) -> bool {
        self.drive.is_some()
    }

    /// Normalized progress of the active drive, if any.
    #[must_use]
    pub fn progress(&self) -> Option<f32> {
        self.drive.as_ref().map(|d| d.progress.progress())
    }

    /// Advances the active drive: position follows the spline, the look
    /// target is refreshed every tick so follow controls keep up.
    pub fn update(&mut self, dt: f32) {
        if let Some(drive) = &mut self.drive {
            let s = drive.progress.update(dt);
            self.position = drive.path.point_at(s);
            self.target = drive.look_at;
            if drive.progress.finished() {
                self.drive = None;
            }
        }
    }

    /// Right-handed view matrix for the host renderer.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}
