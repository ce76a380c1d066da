use glam::Vec3;

use crate::errors::{Result, StoryError};

/// Smooth camera path through an ordered list of control points.
///
/// Centripetal Catmull-Rom: the curve passes through every control point
/// with continuous tangents, so the camera has no velocity discontinuity
/// when crossing a point. Consumed once per chapter move; read-only after
/// construction.
#[derive(Debug, Clone)]
pub struct CameraPath {
    points: Vec<Vec3>,
}

impl CameraPath {
    pub fn new(points: Vec<Vec3>) -> Result<Self> {
        if points.len() < 2 {
            return Err(StoryError::PathTooShort {
                count: points.len(),
            });
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    /// Position on the curve at normalized `t` in [0, 1].
    ///
    /// `point_at(0.0)` is the first control point, `point_at(1.0)` the last,
    /// and with N points `point_at(k / (N-1))` lands exactly on point k.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        let segments = self.points.len() - 1;
        let scaled = t * segments as f32;
        let seg = (scaled.floor() as usize).min(segments - 1);
        let local = scaled - seg as f32;

        let p1 = self.points[seg];
        let p2 = self.points[seg + 1];
        // Virtual endpoints for the open curve: reflect the neighbor
        let p0 = if seg == 0 {
            p1 + (p1 - p2)
        } else {
            self.points[seg - 1]
        };
        let p3 = if seg + 2 < self.points.len() {
            self.points[seg + 2]
        } else {
            p2 + (p2 - p1)
        };

        catmull_rom_centripetal(p0, p1, p2, p3, local)
    }
}

/// Non-uniform Catmull-Rom segment with centripetal knot spacing
/// (squared-distance exponent 0.25), evaluated as a cubic Hermite between
/// `p1` and `p2`.
fn catmull_rom_centripetal(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let mut dt0 = p0.distance_squared(p1).powf(0.25);
    let mut dt1 = p1.distance_squared(p2).powf(0.25);
    let mut dt2 = p2.distance_squared(p3).powf(0.25);

    // coincident control points would zero a knot interval
    if dt1 < 1e-4 {
        dt1 = 1.0;
    }
    if dt0 < 1e-4 {
        dt0 = dt1;
    }
    if dt2 < 1e-4 {
        dt2 = dt1;
    }

    let m1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
    let m2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;

    let t2 = t * t;
    let t3 = t2 * t;
    p1 * (2.0 * t3 - 3.0 * t2 + 1.0)
        + m1 * (t3 - 2.0 * t2 + t)
        + p2 * (-2.0 * t3 + 3.0 * t2)
        + m2 * (t3 - t2)
}
