//! Cubic Bézier curves sampled into line strips.

use glam::{Quat, Vec3};

use crate::error::MeshError;

/// A cubic Bézier curve defined by four control points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub p0: Vec3,
    pub p1: Vec3,
    pub p2: Vec3,
    pub p3: Vec3,
}

impl CubicBezier {
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Control points in order.
    pub fn control_points(&self) -> [Vec3; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// Evaluates the curve at `t` using the Bernstein form. `t` is not clamped.
    pub fn point_at(&self, t: f32) -> Vec3 {
        let omt = 1.0 - t;
        self.p0 * (omt * omt * omt)
            + self.p1 * (3.0 * t * omt * omt)
            + self.p2 * (3.0 * t * t * omt)
            + self.p3 * (t * t * t)
    }

    /// Samples `segments + 1` evenly spaced points from `t = 0` to `t = 1`,
    /// in line-strip order.
    pub fn sample(&self, segments: usize) -> Result<Vec<Vec3>, MeshError> {
        if segments == 0 {
            return Err(MeshError::InvalidSampleCount(segments));
        }
        Ok((0..=segments)
            .map(|i| self.point_at(i as f32 / segments as f32))
            .collect())
    }

    /// Returns this curve rotated by `angle` radians about the +Y axis.
    pub fn rotated_y(&self, angle: f32) -> Self {
        let rotation = Quat::from_rotation_y(angle);
        Self {
            p0: rotation * self.p0,
            p1: rotation * self.p1,
            p2: rotation * self.p2,
            p3: rotation * self.p3,
        }
    }
}
