//! Mesh generation error types.

/// Errors that can occur when generating procedural geometry.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// Sphere radius was zero, negative, or not a finite number.
    #[error("sphere radius must be a positive finite number, got {0}")]
    NonPositiveRadius(f32),

    /// A curve was asked for fewer than one sample segment.
    #[error("curve sampling needs at least one segment, got {0}")]
    InvalidSampleCount(usize),
}
