//! Procedural geometry: UV-sphere tessellation into triangle strips and cubic Bézier sampling.

pub mod bezier;
pub mod error;
pub mod grid;
pub mod sphere;
pub mod strip;

pub use bezier::CubicBezier;
pub use error::MeshError;
pub use grid::{LatLongGrid, wrap_index};
pub use sphere::{MIN_SEGMENTS, SphereParams, tessellate_sphere};
pub use strip::{SphereMesh, SphereVertex, StripKind, TriangleStrip};
