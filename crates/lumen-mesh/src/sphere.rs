//! UV-sphere tessellation into triangle strips.
//!
//! The sphere is sampled on a latitude/longitude grid, then stitched into:
//!
//! 1. a strip joining the north pole to the highest intermediate ring,
//! 2. a strip joining the south pole to the lowest intermediate ring,
//! 3. one strip per pair of adjacent intermediate rings.
//!
//! Pole vertices are emitted once per longitude so each carries the `s`
//! coordinate of the meridian it is paired with; a single shared pole vertex
//! would smear the whole top row of the texture into one texel.

use glam::{Vec2, Vec3};

use crate::error::MeshError;
use crate::grid::{LatLongGrid, longitude_at, s_coord};
use crate::strip::{SphereMesh, SphereVertex, StripKind, TriangleStrip};

/// Segment counts below this are raised to it; fewer cannot close a ring.
pub const MIN_SEGMENTS: u32 = 3;

/// Sphere tessellation parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereParams {
    /// Sphere radius, must be positive.
    pub radius: f32,
    /// Samples per latitude ring (slices).
    pub longitude_segments: u32,
    /// Latitude rings including both poles (stacks).
    pub latitude_segments: u32,
}

impl SphereParams {
    /// Creates parameters without validation.
    pub fn new(radius: f32, longitude_segments: u32, latitude_segments: u32) -> Self {
        Self {
            radius,
            longitude_segments,
            latitude_segments,
        }
    }

    /// Segment counts after clamping to [`MIN_SEGMENTS`].
    pub fn effective_segments(&self) -> (u32, u32) {
        (
            self.longitude_segments.max(MIN_SEGMENTS),
            self.latitude_segments.max(MIN_SEGMENTS),
        )
    }

    /// Number of vertices the tessellation will emit.
    pub fn expected_vertex_count(&self) -> usize {
        let (lngs, lats) = self.effective_segments();
        2 * lngs as usize * (lats as usize - 1)
    }

    /// Tessellates a sphere with these parameters.
    pub fn tessellate(&self) -> Result<SphereMesh, MeshError> {
        tessellate_sphere(
            self.radius,
            self.longitude_segments,
            self.latitude_segments,
        )
    }
}

/// Generates a UV-sphere centred on the origin as a list of triangle strips.
///
/// `longitude_segments` and `latitude_segments` below [`MIN_SEGMENTS`] are
/// raised to it. The north pole is `(0, radius, 0)` and the south pole is
/// `(0, -radius, 0)`.
///
/// # Errors
///
/// Returns [`MeshError::NonPositiveRadius`] when `radius` is not a positive
/// finite number.
///
/// # Examples
///
/// ```
/// use lumen_mesh::tessellate_sphere;
///
/// let mesh = tessellate_sphere(1.0, 4, 4).unwrap();
/// assert_eq!(mesh.strips().len(), 3);
/// assert_eq!(mesh.vertex_count(), 24);
/// ```
pub fn tessellate_sphere(
    radius: f32,
    longitude_segments: u32,
    latitude_segments: u32,
) -> Result<SphereMesh, MeshError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(MeshError::NonPositiveRadius(radius));
    }

    let params = SphereParams::new(radius, longitude_segments, latitude_segments);
    let (lngs, lats) = params.effective_segments();
    if (lngs, lats) != (longitude_segments, latitude_segments) {
        log::debug!(
            "sphere segments clamped from {longitude_segments}x{latitude_segments} to {lngs}x{lats}"
        );
    }
    let (lngs, lats) = (lngs as usize, lats as usize);

    let grid = LatLongGrid::sample(radius, lngs, lats);

    let mut strips = Vec::with_capacity(lats - 1);
    strips.push(north_cap(&grid, radius));
    strips.push(south_cap(&grid, radius));

    // Bands between rings 1..=lats-2; rings 0 and lats-1 are the poles.
    for upper in 2..lats - 1 {
        let mut band = TriangleStrip::with_capacity(StripKind::Band { upper }, 2 * lngs);
        for ilng in 0..lngs {
            band.push(*grid.at(upper, ilng));
            band.push(*grid.at(upper - 1, ilng));
        }
        strips.push(band);
    }

    let mesh = SphereMesh::new(radius, lngs, lats, strips);
    debug_assert_eq!(mesh.vertex_count(), params.expected_vertex_count());
    Ok(mesh)
}

fn pole(radius: f32, north: bool, s: f32) -> SphereVertex {
    let (normal, t) = if north { (Vec3::Y, 1.0) } else { (Vec3::NEG_Y, 0.0) };
    SphereVertex::new(normal * radius, normal, Vec2::new(s, t))
}

fn north_cap(grid: &LatLongGrid, radius: f32) -> TriangleStrip {
    let lngs = grid.longitudes();
    let ring = grid.latitudes() - 2;
    let mut strip = TriangleStrip::with_capacity(StripKind::NorthCap, 2 * lngs);
    for ilng in 0..lngs {
        let s = s_coord(longitude_at(ilng, lngs));
        strip.push(pole(radius, true, s));
        strip.push(*grid.at(ring, ilng));
    }
    strip
}

// Walks longitude in reverse so the cap faces outward like the north one.
fn south_cap(grid: &LatLongGrid, radius: f32) -> TriangleStrip {
    let lngs = grid.longitudes();
    let mut strip = TriangleStrip::with_capacity(StripKind::SouthCap, 2 * lngs);
    for ilng in (0..lngs).rev() {
        let s = s_coord(longitude_at(ilng, lngs));
        strip.push(pole(radius, false, s));
        strip.push(*grid.at(1, ilng));
    }
    strip
}
