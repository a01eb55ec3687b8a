//! Triangle-strip mesh data produced by the sphere tessellator.
//!
//! A [`SphereMesh`] is an ordered list of [`TriangleStrip`]s. Each strip is a
//! vertex sequence in which every vertex after the first two closes one
//! triangle with its two predecessors. Consumers that cannot draw strips can
//! call [`SphereMesh::to_triangle_list`] for an indexed triangle list with the
//! same winding.

use glam::{Vec2, Vec3};

/// A single tessellated surface sample, laid out for direct GPU upload.
///
/// Layout (32 bytes total):
///   - `[0..12]`  position `[f32; 3]`
///   - `[12..24]` normal `[f32; 3]`, unit length
///   - `[24..32]` tex_coord `[f32; 2]`, `s` then `t`, both in `0.0..=1.0`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Outward unit normal.
    pub normal: [f32; 3],
    /// Texture coordinate `(s, t)`.
    pub tex_coord: [f32; 2],
}

static_assertions::assert_eq_size!(SphereVertex, [u8; 32]);

impl SphereVertex {
    /// Builds a vertex from glam vectors.
    pub fn new(position: Vec3, normal: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            tex_coord: tex_coord.to_array(),
        }
    }

    /// Position as a [`Vec3`].
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Normal as a [`Vec3`].
    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    /// Texture coordinate as a [`Vec2`].
    pub fn tex_coord(&self) -> Vec2 {
        Vec2::from_array(self.tex_coord)
    }
}

/// Which part of the sphere a strip covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StripKind {
    /// Fan-like strip joining the north pole to the highest intermediate ring.
    NorthCap,
    /// Fan-like strip joining the south pole to the lowest intermediate ring.
    SouthCap,
    /// Band between latitude ring `upper` and ring `upper - 1`.
    Band { upper: usize },
}

/// One triangle strip.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleStrip {
    /// Region of the sphere this strip covers.
    pub kind: StripKind,
    /// Strip-ordered vertices.
    pub vertices: Vec<SphereVertex>,
}

impl TriangleStrip {
    /// Creates an empty strip with room for `capacity` vertices.
    pub fn with_capacity(kind: StripKind, capacity: usize) -> Self {
        Self {
            kind,
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Appends a vertex.
    pub fn push(&mut self, vertex: SphereVertex) {
        self.vertices.push(vertex);
    }

    /// Number of triangles the strip describes.
    pub fn triangle_count(&self) -> usize {
        self.vertices.len().saturating_sub(2)
    }
}

/// Tessellated sphere: an ordered sequence of triangle strips.
///
/// Produced fresh by every call to [`crate::tessellate_sphere`] and owned
/// exclusively by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereMesh {
    /// Radius the mesh was generated with.
    pub radius: f32,
    /// Effective longitude sample count (after clamping).
    pub longitude_segments: usize,
    /// Effective latitude sample count (after clamping).
    pub latitude_segments: usize,
    strips: Vec<TriangleStrip>,
}

impl SphereMesh {
    pub(crate) fn new(
        radius: f32,
        longitude_segments: usize,
        latitude_segments: usize,
        strips: Vec<TriangleStrip>,
    ) -> Self {
        Self {
            radius,
            longitude_segments,
            latitude_segments,
            strips,
        }
    }

    /// All strips in emission order: north cap, south cap, then bands from the bottom up.
    pub fn strips(&self) -> &[TriangleStrip] {
        &self.strips
    }

    /// Consumes the mesh, returning its strips.
    pub fn into_strips(self) -> Vec<TriangleStrip> {
        self.strips
    }

    /// Returns the first strip of the given kind.
    pub fn strip(&self, kind: StripKind) -> Option<&TriangleStrip> {
        self.strips.iter().find(|s| s.kind == kind)
    }

    /// Total vertices emitted across all strips.
    pub fn vertex_count(&self) -> usize {
        self.strips.iter().map(|s| s.vertices.len()).sum()
    }

    /// Total triangles described by all strips.
    pub fn triangle_count(&self) -> usize {
        self.strips.iter().map(TriangleStrip::triangle_count).sum()
    }

    /// Iterates over every emitted vertex, strip by strip.
    pub fn vertices(&self) -> impl Iterator<Item = &SphereVertex> {
        self.strips.iter().flat_map(|s| s.vertices.iter())
    }

    /// Flattens the strips into an indexed triangle list.
    ///
    /// Strip vertices are copied verbatim; triangle `k` of a strip uses
    /// `(k, k+1, k+2)` for even `k` and `(k+1, k, k+2)` for odd `k`, which
    /// keeps the facing of every triangle consistent with the strip.
    pub fn to_triangle_list(&self) -> (Vec<SphereVertex>, Vec<u32>) {
        let mut vertices = Vec::with_capacity(self.vertex_count());
        let mut indices = Vec::with_capacity(self.triangle_count() * 3);

        for strip in &self.strips {
            let base = vertices.len() as u32;
            vertices.extend_from_slice(&strip.vertices);

            for k in 0..strip.triangle_count() as u32 {
                let (a, b, c) = (base + k, base + k + 1, base + k + 2);
                if k % 2 == 0 {
                    indices.extend_from_slice(&[a, b, c]);
                } else {
                    indices.extend_from_slice(&[b, a, c]);
                }
            }
        }

        (vertices, indices)
    }
}
