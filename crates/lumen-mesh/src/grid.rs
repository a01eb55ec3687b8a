//! Latitude/longitude sample grid used while tessellating a sphere.
//!
//! The grid is owned by a single tessellation call. Latitude index 0 is the
//! south pole and the last latitude index is the north pole; longitude index
//! 0 (`-π`) and the last longitude index (`+π`) lie on the same meridian.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{Vec2, Vec3};

use crate::strip::SphereVertex;

/// Maps `index` into `0..len`, wrapping from either end.
///
/// Used to stitch the sphere seam: `-1` is the last sample and `len` is the
/// first. Equivalent to `((index % len) + len) % len`.
///
/// `len` must be non-zero.
pub fn wrap_index(index: isize, len: usize) -> usize {
    debug_assert!(len > 0);
    index.rem_euclid(len as isize) as usize
}

/// Longitude in radians of sample `ilng` out of `longitudes`, sweeping `[-π, π]`.
pub fn longitude_at(ilng: usize, longitudes: usize) -> f32 {
    -PI + TAU * ilng as f32 / (longitudes - 1) as f32
}

/// Latitude in radians of sample `ilat` out of `latitudes`, sweeping `[-π/2, π/2]`.
pub fn latitude_at(ilat: usize, latitudes: usize) -> f32 {
    -FRAC_PI_2 + PI * ilat as f32 / (latitudes - 1) as f32
}

/// Texture `s` coordinate for a longitude in radians.
pub fn s_coord(lng: f32) -> f32 {
    (lng + PI) / TAU
}

/// Texture `t` coordinate for a latitude in radians.
pub fn t_coord(lat: f32) -> f32 {
    (lat + FRAC_PI_2) / PI
}

/// Row-major grid of sphere samples, `latitudes` rows of `longitudes` samples.
#[derive(Clone, Debug)]
pub struct LatLongGrid {
    longitudes: usize,
    latitudes: usize,
    points: Vec<SphereVertex>,
}

impl LatLongGrid {
    /// Samples a sphere of `radius` at every latitude/longitude pair.
    ///
    /// Both counts must be at least 2 so the parameter sweeps are defined.
    pub fn sample(radius: f32, longitudes: usize, latitudes: usize) -> Self {
        debug_assert!(longitudes >= 2 && latitudes >= 2);

        let mut points = Vec::with_capacity(longitudes * latitudes);
        for ilat in 0..latitudes {
            let lat = latitude_at(ilat, latitudes);
            let (y, xz) = lat.sin_cos();
            for ilng in 0..longitudes {
                let lng = longitude_at(ilng, longitudes);
                let (sin_lng, cos_lng) = lng.sin_cos();
                let normal = Vec3::new(xz * cos_lng, y, -xz * sin_lng);
                points.push(SphereVertex::new(
                    normal * radius,
                    normal,
                    Vec2::new(s_coord(lng), t_coord(lat)),
                ));
            }
        }

        Self {
            longitudes,
            latitudes,
            points,
        }
    }

    /// Number of samples per latitude ring.
    pub fn longitudes(&self) -> usize {
        self.longitudes
    }

    /// Number of latitude rings, poles included.
    pub fn latitudes(&self) -> usize {
        self.latitudes
    }

    /// Sample at `(lat, lng)`, wrapping out-of-range indices around the grid.
    pub fn point(&self, lat: isize, lng: isize) -> &SphereVertex {
        let lat = wrap_index(lat, self.latitudes);
        let lng = wrap_index(lng, self.longitudes);
        &self.points[self.longitudes * lat + lng]
    }

    /// Sample at in-range indices.
    pub fn at(&self, lat: usize, lng: usize) -> &SphereVertex {
        self.point(lat as isize, lng as isize)
    }

    /// All samples of latitude ring `lat`, west to east.
    pub fn ring(&self, lat: usize) -> &[SphereVertex] {
        let start = self.longitudes * lat;
        &self.points[start..start + self.longitudes]
    }
}
