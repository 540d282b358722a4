#![warn(missing_docs)]

//! Math types for the Möbius strip surface model.
//!
//! Thin wrappers around nalgebra providing the point, vector, and
//! direction types used by the geometry and mesh crates, plus
//! tolerance constants and uniform parameter sampling.

use nalgebra::{Unit, Vector2, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A point in 2D parameter space.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D space.
pub type Vec2 = Vector2<f64>;

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance (1e-9 linear).
    pub const DEFAULT: Self = Self { linear: 1e-9 };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// `count` evenly spaced samples over `[start, stop]`, both ends included.
///
/// The final sample is exactly `stop`. A count of one yields `[start]`
/// and a count of zero yields an empty vector.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = count - 1;
            let step = (stop - start) / last as f64;
            (0..count)
                .map(|i| {
                    if i == last {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}
