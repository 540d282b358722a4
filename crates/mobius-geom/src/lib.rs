#![warn(missing_docs)]

//! Parametric surface and curve types for the Möbius strip model.
//!
//! Provides trait-based abstractions for parametric surfaces and curves
//! with analytic partial derivatives, the Möbius strip surface itself, and
//! iso-parameter curves used to trace the strip's boundary.

use std::f64::consts::PI;

use mobius_integrate::adaptive_simpson;
use mobius_math::{Dir3, Point2, Point3, Vec3};

// =============================================================================
// Traits
// =============================================================================

/// A parametric surface in 3D space.
pub trait Surface: Send + Sync + std::fmt::Debug {
    /// Evaluate the surface at parameter `(u, v)` to get a 3D point.
    fn evaluate(&self, uv: Point2) -> Point3;

    /// Partial derivative with respect to u at `(u, v)`.
    fn d_du(&self, uv: Point2) -> Vec3;

    /// Partial derivative with respect to v at `(u, v)`.
    fn d_dv(&self, uv: Point2) -> Vec3;

    /// Parameter domain as `((u_min, u_max), (v_min, v_max))`.
    fn domain(&self) -> ((f64, f64), (f64, f64));

    /// Surface normal at parameter `(u, v)`.
    fn normal(&self, uv: Point2) -> Dir3 {
        Dir3::new_normalize(self.d_du(uv).cross(&self.d_dv(uv)))
    }

    /// Area element `|∂P/∂u × ∂P/∂v|` at `(u, v)`.
    fn area_element(&self, uv: Point2) -> f64 {
        self.d_du(uv).cross(&self.d_dv(uv)).norm()
    }
}

/// A parametric curve in 3D space.
pub trait Curve: std::fmt::Debug {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// First derivative with respect to `t`.
    fn derivative_at(&self, t: f64) -> Vec3;

    /// Parameter range as `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Arc length over the full domain.
    ///
    /// Integrates the speed `|dP/dt|` with adaptive Simpson's rule until the
    /// error estimate falls below `tolerance`.
    fn arc_length(&self, tolerance: f64) -> f64 {
        let (t0, t1) = self.domain();
        adaptive_simpson(|t| self.derivative_at(t).norm(), t0, t1, tolerance, 40)
    }
}

// =============================================================================
// Möbius strip
// =============================================================================

/// A Möbius strip with one half-twist around a center circle in the XY plane.
///
/// Parameterization:
/// ```text
/// P(u, v) = ((R + v·cos(u/2))·cos(u), (R + v·cos(u/2))·sin(u), v·sin(u/2))
/// ```
///
/// Where:
/// - `R` = radius of the center circle
/// - `u ∈ [0, 2π]` is the angle around the center circle
/// - `v ∈ [-w/2, w/2]` is the signed offset across the strip's width `w`
///
/// The seam is glued with a flip: `P(2π, v) = P(0, -v)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusSurface {
    /// Radius of the center circle.
    pub radius: f64,
    /// Full width of the strip.
    pub width: f64,
}

impl MobiusSurface {
    /// Create a strip with center radius `radius` and width `width`.
    pub fn new(radius: f64, width: f64) -> Self {
        Self { radius, width }
    }

    /// Half the width: the `|v|` at which the boundary lies.
    pub fn edge_offset(&self) -> f64 {
        0.5 * self.width
    }

    /// The strip's single boundary edge as one closed curve.
    ///
    /// Walking the `v = +w/2` iso-line twice around (`u ∈ [0, 4π]`) passes
    /// through the seam onto the `v = -w/2` side and returns to the start.
    pub fn edge_curve(&self) -> IsoCurve<'_, Self> {
        IsoCurve::new(self, self.edge_offset(), (0.0, 4.0 * PI))
    }
}

impl Surface for MobiusSurface {
    fn evaluate(&self, uv: Point2) -> Point3 {
        let (sin_u, cos_u) = uv.x.sin_cos();
        let (sin_h, cos_h) = (0.5 * uv.x).sin_cos();
        let reach = self.radius + uv.y * cos_h;
        Point3::new(reach * cos_u, reach * sin_u, uv.y * sin_h)
    }

    fn d_du(&self, uv: Point2) -> Vec3 {
        let (sin_u, cos_u) = uv.x.sin_cos();
        let (sin_h, cos_h) = (0.5 * uv.x).sin_cos();
        let v = uv.y;
        let reach = self.radius + v * cos_h;
        Vec3::new(
            -reach * sin_u - 0.5 * v * sin_h * cos_u,
            reach * cos_u - 0.5 * v * sin_h * sin_u,
            0.5 * v * cos_h,
        )
    }

    fn d_dv(&self, uv: Point2) -> Vec3 {
        let (sin_u, cos_u) = uv.x.sin_cos();
        let (sin_h, cos_h) = (0.5 * uv.x).sin_cos();
        Vec3::new(cos_h * cos_u, cos_h * sin_u, sin_h)
    }

    fn domain(&self) -> ((f64, f64), (f64, f64)) {
        let h = self.edge_offset();
        ((0.0, 2.0 * PI), (-h, h))
    }
}

// =============================================================================
// Iso-parameter curve
// =============================================================================

/// The curve `t ↦ S(t, v)` traced on a surface at a fixed `v`.
#[derive(Debug, Clone, Copy)]
pub struct IsoCurve<'a, S: Surface> {
    surface: &'a S,
    /// The fixed v parameter.
    pub v: f64,
    /// Range of the u parameter.
    pub u_range: (f64, f64),
}

impl<'a, S: Surface> IsoCurve<'a, S> {
    /// Create the iso-curve at `v` over `u_range` on `surface`.
    pub fn new(surface: &'a S, v: f64, u_range: (f64, f64)) -> Self {
        Self {
            surface,
            v,
            u_range,
        }
    }
}

impl<S: Surface> Curve for IsoCurve<'_, S> {
    fn point_at(&self, t: f64) -> Point3 {
        self.surface.evaluate(Point2::new(t, self.v))
    }

    fn derivative_at(&self, t: f64) -> Vec3 {
        self.surface.d_du(Point2::new(t, self.v))
    }

    fn domain(&self) -> (f64, f64) {
        self.u_range
    }
}
