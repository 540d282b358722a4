#![warn(missing_docs)]

//! Möbius strip surface model.
//!
//! Provides the [`MobiusStrip`] type: a strip of center radius `R` and width
//! `w`, sampled once on an `n × n` parameter grid, with queries for its
//! surface area, its boundary edge length, and render-ready scene data.
//!
//! # Example
//!
//! ```
//! use mobius::MobiusStrip;
//!
//! let strip = MobiusStrip::new(1.0, 0.4, 200).unwrap();
//! let area = strip.surface_area().unwrap();
//! assert!((area - 2.5175).abs() < 1e-4);
//! assert!((strip.edge_length() - 13.0302).abs() < 1e-4);
//! ```

pub use mobius_geom;
pub use mobius_integrate;
pub use mobius_math;
pub use mobius_mesh;

pub mod colormap;
mod error;
mod render;

pub use error::MobiusError;
pub use render::{RenderScene, Renderer, COLOR_LABEL};

use std::f64::consts::PI;

use mobius_geom::{Curve, MobiusSurface, Surface};
use mobius_integrate::{simpson, simpson_rows};
use mobius_math::linspace;
use mobius_mesh::{ParametricGrid, Polyline};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Tolerance for the adaptive reference integration of the edge arc length.
const EXACT_EDGE_TOLERANCE: f64 = 1e-10;

/// The three scalar parameters that define a strip and its sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripParams {
    /// Radius `R` of the center circle.
    pub radius: f64,
    /// Full width `w` of the strip.
    pub width: f64,
    /// Samples per parameter axis `n`.
    pub resolution: usize,
}

impl StripParams {
    /// Demonstration parameters: `R = 1.0`, `w = 0.4`, `n = 200`.
    pub const DEMO: Self = Self {
        radius: 1.0,
        width: 0.4,
        resolution: 200,
    };

    /// Create a parameter set without validating it.
    pub fn new(radius: f64, width: f64, resolution: usize) -> Self {
        Self {
            radius,
            width,
            resolution,
        }
    }

    /// Check `R > 0`, `w > 0` (both finite) and `n ≥ 2`.
    pub fn validate(&self) -> Result<(), MobiusError> {
        if !self.radius.is_finite() {
            return Err(MobiusError::invalid("radius", self.radius, "must be finite"));
        }
        if self.radius <= 0.0 {
            return Err(MobiusError::invalid("radius", self.radius, "must be positive"));
        }
        if !self.width.is_finite() {
            return Err(MobiusError::invalid("width", self.width, "must be finite"));
        }
        if self.width <= 0.0 {
            return Err(MobiusError::invalid("width", self.width, "must be positive"));
        }
        if self.resolution < 2 {
            return Err(MobiusError::invalid(
                "resolution",
                self.resolution,
                "must be at least 2",
            ));
        }
        Ok(())
    }
}

impl Default for StripParams {
    fn default() -> Self {
        Self::DEMO
    }
}

/// A Möbius strip sampled on its parameter grid.
///
/// Built once and never mutated; every query is a pure function of the
/// stored parameters and grid.
#[derive(Debug, Clone)]
pub struct MobiusStrip {
    params: StripParams,
    surface: MobiusSurface,
    grid: ParametricGrid,
}

impl MobiusStrip {
    /// Build a strip of center radius `radius`, width `width`, sampled with
    /// `resolution` points along each parameter axis.
    pub fn new(radius: f64, width: f64, resolution: usize) -> Result<Self, MobiusError> {
        Self::from_params(StripParams::new(radius, width, resolution))
    }

    /// Build a strip from a validated parameter set.
    pub fn from_params(params: StripParams) -> Result<Self, MobiusError> {
        params.validate()?;
        if params.radius <= 0.5 * params.width {
            warn!(
                radius = params.radius,
                width = params.width,
                "strip is wider than its center circle; the surface self-intersects"
            );
        }

        let surface = MobiusSurface::new(params.radius, params.width);
        let grid = ParametricGrid::sample(&surface, params.resolution, params.resolution);
        debug!(
            radius = params.radius,
            width = params.width,
            resolution = params.resolution,
            "built mobius strip"
        );

        Ok(Self {
            params,
            surface,
            grid,
        })
    }

    /// The parameters this strip was built from.
    pub fn params(&self) -> StripParams {
        self.params
    }

    /// The analytic surface.
    pub fn surface(&self) -> &MobiusSurface {
        &self.surface
    }

    /// The sampled `n × n` parameter grid.
    pub fn grid(&self) -> &ParametricGrid {
        &self.grid
    }

    /// Surface area by quadrature of `|∂P/∂u × ∂P/∂v|` over the grid.
    ///
    /// Integrates along v for every fixed u first, then integrates that
    /// profile along u, both with composite Simpson's rule.
    #[instrument(level = "debug", skip(self), fields(n = self.params.resolution))]
    pub fn surface_area(&self) -> Result<f64, MobiusError> {
        let d_area = self.grid.map(|uv| self.surface.area_element(uv));
        let profile = simpson_rows(&d_area, &self.grid.v_samples)?;
        let area = simpson(&profile, &self.grid.u_samples)?;
        debug!(area, "integrated surface area");
        Ok(area)
    }

    /// The boundary polyline: `4n` points.
    ///
    /// The `v = +w/2` edge sampled at `2n` values of `u ∈ [0, 2π]`, followed
    /// by the `v = -w/2` edge sampled the same way and traversed backwards.
    pub fn boundary(&self) -> Polyline {
        let u_samples = linspace(0.0, 2.0 * PI, 2 * self.params.resolution);
        let h = self.surface.edge_offset();
        let upper = Polyline::sample_iso(&self.surface, h, &u_samples);
        let lower = Polyline::sample_iso(&self.surface, -h, &u_samples);
        upper.concat(&lower.reversed())
    }

    /// Edge length as the sum of the boundary's `4n - 1` consecutive segments.
    ///
    /// No segment is added from the last point back to the first; see
    /// [`edge_length_closed`](Self::edge_length_closed).
    #[instrument(level = "debug", skip(self), fields(n = self.params.resolution))]
    pub fn edge_length(&self) -> f64 {
        let length = self.boundary().open_length();
        debug!(length, "summed open boundary");
        length
    }

    /// Edge length of the boundary closed back onto its first point (`4n` segments).
    pub fn edge_length_closed(&self) -> f64 {
        self.boundary().closed_length()
    }

    /// Arc length of the strip's continuous edge, independent of `n`.
    ///
    /// Integrates the speed of the `v = +w/2` curve over `u ∈ [0, 4π]`,
    /// which covers the whole single edge exactly once.
    pub fn exact_edge_length(&self) -> f64 {
        self.surface.edge_curve().arc_length(EXACT_EDGE_TOLERANCE)
    }

    /// Render-ready data: colored points, triangles and the boundary.
    pub fn render_scene(&self) -> RenderScene {
        RenderScene::build(&self.grid, &self.surface, self.boundary())
    }

    /// Hand the scene to `renderer`.
    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> Result<R::Output, MobiusError> {
        renderer.render(&self.render_scene())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mobius_math::{Point3, Tolerance};

    fn demo() -> MobiusStrip {
        MobiusStrip::from_params(StripParams::DEMO).unwrap()
    }

    #[test]
    fn test_demo_surface_area() {
        let area = demo().surface_area().unwrap();
        assert_relative_eq!(area, 2.51750745775074, max_relative = 1e-10);
    }

    #[test]
    fn test_demo_edge_length() {
        let strip = demo();
        assert_relative_eq!(strip.edge_length(), 13.03019022836252, max_relative = 1e-10);
        assert_relative_eq!(
            strip.edge_length_closed(),
            13.43019022836252,
            max_relative = 1e-10
        );
    }

    #[test]
    fn test_demo_formatting() {
        let strip = demo();
        assert_eq!(format!("{:.4}", strip.surface_area().unwrap()), "2.5175");
        assert_eq!(format!("{:.4}", strip.edge_length()), "13.0302");
    }

    #[test]
    fn test_rejects_low_resolution() {
        for n in [0, 1] {
            let err = MobiusStrip::new(1.0, 0.4, n).unwrap_err();
            assert!(matches!(
                err,
                MobiusError::InvalidParameter {
                    name: "resolution",
                    ..
                }
            ));
        }
        assert!(MobiusStrip::new(1.0, 0.4, 2).is_ok());
    }

    #[test]
    fn test_rejects_bad_radius_and_width() {
        let cases = [
            (0.0, 0.4, "radius"),
            (-1.0, 0.4, "radius"),
            (f64::NAN, 0.4, "radius"),
            (1.0, 0.0, "width"),
            (1.0, -0.1, "width"),
            (1.0, f64::INFINITY, "width"),
        ];
        for (radius, width, expected) in cases {
            match MobiusStrip::new(radius, width, 10) {
                Err(MobiusError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
                other => panic!("expected invalid {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_error_message() {
        let err = MobiusStrip::new(1.0, 0.4, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid parameter `resolution` = 1: must be at least 2"
        );
    }

    #[test]
    fn test_grid_shape_matches_resolution() {
        let strip = MobiusStrip::new(1.0, 0.4, 17).unwrap();
        assert_eq!(strip.grid().shape(), (17, 17));
        assert_eq!(strip.grid().u_samples.len(), 17);
        assert_eq!(strip.params().resolution, 17);
    }

    #[test]
    fn test_boundary_layout() {
        let strip = MobiusStrip::new(1.0, 0.4, 50).unwrap();
        let boundary = strip.boundary();
        assert_eq!(boundary.len(), 200);
        assert_eq!(boundary.segment_count(), 199);

        // The upper edge ends where the lower edge begins (seam flip), so the
        // reversed lower half starts one full width away from it.
        let upper_end = boundary.points[99];
        let lower_start = boundary.points[100];
        assert_relative_eq!(upper_end, on_x_axis(0.8), epsilon = 1e-12);
        assert_relative_eq!(lower_start, on_x_axis(1.2), epsilon = 1e-12);
        assert_relative_eq!((lower_start - upper_end).norm(), 0.4, epsilon = 1e-12);

        // The polyline starts and ends at points joined by the seam.
        assert_relative_eq!(*boundary.first().unwrap(), on_x_axis(1.2), epsilon = 1e-12);
        assert_relative_eq!(*boundary.last().unwrap(), on_x_axis(0.8), epsilon = 1e-12);
        // Open as sampled: the closing segment spans the width.
        assert!(!boundary.is_closed(&Tolerance::DEFAULT));
    }

    #[test]
    fn test_closed_adds_one_width() {
        for (radius, width, n) in [(1.0, 0.4, 30), (3.0, 1.0, 64), (2.0, 0.2, 7)] {
            let strip = MobiusStrip::new(radius, width, n).unwrap();
            assert_relative_eq!(
                strip.edge_length_closed() - strip.edge_length(),
                width,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_exact_edge_length() {
        let strip = demo();
        let exact = strip.exact_edge_length();
        assert_relative_eq!(exact, 12.630321719069459, epsilon = 1e-8);
        // The sampled boundary adds the one-width jump at its seam join.
        assert!((strip.edge_length() - (exact + 0.4)).abs() < 1e-3);
    }

    #[test]
    fn test_params_serde() {
        let json = serde_json::to_string(&StripParams::DEMO).unwrap();
        assert_eq!(json, r#"{"radius":1.0,"width":0.4,"resolution":200}"#);
        let back: StripParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StripParams::default());
    }

    fn on_x_axis(x: f64) -> Point3 {
        Point3::new(x, 0.0, 0.0)
    }
}
