//! Render-ready scene data and the renderer seam.
//!
//! The numeric model never draws anything itself. It packages plain arrays
//! (points, per-point color keys, triangles, the boundary outline) into a
//! [`RenderScene`] and hands it to any [`Renderer`].

use mobius_geom::Surface;
use mobius_math::Point3;
use mobius_mesh::{ParametricGrid, Polyline, TriangleMesh};
use tracing::debug;

use crate::colormap::plasma;
use crate::MobiusError;

/// Label for the color key: the u parameter.
pub const COLOR_LABEL: &str = "u parameter (angle)";

/// Everything a renderer needs to draw the strip.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Grid shape `(rows, cols)` of the surface samples.
    pub grid_shape: (usize, usize),
    /// Surface points in row-major grid order.
    pub points: Vec<Point3>,
    /// Color key per point: u normalized to `[0, 1]` over its sampled range.
    pub color_keys: Vec<f64>,
    /// `plasma` color per point.
    pub colors: Vec<[f32; 3]>,
    /// Range of u mapped onto the color keys, for a colorbar.
    pub color_range: (f64, f64),
    /// Triangulated surface.
    pub mesh: TriangleMesh,
    /// Boundary outline, drawn in a contrasting color.
    pub boundary: Polyline,
}

impl RenderScene {
    /// Assemble a scene from a sampled grid and its boundary.
    pub fn build<S: Surface + ?Sized>(
        grid: &ParametricGrid,
        surface: &S,
        boundary: Polyline,
    ) -> Self {
        let u_min = grid.u.min();
        let u_max = grid.u.max();
        let span = u_max - u_min;

        let (rows, cols) = grid.shape();
        let color_keys: Vec<f64> = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| {
                if span > 0.0 {
                    (grid.u[(i, j)] - u_min) / span
                } else {
                    0.0
                }
            })
            .collect();
        let colors = color_keys.iter().map(|&t| plasma(t)).collect();
        let mesh = TriangleMesh::from_grid(grid, surface);

        debug!(
            points = grid.len(),
            triangles = mesh.num_triangles(),
            boundary = boundary.len(),
            "assembled render scene"
        );

        Self {
            grid_shape: (rows, cols),
            points: grid.points().collect(),
            color_keys,
            colors,
            color_range: (u_min, u_max),
            mesh,
            boundary,
        }
    }

    /// Axis-aligned bounds of the surface points as `(min, max)`.
    pub fn bounds(&self) -> Option<(Point3, Point3)> {
        let (first, rest) = self.points.split_first()?;
        Some(rest.iter().fold((*first, *first), |(lo, hi), p| {
            (lo.inf(p), hi.sup(p))
        }))
    }
}

/// A consumer of [`RenderScene`] data.
pub trait Renderer {
    /// What rendering produces (a frame, a summary, nothing).
    type Output;

    /// Render one scene.
    fn render(&mut self, scene: &RenderScene) -> Result<Self::Output, MobiusError>;
}
