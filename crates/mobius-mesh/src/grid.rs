//! Rectangular parameter grids and their sampled surface points.

use mobius_geom::Surface;
use mobius_math::{linspace, Point2, Point3};
use nalgebra::DMatrix;
use tracing::debug;

/// A surface sampled on a uniform `(u, v)` grid.
///
/// Every matrix has shape `(n_v, n_u)`: row `i` holds the samples at
/// `v_samples[i]`, column `j` the samples at `u_samples[j]`. Both parameter
/// ranges include their end points.
#[derive(Debug, Clone)]
pub struct ParametricGrid {
    /// 1-D u abscissas (one per column).
    pub u_samples: Vec<f64>,
    /// 1-D v abscissas (one per row).
    pub v_samples: Vec<f64>,
    /// u parameter at each grid node.
    pub u: DMatrix<f64>,
    /// v parameter at each grid node.
    pub v: DMatrix<f64>,
    /// X coordinate at each grid node.
    pub x: DMatrix<f64>,
    /// Y coordinate at each grid node.
    pub y: DMatrix<f64>,
    /// Z coordinate at each grid node.
    pub z: DMatrix<f64>,
}

impl ParametricGrid {
    /// Sample `surface` over its whole domain with `n_u × n_v` nodes.
    pub fn sample<S: Surface + ?Sized>(surface: &S, n_u: usize, n_v: usize) -> Self {
        let ((u_min, u_max), (v_min, v_max)) = surface.domain();
        let u_samples = linspace(u_min, u_max, n_u);
        let v_samples = linspace(v_min, v_max, n_v);

        let u = DMatrix::from_fn(n_v, n_u, |_, j| u_samples[j]);
        let v = DMatrix::from_fn(n_v, n_u, |i, _| v_samples[i]);
        let points = DMatrix::from_fn(n_v, n_u, |i, j| {
            surface.evaluate(Point2::new(u_samples[j], v_samples[i]))
        });

        debug!(n_u, n_v, "sampled parametric grid");

        Self {
            x: points.map(|p| p.x),
            y: points.map(|p| p.y),
            z: points.map(|p| p.z),
            u_samples,
            v_samples,
            u,
            v,
        }
    }

    /// Grid shape as `(rows, cols)` = `(n_v, n_u)`.
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    /// Total number of grid nodes.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the grid has no nodes.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Parameter pair at node `(row, col)`.
    pub fn uv(&self, row: usize, col: usize) -> Point2 {
        Point2::new(self.u[(row, col)], self.v[(row, col)])
    }

    /// Surface point at node `(row, col)`.
    pub fn point(&self, row: usize, col: usize) -> Point3 {
        Point3::new(
            self.x[(row, col)],
            self.y[(row, col)],
            self.z[(row, col)],
        )
    }

    /// Surface points in row-major order (all u for the first v, then the next v).
    pub fn points(&self) -> impl Iterator<Item = Point3> + '_ {
        let (rows, cols) = self.shape();
        (0..rows).flat_map(move |i| (0..cols).map(move |j| self.point(i, j)))
    }

    /// A scalar field over the grid, evaluating `f` at each node's `(u, v)`.
    pub fn map<F>(&self, mut f: F) -> DMatrix<f64>
    where
        F: FnMut(Point2) -> f64,
    {
        let (rows, cols) = self.shape();
        DMatrix::from_fn(rows, cols, |i, j| f(self.uv(i, j)))
    }
}
