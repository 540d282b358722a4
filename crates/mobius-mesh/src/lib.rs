#![warn(missing_docs)]

//! Discretization of parametric surfaces for the Möbius strip model.
//!
//! Turns a [`Surface`](mobius_geom::Surface) into sampled data:
//! 1. [`ParametricGrid`]: a rectangular `(u, v)` grid with the matching
//!    3D point coordinates, laid out like a `meshgrid`
//! 2. [`Polyline`]: ordered point sequences for boundary curves
//! 3. [`TriangleMesh`]: flat render-ready buffers built from a grid

mod grid;
mod polyline;
mod triangle;

pub use grid::ParametricGrid;
pub use polyline::Polyline;
pub use triangle::TriangleMesh;
