//! Render-ready triangle buffers.

use mobius_geom::Surface;

use crate::ParametricGrid;

/// Output triangle mesh for rendering.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]` (f32).
    pub vertices: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]` (u32).
    pub indices: Vec<u32>,
    /// Flat array of vertex normals: `[nx0, ny0, nz0, ...]` (f32). Same length as vertices.
    pub normals: Vec<f32>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangulate a sampled grid, two triangles per cell.
    ///
    /// Vertices follow the grid's row-major order, so vertex `i * n_u + j`
    /// is grid node `(i, j)`. Normals come from the surface at each node.
    pub fn from_grid<S: Surface + ?Sized>(grid: &ParametricGrid, surface: &S) -> Self {
        let (rows, cols) = grid.shape();
        let mut mesh = Self {
            vertices: Vec::with_capacity(rows * cols * 3),
            indices: Vec::with_capacity(rows.saturating_sub(1) * cols.saturating_sub(1) * 6),
            normals: Vec::with_capacity(rows * cols * 3),
        };

        for i in 0..rows {
            for j in 0..cols {
                let pt = grid.point(i, j);
                mesh.vertices
                    .extend_from_slice(&[pt.x as f32, pt.y as f32, pt.z as f32]);
                let n = surface.normal(grid.uv(i, j));
                mesh.normals
                    .extend_from_slice(&[n.x as f32, n.y as f32, n.z as f32]);
            }
        }

        let stride = cols as u32;
        for i in 0..rows.saturating_sub(1) {
            for j in 0..cols.saturating_sub(1) {
                let bl = i as u32 * stride + j as u32;
                let br = bl + 1;
                let tl = bl + stride;
                let tr = tl + 1;
                mesh.indices.extend_from_slice(&[bl, br, tl, br, tr, tl]);
            }
        }

        mesh
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mobius_geom::MobiusSurface;

    #[test]
    fn test_from_grid_counts() {
        let strip = MobiusSurface::new(1.0, 0.4);
        let grid = ParametricGrid::sample(&strip, 12, 4);
        let mesh = TriangleMesh::from_grid(&grid, &strip);
        assert_eq!(mesh.num_vertices(), 48);
        assert_eq!(mesh.normals.len(), mesh.vertices.len());
        assert_eq!(mesh.num_triangles(), 2 * 11 * 3);
    }

    #[test]
    fn test_from_grid_indices_in_range() {
        let strip = MobiusSurface::new(1.0, 0.4);
        let grid = ParametricGrid::sample(&strip, 6, 5);
        let mesh = TriangleMesh::from_grid(&grid, &strip);
        let n = mesh.num_vertices() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
    }

    #[test]
    fn test_from_grid_vertex_order() {
        let strip = MobiusSurface::new(1.0, 0.4);
        let grid = ParametricGrid::sample(&strip, 5, 3);
        let mesh = TriangleMesh::from_grid(&grid, &strip);
        // Vertex 7 is node (1, 2).
        let pt = grid.point(1, 2);
        assert_eq!(&mesh.vertices[21..24], &[pt.x as f32, pt.y as f32, pt.z as f32]);
    }

    #[test]
    fn test_unit_normals() {
        let strip = MobiusSurface::new(1.0, 0.4);
        let grid = ParametricGrid::sample(&strip, 8, 3);
        let mesh = TriangleMesh::from_grid(&grid, &strip);
        for n in mesh.normals.chunks(3) {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = TriangleMesh::new();
        assert_eq!(mesh.num_vertices(), 0);
        assert_eq!(mesh.num_triangles(), 0);
    }
}
