//! Ordered point sequences and their arc lengths.

use mobius_geom::Surface;
use mobius_math::{Point2, Point3, Tolerance};

/// A piecewise-linear curve through an ordered list of points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// Vertices in traversal order.
    pub points: Vec<Point3>,
}

impl Polyline {
    /// Create a polyline from its vertices.
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Sample the iso-line `v = const` of `surface` at the given u values.
    pub fn sample_iso<S: Surface + ?Sized>(surface: &S, v: f64, u_samples: &[f64]) -> Self {
        Self::new(
            u_samples
                .iter()
                .map(|&u| surface.evaluate(Point2::new(u, v)))
                .collect(),
        )
    }

    /// The same vertices in the opposite order.
    pub fn reversed(&self) -> Self {
        Self::new(self.points.iter().rev().copied().collect())
    }

    /// Append `other`'s vertices after this polyline's.
    ///
    /// No vertex is merged at the junction; the join contributes one segment
    /// from this polyline's last point to `other`'s first.
    pub fn concat(mut self, other: &Polyline) -> Self {
        self.points.extend_from_slice(&other.points);
        self
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polyline has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First vertex.
    pub fn first(&self) -> Option<&Point3> {
        self.points.first()
    }

    /// Last vertex.
    pub fn last(&self) -> Option<&Point3> {
        self.points.last()
    }

    /// Number of segments between consecutive vertices (closing segment excluded).
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Euclidean length of each consecutive segment, in order.
    pub fn segment_lengths(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm())
    }

    /// Length of the open polyline: the sum of its consecutive segments.
    pub fn open_length(&self) -> f64 {
        self.segment_lengths().sum()
    }

    /// Length of the polyline closed back onto its first vertex.
    pub fn closed_length(&self) -> f64 {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => {
                self.open_length() + (first - last).norm()
            }
            _ => 0.0,
        }
    }

    /// Whether the last vertex coincides with the first within `tol`.
    pub fn is_closed(&self, tol: &Tolerance) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => tol.points_equal(first, last),
            _ => false,
        }
    }

    /// Coordinates split into separate `x`, `y`, `z` arrays.
    pub fn coordinates(&self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let xs = self.points.iter().map(|p| p.x).collect();
        let ys = self.points.iter().map(|p| p.y).collect();
        let zs = self.points.iter().map(|p| p.z).collect();
        (xs, ys, zs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mobius_geom::MobiusSurface;
    use mobius_math::linspace;
    use std::f64::consts::PI;

    fn unit_square() -> Polyline {
        Polyline::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])
    }

    #[test]
    fn test_open_and_closed_length() {
        let square = unit_square();
        assert_eq!(square.segment_count(), 3);
        assert_relative_eq!(square.open_length(), 3.0);
        assert_relative_eq!(square.closed_length(), 4.0);
    }

    #[test]
    fn test_segment_lengths_3d() {
        let line = Polyline::new(vec![Point3::origin(), Point3::new(1.0, 2.0, 2.0)]);
        let lengths: Vec<f64> = line.segment_lengths().collect();
        assert_eq!(lengths.len(), 1);
        assert_relative_eq!(lengths[0], 3.0);
    }

    #[test]
    fn test_degenerate_polylines() {
        let empty = Polyline::default();
        assert!(empty.is_empty());
        assert_eq!(empty.segment_count(), 0);
        assert_eq!(empty.open_length(), 0.0);
        assert_eq!(empty.closed_length(), 0.0);

        let single = Polyline::new(vec![Point3::new(1.0, 1.0, 1.0)]);
        assert_eq!(single.open_length(), 0.0);
        assert_eq!(single.closed_length(), 0.0);
    }

    #[test]
    fn test_reversed_preserves_length() {
        let square = unit_square();
        let back = square.reversed();
        assert_eq!(back.first(), square.last());
        assert_eq!(back.last(), square.first());
        assert_relative_eq!(back.open_length(), square.open_length());
    }

    #[test]
    fn test_concat_adds_junction_segment() {
        let a = Polyline::new(vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)]);
        let b = Polyline::new(vec![Point3::new(1.0, 2.0, 0.0), Point3::new(1.0, 3.0, 0.0)]);
        let joined = a.concat(&b);
        assert_eq!(joined.len(), 4);
        // 1 (a) + 2 (junction) + 1 (b)
        assert_relative_eq!(joined.open_length(), 4.0);
    }

    #[test]
    fn test_sample_iso_center_circle() {
        let strip = MobiusSurface::new(2.0, 0.4);
        let us = linspace(0.0, 2.0 * PI, 1000);
        let circle = Polyline::sample_iso(&strip, 0.0, &us);
        assert_eq!(circle.len(), 1000);
        // Inscribed polygon converges to 2πR from below.
        let length = circle.open_length();
        assert!(length < 4.0 * PI);
        assert_relative_eq!(length, 4.0 * PI, max_relative = 1e-5);
    }

    #[test]
    fn test_is_closed() {
        let tol = Tolerance::DEFAULT;
        assert!(!unit_square().is_closed(&tol));
        let mut loop_back = unit_square();
        loop_back.points.push(Point3::origin());
        assert!(loop_back.is_closed(&tol));
        assert!(!Polyline::default().is_closed(&tol));
    }

    #[test]
    fn test_edge_iso_line_over_two_turns_is_closed() {
        let strip = MobiusSurface::new(1.0, 0.4);
        let us = linspace(0.0, 4.0 * PI, 400);
        let edge = Polyline::sample_iso(&strip, 0.2, &us);
        assert!(edge.is_closed(&Tolerance::DEFAULT));
    }

    #[test]
    fn test_coordinates_split() {
        let (xs, ys, zs) = unit_square().coordinates();
        assert_eq!(xs, vec![0.0, 1.0, 1.0, 0.0]);
        assert_eq!(ys, vec![0.0, 0.0, 1.0, 1.0]);
        assert_eq!(zs, vec![0.0; 4]);
    }
}
