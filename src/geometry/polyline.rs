use crate::math::Point3;

/// An ordered chain of straight segments through 3D points.
///
/// For closed polylines the last point connects back to the first; the first
/// point is *not* repeated at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point3>,
    pub closed: bool,
}

impl Polyline {
    /// Creates a polyline from its points.
    #[must_use]
    pub fn new(points: Vec<Point3>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.points.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Iterates over the segments as `(start, end)` pairs, including the
    /// closing segment of a closed polyline.
    pub fn segments(&self) -> impl Iterator<Item = (&Point3, &Point3)> + '_ {
        let n = self.points.len();
        (0..self.segment_count()).map(move |i| (&self.points[i], &self.points[(i + 1) % n]))
    }

    /// Length of every segment, in order.
    #[must_use]
    pub fn segment_lengths(&self) -> Vec<f64> {
        self.segments().map(|(a, b)| (b - a).norm()).collect()
    }

    /// Sum of the segment lengths.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.segments().map(|(a, b)| (b - a).norm()).sum()
    }

    /// Returns a new polyline with the points in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            points: self.points.iter().rev().copied().collect(),
            closed: self.closed,
        }
    }
}

impl AsRef<[Point3]> for Polyline {
    fn as_ref(&self) -> &[Point3] {
        &self.points
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn open_square_length() {
        let pline = Polyline::new(square(), false);
        assert_eq!(pline.num_vertices(), 4);
        assert_eq!(pline.segment_count(), 3);
        assert_relative_eq!(pline.total_length(), 3.0);
    }

    #[test]
    fn closed_square_includes_closing_segment() {
        let pline = Polyline::new(square(), true);
        assert_eq!(pline.segment_count(), 4);
        assert_relative_eq!(pline.total_length(), 4.0);
        let (a, b) = pline.segments().last().unwrap();
        assert_eq!(*a, Point3::new(0.0, 1.0, 0.0));
        assert_eq!(*b, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn segment_lengths_diagonal() {
        let pline = Polyline::new(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0)],
            false,
        );
        assert_eq!(pline.segment_lengths(), vec![5.0]);
    }

    #[test]
    fn single_point_has_no_segments() {
        let pline = Polyline::new(vec![Point3::new(1.0, 2.0, 3.0)], true);
        assert_eq!(pline.segment_count(), 0);
        assert_relative_eq!(pline.total_length(), 0.0);
    }

    #[test]
    fn empty_polyline() {
        let pline = Polyline::new(Vec::new(), false);
        assert_eq!(pline.num_vertices(), 0);
        assert_eq!(pline.segments().count(), 0);
    }

    #[test]
    fn reversed_keeps_closed_flag() {
        let pline = Polyline::new(square(), true);
        let rev = pline.reversed();
        assert!(rev.closed);
        assert_eq!(rev.points[0], Point3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(rev.total_length(), pline.total_length());
    }
}
