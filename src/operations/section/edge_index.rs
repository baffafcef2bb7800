use std::collections::HashMap;

use crate::geometry::CuttingPlane;
use crate::math::Point3;

/// An undirected mesh edge, stored as `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey(usize, usize);

impl EdgeKey {
    /// Canonicalizes the pair so that `(u, v)` and `(v, u)` produce the same key.
    #[must_use]
    pub fn new(u: usize, v: usize) -> Self {
        if u <= v {
            Self(u, v)
        } else {
            Self(v, u)
        }
    }

    /// The smaller vertex index.
    #[must_use]
    pub fn low(self) -> usize {
        self.0
    }

    /// The larger vertex index.
    #[must_use]
    pub fn high(self) -> usize {
        self.1
    }
}

/// Deduplicated plane crossings keyed by mesh edge.
///
/// Each crossing point gets a dense index in first-seen order, so the points
/// can be addressed by index from [`points`](Self::points).
#[derive(Debug, Clone, Default)]
pub struct EdgeIntersectionIndex {
    indices: HashMap<EdgeKey, usize>,
    points: Vec<Point3>,
}

impl EdgeIntersectionIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the crossings of every edge of `faces` with `plane`.
    ///
    /// Edges are visited as all `(f0, f1)` edges first, then all `(f1, f2)`,
    /// then all `(f2, f0)`. This fixes the numbering of the crossing points.
    #[must_use]
    pub fn from_faces<P: CuttingPlane + ?Sized>(
        vertices: &[Point3],
        faces: &[[usize; 3]],
        plane: &P,
    ) -> Self {
        let edges: Vec<(usize, usize)> = [(0, 1), (1, 2), (2, 0)]
            .into_iter()
            .flat_map(|(a, b)| faces.iter().map(move |f| (f[a], f[b])))
            .collect();
        let starts: Vec<Point3> = edges.iter().map(|&(u, _)| vertices[u]).collect();
        let ends: Vec<Point3> = edges.iter().map(|&(_, v)| vertices[v]).collect();

        let mut index = Self::new();
        for (&(u, v), hit) in edges.iter().zip(plane.segment_intersections(&starts, &ends)) {
            if let Some(point) = hit {
                if !index.contains(u, v) {
                    index.add(u, v, point);
                }
            }
        }
        index
    }

    /// Returns `true` if the edge `u`-`v` has a crossing, in either orientation.
    #[must_use]
    pub fn contains(&self, u: usize, v: usize) -> bool {
        self.indices.contains_key(&EdgeKey::new(u, v))
    }

    /// Records the crossing of edge `u`-`v` and returns its index.
    ///
    /// The edge must not already be present; check with
    /// [`contains`](Self::contains) first.
    pub fn add(&mut self, u: usize, v: usize, point: Point3) -> usize {
        let key = EdgeKey::new(u, v);
        debug_assert!(
            !self.indices.contains_key(&key),
            "edge {key:?} added twice"
        );
        let idx = self.points.len();
        self.points.push(point);
        self.indices.insert(key, idx);
        idx
    }

    /// Returns the crossing index of edge `u`-`v`, if it crosses.
    #[must_use]
    pub fn index(&self, u: usize, v: usize) -> Option<usize> {
        self.indices.get(&EdgeKey::new(u, v)).copied()
    }

    /// Crossing points, addressed by crossing index.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Number of distinct crossing edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no edge crosses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Plane;
    use crate::mesh::fixtures;
    use crate::operations::section::face_filter::face_mask;
    use approx::assert_abs_diff_eq;

    #[test]
    fn key_is_symmetric() {
        assert_eq!(EdgeKey::new(7, 3), EdgeKey::new(3, 7));
        assert_eq!(EdgeKey::new(7, 3).low(), 3);
        assert_eq!(EdgeKey::new(7, 3).high(), 7);
    }

    #[test]
    fn lookup_in_either_orientation() {
        let mut index = EdgeIntersectionIndex::new();
        assert!(index.is_empty());
        let first = index.add(4, 2, Point3::new(1.0, 0.0, 0.0));
        let second = index.add(0, 9, Point3::new(2.0, 0.0, 0.0));
        assert_eq!((first, second), (0, 1));
        assert!(index.contains(2, 4));
        assert!(index.contains(4, 2));
        assert_eq!(index.index(2, 4), Some(0));
        assert_eq!(index.index(9, 0), Some(1));
        assert_eq!(index.index(0, 4), None);
        assert_eq!(index.points()[1], Point3::new(2.0, 0.0, 0.0));
        assert_eq!(index.len(), 2);
    }

    #[test]
    #[should_panic(expected = "added twice")]
    #[cfg(debug_assertions)]
    fn duplicate_add_is_caught() {
        let mut index = EdgeIntersectionIndex::new();
        index.add(1, 2, Point3::origin());
        index.add(2, 1, Point3::origin());
    }

    #[test]
    fn shared_edges_are_stored_once() {
        let vertices = fixtures::box_vertices();
        let faces: Vec<[usize; 3]> = fixtures::box_faces()
            .into_iter()
            .zip(face_mask(&vertices, &fixtures::box_faces(), &Plane::xz()))
            .filter_map(|(f, crossed)| crossed.then_some(f))
            .collect();
        let index = EdgeIntersectionIndex::from_faces(&vertices, &faces, &Plane::xz());
        // Four vertical edges plus one diagonal per side.
        assert_eq!(index.len(), 8);
        for point in index.points() {
            assert_abs_diff_eq!(point.y, 0.0);
        }
    }

    #[test]
    fn numbering_follows_first_seen_order() {
        let vertices = vec![
            Point3::new(0.0, -1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 1.0),
        ];
        let index = EdgeIntersectionIndex::from_faces(&vertices, &[[0, 1, 2]], &Plane::xz());
        // (0, 1) is visited before (2, 0); (1, 2) does not cross.
        assert_eq!(index.index(0, 1), Some(0));
        assert_eq!(index.index(0, 2), Some(1));
        assert_eq!(index.index(1, 2), None);
    }
}
