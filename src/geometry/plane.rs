use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A surface that can cut a mesh.
///
/// Implementors only need to provide [`signed_distance`](Self::signed_distance);
/// the batched and segment queries are derived from it.
pub trait CuttingPlane {
    /// Signed distance from `point` to the plane, positive on the normal side.
    fn signed_distance(&self, point: &Point3) -> f64;

    /// Signed distance for every point, in order.
    fn signed_distances(&self, points: &[Point3]) -> Vec<f64> {
        points.iter().map(|p| self.signed_distance(p)).collect()
    }

    /// Returns the point where segment `a`-`b` crosses the plane.
    ///
    /// A crossing is only reported when the endpoints lie strictly on
    /// opposite sides, so the point is always strictly inside the segment.
    /// Segments touching the plane at an endpoint or lying in it yield `None`.
    fn segment_intersection(&self, a: &Point3, b: &Point3) -> Option<Point3> {
        let da = self.signed_distance(a);
        let db = self.signed_distance(b);
        if da * db >= 0.0 {
            return None;
        }
        let t = da / (da - db);
        Some(a + (b - a) * t)
    }

    /// Pairwise [`segment_intersection`](Self::segment_intersection) over two
    /// batches of endpoints. Extra entries in the longer batch are ignored.
    fn segment_intersections(&self, starts: &[Point3], ends: &[Point3]) -> Vec<Option<Point3>> {
        starts
            .iter()
            .zip(ends)
            .map(|(a, b)| self.segment_intersection(a, b))
            .collect()
    }
}

/// An infinite plane in 3D space, defined by a point on it and a unit normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    origin: Point3,
    normal: Vector3,
}

impl Plane {
    /// Creates a plane through `origin` with the given normal.
    ///
    /// The normal is normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_normal(origin: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            normal: normal / len,
        })
    }

    /// Creates the plane through three points.
    ///
    /// The normal follows the right-hand rule for `a -> b -> c`.
    ///
    /// # Errors
    ///
    /// Returns an error if the points are collinear or coincident.
    pub fn from_points(a: &Point3, b: &Point3, c: &Point3) -> Result<Self> {
        let normal = (b - a).cross(&(c - a));
        if normal.norm() < TOLERANCE {
            return Err(GeometryError::Degenerate("plane points are collinear".into()).into());
        }
        Self::from_normal(*a, normal)
    }

    /// The XY plane through the origin, normal `+Z`.
    #[must_use]
    pub fn xy() -> Self {
        Self::axis_aligned(Vector3::z())
    }

    /// The XZ plane through the origin, normal `+Y`.
    #[must_use]
    pub fn xz() -> Self {
        Self::axis_aligned(Vector3::y())
    }

    /// The YZ plane through the origin, normal `+X`.
    #[must_use]
    pub fn yz() -> Self {
        Self::axis_aligned(Vector3::x())
    }

    fn axis_aligned(normal: Vector3) -> Self {
        Self {
            origin: Point3::origin(),
            normal,
        }
    }

    /// Returns the reference point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// The `d` in `normal · p = d`.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.normal.dot(&self.origin.coords)
    }

    /// Returns the same plane with the normal reversed.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            origin: self.origin,
            normal: -self.normal,
        }
    }

    /// Orthogonal projection of `point` onto the plane.
    #[must_use]
    pub fn project_point(&self, point: &Point3) -> Point3 {
        point - self.normal * self.signed_distance(point)
    }
}

impl CuttingPlane for Plane {
    fn signed_distance(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(&self.normal)
    }
}
