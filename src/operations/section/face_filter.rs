use crate::error::Result;
use crate::geometry::CuttingPlane;
use crate::math::{sign, Point3};
use crate::mesh::{validate, TriMesh};

/// Determines which faces of a mesh are crossed by a plane.
///
/// A face is left out only when all three of its vertices lie strictly on the
/// same side. Faces touching the plane at a vertex count as crossed.
pub struct FacesIntersectingPlane<'a, P: CuttingPlane + ?Sized> {
    plane: &'a P,
}

impl<'a, P: CuttingPlane + ?Sized> FacesIntersectingPlane<'a, P> {
    /// Creates a new `FacesIntersectingPlane` query.
    #[must_use]
    pub fn new(plane: &'a P) -> Self {
        Self { plane }
    }

    /// Executes the query, returning one flag per face of `mesh`.
    #[must_use]
    pub fn execute(&self, mesh: &TriMesh) -> Vec<bool> {
        face_mask(mesh.vertices(), mesh.faces(), self.plane)
    }
}

/// Computes a crossed-face mask for raw vertex and face arrays.
///
/// # Errors
///
/// Returns an error if a face references a vertex outside `vertices`.
pub fn compute_face_mask<P: CuttingPlane + ?Sized>(
    vertices: &[Point3],
    faces: &[[usize; 3]],
    plane: &P,
) -> Result<Vec<bool>> {
    validate::check_indices(faces, vertices.len(), "faces")?;
    Ok(face_mask(vertices, faces, plane))
}

/// Face indices must already be validated.
pub(crate) fn face_mask<P: CuttingPlane + ?Sized>(
    vertices: &[Point3],
    faces: &[[usize; 3]],
    plane: &P,
) -> Vec<bool> {
    let signs: Vec<i32> = plane
        .signed_distances(vertices)
        .into_iter()
        .map(sign)
        .collect();

    faces
        .iter()
        .map(|face| face.iter().map(|&i| signs[i]).sum::<i32>().abs() != 3)
        .collect()
}
