pub mod validate;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::error::Result;
use crate::math::Point3;

/// An indexed triangle mesh whose face indices are known to be in range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriMesh {
    vertices: Vec<Point3>,
    faces: Vec<[usize; 3]>,
}

impl TriMesh {
    /// Creates a mesh after checking every face index against the vertex count.
    ///
    /// # Errors
    ///
    /// Returns an error if any face references a vertex that does not exist.
    pub fn new(vertices: Vec<Point3>, faces: Vec<[usize; 3]>) -> Result<Self> {
        validate::check_indices(&faces, vertices.len(), "faces")?;
        Ok(Self { vertices, faces })
    }

    /// Creates a mesh from flat coordinate and index arrays.
    ///
    /// # Errors
    ///
    /// Returns an error if either array is not a whole number of triples, or
    /// if a face index is out of range.
    pub fn from_flat(coords: &[f64], indices: &[usize]) -> Result<Self> {
        let vertices = validate::points_from_flat("vertices", coords)?;
        let faces = validate::faces_from_flat("faces", indices)?;
        Self::new(vertices, faces)
    }

    /// Vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Triangle vertex indices.
    #[must_use]
    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Consumes the mesh, returning its vertex and face arrays.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Point3>, Vec<[usize; 3]>) {
        (self.vertices, self.faces)
    }
}
