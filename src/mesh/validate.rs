//! Boundary checks for caller-supplied mesh arrays.

use crate::error::ValidationError;
use crate::math::Point3;

/// Checks that every index in `faces` is less than `num_vertices`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidIndex`] naming the first offending index.
pub fn check_indices(
    faces: &[[usize; 3]],
    num_vertices: usize,
    name: &'static str,
) -> Result<(), ValidationError> {
    match faces.iter().flatten().find(|&&i| i >= num_vertices) {
        Some(&index) => Err(ValidationError::InvalidIndex {
            name,
            index,
            bound: num_vertices,
        }),
        None => Ok(()),
    }
}

/// Reinterprets a flat `[x0, y0, z0, x1, ...]` array as points.
///
/// # Errors
///
/// Returns [`ValidationError::ShapeMismatch`] if the length is not a multiple of 3.
pub fn points_from_flat(
    name: &'static str,
    coords: &[f64],
) -> Result<Vec<Point3>, ValidationError> {
    check_width(name, coords.len(), 3)?;
    Ok(coords
        .chunks_exact(3)
        .map(|c| Point3::new(c[0], c[1], c[2]))
        .collect())
}

/// Reinterprets a flat index array as triangles.
///
/// # Errors
///
/// Returns [`ValidationError::ShapeMismatch`] if the length is not a multiple of 3.
pub fn faces_from_flat(
    name: &'static str,
    indices: &[usize],
) -> Result<Vec<[usize; 3]>, ValidationError> {
    check_width(name, indices.len(), 3)?;
    Ok(indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect())
}

/// Rejects an empty point set.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyPointSet`] if `points` is empty.
pub fn check_non_empty(name: &'static str, points: &[Point3]) -> Result<(), ValidationError> {
    if points.is_empty() {
        return Err(ValidationError::EmptyPointSet { name });
    }
    Ok(())
}

fn check_width(name: &'static str, len: usize, width: usize) -> Result<(), ValidationError> {
    if len % width != 0 {
        return Err(ValidationError::ShapeMismatch { name, width, len });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn indices_in_range_pass() {
        assert!(check_indices(&[[0, 1, 2], [2, 1, 0]], 3, "faces").is_ok());
    }

    #[test]
    fn index_equal_to_count_fails() {
        let err = check_indices(&[[0, 1, 2], [1, 3, 2]], 3, "faces").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidIndex {
                name: "faces",
                index: 3,
                bound: 3,
            }
        );
        assert_eq!(
            err.to_string(),
            "expected indices in faces to be less than 3, found 3"
        );
    }

    #[test]
    fn empty_faces_pass() {
        assert!(check_indices(&[], 0, "faces").is_ok());
    }

    #[test]
    fn flat_points() {
        let pts = points_from_flat("vertices", &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(pts, vec![Point3::new(0.0, 1.0, 2.0), Point3::new(3.0, 4.0, 5.0)]);
    }

    #[test]
    fn flat_points_wrong_shape() {
        let err = points_from_flat("vertices", &[0.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ShapeMismatch {
                name: "vertices",
                width: 3,
                len: 2,
            }
        );
    }

    #[test]
    fn flat_faces() {
        let faces = faces_from_flat("faces", &[0, 1, 2, 2, 3, 0]).unwrap();
        assert_eq!(faces, vec![[0, 1, 2], [2, 3, 0]]);
        assert!(faces_from_flat("faces", &[0, 1, 2, 3]).is_err());
    }

    #[test]
    fn empty_neighborhood_rejected() {
        assert_eq!(
            check_non_empty("neighborhood", &[]),
            Err(ValidationError::EmptyPointSet {
                name: "neighborhood"
            })
        );
        assert!(check_non_empty("neighborhood", &[Point3::origin()]).is_ok());
    }
}
