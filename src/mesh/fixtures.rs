//! Small meshes shared by the unit tests.

use crate::math::{Point3, Vector3};

/// Corners of an axis-aligned unit cube centred on the origin.
pub(crate) fn box_vertices() -> Vec<Point3> {
    let xs = [0.5, -0.5, 0.5, -0.5, 0.5, -0.5, 0.5, -0.5];
    let ys = [0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, -0.5];
    let zs = [0.5, 0.5, 0.5, 0.5, -0.5, -0.5, -0.5, -0.5];
    (0..8).map(|i| Point3::new(xs[i], ys[i], zs[i])).collect()
}

/// Two triangles per cube side.
pub(crate) fn box_faces() -> Vec<[usize; 3]> {
    vec![
        [0, 1, 2],
        [3, 2, 1],
        [0, 2, 4],
        [6, 4, 2],
        [0, 4, 1],
        [5, 1, 4],
        [7, 5, 6],
        [4, 6, 5],
        [7, 6, 3],
        [2, 3, 6],
        [7, 3, 5],
        [1, 5, 3],
    ]
}

/// The cube without its `x = -0.5` side.
pub(crate) fn open_box_faces() -> Vec<[usize; 3]> {
    let vertices = box_vertices();
    box_faces()
        .into_iter()
        .filter(|face| !face.iter().all(|&i| vertices[i].x < 0.0))
        .collect()
}

/// Two copies of the cube vertices, the second shifted by `+2` along X.
pub(crate) fn double_box_vertices() -> Vec<Point3> {
    let shift = Vector3::new(2.0, 0.0, 0.0);
    let single = box_vertices();
    let shifted: Vec<Point3> = single.iter().map(|p| p + shift).collect();
    single.into_iter().chain(shifted).collect()
}

/// Duplicates `faces` for the second cube of [`double_box_vertices`].
pub(crate) fn doubled(faces: &[[usize; 3]]) -> Vec<[usize; 3]> {
    let offset = box_vertices().len();
    faces
        .iter()
        .copied()
        .chain(faces.iter().map(|f| [f[0] + offset, f[1] + offset, f[2] + offset]))
        .collect()
}
