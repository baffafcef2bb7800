//! Planar cross-sections of triangle meshes.
//!
//! ```
//! use hobart::geometry::Plane;
//! use hobart::math::{Point3, Vector3};
//! use hobart::operations::section::{compute_cross_section, OutputMode};
//!
//! // A tetrahedron standing on the XZ plane, cut halfway up.
//! let vertices = [
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(2.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 2.0),
//!     Point3::new(0.5, 2.0, 0.5),
//! ];
//! let faces = [[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
//! let plane = Plane::from_normal(Point3::new(0.0, 1.0, 0.0), Vector3::y())?;
//!
//! let result = compute_cross_section(&vertices, &faces, &plane, None, OutputMode::Polylines)?;
//! let polylines = result.into_polylines().unwrap_or_default();
//! assert_eq!(polylines.len(), 1);
//! assert!(polylines[0].closed);
//! assert_eq!(polylines[0].num_vertices(), 3);
//! # Ok::<(), hobart::HobartError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod mesh;
pub mod operations;

pub use error::{HobartError, Result};
