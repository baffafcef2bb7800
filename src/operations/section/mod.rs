//! Plane/mesh cross-sections.
//!
//! The pipeline filters the faces crossed by the plane, computes one crossing
//! point per crossed edge, links the two crossings of every face into a graph
//! and walks that graph one Euler trail per connected component.

mod cross_section;
mod edge_index;
mod face_filter;
mod graph;
mod select;

pub use cross_section::{compute_cross_section, CrossSection, OutputMode, SectionResult};
pub use edge_index::{EdgeIntersectionIndex, EdgeKey};
pub use face_filter::{compute_face_mask, FacesIntersectingPlane};
pub use graph::CrossingGraph;
pub use select::closest_component;
