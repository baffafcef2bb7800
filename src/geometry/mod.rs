pub mod plane;
pub mod polyline;

pub use plane::{CuttingPlane, Plane};
pub use polyline::Polyline;
