use thiserror::Error;

/// Top-level error type for hobart.
#[derive(Debug, Error)]
pub enum HobartError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Section(#[from] SectionError),
}

/// Errors raised while checking caller-supplied arrays.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("expected indices in {name} to be less than {bound}, found {index}")]
    InvalidIndex {
        name: &'static str,
        index: usize,
        bound: usize,
    },

    #[error("expected {name} to hold {width}-tuples, got {len} values")]
    ShapeMismatch {
        name: &'static str,
        width: usize,
        len: usize,
    },

    #[error("{name} must contain at least one point")]
    EmptyPointSet { name: &'static str },
}

/// Errors related to geometric primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised while extracting cross-section curves.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SectionError {
    #[error(
        "mesh slice has {odd_vertices} odd-degree vertices in one component; \
         can't find a path along the edges"
    )]
    EulerTrailNotFound { odd_vertices: usize },

    #[error("face {face} crosses the plane along {crossings} edges, expected 2")]
    DegenerateFace { face: usize, crossings: usize },

    #[error("vertex {vertex} is out of range for a graph of {size} vertices")]
    VertexOutOfRange { vertex: usize, size: usize },

    #[error("crossing graph has no edges left")]
    EmptyGraph,

    #[error("no components to select from")]
    NoComponents,
}

/// Convenience type alias for results using [`HobartError`].
pub type Result<T> = std::result::Result<T, HobartError>;
