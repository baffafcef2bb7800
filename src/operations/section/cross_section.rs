use tracing::{debug, trace};

use crate::error::{Result, SectionError};
use crate::geometry::{CuttingPlane, Polyline};
use crate::math::Point3;
use crate::mesh::{validate, TriMesh};

use super::edge_index::EdgeIntersectionIndex;
use super::face_filter::face_mask;
use super::graph::CrossingGraph;
use super::select::closest_component;

/// How cross-section curves are returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Ordered polylines, one per component.
    #[default]
    Polylines,
    /// Unstructured points with no ordering or closure information.
    PointCloud,
}

/// Outcome of a cross-section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionResult {
    /// The plane crosses no face.
    NoIntersection,
    /// Every component, in extraction order.
    Components(Vec<Polyline>),
    /// Points of every component (or of the selected one), concatenated.
    PointCloud(Vec<Point3>),
    /// The component selected by the neighborhood.
    SingleComponent(Polyline),
}

impl SectionResult {
    /// Returns `true` if the plane missed the mesh.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoIntersection)
    }

    /// Returns the result as a list of polylines.
    ///
    /// A miss gives an empty list. `None` for point-cloud results, which carry
    /// no ordering.
    #[must_use]
    pub fn into_polylines(self) -> Option<Vec<Polyline>> {
        match self {
            Self::NoIntersection => Some(Vec::new()),
            Self::Components(polylines) => Some(polylines),
            Self::SingleComponent(polyline) => Some(vec![polyline]),
            Self::PointCloud(_) => None,
        }
    }

    /// Returns the selected polyline, or `None` if there is no single one.
    #[must_use]
    pub fn into_polyline(self) -> Option<Polyline> {
        match self {
            Self::SingleComponent(polyline) => Some(polyline),
            _ => None,
        }
    }

    /// Flattens the result into points. A miss gives an empty array.
    #[must_use]
    pub fn into_point_cloud(self) -> Vec<Point3> {
        match self {
            Self::NoIntersection => Vec::new(),
            Self::Components(polylines) => polylines.into_iter().flat_map(|p| p.points).collect(),
            Self::PointCloud(points) => points,
            Self::SingleComponent(polyline) => polyline.points,
        }
    }
}

/// Cuts a triangle mesh with a plane.
///
/// When the plane may cut the mesh in several places, a neighborhood picks the
/// component of interest: the one whose points are, on average, closest to it.
///
/// Faces with a vertex exactly on the plane are not supported and make the
/// operation fail with [`SectionError::DegenerateFace`].
pub struct CrossSection<'a, P: CuttingPlane + ?Sized> {
    plane: &'a P,
    neighborhood: Option<&'a [Point3]>,
    output: OutputMode,
}

impl<'a, P: CuttingPlane + ?Sized> CrossSection<'a, P> {
    /// Creates a new `CrossSection` operation returning every component as a polyline.
    #[must_use]
    pub fn new(plane: &'a P) -> Self {
        Self {
            plane,
            neighborhood: None,
            output: OutputMode::default(),
        }
    }

    /// Selects a single component using the given reference points.
    #[must_use]
    pub fn with_neighborhood(mut self, neighborhood: &'a [Point3]) -> Self {
        self.neighborhood = Some(neighborhood);
        self
    }

    /// Sets the output mode.
    #[must_use]
    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the neighborhood is empty, if a crossed face is
    /// degenerate, or if the crossing graph cannot be split into Euler trails.
    pub fn execute(&self, mesh: &TriMesh) -> Result<SectionResult> {
        self.run(mesh.vertices(), mesh.faces())
    }

    /// Face indices must already be validated.
    fn run(&self, vertices: &[Point3], faces: &[[usize; 3]]) -> Result<SectionResult> {
        if let Some(neighborhood) = self.neighborhood {
            validate::check_non_empty("neighborhood", neighborhood)?;
        }

        let mask = face_mask(vertices, faces, self.plane);
        let crossed_ids: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter_map(|(i, &crossed)| crossed.then_some(i))
            .collect();
        debug!(
            faces = faces.len(),
            crossed = crossed_ids.len(),
            "filtered faces against plane"
        );
        if crossed_ids.is_empty() {
            return Ok(SectionResult::NoIntersection);
        }

        let crossed: Vec<[usize; 3]> = crossed_ids.iter().map(|&i| faces[i]).collect();
        let index = EdgeIntersectionIndex::from_faces(vertices, &crossed, self.plane);
        debug!(crossings = index.len(), "computed edge crossings");

        let graph = build_graph(&index, &crossed, &crossed_ids)?;
        let components = extract_components(graph, index.points())?;
        debug!(components = components.len(), "extracted components");

        self.assemble(components)
    }

    fn assemble(&self, components: Vec<Polyline>) -> Result<SectionResult> {
        let Some(neighborhood) = self.neighborhood else {
            return Ok(match self.output {
                OutputMode::Polylines => SectionResult::Components(components),
                OutputMode::PointCloud => SectionResult::PointCloud(
                    components.into_iter().flat_map(|c| c.points).collect(),
                ),
            });
        };

        let selected = closest_component(&components, neighborhood)?;
        debug!(selected, of = components.len(), "selected component");
        let chosen = components
            .into_iter()
            .nth(selected)
            .ok_or(SectionError::NoComponents)?;
        Ok(match self.output {
            OutputMode::Polylines => SectionResult::SingleComponent(chosen),
            OutputMode::PointCloud => SectionResult::PointCloud(chosen.points),
        })
    }
}

/// Computes the cross-section of raw vertex and face arrays.
///
/// # Errors
///
/// Returns an error if a face index is out of range, plus everything
/// [`CrossSection::execute`] can return.
pub fn compute_cross_section<P: CuttingPlane + ?Sized>(
    vertices: &[Point3],
    faces: &[[usize; 3]],
    plane: &P,
    neighborhood: Option<&[Point3]>,
    output: OutputMode,
) -> Result<SectionResult> {
    validate::check_indices(faces, vertices.len(), "faces")?;
    let mut op = CrossSection::new(plane).with_output(output);
    if let Some(neighborhood) = neighborhood {
        op = op.with_neighborhood(neighborhood);
    }
    op.run(vertices, faces)
}

/// Joins the two crossings of every crossed face.
fn build_graph(
    index: &EdgeIntersectionIndex,
    faces: &[[usize; 3]],
    face_ids: &[usize],
) -> std::result::Result<CrossingGraph, SectionError> {
    let mut graph = CrossingGraph::new(index.len());
    for (f, &face) in faces.iter().zip(face_ids) {
        let crossings: Vec<usize> = [(f[0], f[1]), (f[0], f[2]), (f[1], f[2])]
            .into_iter()
            .filter_map(|(u, v)| index.index(u, v))
            .collect();
        match crossings[..] {
            [a, b] => graph.add_edge(a, b)?,
            _ => {
                return Err(SectionError::DegenerateFace {
                    face,
                    crossings: crossings.len(),
                })
            }
        }
    }
    Ok(graph)
}

/// Drains `graph` one trail at a time.
fn extract_components(
    mut graph: CrossingGraph,
    points: &[Point3],
) -> std::result::Result<Vec<Polyline>, SectionError> {
    let mut components = Vec::new();
    while !graph.is_empty() {
        let mut path = graph.pop_euler_path()?;
        let closed = path.len() > 1 && path.first() == path.last();
        if closed {
            path.pop();
        }
        trace!(vertices = path.len(), closed, "extracted trail");
        components.push(Polyline::new(
            path.into_iter().map(|i| points[i]).collect(),
            closed,
        ));
    }
    Ok(components)
}
