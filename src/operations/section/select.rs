use rstar::{PointDistance, RTree};
use tracing::trace;

use crate::error::{Result, SectionError};
use crate::math::Point3;
use crate::mesh::validate;

/// Picks the component lying closest to a set of reference points.
///
/// Every component point is matched to its nearest reference point; the
/// component with the smallest mean distance wins, ties going to the earlier
/// component. A lone component is returned without any distance queries.
///
/// # Errors
///
/// Returns an error if `neighborhood` is empty or there are no components.
pub fn closest_component<C: AsRef<[Point3]>>(
    components: &[C],
    neighborhood: &[Point3],
) -> Result<usize> {
    validate::check_non_empty("neighborhood", neighborhood)?;
    match components.len() {
        0 => return Err(SectionError::NoComponents.into()),
        1 => return Ok(0),
        _ => {}
    }

    let tree = RTree::bulk_load(neighborhood.iter().map(to_array).collect());
    let mut best = 0;
    let mut best_mean = f64::INFINITY;
    for (i, component) in components.iter().enumerate() {
        let mean = mean_nearest_distance(&tree, component.as_ref());
        trace!(component = i, mean, "neighborhood distance");
        if mean < best_mean {
            best = i;
            best_mean = mean;
        }
    }
    Ok(best)
}

#[allow(clippy::cast_precision_loss)]
fn mean_nearest_distance(tree: &RTree<[f64; 3]>, points: &[Point3]) -> f64 {
    if points.is_empty() {
        return f64::INFINITY;
    }
    let total: f64 = points
        .iter()
        .map(|p| {
            let query = to_array(p);
            tree.nearest_neighbor(&query)
                .map_or(f64::INFINITY, |n| n.distance_2(&query).sqrt())
        })
        .sum();
    total / points.len() as f64
}

fn to_array(p: &Point3) -> [f64; 3] {
    [p.x, p.y, p.z]
}
