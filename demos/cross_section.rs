//! Slices two unit cubes with the XZ plane and prints what comes out.
//!
//! ```text
//! cargo run --example cross_section
//! RUST_LOG=hobart=trace cargo run --example cross_section
//! ```

use hobart::geometry::Plane;
use hobart::math::{Point3, Vector3};
use hobart::mesh::TriMesh;
use hobart::operations::section::{CrossSection, OutputMode, SectionResult};

const CUBE_FACES: [[usize; 3]; 12] = [
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
];

fn cube(center: Vector3) -> Vec<Point3> {
    (0..8u8)
        .map(|i| {
            let x = if i & 1 == 0 { 0.5 } else { -0.5 };
            let y = if i & 2 == 0 { 0.5 } else { -0.5 };
            let z = if i & 4 == 0 { 0.5 } else { -0.5 };
            Point3::new(x, y, z) + center
        })
        .collect()
}

fn two_cubes() -> hobart::Result<TriMesh> {
    let mut vertices = cube(Vector3::zeros());
    vertices.extend(cube(Vector3::new(2.0, 0.0, 0.0)));
    let faces = CUBE_FACES
        .iter()
        .copied()
        .chain(CUBE_FACES.iter().map(|f| [f[0] + 8, f[1] + 8, f[2] + 8]))
        .collect();
    TriMesh::new(vertices, faces)
}

fn main() -> hobart::Result<()> {
    // Default: WARN for everything, INFO for hobart.
    // Override with RUST_LOG (e.g. RUST_LOG=hobart=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("hobart=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mesh = two_cubes()?;
    let plane = Plane::xz();

    if let SectionResult::Components(polylines) = CrossSection::new(&plane).execute(&mesh)? {
        for (i, polyline) in polylines.iter().enumerate() {
            println!(
                "component {i}: {} vertices, closed = {}, length = {:.3}",
                polyline.num_vertices(),
                polyline.closed,
                polyline.total_length()
            );
        }
    }

    let neighborhood = [Point3::new(2.0, 0.0, 0.0)];
    let selected = CrossSection::new(&plane)
        .with_neighborhood(&neighborhood)
        .execute(&mesh)?;
    if let Some(polyline) = selected.into_polyline() {
        println!("nearest to {:?}:", neighborhood[0]);
        for p in &polyline.points {
            println!("  ({:+.2}, {:+.2}, {:+.2})", p.x, p.y, p.z);
        }
    }

    let cloud = CrossSection::new(&plane)
        .with_output(OutputMode::PointCloud)
        .execute(&mesh)?
        .into_point_cloud();
    println!("point cloud: {} points", cloud.len());

    Ok(())
}
