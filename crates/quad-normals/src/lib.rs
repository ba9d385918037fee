//! Per-vertex smoothed normals for quad face lists.
//!
//! For each face the unit planar normal is accumulated onto each of its
//! four vertices; each vertex's sum is then divided by its incidence count
//! and re-normalized. Vertices are identified by exact component value, the
//! same policy the subdivision kernel uses for adjacency.
//!
//! This consumes a final face list only; it has no dependency on the
//! subdivision internals and can run on any closed or open quad soup.
//!
//! # Example
//!
//! ```
//! use quad_normals::vertex_normals;
//! use quad_types::unit_cube;
//!
//! let normals = vertex_normals(&unit_cube());
//!
//! // Eight cube corners, each touching three mutually orthogonal faces
//! assert_eq!(normals.len(), 8);
//! for normal in normals.values() {
//!     assert!((normal.norm() - 1.0).abs() < 1e-12);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use hashbrown::HashMap;
use nalgebra::Vector3;
use quad_types::{Point, QuadFace};

/// Mapping from vertex value to unit normal.
pub type NormalMap = HashMap<Point, Vector3<f64>>;

/// Compute smoothed per-vertex normals for a face list.
///
/// Every vector in the returned map has unit length. Degenerate faces
/// (no planar normal) contribute nothing, and a vertex whose accumulated
/// normals cancel exactly is omitted rather than stored as NaN.
#[must_use]
pub fn vertex_normals(faces: &[QuadFace]) -> NormalMap {
    let mut sums: HashMap<Point, (Vector3<f64>, u32)> = HashMap::new();

    for face in faces {
        let Some(normal) = face.normal() else {
            continue;
        };
        for &vertex in face.vertices() {
            let entry = sums.entry(vertex).or_insert((Vector3::zeros(), 0));
            entry.0 += normal;
            entry.1 += 1;
        }
    }

    sums.into_iter()
        .filter_map(|(vertex, (sum, count))| {
            let mean = sum / f64::from(count);
            mean.try_normalize(1e-12).map(|unit| (vertex, unit))
        })
        .collect()
}
