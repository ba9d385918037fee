//! The level-composing subdivision driver.

use quad_types::QuadFace;
use tracing::debug;

use crate::error::{SubdivideError, SubdivideResult};
use crate::half_edge::HalfEdgeMesh;
use crate::params::SubdivideParams;

/// Subdivide a closed quad mesh.
///
/// Applies `params.levels` rounds of Catmull-Clark refinement; each round
/// builds a fresh half-edge structure, runs the edge-midpoint, vertex-update
/// and face-emission passes in order, and discards the structure. Zero
/// levels return the input unchanged. The output holds `4^levels` times the
/// input face count, in an order stable across runs.
///
/// # Errors
///
/// Returns an error if:
/// - The face list is empty
/// - The projected face count exceeds `params.max_faces`
/// - The mesh has an open boundary or non-manifold edge, at whichever level
///   first exposes it (a mesh reduced too far by earlier levels fails the
///   same way)
///
/// # Examples
///
/// ```
/// use quad_types::unit_cube;
/// use quad_subdivide::{subdivide_faces, SubdivideParams};
///
/// let refined = subdivide_faces(&unit_cube(), &SubdivideParams::new())?;
/// assert_eq!(refined.len(), 24);
/// # Ok::<(), quad_subdivide::SubdivideError>(())
/// ```
pub fn subdivide_faces(
    faces: &[QuadFace],
    params: &SubdivideParams,
) -> SubdivideResult<Vec<QuadFace>> {
    if faces.is_empty() {
        return Err(SubdivideError::EmptyMesh);
    }

    let projected = params.expected_faces(faces.len());
    if projected > params.max_faces {
        return Err(SubdivideError::MeshTooLarge {
            current: faces.len(),
            projected,
            max: params.max_faces,
        });
    }

    debug!(
        "Subdividing quad mesh: {} faces, {} levels",
        faces.len(),
        params.levels
    );

    let mut current = faces.to_vec();
    for level in 0..params.levels {
        current = subdivide_once(&current, level)?;
        debug!("Level {}: {} faces", level + 1, current.len());
    }

    Ok(current)
}

/// One full level: adjacency, then the three barrier-separated passes.
fn subdivide_once(faces: &[QuadFace], level: u32) -> SubdivideResult<Vec<QuadFace>> {
    let mesh = HalfEdgeMesh::build(faces);
    debug!("Built adjacency for level {}: {} half-edges", level, mesh.edge_count());
    let midpoints = mesh.edge_midpoints(level)?;
    let positions = mesh.relaxed_positions(&midpoints, level)?;
    Ok(mesh.emit_faces(&midpoints, &positions))
}
