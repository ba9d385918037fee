//! Half-edge adjacency over one subdivision level.
//!
//! Half-edges live in a flat arena indexed by `usize`; `opposite` and
//! `next` are indices into it instead of shared references. The arena is
//! filled in input-face order and every pass iterates it in index order, so
//! output face order is stable run-to-run.
//!
//! The three passes are separate methods returning fresh per-edge vectors
//! rather than mutating edge state, which makes the required ordering
//! (midpoints before relaxation before emission) explicit at the call site:
//! each pass takes the previous pass's output by reference.

// The vertex rule divides by a small valence count
#![allow(clippy::cast_precision_loss)]

use hashbrown::HashMap;
use quad_types::{Point, QuadFace};

use crate::error::{SubdivideError, SubdivideResult};

/// One directed edge within one face.
#[derive(Debug)]
struct HalfEdge {
    /// Vertex this half-edge terminates at. Each half-edge owns its copy;
    /// coincident corners from other faces are separate values that happen
    /// to compare equal.
    end: Point,

    /// Centroid of the owning face, shared by value among its four edges.
    face_point: Point,

    /// Same undirected edge, traversed by the neighboring face. `None`
    /// until paired; still `None` after construction means the mesh has an
    /// open boundary or unmatched non-manifold edge there.
    opposite: Option<usize>,

    /// Following half-edge around the same face (a 4-cycle).
    next: usize,
}

/// The half-edge arena for one subdivision level.
#[derive(Debug)]
pub(crate) struct HalfEdgeMesh {
    edges: Vec<HalfEdge>,
}

impl HalfEdgeMesh {
    /// Build the adjacency structure from a face list.
    ///
    /// For each face edge `v[i] -> v[i+1]` a half-edge is created and, if
    /// the reverse traversal already exists in the start-vertex map, the
    /// two are paired as mutual opposites. The first unpaired candidate
    /// wins; any further faces sharing the same undirected edge stay
    /// unpaired and surface as [`SubdivideError::OpenEdge`] in the
    /// midpoint pass. The map itself is dropped when construction ends.
    pub(crate) fn build(faces: &[QuadFace]) -> Self {
        let mut edges: Vec<HalfEdge> = Vec::with_capacity(faces.len() * 4);
        let mut by_start: HashMap<Point, Vec<usize>> = HashMap::with_capacity(faces.len() * 4);

        for face in faces {
            let base = edges.len();
            let verts = face.vertices();

            for (i, &start) in verts.iter().enumerate() {
                let end = verts[(i + 1) % 4];
                let index = base + i;
                let mut edge = HalfEdge {
                    end,
                    face_point: face.centroid(),
                    opposite: None,
                    next: base + (i + 1) % 4,
                };

                // The opposite, if already built, starts at our end vertex
                // and ends at our start vertex.
                if let Some(candidates) = by_start.get(&end) {
                    for &candidate in candidates {
                        if edges[candidate].end == start && edges[candidate].opposite.is_none() {
                            edges[candidate].opposite = Some(index);
                            edge.opposite = Some(candidate);
                            break;
                        }
                    }
                }

                edges.push(edge);
                by_start.entry(start).or_default().push(index);
            }
        }

        Self { edges }
    }

    /// Number of half-edges (4x the face count).
    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edge-midpoint pass: `(e1 + e2 + f1 + f2) / 4` for every half-edge.
    ///
    /// Returns one midpoint per half-edge, indexed like the arena. An edge
    /// and its opposite compute the identical value because the formula is
    /// symmetric in the pair.
    pub(crate) fn edge_midpoints(&self, level: u32) -> SubdivideResult<Vec<Point>> {
        self.edges
            .iter()
            .map(|edge| {
                let opposite = edge
                    .opposite
                    .map(|i| &self.edges[i])
                    .ok_or(SubdivideError::OpenEdge { level })?;
                Ok((edge.end + opposite.end + edge.face_point + opposite.face_point) / 4.0)
            })
            .collect()
    }

    /// Vertex-update pass: relax every half-edge's end vertex.
    ///
    /// Walks the umbrella of faces around the end vertex via
    /// `next.opposite`, counting valence `n` and averaging the edge
    /// midpoints and face points met on the way, then applies
    /// `((n - 3) * old + 2 * E + F) / n`.
    ///
    /// Every face-corner copy of one conceptual vertex walks the identical
    /// cycle, so all copies converge to the same position without any
    /// deduplication.
    pub(crate) fn relaxed_positions(
        &self,
        midpoints: &[Point],
        level: u32,
    ) -> SubdivideResult<Vec<Point>> {
        (0..self.edges.len())
            .map(|start| self.relax_end_vertex(start, midpoints, level))
            .collect()
    }

    fn relax_end_vertex(
        &self,
        start: usize,
        midpoints: &[Point],
        level: u32,
    ) -> SubdivideResult<Point> {
        let mut midpoint_sum = Point::ORIGIN;
        let mut face_sum = Point::ORIGIN;
        let mut valence = 0usize;
        let mut current = start;

        loop {
            midpoint_sum = midpoint_sum + midpoints[current];
            face_sum = face_sum + self.edges[current].face_point;
            valence += 1;

            // A closed umbrella returns to its start within the arena size;
            // anything longer means a stale pairing sent us off-cycle.
            if valence > self.edges.len() {
                return Err(SubdivideError::NonManifoldVertex { level });
            }

            let next = self.edges[current].next;
            current = self.edges[next]
                .opposite
                .ok_or(SubdivideError::OpenEdge { level })?;
            if current == start {
                break;
            }
        }

        let n = valence as f64;
        let old = self.edges[start].end;
        let midpoint_avg = midpoint_sum / n;
        let face_avg = face_sum / n;
        Ok((old * (n - 3.0) + midpoint_avg * 2.0 + face_avg) / n)
    }

    /// Face-emission pass: one new quad per half-edge.
    ///
    /// The emitted vertices `[midpoint, end, next midpoint, face point]`
    /// follow the rotational sense of the original cycle, so winding is
    /// preserved. Output face count is exactly the half-edge count.
    pub(crate) fn emit_faces(&self, midpoints: &[Point], positions: &[Point]) -> Vec<QuadFace> {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| {
                QuadFace::new([midpoints[i], positions[i], midpoints[edge.next], edge.face_point])
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use quad_types::unit_cube;

    use super::*;

    fn lone_quad() -> Vec<QuadFace> {
        vec![QuadFace::new([
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ])]
    }

    #[test]
    fn cube_builds_fully_paired_arena() {
        let mesh = HalfEdgeMesh::build(&unit_cube());
        assert_eq!(mesh.edge_count(), 24);

        for (i, edge) in mesh.edges.iter().enumerate() {
            let opposite = edge.opposite.unwrap();
            // Pairing is mutual
            assert_eq!(mesh.edges[opposite].opposite, Some(i));
        }
    }

    #[test]
    fn next_links_form_four_cycles() {
        let mesh = HalfEdgeMesh::build(&unit_cube());
        for start in 0..mesh.edge_count() {
            let mut current = start;
            for _ in 0..4 {
                current = mesh.edges[current].next;
            }
            assert_eq!(current, start);
        }
    }

    #[test]
    fn midpoint_follows_edge_rule() {
        let mesh = HalfEdgeMesh::build(&unit_cube());
        let midpoints = mesh.edge_midpoints(0).unwrap();

        for (i, edge) in mesh.edges.iter().enumerate() {
            let opposite = &mesh.edges[edge.opposite.unwrap()];
            let expected =
                (edge.end + opposite.end + edge.face_point + opposite.face_point) / 4.0;
            // Exact under the component arithmetic used
            assert_eq!(midpoints[i], expected);
        }
    }

    #[test]
    fn midpoints_agree_across_opposites() {
        let mesh = HalfEdgeMesh::build(&unit_cube());
        let midpoints = mesh.edge_midpoints(0).unwrap();
        for (i, edge) in mesh.edges.iter().enumerate() {
            assert_eq!(midpoints[i], midpoints[edge.opposite.unwrap()]);
        }
    }

    #[test]
    fn lone_quad_fails_midpoint_pass() {
        let mesh = HalfEdgeMesh::build(&lone_quad());
        assert_eq!(mesh.edge_count(), 4);
        assert_eq!(
            mesh.edge_midpoints(0),
            Err(SubdivideError::OpenEdge { level: 0 })
        );
    }

    #[test]
    fn cube_corner_relaxes_to_quarter_point() {
        // For the [0,1]^3 cube, corner (0,0,0) has valence 3 and the
        // vertex rule lands it on (0.25, 0.25, 0.25).
        let mesh = HalfEdgeMesh::build(&unit_cube());
        let midpoints = mesh.edge_midpoints(0).unwrap();
        let positions = mesh.relaxed_positions(&midpoints, 0).unwrap();

        let corner = Point::new(0.0, 0.0, 0.0);
        let relaxed: Vec<Point> = mesh
            .edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.end == corner)
            .map(|(i, _)| positions[i])
            .collect();

        assert_eq!(relaxed.len(), 3, "cube corner has valence 3");
        for p in relaxed {
            assert!((p.x - 0.25).abs() < 1e-12);
            assert!((p.y - 0.25).abs() < 1e-12);
            assert!((p.z - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn corner_copies_converge() {
        let mesh = HalfEdgeMesh::build(&unit_cube());
        let midpoints = mesh.edge_midpoints(0).unwrap();
        let positions = mesh.relaxed_positions(&midpoints, 0).unwrap();

        // Group relaxed positions by the original end vertex: all copies
        // of one conceptual vertex must land on the same point.
        let mut by_vertex: HashMap<Point, Vec<Point>> = HashMap::new();
        for (i, edge) in mesh.edges.iter().enumerate() {
            by_vertex.entry(edge.end).or_default().push(positions[i]);
        }

        assert_eq!(by_vertex.len(), 8);
        for copies in by_vertex.values() {
            assert_eq!(copies.len(), 3);
            for p in copies {
                assert!((p.x - copies[0].x).abs() < 1e-12);
                assert!((p.y - copies[0].y).abs() < 1e-12);
                assert!((p.z - copies[0].z).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn emission_yields_one_face_per_half_edge() {
        let mesh = HalfEdgeMesh::build(&unit_cube());
        let midpoints = mesh.edge_midpoints(0).unwrap();
        let positions = mesh.relaxed_positions(&midpoints, 0).unwrap();
        let faces = mesh.emit_faces(&midpoints, &positions);

        assert_eq!(faces.len(), 24);

        // Each emitted face holds this edge's midpoint, the relaxed end,
        // the next edge's midpoint and the face point, in that order.
        for (i, edge) in mesh.edges.iter().enumerate() {
            let verts = faces[i].vertices();
            assert_eq!(verts[0], midpoints[i]);
            assert_eq!(verts[1], positions[i]);
            assert_eq!(verts[2], midpoints[edge.next]);
            assert_eq!(verts[3], edge.face_point);
        }
    }
}
