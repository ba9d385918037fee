//! Catmull-Clark subdivision for closed quad meshes.
//!
//! Each subdivision level builds a half-edge adjacency structure over the
//! face list, runs three ordered passes over every half-edge, and emits a
//! face list four times as large:
//!
//! 1. **Edge midpoints**: `(e1 + e2 + f1 + f2) / 4` per edge
//! 2. **Vertex relaxation**: `((n - 3) * v + 2E + F) / n` per vertex copy
//! 3. **Face emission**: one new quad per half-edge
//!
//! The adjacency structure identifies shared vertices by exact component
//! value (see [`quad_types::Point`]) and requires a closed manifold mesh:
//! every edge shared by exactly two faces. Open boundaries are reported as
//! [`SubdivideError::OpenEdge`], not panics.
//!
//! # Examples
//!
//! ```
//! use quad_types::unit_cube;
//! use quad_subdivide::{subdivide_faces, SubdivideParams};
//!
//! let params = SubdivideParams::new().with_levels(2);
//! let refined = subdivide_faces(&unit_cube(), &params)?;
//!
//! // 6 * 4^2 faces after two levels
//! assert_eq!(refined.len(), 96);
//! # Ok::<(), quad_subdivide::SubdivideError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod half_edge;
mod params;
mod subdivide;

pub use error::{SubdivideError, SubdivideResult};
pub use params::SubdivideParams;
pub use subdivide::subdivide_faces;
