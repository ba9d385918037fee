//! Quad mesh file I/O.
//!
//! Reader and writer for the line-oriented quad format the subdivider
//! exchanges with the outside world: twelve whitespace-separated floats per
//! face line, a `NORMALS` marker, then one line of four vertex normals per
//! face. The reader ignores everything after the marker because normals are
//! always recomputed from the current face list.
//!
//! # Example
//!
//! ```no_run
//! use quad_io::{load_quads, save_quads};
//! use quad_normals::vertex_normals;
//!
//! let faces = load_quads("model.quads")?;
//! let normals = vertex_normals(&faces);
//! save_quads(&faces, &normals, "out.quads")?;
//! # Ok::<(), quad_io::IoError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod quads;

pub use error::{IoError, IoResult};
pub use quads::{load_quads, read_quads, save_quads, write_quads};

use hashbrown::HashMap;
use nalgebra::Vector3;
use quad_types::Point;

/// Mapping from vertex value to unit normal, as produced by `quad-normals`.
pub type NormalMap = HashMap<Point, Vector3<f64>>;
