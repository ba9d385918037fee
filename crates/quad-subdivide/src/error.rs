//! Error types for quad subdivision.

use thiserror::Error;

/// Errors that can occur during subdivision.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubdivideError {
    /// Mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// An edge has fewer than two incident faces.
    ///
    /// The kernel requires a closed manifold mesh; this is also what a mesh
    /// reduced too far by repeated subdivision degenerates into.
    #[error(
        "open or non-manifold edge at subdivision level {level}: \
         every edge must be shared by exactly two faces"
    )]
    OpenEdge {
        /// Zero-based level at which the defect was encountered.
        level: u32,
    },

    /// A vertex neighborhood traversal did not return to its start.
    #[error("vertex neighborhood did not close at subdivision level {level}")]
    NonManifoldVertex {
        /// Zero-based level at which the defect was encountered.
        level: u32,
    },

    /// Subdivision would exceed the maximum face count.
    #[error(
        "subdivision would exceed maximum mesh size \
         ({current} -> {projected} faces, max {max})"
    )]
    MeshTooLarge {
        /// Current face count.
        current: usize,
        /// Projected face count after all levels.
        projected: usize,
        /// Maximum allowed face count.
        max: usize,
    },
}

/// Result type for subdivision operations.
pub type SubdivideResult<T> = std::result::Result<T, SubdivideError>;
