//! Core value types for quad mesh subdivision.
//!
//! This crate provides the two data shapes the subdivision kernel exchanges
//! with its collaborators:
//!
//! - [`Point`] - A 3D point with exact-value equality and hashing
//! - [`QuadFace`] - Four points in winding order with a cached centroid
//!
//! # Exact equality
//!
//! Adjacency construction and normal aggregation identify "the same vertex"
//! across faces by comparing coordinates bit-for-bit. [`Point`] therefore
//! implements `Eq` and `Hash` over the raw bit pattern of each component and
//! applies no tolerance anywhere. Geometrically coincident vertices that
//! differ in their float representation are different vertices.
//!
//! # Coordinate system
//!
//! Right-handed, with face winding **counter-clockwise when viewed from
//! outside**. Normals point outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use quad_types::{Point, QuadFace};
//!
//! let face = QuadFace::new([
//!     Point::new(0.0, 0.0, 0.0),
//!     Point::new(1.0, 0.0, 0.0),
//!     Point::new(1.0, 1.0, 0.0),
//!     Point::new(0.0, 1.0, 0.0),
//! ]);
//!
//! assert_eq!(face.centroid(), Point::new(0.5, 0.5, 0.0));
//! let normal = face.normal().unwrap();
//! assert!((normal.z - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod face;
mod point;

pub use face::{unit_cube, QuadFace};
pub use point::Point;

// Re-export the nalgebra vector type used for normals
pub use nalgebra::Vector3;
