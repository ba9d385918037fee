//! Quad faces with cached centroids.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Point;

/// A quadrilateral face: four points in winding order.
///
/// The centroid is computed once at construction as the arithmetic mean of
/// the four vertices. The normal is computed on demand from three of the
/// four vertices, which assumes the quad is close to planar; the distortion
/// on a non-planar quad is accepted.
///
/// # Example
///
/// ```
/// use quad_types::{Point, QuadFace};
///
/// let face = QuadFace::new([
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(2.0, 0.0, 0.0),
///     Point::new(2.0, 2.0, 0.0),
///     Point::new(0.0, 2.0, 0.0),
/// ]);
///
/// assert_eq!(face.centroid(), Point::new(1.0, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuadFace {
    vertices: [Point; 4],
    centroid: Point,
}

impl QuadFace {
    /// Create a face from four vertices in winding order.
    #[must_use]
    pub fn new(vertices: [Point; 4]) -> Self {
        let centroid = (vertices[0] + vertices[1] + vertices[2] + vertices[3]) / 4.0;
        Self { vertices, centroid }
    }

    /// The four vertices in winding order.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> &[Point; 4] {
        &self.vertices
    }

    /// The centroid, cached at construction.
    #[inline]
    #[must_use]
    pub const fn centroid(&self) -> Point {
        self.centroid
    }

    /// The unit face normal, assuming near-planarity.
    ///
    /// Computed as `(v1 - v0) x (v2 - v0)`, normalized. With CCW winding
    /// viewed from outside, this points outward. Returns `None` when the
    /// three vertices are collinear (zero-area cross product).
    ///
    /// # Example
    ///
    /// ```
    /// use quad_types::{Point, QuadFace};
    ///
    /// let face = QuadFace::new([
    ///     Point::new(0.0, 0.0, 0.0),
    ///     Point::new(1.0, 0.0, 0.0),
    ///     Point::new(1.0, 1.0, 0.0),
    ///     Point::new(0.0, 1.0, 0.0),
    /// ]);
    ///
    /// let normal = face.normal().unwrap();
    /// assert!((normal.z - 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let u = (self.vertices[1] - self.vertices[0]).coords();
        let v = (self.vertices[2] - self.vertices[0]).coords();
        u.cross(&v).try_normalize(1e-12)
    }
}

/// The closed unit cube on `[0, 1]^3` as six quad faces.
///
/// Every edge is shared by exactly two faces with opposite traversal
/// directions, so the cube satisfies the closed-manifold precondition of
/// the subdivision kernel. Winding is CCW viewed from outside.
///
/// # Example
///
/// ```
/// use quad_types::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.len(), 6);
/// ```
#[must_use]
pub fn unit_cube() -> Vec<QuadFace> {
    let p = |x: f64, y: f64, z: f64| Point::new(x, y, z);

    vec![
        // bottom (z = 0), normal -z
        QuadFace::new([p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0), p(1.0, 0.0, 0.0)]),
        // top (z = 1), normal +z
        QuadFace::new([p(0.0, 0.0, 1.0), p(1.0, 0.0, 1.0), p(1.0, 1.0, 1.0), p(0.0, 1.0, 1.0)]),
        // front (y = 0), normal -y
        QuadFace::new([p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 0.0, 1.0), p(0.0, 0.0, 1.0)]),
        // back (y = 1), normal +y
        QuadFace::new([p(0.0, 1.0, 0.0), p(0.0, 1.0, 1.0), p(1.0, 1.0, 1.0), p(1.0, 1.0, 0.0)]),
        // left (x = 0), normal -x
        QuadFace::new([p(0.0, 0.0, 0.0), p(0.0, 0.0, 1.0), p(0.0, 1.0, 1.0), p(0.0, 1.0, 0.0)]),
        // right (x = 1), normal +x
        QuadFace::new([p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(1.0, 1.0, 1.0), p(1.0, 0.0, 1.0)]),
    ]
}
