//! Subdivision parameters.

/// Parameters for quad mesh subdivision.
#[derive(Debug, Clone)]
pub struct SubdivideParams {
    /// Number of subdivision levels to apply. Zero is the identity.
    pub levels: u32,

    /// Maximum faces allowed in the result (prevents memory issues).
    pub max_faces: usize,
}

impl Default for SubdivideParams {
    fn default() -> Self {
        Self {
            levels: 1,
            max_faces: 10_000_000, // 10M faces max
        }
    }
}

impl SubdivideParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of subdivision levels.
    #[must_use]
    pub const fn with_levels(mut self, levels: u32) -> Self {
        self.levels = levels;
        self
    }

    /// Set the maximum faces allowed.
    #[must_use]
    pub const fn with_max_faces(mut self, max_faces: usize) -> Self {
        self.max_faces = max_faces;
        self
    }

    /// Calculate the expected face count after subdivision.
    ///
    /// Each level multiplies the face count by 4.
    ///
    /// # Example
    ///
    /// ```
    /// use quad_subdivide::SubdivideParams;
    ///
    /// let params = SubdivideParams::new().with_levels(3);
    /// assert_eq!(params.expected_faces(6), 384); // 6 * 4^3
    /// ```
    #[must_use]
    pub const fn expected_faces(&self, current_faces: usize) -> usize {
        let mut faces = current_faces;
        let mut i = 0;
        while i < self.levels {
            faces *= 4;
            i += 1;
        }
        faces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let params = SubdivideParams::default();
        assert_eq!(params.levels, 1);
        assert_eq!(params.max_faces, 10_000_000);
    }

    #[test]
    fn builder() {
        let params = SubdivideParams::new().with_levels(2).with_max_faces(500);
        assert_eq!(params.levels, 2);
        assert_eq!(params.max_faces, 500);
    }

    #[test]
    fn expected_faces() {
        assert_eq!(SubdivideParams::new().expected_faces(100), 400);
        assert_eq!(
            SubdivideParams::new().with_levels(0).expected_faces(100),
            100
        );
        assert_eq!(
            SubdivideParams::new().with_levels(2).expected_faces(6),
            96
        );
    }
}
