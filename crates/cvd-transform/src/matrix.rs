//! 3x3 colour transform matrix
//!
//! Matrices are stored row-major and applied to a pixel interpreted as a
//! column vector of normalized channel intensities.

/// A fixed 3x3 matrix of `f64` coefficients.
///
/// Row `i` holds the weights that produce output channel `i` from the
/// three input channels, so applying the matrix to `[r, g, b]` yields
/// `[row0 · rgb, row1 · rgb, row2 · rgb]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    rows: [[f64; 3]; 3],
}

impl Matrix3 {
    /// The identity transform. Every pixel maps to itself.
    pub const IDENTITY: Self = Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Create a matrix from row-major coefficients.
    ///
    /// # Example
    /// ```
    /// use cvd_transform::Matrix3;
    ///
    /// let swap_rg = Matrix3::from_rows([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
    /// assert_eq!(swap_rg.apply([0.25, 0.75, 0.5]), [0.75, 0.25, 0.5]);
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Row-major coefficients.
    #[inline]
    pub const fn rows(&self) -> &[[f64; 3]; 3] {
        &self.rows
    }

    /// Matrix-vector product.
    ///
    /// Each output channel is accumulated left to right
    /// (`m[i][0]*v[0] + m[i][1]*v[1] + m[i][2]*v[2]`). The result is not
    /// clamped.
    #[inline]
    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.rows;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }

    /// Sum of the coefficients in each row.
    ///
    /// A row sum of 1.0 maps neutral greys onto themselves; sums above 1.0
    /// saturate bright inputs.
    pub fn row_sums(&self) -> [f64; 3] {
        self.rows.map(|row| row[0] + row[1] + row[2])
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[[f64; 3]; 3]> for Matrix3 {
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Self::from_rows(rows)
    }
}
