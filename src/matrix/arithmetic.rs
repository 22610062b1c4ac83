//! Elementwise arithmetic, tolerance-based equality, and matrix products.

use crate::error::MatrixError;

use super::Matrix;

impl Matrix {
    /// Tolerance used by elementwise equality comparisons.
    pub const EPSILON: f64 = 1e-6;

    fn require_same_shape(&self, other: &Matrix) -> Result<(), MatrixError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(self.shape_mismatch(other));
        }
        Ok(())
    }

    fn shape_mismatch(&self, other: &Matrix) -> MatrixError {
        MatrixError::ShapeMismatch {
            left_rows: self.rows,
            left_cols: self.cols,
            right_rows: other.rows,
            right_cols: other.cols,
        }
    }

    /// Compares two matrices elementwise within [`Matrix::EPSILON`].
    ///
    /// Matrices of different shapes are never equal. The `==` operator
    /// delegates to this method.
    pub fn approx_eq(&self, other: &Matrix) -> bool {
        if self.rows != other.rows || self.cols != other.cols {
            return false;
        }
        self.data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| (a - b).abs() <= Self::EPSILON)
    }

    /// Adds `other` elementwise into `self`.
    pub fn add_in_place(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        self.require_same_shape(other)?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a += b;
        }
        Ok(())
    }

    /// Subtracts `other` elementwise from `self`.
    pub fn sub_in_place(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        self.require_same_shape(other)?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a -= b;
        }
        Ok(())
    }

    /// Multiplies every element of `self` by `factor`.
    pub fn scale_in_place(&mut self, factor: f64) {
        for v in &mut self.data {
            *v *= factor;
        }
    }

    /// Replaces `self` with the matrix product `self * other`.
    ///
    /// Requires `self.ncols() == other.nrows()`; the result has shape
    /// `self.nrows() x other.ncols()`. On a shape mismatch `self` is left
    /// untouched.
    pub fn mul_in_place(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        if self.cols != other.rows {
            return Err(self.shape_mismatch(other));
        }
        let (rows, inner, cols) = (self.rows, self.cols, other.cols);
        let mut out = vec![0.0; rows * cols];
        for i in 0..rows {
            for j in 0..cols {
                let mut acc = 0.0;
                for k in 0..inner {
                    acc += self.data[i * inner + k] * other.data[k * cols + j];
                }
                out[i * cols + j] = acc;
            }
        }
        self.data = out;
        self.cols = cols;
        log::trace!("stored {}x{} * {}x{} product in place", rows, inner, inner, cols);
        Ok(())
    }

    /// Returns the elementwise sum `self + other`.
    pub fn try_add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        let mut out = self.clone();
        out.add_in_place(other)?;
        Ok(out)
    }

    /// Returns the elementwise difference `self - other`.
    pub fn try_sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        let mut out = self.clone();
        out.sub_in_place(other)?;
        Ok(out)
    }

    /// Returns `self` with every element multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Matrix {
        let mut out = self.clone();
        out.scale_in_place(factor);
        out
    }

    /// Returns the matrix product `self * other`.
    pub fn try_mul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        let mut out = self.clone();
        out.mul_in_place(other)?;
        Ok(out)
    }
}
