//! Transpose, cofactor expansion, determinants, and inversion.

use crate::error::MatrixError;

use super::Matrix;

impl Matrix {
    /// Returns the transpose of `self`.
    pub fn transpose(&self) -> Matrix {
        let mut out = vec![0.0; self.data.len()];
        for row in 0..self.rows {
            for col in 0..self.cols {
                out[col * self.rows + row] = self.data[row * self.cols + col];
            }
        }
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data: out,
        }
    }

    /// Copy of `self` with one row and one column removed.
    fn submatrix_without(&self, row: usize, col: usize) -> Matrix {
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for r in 0..self.rows {
            if r == row {
                continue;
            }
            for c in 0..self.cols {
                if c == col {
                    continue;
                }
                data.push(self.data[r * self.cols + c]);
            }
        }
        Matrix {
            rows: self.rows - 1,
            cols: self.cols - 1,
            data,
        }
    }

    /// The minor of the element at `(row, col)`: the determinant of `self`
    /// with that row and column removed.
    ///
    /// Succeeds only on square matrices of order 2 and up: removing a row
    /// and a column from a single row or column would leave a zero extent,
    /// and a rectangular submatrix has no determinant.
    pub fn minor(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        if !self.in_bounds(row, col) {
            return Err(self.out_of_bounds(row, col));
        }
        if self.rows < 2 || self.cols < 2 {
            return Err(MatrixError::InvalidDimension {
                rows: self.rows - 1,
                cols: self.cols - 1,
            });
        }
        self.submatrix_without(row, col).determinant()
    }

    /// The matrix of signed minors, built by a row-major scan.
    ///
    /// The sign flips from one visited element to the next across the whole
    /// scan, so on even-sided matrices rows do not restart at `+` the way
    /// the textbook checkerboard does. Odd-sided matrices match the
    /// checkerboard exactly.
    pub fn cofactor_matrix(&self) -> Result<Matrix, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows < 2 {
            return Err(MatrixError::UndefinedOperation {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut out = Matrix::new(self.rows, self.cols)?;
        let mut sign = 1.0;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let minor = self.submatrix_without(row, col).determinant()?;
                out.data[row * self.cols + col] = sign * minor;
                sign = -sign;
            }
        }
        Ok(out)
    }

    /// The determinant, computed by forward Gaussian elimination in O(n^3).
    ///
    /// No row exchanges are performed: a zero pivot short-circuits the
    /// elimination and yields exactly `0.0`, even for matrices a pivoting
    /// algorithm could still reduce.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let n = self.rows;
        if n == 1 {
            return Ok(self.data[0]);
        }
        let mut work = self.clone();
        for p in 0..n - 1 {
            let pivot = work.data[p * n + p];
            if pivot == 0.0 {
                return Ok(0.0);
            }
            for r in p + 1..n {
                let factor = -work.data[r * n + p] / pivot;
                for c in p..n {
                    let delta = factor * work.data[p * n + c];
                    work.data[r * n + c] += delta;
                }
            }
        }
        let mut det = 1.0;
        for i in 0..n {
            det *= work.data[i * n + i];
        }
        Ok(det)
    }

    /// The inverse, via the adjugate: transposed cofactors over the
    /// determinant.
    ///
    /// Fails with [`MatrixError::SingularMatrix`] when the determinant is
    /// exactly zero; for a 1x1 matrix that means its only element is zero.
    /// Inherits the sign convention of [`Matrix::cofactor_matrix`], including
    /// its behavior on even-sided matrices.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(MatrixError::SingularMatrix);
        }
        if self.rows == 1 {
            return Ok(Matrix {
                rows: 1,
                cols: 1,
                data: vec![1.0 / self.data[0]],
            });
        }
        let mut out = self.cofactor_matrix()?.transpose();
        for v in &mut out.data {
            *v /= det;
        }
        Ok(out)
    }
}
