//! Dense row-major matrix storage, construction, and shape management.

mod arithmetic;
mod linalg;
mod ops;

use crate::error::MatrixError;

/// A dense matrix of `f64` values with row-major storage.
///
/// Shapes are always at least 1x1; constructors reject zero extents up front,
/// so every live `Matrix` has a valid shape. Elements live in one contiguous
/// buffer with the element at `(row, col)` stored at offset `row * cols + col`.
///
/// Fallible operations return [`MatrixError`]; the operator forms (`+`, `*`,
/// `+=`, indexing) are sugar over the same checks and panic instead.
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a zero-filled matrix with the given shape.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        Ok(Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        })
    }

    /// Creates a matrix with the given shape from a row-major buffer.
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(MatrixError::DataLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Creates a matrix from a list of equally long rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |row| row.len());
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::InvalidDimension {
                rows: nrows,
                cols: ncols,
            });
        }
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in &rows {
            if row.len() != ncols {
                return Err(MatrixError::DataLength {
                    rows: nrows,
                    cols: ncols,
                    len: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix {
            rows: nrows,
            cols: ncols,
            data,
        })
    }

    /// Creates the identity matrix of the given order.
    pub fn identity(order: usize) -> Result<Self, MatrixError> {
        let mut out = Matrix::new(order, order)?;
        for i in 0..order {
            out.data[i * order + i] = 1.0;
        }
        Ok(out)
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> MatrixError {
        MatrixError::IndexOutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Returns the element at `(row, col)`.
    ///
    /// Both coordinates are checked against the shape, so a column overflow
    /// is rejected even when the flat offset would still land in the buffer.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        if !self.in_bounds(row, col) {
            return Err(self.out_of_bounds(row, col));
        }
        Ok(self.data[self.offset(row, col)])
    }

    /// Returns a mutable reference to the element at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64, MatrixError> {
        if !self.in_bounds(row, col) {
            return Err(self.out_of_bounds(row, col));
        }
        let idx = self.offset(row, col);
        Ok(&mut self.data[idx])
    }

    /// The full element buffer in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable view of the element buffer in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// One row as a contiguous slice.
    pub fn row_slice(&self, row: usize) -> Result<&[f64], MatrixError> {
        if row >= self.rows {
            return Err(self.out_of_bounds(row, 0));
        }
        let start = row * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    /// Iterates over all elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Returns a new matrix with `f` applied to every element.
    pub fn mapv(&self, mut f: impl FnMut(f64) -> f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Changes the number of rows in place.
    ///
    /// Existing rows that still fit are kept; rows gained by growing are
    /// zero-filled. Shrinking drops the trailing rows.
    pub fn resize_rows(&mut self, new_rows: usize) -> Result<(), MatrixError> {
        if new_rows == 0 {
            return Err(MatrixError::InvalidDimension {
                rows: new_rows,
                cols: self.cols,
            });
        }
        if new_rows == self.rows {
            return Ok(());
        }
        let old_rows = self.rows;
        self.data.resize(new_rows * self.cols, 0.0);
        self.rows = new_rows;
        log::trace!("resized rows {} -> {} ({} cols kept)", old_rows, new_rows, self.cols);
        Ok(())
    }

    /// Changes the number of columns in place.
    ///
    /// In each row the leading columns that still fit are kept; columns
    /// gained by growing are zero-filled. Shrinking drops the trailing
    /// columns of every row.
    pub fn resize_cols(&mut self, new_cols: usize) -> Result<(), MatrixError> {
        if new_cols == 0 {
            return Err(MatrixError::InvalidDimension {
                rows: self.rows,
                cols: new_cols,
            });
        }
        if new_cols == self.cols {
            return Ok(());
        }
        let kept = self.cols.min(new_cols);
        let mut data = vec![0.0; self.rows * new_cols];
        for row in 0..self.rows {
            let src = row * self.cols;
            let dst = row * new_cols;
            data[dst..dst + kept].copy_from_slice(&self.data[src..src + kept]);
        }
        let old_cols = self.cols;
        self.data = data;
        self.cols = new_cols;
        log::trace!("resized cols {} -> {} ({} rows kept)", old_cols, new_cols, self.rows);
        Ok(())
    }
}

/// The default matrix is a single zero element.
impl Default for Matrix {
    fn default() -> Self {
        Matrix {
            rows: 1,
            cols: 1,
            data: vec![0.0],
        }
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Matrix::from_rows(rows)
    }
}
