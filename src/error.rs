use thiserror::Error;

/// Errors reported by the fallible [`Matrix`](crate::Matrix) operations.
///
/// The operator forms (`+`, `*`, `+=`, indexing) panic with the same
/// messages instead of returning these variants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A requested shape had a zero extent.
    #[error("invalid dimension: {rows}x{cols} (rows and columns must be at least 1)")]
    InvalidDimension { rows: usize, cols: usize },

    /// An element position fell outside the matrix bounds.
    #[error("index ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Two operands had incompatible shapes for the attempted operation.
    #[error("shape mismatch: {left_rows}x{left_cols} is incompatible with {right_rows}x{right_cols}")]
    ShapeMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// An operation required a square matrix but got a rectangular one.
    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    /// The matrix has determinant zero and cannot be inverted.
    #[error("matrix is singular")]
    SingularMatrix,

    /// The operation is not defined for the given shape.
    #[error("operation is undefined for a {rows}x{cols} matrix")]
    UndefinedOperation { rows: usize, cols: usize },

    /// A data buffer did not match the requested shape.
    #[error("data length {len} does not fit a {rows}x{cols} matrix")]
    DataLength {
        rows: usize,
        cols: usize,
        len: usize,
    },
}
