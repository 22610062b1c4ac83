//! Integration tests for matrix construction and shape accessors.

use densemat::{Matrix, MatrixError};

// ---------------------------------------------------------------------------
// Checked constructors
// ---------------------------------------------------------------------------

#[test]
fn new_is_zero_filled() {
    let m = Matrix::new(6, 9).unwrap();
    assert_eq!(m.shape(), (6, 9));
    assert!(m.iter().all(|&v| v == 0.0));
}

#[test]
fn new_rejects_zero_rows() {
    let err = Matrix::new(0, 4).unwrap_err();
    assert_eq!(err, MatrixError::InvalidDimension { rows: 0, cols: 4 });
}

#[test]
fn new_rejects_zero_cols() {
    let err = Matrix::new(3, 0).unwrap_err();
    assert_eq!(err, MatrixError::InvalidDimension { rows: 3, cols: 0 });
}

#[test]
fn default_is_a_single_zero() {
    let m = Matrix::default();
    assert_eq!(m.shape(), (1, 1));
    assert_eq!(m.get(0, 0).unwrap(), 0.0);
}

#[test]
fn from_shape_vec_lays_out_rows() {
    let m = Matrix::from_shape_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(m.row_slice(0).unwrap(), &[1.0, 2.0, 3.0]);
    assert_eq!(m.row_slice(1).unwrap(), &[4.0, 5.0, 6.0]);
}

#[test]
fn from_shape_vec_rejects_wrong_length() {
    let err = Matrix::from_shape_vec(2, 3, vec![1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DataLength {
            rows: 2,
            cols: 3,
            len: 3
        }
    );
}

#[test]
fn from_shape_vec_rejects_zero_extent() {
    let err = Matrix::from_shape_vec(0, 3, vec![]).unwrap_err();
    assert_eq!(err, MatrixError::InvalidDimension { rows: 0, cols: 3 });
}

#[test]
fn from_rows_builds_row_major() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn from_rows_rejects_ragged_rows() {
    let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DataLength {
            rows: 2,
            cols: 2,
            len: 1
        }
    );
}

#[test]
fn from_rows_rejects_empty_input() {
    assert!(Matrix::from_rows(vec![]).is_err());
    assert!(Matrix::from_rows(vec![vec![]]).is_err());
}

#[test]
fn try_from_nested_vec() {
    let m = Matrix::try_from(vec![vec![1.0], vec![2.0]]).unwrap();
    assert_eq!(m.shape(), (2, 1));
    assert_eq!(m.as_slice(), &[1.0, 2.0]);
}

#[test]
fn identity_has_a_unit_diagonal() {
    let id = Matrix::identity(3).unwrap();
    for row in 0..3 {
        for col in 0..3 {
            let expected = if row == col { 1.0 } else { 0.0 };
            assert_eq!(id.get(row, col).unwrap(), expected);
        }
    }
    let total: f64 = id.iter().sum();
    assert_eq!(total, 3.0);
}

#[test]
fn identity_rejects_order_zero() {
    assert!(Matrix::identity(0).is_err());
}

// ---------------------------------------------------------------------------
// Shape accessors and display
// ---------------------------------------------------------------------------

#[test]
fn shape_accessors_agree() {
    let m = Matrix::new(4, 2).unwrap();
    assert_eq!(m.nrows(), 4);
    assert_eq!(m.ncols(), 2);
    assert_eq!(m.shape(), (4, 2));
    assert!(!m.is_square());
    assert!(Matrix::new(3, 3).unwrap().is_square());
}

#[test]
fn display_formats_bracketed_rows() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    assert_eq!(format!("{}", m), "[[1, 2],\n [3, 4]]");
}
