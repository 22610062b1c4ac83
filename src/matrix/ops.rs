//! Operator sugar over the named matrix operations.
//!
//! Every impl here delegates to a checked method on [`Matrix`] and panics
//! with that method's error message when shapes do not line up. Callers that
//! want to handle shape errors use the named `try_*` / `*_in_place` methods
//! instead.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::MatrixError;

use super::Matrix;

// Shape errors surface as panics in operator position.
fn checked<T>(result: Result<T, MatrixError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

impl Add<&Matrix> for Matrix {
    type Output = Matrix;

    fn add(mut self, rhs: &Matrix) -> Matrix {
        checked(self.add_in_place(rhs));
        self
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Matrix) -> Matrix {
        self + &rhs
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: &Matrix) -> Matrix {
        checked(self.try_add(rhs))
    }
}

impl Sub<&Matrix> for Matrix {
    type Output = Matrix;

    fn sub(mut self, rhs: &Matrix) -> Matrix {
        checked(self.sub_in_place(rhs));
        self
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Matrix) -> Matrix {
        self - &rhs
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &Matrix) -> Matrix {
        checked(self.try_sub(rhs))
    }
}

impl Mul<&Matrix> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: &Matrix) -> Matrix {
        checked(self.mul_in_place(rhs));
        self
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        self * &rhs
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        checked(self.try_mul(rhs))
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, factor: f64) -> Matrix {
        self.scale_in_place(factor);
        self
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, factor: f64) -> Matrix {
        self.scaled(factor)
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: Matrix) -> Matrix {
        matrix * self
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: &Matrix) -> Matrix {
        matrix.scaled(self)
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(mut self) -> Matrix {
        self.scale_in_place(-1.0);
        self
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.scaled(-1.0)
    }
}

impl AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &Matrix) {
        checked(self.add_in_place(rhs));
    }
}

impl AddAssign for Matrix {
    fn add_assign(&mut self, rhs: Matrix) {
        *self += &rhs;
    }
}

impl SubAssign<&Matrix> for Matrix {
    fn sub_assign(&mut self, rhs: &Matrix) {
        checked(self.sub_in_place(rhs));
    }
}

impl SubAssign for Matrix {
    fn sub_assign(&mut self, rhs: Matrix) {
        *self -= &rhs;
    }
}

impl MulAssign<&Matrix> for Matrix {
    fn mul_assign(&mut self, rhs: &Matrix) {
        checked(self.mul_in_place(rhs));
    }
}

impl MulAssign for Matrix {
    fn mul_assign(&mut self, rhs: Matrix) {
        *self *= &rhs;
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, factor: f64) {
        self.scale_in_place(factor);
    }
}

/// Equality within [`Matrix::EPSILON`], elementwise.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        if !self.in_bounds(row, col) {
            panic!("{}", self.out_of_bounds(row, col));
        }
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        if !self.in_bounds(row, col) {
            panic!("{}", self.out_of_bounds(row, col));
        }
        let idx = row * self.cols + col;
        &mut self.data[idx]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            if row > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[row * self.cols + col])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
