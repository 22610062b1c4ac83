//! densemat: a dense, exact-size-checked `f64` matrix.
//!
//! The crate provides a single value type, [`Matrix`]: a row-major,
//! arbitrary-size container with elementwise arithmetic, tolerance-based
//! equality, matrix products, transpose, cofactor expansion, determinants,
//! and inversion. It is deliberately small, for callers that need checked
//! matrix values without pulling in a full numerics stack.
//!
//! Shape and domain errors are reported through [`MatrixError`] by the named
//! operations (`try_add`, `mul_in_place`, `determinant`, ...); the operator
//! forms (`+`, `*`, `+=`, indexing) are thin sugar over the same checks and
//! panic instead.
//!
//! Determinants run forward elimination without pivoting in O(n^3); the
//! cofactor matrix and the inverse expand minors per element, which is far
//! more expensive and meant for the small matrices this crate targets.
//!
//! [`Matrix`] is a plain owned value (`Send + Sync`): share `&Matrix`
//! freely across threads, and mutate only through `&mut Matrix`.

pub mod error;
pub mod matrix;

pub use error::MatrixError;
pub use matrix::Matrix;
