//! A quick tour of the matrix type: construction, resizing, arithmetic,
//! and products.
//!
//! Run with `cargo run --example matrix_tour`; set `RUST_LOG=trace` to see
//! the shape-change logging.

use anyhow::Result;
use densemat::Matrix;

fn main() -> Result<()> {
    env_logger::init();

    let mut a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])?;
    println!("a =\n{}", a);
    println!("shape: {:?}, square: {}", a.shape(), a.is_square());

    // Grow by a zero-filled row, then write into it.
    a.resize_rows(4)?;
    *a.get_mut(3, 0)? = 7.0;
    *a.get_mut(3, 1)? = 8.0;
    println!("after resize_rows(4) =\n{}", a);
    a.resize_rows(3)?;

    let b = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0]])?;
    let product = a.try_mul(&b)?;
    println!("a * b =\n{}", product);

    let doubled = &product * 2.0;
    let halved = doubled.scaled(0.5);
    println!("doubled then halved matches: {}", halved == product);

    let sum = product.try_add(&halved)?;
    println!("their sum =\n{}", sum);
    println!("transposed =\n{}", sum.transpose());

    Ok(())
}
