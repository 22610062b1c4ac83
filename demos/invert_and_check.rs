//! Inverts a small matrix and checks the product against the identity.
//!
//! Run with `cargo run --example invert_and_check`; set `DENSEMAT_LOG=trace`
//! for shape-change logging.

use anyhow::Result;
use densemat::Matrix;
use log::LevelFilter;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DENSEMAT_LOG", "info"))
        .init();

    let m = Matrix::from_rows(vec![
        vec![2.0, 5.0, 7.0],
        vec![6.0, 3.0, 4.0],
        vec![5.0, -2.0, -3.0],
    ])?;
    println!("m =\n{}", m);

    let det = m.determinant()?;
    log::info!("determinant = {}", det);

    let inv = m.inverse()?;
    println!("inverse =\n{}", inv);

    let product = m.try_mul(&inv)?;
    println!("m * inverse =\n{}", product);
    println!("matches the identity: {}", product == Matrix::identity(3)?);

    Ok(())
}
