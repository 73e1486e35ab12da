use dense_matrix::{FormatConfig, Matrix, Notation};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [2.0, 3.0, 4.0]])?;
    log::info!("Built {} x {} matrix", m.nrows(), m.ncols());
    println!("{}", m);

    m.scale(2.0);
    log::info!("Scaled by 2, row 0 = {:?}", m.row(0)?);

    m.transpose();
    log::info!("Transposed to {:?}, row 0 = {:?}", m.shape(), m.row(0)?);
    println!("{}", m.display_with(&FormatConfig::new(1, Notation::Fixed)));

    let mut sum = Matrix::from_rows(&[[3.0, 4.0], [4.0, 5.0], [5.0, 6.0]])?;
    sum.add(&m)?;
    log::info!("Sum column 1 = {:?}", sum.column(1)?);

    let square = Matrix::from_rows(&[[2.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])?;
    println!("determinant = {}", square.determinant()?);

    // Non-square determinant surfaces as an error rather than a panic
    if let Err(e) = m.determinant() {
        log::warn!("{}", e);
    }

    Ok(())
}
