//! Text rendering for [`Matrix`].
//!
//! Output is a nested-bracket layout with one row per line:
//!
//! ```text
//! [[1.0000, 2.0000],
//!  [3.0000, 4.0000]]
//! ```
//!
//! When [`FormatConfig`] limits rows or columns, the shown values are
//! followed by `...`. A limit of zero is treated as one.
use std::fmt;

use crate::config::{FormatConfig, Notation};
use crate::math::Matrix;

/// Borrowed view that renders a matrix with a given [`FormatConfig`].
pub struct MatrixDisplay<'a> {
    matrix: &'a Matrix,
    config: &'a FormatConfig,
}

impl Matrix {
    pub fn display_with<'a>(&'a self, config: &'a FormatConfig) -> MatrixDisplay<'a> {
        MatrixDisplay {
            matrix: self,
            config,
        }
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: f64, config: &FormatConfig) -> fmt::Result {
    match config.notation {
        Notation::Fixed => write!(f, "{:.*}", config.precision, value),
        Notation::Scientific => write!(f, "{:.*e}", config.precision, value),
    }
}

impl fmt::Display for MatrixDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.matrix.shape();
        let rows_to_print = self.config.max_rows.unwrap_or(rows).clamp(1, rows);
        let cols_to_print = self.config.max_cols.unwrap_or(cols).clamp(1, cols);

        write!(f, "[")?;
        for (r, row) in self.matrix.rows().take(rows_to_print).enumerate() {
            if r > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (c, &value) in row[..cols_to_print].iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write_value(f, value, self.config)?;
            }
            if cols_to_print < cols {
                write!(f, ", ...")?;
            }
            write!(f, "]")?;
        }
        if rows_to_print < rows {
            write!(f, ",\n ...")?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = FormatConfig::default();
        fmt::Display::fmt(&self.display_with(&config), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_row_per_line() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let config = FormatConfig::new(1, Notation::Fixed);
        assert_eq!(
            m.display_with(&config).to_string(),
            "[[1.0, 2.0],\n [3.0, 4.0]]"
        );
    }

    #[test]
    fn zero_limit_still_shows_one_value() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let config = FormatConfig::new(0, Notation::Fixed)
            .with_max_rows(0)
            .with_max_cols(0);
        assert_eq!(m.display_with(&config).to_string(), "[[1, ...],\n ...]");
    }
}
