use std::ops::{Index, IndexMut};
use std::slice::ChunksExact;

use crate::error::{Axis, MatrixError, Result};

/// Dense, row-major matrix of `f64` values.
///
/// The shape is fixed at construction and only changes through
/// [`Matrix::transpose`]. Every row always holds exactly `ncols()` values.
#[derive(Clone, Debug)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Build a matrix by copying the given rows.
    ///
    /// Fails with [`MatrixError::InvalidDimension`] when there are no rows or
    /// the first row is empty, and with [`MatrixError::RaggedRows`] when any
    /// row length differs from the first.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |row| row.as_ref().len());
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::InvalidDimension {
                rows: nrows,
                cols: ncols,
            });
        }

        let mut data = Vec::with_capacity(nrows * ncols);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(MatrixError::RaggedRows {
                    row: idx,
                    expected: ncols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        log::trace!("Constructed {} x {} matrix", nrows, ncols);
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    /// Build a matrix from a flat row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        if element_count(rows, cols) != Some(data.len()) {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        log::trace!("Constructed {} x {} matrix from flat buffer", rows, cols);
        Ok(Self { data, rows, cols })
    }

    /// Matrix of zeros. Fails with [`MatrixError::InvalidDimension`] when
    /// either dimension is 0 or the element count cannot be allocated.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = match element_count(rows, cols) {
            Some(len) if len > 0 => len,
            _ => return Err(MatrixError::InvalidDimension { rows, cols }),
        };
        Self::from_shape_vec((rows, cols), vec![0.0; len])
    }

    /// `n x n` identity matrix. `n` must be at least 1.
    pub fn identity(n: usize) -> Result<Self> {
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        Self::from_rows(&rows)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_row(&self, index: usize) -> Result<()> {
        if index < self.rows {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfRange {
                axis: Axis::Row,
                index,
                len: self.rows,
            })
        }
    }

    fn check_column(&self, index: usize) -> Result<()> {
        if index < self.cols {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfRange {
                axis: Axis::Column,
                index,
                len: self.cols,
            })
        }
    }

    /// Borrow row `index`.
    pub fn row(&self, index: usize) -> Result<&[f64]> {
        self.check_row(index)?;
        let start = self.offset(index, 0);
        Ok(&self.data[start..start + self.cols])
    }

    /// Copy out column `index`.
    pub fn column(&self, index: usize) -> Result<Vec<f64>> {
        self.check_column(index)?;
        Ok(self
            .data
            .iter()
            .skip(index)
            .step_by(self.cols)
            .copied()
            .collect())
    }

    pub fn rows(&self) -> ChunksExact<'_, f64> {
        self.data.chunks_exact(self.cols)
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_row(row)?;
        self.check_column(col)?;
        Ok(self.data[self.offset(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_row(row)?;
        self.check_column(col)?;
        let offset = self.offset(row, col);
        self.data[offset] = value;
        log::trace!("Set element ({}, {}) to {}", row, col, value);
        Ok(())
    }

    /// Multiply every element by `scalar` in place.
    pub fn scale(&mut self, scalar: f64) {
        for elem in self.data.iter_mut() {
            *elem *= scalar;
        }
        log::trace!("Scaled {} x {} matrix by {}", self.rows, self.cols, scalar);
    }

    /// Replace the contents with the transpose; an `R x C` matrix becomes `C x R`.
    pub fn transpose(&mut self) {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.data[self.offset(row, col)]);
            }
        }
        log::debug!(
            "Transposed {} x {} matrix into {} x {}",
            self.rows,
            self.cols,
            self.cols,
            self.rows
        );
        self.data = data;
        std::mem::swap(&mut self.rows, &mut self.cols);
    }

    /// Wrapped-diagonal determinant.
    ///
    /// For each column `j`, two products are seeded with `m[0][j]` and then
    /// multiplied along the right diagonal `m[i][(j + i) % n]` and the left
    /// diagonal `m[i][(j - i) mod n]` for every row `i`, starting at row 0.
    /// The result is the sum over `j` of `right - left`.
    ///
    /// Row 0 enters each product twice, so the value is not the algebraic
    /// determinant: 1x1 and 2x2 matrices always give `0.0`, and
    /// `[[1, 2, 3], [4, 5, 6], [7, 8, 9]]` gives `-6.0`. Existing callers
    /// depend on these numbers.
    pub fn determinant(&self) -> Result<f64> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let n = self.cols;
        let mut determinant = 0.0;
        for j in 0..n {
            let seed = self.data[self.offset(0, j)];
            let mut diag_right = seed;
            let mut diag_left = seed;

            for i in 0..self.rows {
                diag_right *= self.data[self.offset(i, (j + i) % n)];
                diag_left *= self.data[self.offset(i, (j + n - i) % n)];
            }

            determinant += diag_right - diag_left;
        }

        log::debug!("Determinant of order {} matrix: {}", n, determinant);
        Ok(determinant)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_same_size(&self, other: &Matrix) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Shape check, then exact elementwise comparison with no tolerance.
    pub fn is_equal(&self, other: &Matrix) -> bool {
        self.is_same_size(other)
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a == b)
    }

    /// Add `other` into `self` elementwise. `other` is left untouched.
    pub fn add(&mut self, other: &Matrix) -> Result<()> {
        if !self.is_same_size(other) {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }

        for (dst, src) in self.data.iter_mut().zip(other.data.iter()) {
            *dst += *src;
        }
        log::trace!("Added {} x {} matrices", self.rows, self.cols);
        Ok(())
    }
}

/// `rows * cols`, or `None` when it overflows or exceeds what a `Vec<f64>` can hold.
fn element_count(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols)
        .filter(|&len| len <= isize::MAX as usize / std::mem::size_of::<f64>())
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, col) = index;
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {} x {} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (row, col) = index;
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {} x {} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_is_row_major() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[(1, 0)], 4.0);
    }

    #[test]
    fn transpose_relayouts_buffer() {
        let mut m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        m.transpose();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn determinant_seeds_with_first_row() {
        // diag(2, 1, 1): right diagonal of column 0 is 2 * 2 * 1 * 1, the rest vanish
        let m = Matrix::from_rows(&[[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]).unwrap();
        assert_eq!(m.determinant().unwrap(), 4.0);
    }

    #[test]
    fn determinant_of_small_orders_cancels() {
        let one = Matrix::from_rows(&[[7.0]]).unwrap();
        assert_eq!(one.determinant().unwrap(), 0.0);

        let two = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(two.determinant().unwrap(), 0.0);
    }

    #[test]
    fn failed_set_leaves_matrix_untouched() {
        let mut m = Matrix::identity(2).unwrap();
        let before = m.clone();
        assert!(m.set(0, 2, 9.0).is_err());
        assert!(m.set(2, 0, 9.0).is_err());
        assert_eq!(m, before);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_rejects_column_past_end() {
        let m = Matrix::identity(2).unwrap();
        let _ = m[(0, 2)];
    }
}
