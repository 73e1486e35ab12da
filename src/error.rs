use std::error::Error;
use std::fmt;

/// Which dimension an index was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Failures reported by [`Matrix`](crate::math::Matrix) operations.
///
/// Every fallible operation validates its inputs before touching storage,
/// so a returned error always leaves the matrix as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Zero rows or zero columns were requested.
    InvalidDimension { rows: usize, cols: usize },
    /// A row's length differs from the first row's.
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
    IndexOutOfRange { axis: Axis, index: usize, len: usize },
    NotSquare { rows: usize, cols: usize },
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Flat buffer length does not equal `rows * cols`.
    ShapeMismatch { rows: usize, cols: usize, len: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidDimension { rows, cols } => write!(
                f,
                "positive dimensions required, got {} x {}",
                rows, cols
            ),
            MatrixError::RaggedRows {
                row,
                expected,
                actual,
            } => write!(
                f,
                "rows must contain the same number of elements: row {} has {}, expected {}",
                row, actual, expected
            ),
            MatrixError::IndexOutOfRange { axis, index, len } => write!(
                f,
                "{} index {} out of range for length {}",
                axis, index, len
            ),
            MatrixError::NotSquare { rows, cols } => {
                write!(f, "must be an n x n matrix, got {} x {}", rows, cols)
            }
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "matrix dimensions do not match: {} x {} vs {} x {}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::ShapeMismatch { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
        }
    }
}

impl Error for MatrixError {}

pub type Result<T> = std::result::Result<T, MatrixError>;
