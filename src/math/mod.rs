//! The dense [`Matrix`] type and its text rendering.
//!
//! `Matrix` stores `f64` values in a flat row-major buffer and exposes
//! checked accessors that return [`MatrixError`](crate::error::MatrixError)
//! instead of panicking.
pub mod format;
pub mod matrix;

pub use format::MatrixDisplay;
pub use matrix::Matrix;
