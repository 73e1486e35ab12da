//! dense-matrix: a small dense `f64` matrix value type.
//!
//! The crate provides a single [`Matrix`] type with construction (explicit
//! rows, flat buffers, identity), checked row/column/element access, in-place
//! scaling, transposition and addition, exact equality, and the legacy
//! wrapped-diagonal determinant.
//!
//! All fallible operations return [`MatrixError`] and validate before
//! mutating, so a failed call never leaves a matrix half-updated. Logging
//! goes through the `log` facade; install a logger such as `env_logger` in
//! the binary to see it.
pub mod config;
pub mod error;
pub mod math;

pub use config::{FormatConfig, Notation};
pub use error::{Axis, MatrixError, Result};
pub use math::Matrix;
