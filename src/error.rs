//! Error types for the ray tracer core.

use std::io;

use thiserror::Error;

/// Errors raised by matrix algebra, tuple math and image output.
///
/// Math errors are programmer errors (bad shapes, bad indices, singular
/// matrices); they are returned to the caller as-is and never retried.
#[derive(Error, Debug)]
pub enum Error {
    /// A matrix was built from a value count that isn't `dimension²`.
    #[error("a {dimension}x{dimension} matrix cannot be built from {len} values")]
    Shape { dimension: usize, len: usize },

    /// A row or column index fell outside `[0, dimension)`.
    #[error("index ({row}, {col}) out of bounds for a {dimension}x{dimension} matrix")]
    OutOfBounds { row: usize, col: usize, dimension: usize },

    /// Two matrices (or a matrix and a tuple) have incompatible dimensions.
    #[error("dimension mismatch: {left}x{left} against {right}x{right}")]
    DimensionMismatch { left: usize, right: usize },

    /// The matrix has a zero determinant.
    #[error("matrix is not invertible (determinant = {determinant})")]
    NotInvertible { determinant: f64 },

    /// Submatrices and minors need at least a 3x3 matrix.
    #[error("a {dimension}x{dimension} matrix has no submatrix")]
    Undersized { dimension: usize },

    /// Normalizing a zero-length tuple.
    #[error("cannot normalize a tuple with zero magnitude")]
    ZeroMagnitude,

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for ray tracer core operations.
pub type Result<T> = std::result::Result<T, Error>;
