//! Error types for pink-core
//!
//! Provides a unified error type for all operations in the core crate.
//!
//! # See also
//!
//! Pink reports errors with `fprintf(stderr, ...)` and a NULL / 0 return.
//! This module replaces those with Rust's `Result<T, Error>` pattern.

use thiserror::Error;

/// Pink-rs error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Not enough points to build a spline
    #[error("not enough points: {actual} < {required}")]
    TooFewPoints { required: usize, actual: usize },

    /// Dimension of a point does not match its container
    #[error("dimension mismatch: expected {expected} coordinates, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed text data
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Data that cannot be written in the requested format
    #[error("encode error: {0}")]
    EncodeError(String),
}

/// Result type alias for Pink operations
pub type Result<T> = std::result::Result<T, Error>;
