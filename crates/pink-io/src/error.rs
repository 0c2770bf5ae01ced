//! I/O error types
//!
//! Provides a unified error type for all Pink file I/O operations.
//! Format readers in `pink-core` report [`pink_core::Error`]; this module
//! wraps them so that callers only need to handle one error type.

use thiserror::Error;

/// Error type for Pink file I/O.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file type tag is not one Pink knows
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The data is structurally invalid
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// An error from the core library (parse errors, bad counts)
    #[error("core error: {0}")]
    Core(#[from] pink_core::Error),
}

impl IoError {
    /// True if the underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        match self {
            IoError::Io(e) | IoError::Core(pink_core::Error::Io(e)) => {
                e.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
