//! Error types for the test framework

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Required environment variable is not set
    #[error(
        "{var} environment variable must be defined for the testing module. \
         It must point to the test images directory"
    )]
    MissingEnv { var: &'static str },

    /// Failed to load a fixture or golden file
    #[error("failed to load image '{}': {message}", .path.display())]
    ImageLoad { path: PathBuf, message: String },

    /// Failed to write an image
    #[error("failed to write image '{}': {message}", .path.display())]
    ImageWrite { path: PathBuf, message: String },

    /// Failed to create directory
    #[error("failed to create directory '{}': {message}", .path.display())]
    DirectoryCreate { path: PathBuf, message: String },

    /// Golden file not found
    #[error("golden file not found: {}", .path.display())]
    GoldenNotFound { path: PathBuf },

    /// The operation under test failed
    #[error("{operation} failed: {message}")]
    Operation {
        operation: &'static str,
        message: String,
    },

    /// Result differs from the golden file
    #[error("result of {case} differs from golden file '{}'", .golden.display())]
    Mismatch { case: String, golden: PathBuf },

    /// Failed to write the test report
    #[error("failed to write test report: {0}")]
    Report(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
