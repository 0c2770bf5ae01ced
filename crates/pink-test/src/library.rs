//! Library capabilities exercised by the fixture cases
//!
//! The harness only needs to parse a file, fit a spline, and compare two
//! representations. [`SplineLibrary`] names that capability set so the
//! harness can run against a mock as well as against [`PinkLibrary`].

use crate::error::{TestError, TestResult};
use pink_io::PinkImage;
use std::fmt::Debug;
use std::path::Path;

/// Operations the `points2spline` cases depend on.
pub trait SplineLibrary {
    /// In-memory representation of a file.
    type Repr: PartialEq + Debug;

    /// Parse a file into the library representation.
    fn parse(&self, path: &Path) -> TestResult<Self::Repr>;

    /// Fit a spline through a point-list representation.
    fn fit_spline(&self, input: &Self::Repr) -> TestResult<Self::Repr>;

    /// Library equality; exact structural equality by default.
    fn equals(&self, a: &Self::Repr, b: &Self::Repr) -> bool {
        a == b
    }

    /// Store a representation, used to regenerate golden files.
    fn store(&self, _repr: &Self::Repr, path: &Path) -> TestResult<()> {
        Err(TestError::ImageWrite {
            path: path.to_path_buf(),
            message: "storing results is not supported by this library".to_string(),
        })
    }
}

/// [`SplineLibrary`] backed by `pink-io` and `pink-core`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinkLibrary;

impl SplineLibrary for PinkLibrary {
    type Repr = PinkImage;

    fn parse(&self, path: &Path) -> TestResult<PinkImage> {
        pink_io::read_image(path).map_err(|e| TestError::ImageLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn fit_spline(&self, input: &PinkImage) -> TestResult<PinkImage> {
        pink_io::points2spline(input).map_err(|e| TestError::Operation {
            operation: "points2spline",
            message: e.to_string(),
        })
    }

    fn store(&self, repr: &PinkImage, path: &Path) -> TestResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TestError::DirectoryCreate {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        pink_io::write_image(repr, path).map_err(|e| TestError::ImageWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
