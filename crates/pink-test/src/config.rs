//! Test configuration
//!
//! The fixture tree is rooted at one base directory:
//!
//! ```text
//! <base>/images         fixture inputs
//! <base>/results_prev   golden outputs
//! ```

use crate::error::{TestError, TestResult};
use crate::params::RegTestMode;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable holding the fixture base directory.
pub const PINKTEST_ENV: &str = "PINKTEST";

/// Environment variable selecting the [`RegTestMode`].
pub const REGTEST_MODE_ENV: &str = "REGTEST_MODE";

/// Default directory for test reports.
pub const DEFAULT_REPORT_DIR: &str = "test-reports";

/// Paths and mode for a fixture-driven test run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinkTestConfig {
    base_dir: PathBuf,
    report_dir: PathBuf,
    mode: RegTestMode,
}

impl PinkTestConfig {
    /// Configuration rooted at `base_dir`, in compare mode.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
            mode: RegTestMode::Compare,
        }
    }

    /// Configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`TestError::MissingEnv`] if `PINKTEST` is unset or empty.
    pub fn from_env() -> TestResult<Self> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> TestResult<Self> {
        let base = lookup(PINKTEST_ENV)
            .filter(|v| !v.is_empty())
            .ok_or(TestError::MissingEnv { var: PINKTEST_ENV })?;
        let mode = lookup(REGTEST_MODE_ENV)
            .map(|v| RegTestMode::parse(&v.to_string_lossy()))
            .unwrap_or_default();
        Ok(Self::new(base).with_mode(mode))
    }

    pub fn with_mode(mut self, mode: RegTestMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_report_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.report_dir = dir.into();
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn mode(&self) -> RegTestMode {
        self.mode
    }

    pub fn report_dir(&self) -> &Path {
        &self.report_dir
    }

    /// `<base>/images`
    pub fn images_dir(&self) -> PathBuf {
        self.base_dir.join("images")
    }

    /// `<base>/results_prev`
    pub fn results_dir(&self) -> PathBuf {
        self.base_dir.join("results_prev")
    }

    /// Path of a fixture input.
    pub fn image_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.images_dir().join(relative)
    }

    /// Path of a golden result.
    pub fn result_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.results_dir().join(relative)
    }
}
