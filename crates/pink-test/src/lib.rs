//! pink-test - Regression test framework for Pink
//!
//! Two layers:
//!
//! - [`RegParams`]: per-test bookkeeping in the style of the C regression
//!   programs (`compare_values`, `compare_images`, `cleanup`), used by the
//!   `*_reg.rs` tests of every crate.
//! - Fixture cases: [`FixtureCase`]s are run against a [`SplineLibrary`]
//!   with paths from a [`PinkTestConfig`]. The outcome of each case is
//!   collected in a [`SuiteReport`] and written as JUnit XML.
//!
//! # Usage
//!
//! ```no_run
//! use pink_test::{PinkLibrary, PinkTestConfig, points2spline_cases, run_suite};
//!
//! let config = PinkTestConfig::from_env()?;
//! let report = run_suite(&PinkLibrary, &config, "points2spline", &points2spline_cases());
//! report.write_junit(config.report_dir())?;
//! assert!(report.all_passed());
//! # Ok::<(), pink_test::TestError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `PINKTEST`: base directory holding `images/` and `results_prev/`
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod case;
mod config;
mod error;
mod library;
mod params;
mod report;

pub use case::{CaseOutcome, CaseReport, FixtureCase, points2spline_cases, run_case, run_suite};
pub use config::{DEFAULT_REPORT_DIR, PINKTEST_ENV, PinkTestConfig, REGTEST_MODE_ENV};
pub use error::{TestError, TestResult};
pub use library::{PinkLibrary, SplineLibrary};
pub use params::{RegParams, RegTestMode, describe_difference};
pub use report::SuiteReport;

/// Suite name of the `points2spline` cases.
pub const POINTS2SPLINE_SUITE: &str = "points2spline";

/// Run the `points2spline` cases with the Pink library.
pub fn run_points2spline(config: &PinkTestConfig) -> SuiteReport {
    run_suite(
        &PinkLibrary,
        config,
        POINTS2SPLINE_SUITE,
        &points2spline_cases(),
    )
}
