//! Fixture cases and the case runner

use crate::config::PinkTestConfig;
use crate::error::{TestError, TestResult};
use crate::library::SplineLibrary;
use crate::params::RegTestMode;
use crate::report::SuiteReport;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// One fixture-driven equivalence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCase {
    /// Test case name
    pub name: String,
    /// Input fixture, relative to `<base>/images`
    pub input: PathBuf,
    /// Golden result, relative to `<base>/results_prev`
    pub golden: PathBuf,
}

impl FixtureCase {
    pub fn new(
        name: impl Into<String>,
        input: impl Into<PathBuf>,
        golden: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            golden: golden.into(),
        }
    }
}

/// The two `points2spline` cases: a 2D and a 3D point list.
pub fn points2spline_cases() -> Vec<FixtureCase> {
    vec![
        FixtureCase::new(
            "test_0",
            "2dlist/binary/l2points1.list",
            "points2spline_l2points1.spline",
        ),
        FixtureCase::new(
            "test_1",
            "3dlist/binary/l3points1.list",
            "points2spline_l3points1.spline",
        ),
    ]
}

/// Result of running one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    /// Result differs from the golden file
    Failed { message: String },
    /// The case could not be evaluated (I/O, parse or fit error)
    Errored { message: String },
}

impl CaseOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }
}

/// Outcome and timing of one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub name: String,
    pub outcome: CaseOutcome,
    pub duration: Duration,
}

/// Run one case.
///
/// Never panics and never aborts: every problem becomes the case outcome.
pub fn run_case<L: SplineLibrary + ?Sized>(
    lib: &L,
    config: &PinkTestConfig,
    case: &FixtureCase,
) -> CaseReport {
    let start = Instant::now();
    let outcome = match check_case(lib, config, case) {
        Ok(()) => {
            log::info!("{}: ok", case.name);
            CaseOutcome::Passed
        }
        Err(e @ TestError::Mismatch { .. }) => {
            log::warn!("{}: FAIL: {}", case.name, e);
            CaseOutcome::Failed {
                message: e.to_string(),
            }
        }
        Err(e) => {
            log::warn!("{}: ERROR: {}", case.name, e);
            CaseOutcome::Errored {
                message: e.to_string(),
            }
        }
    };
    CaseReport {
        name: case.name.clone(),
        outcome,
        duration: start.elapsed(),
    }
}

fn check_case<L: SplineLibrary + ?Sized>(
    lib: &L,
    config: &PinkTestConfig,
    case: &FixtureCase,
) -> TestResult<()> {
    let input_path = config.image_path(&case.input);
    let golden_path = config.result_path(&case.golden);
    log::debug!(
        "{}: {} -> {}",
        case.name,
        input_path.display(),
        golden_path.display()
    );

    let input = lib.parse(&input_path)?;
    let result = lib.fit_spline(&input)?;

    match config.mode() {
        RegTestMode::Generate => {
            lib.store(&result, &golden_path)?;
            log::info!("generated: {}", golden_path.display());
            Ok(())
        }
        RegTestMode::Display => Ok(()),
        RegTestMode::Compare => {
            let gold = lib
                .parse(&golden_path)
                .map_err(|e| golden_error(e, &golden_path))?;
            if lib.equals(&result, &gold) {
                Ok(())
            } else {
                log::debug!("{}: expected {:?}, got {:?}", case.name, gold, result);
                Err(TestError::Mismatch {
                    case: case.name.clone(),
                    golden: golden_path,
                })
            }
        }
    }
}

/// A golden file that fails to load because it is absent is reported as such.
fn golden_error(err: TestError, golden: &Path) -> TestError {
    match err {
        TestError::ImageLoad { .. } if !golden.exists() => TestError::GoldenNotFound {
            path: golden.to_path_buf(),
        },
        other => other,
    }
}

/// Run every case in order; a failing case does not stop the others.
pub fn run_suite<L: SplineLibrary + ?Sized>(
    lib: &L,
    config: &PinkTestConfig,
    name: &str,
    cases: &[FixtureCase],
) -> SuiteReport {
    log::info!(
        "running {} ({} cases, {:?} mode, base {})",
        name,
        cases.len(),
        config.mode(),
        config.base_dir().display()
    );
    let reports = cases
        .iter()
        .map(|case| run_case(lib, config, case))
        .collect();
    SuiteReport::new(name, reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Mock library: files are integer vectors keyed by path, fitting
    /// doubles every value.
    struct MockLibrary {
        files: HashMap<PathBuf, Vec<i64>>,
    }

    impl MockLibrary {
        fn new(config: &PinkTestConfig, entries: &[(&str, &str, Vec<i64>)]) -> Self {
            let files = entries
                .iter()
                .map(|(root, rel, v)| {
                    let path = match *root {
                        "images" => config.image_path(rel),
                        _ => config.result_path(rel),
                    };
                    (path, v.clone())
                })
                .collect();
            Self { files }
        }
    }

    impl SplineLibrary for MockLibrary {
        type Repr = Vec<i64>;

        fn parse(&self, path: &Path) -> TestResult<Vec<i64>> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| TestError::ImageLoad {
                    path: path.to_path_buf(),
                    message: "no such file".to_string(),
                })
        }

        fn fit_spline(&self, input: &Vec<i64>) -> TestResult<Vec<i64>> {
            if input.is_empty() {
                return Err(TestError::Operation {
                    operation: "points2spline",
                    message: "empty".to_string(),
                });
            }
            Ok(input.iter().map(|v| v * 2).collect())
        }
    }

    fn config() -> PinkTestConfig {
        PinkTestConfig::new("/nonexistent/pinktest")
    }

    #[test]
    fn test_cases_are_fixed() {
        let cases = points2spline_cases();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].input, PathBuf::from("2dlist/binary/l2points1.list"));
        assert_eq!(cases[1].golden, PathBuf::from("points2spline_l3points1.spline"));
    }

    #[test]
    fn test_both_cases_pass() {
        let config = config();
        let lib = MockLibrary::new(
            &config,
            &[
                ("images", "2dlist/binary/l2points1.list", vec![1, 2]),
                ("results", "points2spline_l2points1.spline", vec![2, 4]),
                ("images", "3dlist/binary/l3points1.list", vec![3]),
                ("results", "points2spline_l3points1.spline", vec![6]),
            ],
        );
        let report = run_suite(&lib, &config, "points2spline", &points2spline_cases());
        assert!(report.all_passed());
        assert_eq!(report.passed(), 2);
    }

    #[test]
    fn test_single_value_difference_fails() {
        let config = config();
        let lib = MockLibrary::new(
            &config,
            &[
                ("images", "2dlist/binary/l2points1.list", vec![1, 2, 3]),
                ("results", "points2spline_l2points1.spline", vec![2, 4, 7]),
            ],
        );
        let report = run_case(&lib, &config, &points2spline_cases()[0]);
        assert!(matches!(report.outcome, CaseOutcome::Failed { .. }));
    }

    #[test]
    fn test_missing_golden_is_error_not_pass() {
        let config = config();
        let lib = MockLibrary::new(
            &config,
            &[("images", "2dlist/binary/l2points1.list", vec![1])],
        );
        let report = run_case(&lib, &config, &points2spline_cases()[0]);
        match report.outcome {
            CaseOutcome::Errored { message } => assert!(message.contains("golden file not found")),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn test_cases_are_independent() {
        let config = config();
        // 2D input is missing, 3D case is complete
        let lib = MockLibrary::new(
            &config,
            &[
                ("images", "3dlist/binary/l3points1.list", vec![5]),
                ("results", "points2spline_l3points1.spline", vec![10]),
            ],
        );
        let report = run_suite(&lib, &config, "points2spline", &points2spline_cases());
        assert_eq!(report.cases.len(), 2);
        assert!(matches!(report.cases[0].outcome, CaseOutcome::Errored { .. }));
        assert!(report.cases[1].outcome.is_passed());
        assert_eq!(report.errors(), 1);
        assert!(!report.all_passed());
    }

    #[test]
    fn test_fit_error_is_case_error() {
        let config = config();
        let lib = MockLibrary::new(
            &config,
            &[
                ("images", "2dlist/binary/l2points1.list", vec![]),
                ("results", "points2spline_l2points1.spline", vec![]),
            ],
        );
        let report = run_case(&lib, &config, &points2spline_cases()[0]);
        assert!(matches!(report.outcome, CaseOutcome::Errored { .. }));
    }

    #[test]
    fn test_display_mode_skips_comparison() {
        let config = config().with_mode(RegTestMode::Display);
        let lib = MockLibrary::new(
            &config,
            &[("images", "2dlist/binary/l2points1.list", vec![1])],
        );
        let report = run_case(&lib, &config, &points2spline_cases()[0]);
        assert!(report.outcome.is_passed());
    }

    #[test]
    fn test_generate_mode_needs_store() {
        let config = config().with_mode(RegTestMode::Generate);
        let lib = MockLibrary::new(
            &config,
            &[("images", "2dlist/binary/l2points1.list", vec![1])],
        );
        let report = run_case(&lib, &config, &points2spline_cases()[0]);
        assert!(matches!(report.outcome, CaseOutcome::Errored { .. }));
    }
}
