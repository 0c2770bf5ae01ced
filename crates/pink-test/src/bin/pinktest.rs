//! Run the `points2spline` fixture cases and write a JUnit report.
//!
//! Exit status: 0 if every case passed, 1 if any case failed or errored,
//! 2 if the run could not start or the report could not be written.

use pink_test::{PinkTestConfig, run_points2spline};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match PinkTestConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::from(2);
        }
    };

    let report = run_points2spline(&config);
    if let Err(e) = report.write_junit(config.report_dir()) {
        log::error!("{e}");
        return ExitCode::from(2);
    }

    log::info!(
        "{}: {} passed, {} failed, {} errors",
        report.name,
        report.passed(),
        report.failures(),
        report.errors()
    );
    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
