//! Suite results and JUnit XML report
//!
//! The report follows the layout CI servers read from `test-reports/`:
//!
//! ```text
//! <testsuite name=".." tests="2" failures="0" errors="0" time="..">
//!   <testcase classname=".." name="test_0" time=".."/>
//!   <testcase classname=".." name="test_1" time="..">
//!     <failure type="AssertionError" message="..">..</failure>
//!   </testcase>
//! </testsuite>
//! ```

use crate::case::{CaseOutcome, CaseReport};
use crate::error::{TestError, TestResult};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Results of a suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteReport {
    pub name: String,
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn new(name: impl Into<String>, cases: Vec<CaseReport>) -> Self {
        Self {
            name: name.into(),
            cases,
        }
    }

    pub fn passed(&self) -> usize {
        self.count(|o| matches!(o, CaseOutcome::Passed))
    }

    pub fn failures(&self) -> usize {
        self.count(|o| matches!(o, CaseOutcome::Failed { .. }))
    }

    pub fn errors(&self) -> usize {
        self.count(|o| matches!(o, CaseOutcome::Errored { .. }))
    }

    pub fn all_passed(&self) -> bool {
        self.cases.iter().all(|c| c.outcome.is_passed())
    }

    pub fn duration(&self) -> Duration {
        self.cases.iter().map(|c| c.duration).sum()
    }

    fn count(&self, pred: impl Fn(&CaseOutcome) -> bool) -> usize {
        self.cases.iter().filter(|c| pred(&c.outcome)).count()
    }

    /// Write `TEST-<name>.xml` into `dir`, creating it if needed.
    ///
    /// Returns the path of the written report.
    pub fn write_junit(&self, dir: &Path) -> TestResult<PathBuf> {
        fs::create_dir_all(dir).map_err(|e| TestError::DirectoryCreate {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
        let path = dir.join(format!("TEST-{}.xml", self.name));
        fs::write(&path, self.to_junit_xml()?)?;
        log::info!("wrote test report {}", path.display());
        Ok(path)
    }

    /// Render the report as JUnit XML.
    pub fn to_junit_xml(&self) -> TestResult<String> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(report_error)?;

        let mut suite = BytesStart::new("testsuite");
        suite.push_attribute(("name", self.name.as_str()));
        suite.push_attribute(("tests", self.cases.len().to_string().as_str()));
        suite.push_attribute(("failures", self.failures().to_string().as_str()));
        suite.push_attribute(("errors", self.errors().to_string().as_str()));
        suite.push_attribute(("time", seconds(self.duration()).as_str()));
        writer
            .write_event(Event::Start(suite))
            .map_err(report_error)?;

        for case in &self.cases {
            let mut testcase = BytesStart::new("testcase");
            testcase.push_attribute(("classname", self.name.as_str()));
            testcase.push_attribute(("name", case.name.as_str()));
            testcase.push_attribute(("time", seconds(case.duration).as_str()));

            let (tag, kind, message) = match &case.outcome {
                CaseOutcome::Passed => {
                    writer
                        .write_event(Event::Empty(testcase))
                        .map_err(report_error)?;
                    continue;
                }
                CaseOutcome::Failed { message } => ("failure", "AssertionError", message),
                CaseOutcome::Errored { message } => ("error", "Error", message),
            };

            writer
                .write_event(Event::Start(testcase))
                .map_err(report_error)?;
            let mut detail = BytesStart::new(tag);
            detail.push_attribute(("type", kind));
            detail.push_attribute(("message", message.as_str()));
            writer
                .write_event(Event::Start(detail))
                .map_err(report_error)?;
            writer
                .write_event(Event::Text(BytesText::new(message)))
                .map_err(report_error)?;
            writer
                .write_event(Event::End(BytesEnd::new(tag)))
                .map_err(report_error)?;
            writer
                .write_event(Event::End(BytesEnd::new("testcase")))
                .map_err(report_error)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("testsuite")))
            .map_err(report_error)?;

        let bytes = writer.into_inner().into_inner();
        String::from_utf8(bytes).map_err(report_error)
    }
}

fn seconds(d: Duration) -> String {
    format!("{:.3}", d.as_secs_f64())
}

fn report_error(e: impl std::fmt::Display) -> TestError {
    TestError::Report(e.to_string())
}
