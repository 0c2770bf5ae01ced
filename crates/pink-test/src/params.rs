//! Regression test parameters and operations

use pink_io::PinkImage;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Write computed results as golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    /// Parse mode from a string; anything unknown means `Compare`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "points2spline")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode comes from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        Self::with_mode(test_name, RegTestMode::from_env())
    }

    /// Create regression test parameters with an explicit mode
    pub fn with_mode(test_name: &str, mode: RegTestMode) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two Pink images for exact equality
    ///
    /// # Returns
    ///
    /// `true` if the images are identical, `false` otherwise.
    pub fn compare_images(&mut self, expected: &PinkImage, actual: &PinkImage) -> bool {
        self.index += 1;

        match describe_difference(expected, actual) {
            None => true,
            Some(what) => {
                let msg = format!(
                    "Failure in {}_reg: image comparison for index {} - {}",
                    self.test_name, self.index, what
                );
                self.fail(msg);
                false
            }
        }
    }

    /// Compare two binary data arrays
    ///
    /// # Returns
    ///
    /// `true` if data is identical, `false` otherwise.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

/// Describe the first difference between two images, or `None` if equal.
pub fn describe_difference(expected: &PinkImage, actual: &PinkImage) -> Option<String> {
    if expected == actual {
        return None;
    }
    if expected.format() != actual.format() {
        return Some(format!(
            "format mismatch: expected {:?}, got {:?}",
            expected.format(),
            actual.format()
        ));
    }
    if let (Some(e), Some(a)) = (expected.as_spline(), actual.as_spline()) {
        if e.len() != a.len() {
            return Some(format!(
                "control point count mismatch: expected {}, got {}",
                e.len(),
                a.len()
            ));
        }
        for (axis, (ea, aa)) in e.axes().iter().zip(a.axes()).enumerate() {
            if let Some(i) = first_diff(ea.control(), aa.control()) {
                return Some(format!(
                    "control point {i}, axis {axis}: expected {}, got {}",
                    ea.control()[i],
                    aa.control()[i]
                ));
            }
            for (seg, (ec, ac)) in ea.coeffs().iter().zip(aa.coeffs()).enumerate() {
                if let Some(k) = first_diff(ec, ac) {
                    return Some(format!(
                        "segment {seg}, axis {axis}, C{k}: expected {}, got {}",
                        ec[k], ac[k]
                    ));
                }
            }
        }
    }
    Some("content mismatch".to_string())
}

fn first_diff(a: &[f64], b: &[f64]) -> Option<usize> {
    a.iter().zip(b).position(|(x, y)| x != y)
}
