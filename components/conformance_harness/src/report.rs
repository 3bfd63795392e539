//! Run reports: aggregate results of one batch.

use serde::{Deserialize, Serialize};

/// Aggregate results of one run over the filtered subset.
///
/// `total` is fixed at run start and always reflects the planned subset
/// size, even when individual tests fail to load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Size of the filtered subset.
    pub total: usize,
    /// Number of tests whose verdict was pass.
    pub passed: usize,
    /// Number of tests whose verdict was fail.
    pub failed: usize,
    /// Failures as (identifier, diagnostic), in execution order.
    pub failures: Vec<(String, String)>,
}

impl RunReport {
    /// Create an empty report for a subset of `total` tests.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            passed: 0,
            failed: 0,
            failures: Vec::new(),
        }
    }

    /// Record a passing test.
    pub fn record_pass(&mut self) {
        self.passed += 1;
    }

    /// Record a failing test with its diagnostic.
    pub fn record_failure(&mut self, identifier: &str, diagnostic: &str) {
        self.failed += 1;
        self.failures
            .push((identifier.to_string(), diagnostic.to_string()));
    }

    /// Calculate the pass rate as a percentage.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    /// Check if every executed test passed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Generate a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Conformance Results:\n\
             Total: {}\n\
             Passed: {} ({:.1}%)\n\
             Failed: {}",
            self.total,
            self.passed,
            self.pass_rate(),
            self.failed
        )
    }

    /// Generate a detailed report including failures.
    pub fn detailed_summary(&self) -> String {
        let mut output = self.summary();

        if !self.failures.is_empty() {
            output.push_str("\n\nFailures:\n");
            for (identifier, diagnostic) in &self.failures {
                output.push_str(&format!("  - {}\n    Reason: {}\n", identifier, diagnostic));
            }
        }

        output
    }

    /// Export report as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import report from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
