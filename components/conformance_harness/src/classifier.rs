//! Pass/fail classification against a test's declared expectation.

use crate::assembler::is_negative_test;
use crate::engine::ExecutionOutcome;
use serde::{Deserialize, Serialize};

/// Verdict for a single executed test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Outcome matched the expectation.
    Pass,
    /// Outcome contradicted the expectation.
    Fail,
}

impl Verdict {
    /// Check if the verdict is a pass
    pub fn is_pass(self) -> bool {
        matches!(self, Verdict::Pass)
    }

    /// Check if the verdict is a fail
    pub fn is_fail(self) -> bool {
        matches!(self, Verdict::Fail)
    }
}

/// Classify one execution against the test's expectation.
///
/// A test is positive unless its body carries the negative marker; the
/// verdict is `Pass` exactly when the expectation and the outcome's success
/// polarity agree. The check is deliberately coarse: a negative test that
/// raised the wrong kind of exception still passes. Matching exception
/// identity would change acceptance semantics across the whole corpus.
// FIXME: This likely deserves a better check.
pub fn classify(raw: &str, outcome: &ExecutionOutcome) -> Verdict {
    let expected_positive = !is_negative_test(raw);
    if expected_positive == outcome.succeeded() {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}
