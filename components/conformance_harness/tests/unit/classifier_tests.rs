//! Unit tests for pass/fail classification

use conformance_harness::{classify, ExecutionOutcome, Verdict};

const POSITIVE: &str = "var x = 1;";
const NEGATIVE: &str = "// @negative\nthrow new TypeError();";

#[test]
fn test_positive_test_succeeding_passes() {
    let outcome = ExecutionOutcome::success();
    assert_eq!(classify(POSITIVE, &outcome), Verdict::Pass);
}

#[test]
fn test_positive_test_failing_fails() {
    let outcome = ExecutionOutcome::failure("TypeError: boom");
    assert_eq!(classify(POSITIVE, &outcome), Verdict::Fail);
}

#[test]
fn test_negative_test_failing_passes() {
    let outcome = ExecutionOutcome::failure("SyntaxError");
    assert_eq!(classify(NEGATIVE, &outcome), Verdict::Pass);
}

#[test]
fn test_negative_test_succeeding_fails() {
    let outcome = ExecutionOutcome::success();
    assert_eq!(classify(NEGATIVE, &outcome), Verdict::Fail);
}

#[test]
fn test_negative_test_passes_regardless_of_exception_kind() {
    // The check matches polarity only; the wrong exception still counts.
    let outcome = ExecutionOutcome::failure("RangeError: wrong kind entirely");
    assert_eq!(classify(NEGATIVE, &outcome), Verdict::Pass);
}

#[test]
fn test_verdict_predicates() {
    assert!(Verdict::Pass.is_pass());
    assert!(!Verdict::Pass.is_fail());
    assert!(Verdict::Fail.is_fail());
    assert!(!Verdict::Fail.is_pass());
}
