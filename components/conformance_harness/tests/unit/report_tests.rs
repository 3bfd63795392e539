//! Unit tests for the run report

use conformance_harness::RunReport;

#[test]
fn test_new_report_is_empty() {
    let report = RunReport::new(10);
    assert_eq!(report.total, 10);
    assert_eq!(report.passed, 0);
    assert_eq!(report.failed, 0);
    assert!(report.is_success());
}

#[test]
fn test_record_pass_and_failure() {
    let mut report = RunReport::new(3);
    report.record_pass();
    report.record_failure("ch15/a.js", "TypeError: boom");
    report.record_pass();

    assert_eq!(report.passed, 2);
    assert_eq!(report.failed, 1);
    assert!(!report.is_success());
    assert_eq!(
        report.failures,
        vec![("ch15/a.js".to_string(), "TypeError: boom".to_string())]
    );
}

#[test]
fn test_total_reflects_subset_even_with_failures() {
    let mut report = RunReport::new(2);
    report.record_failure("ch06/missing.js", "test content not found");
    report.record_pass();
    assert_eq!(report.total, 2);
    assert_eq!(report.passed + report.failed, report.total);
}

#[test]
fn test_pass_rate() {
    let mut report = RunReport::new(4);
    report.record_pass();
    report.record_pass();
    report.record_pass();
    report.record_failure("ch11/x.js", "boom");
    assert!((report.pass_rate() - 75.0).abs() < f64::EPSILON);
}

#[test]
fn test_pass_rate_empty_run() {
    assert_eq!(RunReport::new(0).pass_rate(), 0.0);
}

#[test]
fn test_summary_mentions_counts() {
    let mut report = RunReport::new(2);
    report.record_pass();
    report.record_failure("ch12/y.js", "ReferenceError");

    let summary = report.detailed_summary();
    assert!(summary.contains("Total: 2"));
    assert!(summary.contains("Failed: 1"));
    assert!(summary.contains("ch12/y.js"));
    assert!(summary.contains("ReferenceError"));
}

#[test]
fn test_report_json_round_trip() {
    let mut report = RunReport::new(1);
    report.record_failure("ch15/a.js", "boom");

    let json = report.to_json().unwrap();
    let back = RunReport::from_json(&json).unwrap();
    assert_eq!(back.total, 1);
    assert_eq!(back.failed, 1);
    assert_eq!(back.failures, report.failures);
}
