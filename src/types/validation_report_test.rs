//! Tests for `ValidationReport`.

use super::validation_report::ValidationReport;

#[test]
fn failed_report_carries_error_and_does_not_pass() {
  let r = ValidationReport::failed(3, "boom");
  assert_eq!(r.total_expressions, 3);
  assert_eq!(r.error.as_deref(), Some("boom"));
  assert!(!r.passed);
  assert!(!r.contains_base_predicate);
}

#[test]
fn serializes_without_error_field_when_absent() {
  let r = ValidationReport {
    total_expressions: 2,
    unique_canonical_count: 2,
    contains_base_predicate: true,
    contains_base_negation: true,
    passed: true,
    ..ValidationReport::default()
  };
  let json = serde_json::to_value(&r).unwrap();
  assert_eq!(json["total_expressions"], 2);
  assert_eq!(json["passed"], true);
  assert!(json.get("error").is_none());
  let back: ValidationReport = serde_json::from_value(json).unwrap();
  assert_eq!(back, r);
}
