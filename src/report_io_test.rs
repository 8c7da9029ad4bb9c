//! Tests for attractor document save/load.

use crate::builder::{DEFAULT_MAX_DEPTH, build_attractor};
use crate::error::XiError;
use crate::report_io::{
  AttractorDocument, check_document_shape, load_attractor_document, save_attractor_document,
  save_json, save_oscillation_csv,
};
use crate::types::Predicate;
use crate::validator::validate;

#[test]
fn save_then_load_and_revalidate() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("out").join("attractor.json");
  let p = Predicate::new("X").unwrap();
  let a = build_attractor(&p, 2).unwrap();
  let report = validate(a.expressions(), &p);
  let doc = AttractorDocument::from_attractor(&a, DEFAULT_MAX_DEPTH, Some(report.clone()));
  save_attractor_document(&path, &doc).unwrap();
  assert!(path.exists());

  let loaded = load_attractor_document(&path).unwrap();
  assert_eq!(loaded, doc);
  assert_eq!(loaded.expressions, vec!["X", "~X", "false", "true"]);

  let (predicate, exprs) = loaded.to_expressions().unwrap();
  assert_eq!(exprs, a.expressions());
  assert_eq!(validate(&exprs, &predicate), report);
}

#[test]
fn load_missing_file_returns_io_error() {
  let dir = tempfile::tempdir().unwrap();
  let r = load_attractor_document(&dir.path().join("nonexistent.json"));
  assert!(matches!(r, Err(XiError::Io(_))));
}

#[test]
fn wrong_field_kinds_are_type_mismatches() {
  let cases = [
    serde_json::json!([]),
    serde_json::json!({"predicate": 1, "depth": 0, "max_depth": 10, "expressions": []}),
    serde_json::json!({"predicate": "X", "depth": 0, "max_depth": 10, "expressions": "X"}),
    serde_json::json!({"predicate": "X", "depth": 0, "max_depth": 10, "expressions": ["X", 2]}),
  ];
  for value in cases {
    assert!(
      matches!(check_document_shape(&value), Err(XiError::TypeMismatch { .. })),
      "{value}"
    );
  }
}

#[test]
fn type_mismatch_surfaces_from_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("bad.json");
  std::fs::write(
    &path,
    r#"{"predicate": "X", "depth": 0, "max_depth": 10, "expressions": "X"}"#,
  )
  .unwrap();
  assert!(matches!(
    load_attractor_document(&path),
    Err(XiError::TypeMismatch { expected: "array", .. })
  ));
}

#[test]
fn unparsable_entry_is_a_parse_error() {
  let doc = AttractorDocument {
    predicate: "X".to_string(),
    depth: 0,
    max_depth: 10,
    expressions: vec!["X &".to_string()],
    validation: None,
  };
  assert!(matches!(doc.to_expressions(), Err(XiError::Parse(_))));
}

#[test]
fn oscillation_csv_lists_steps() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("osc.csv");
  save_oscillation_csv(&path, &[true, false, true]).unwrap();
  let body = std::fs::read_to_string(&path).unwrap();
  assert_eq!(body, "0,true\n1,false\n2,true\n");
}

#[test]
fn save_json_writes_pretty_output() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("v.json");
  save_json(&path, &serde_json::json!({"ok": true})).unwrap();
  let parsed: serde_json::Value =
    serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
  assert_eq!(parsed["ok"], true);
}
