//! Tests for `Attractor`.

use super::{Attractor, Expr, LevelSummary, Predicate};

fn attractor(levels: Vec<LevelSummary>) -> Attractor {
  let predicate = Predicate::new("X").unwrap();
  Attractor {
    expressions: predicate.base_pair().to_vec(),
    predicate,
    depth: levels.len(),
    levels,
    warnings: vec![],
  }
}

#[test]
fn accessors_expose_entries_in_order() {
  let a = attractor(vec![]);
  assert_eq!(a.len(), 2);
  assert!(!a.is_empty());
  assert_eq!(a.depth(), 0);
  assert_eq!(a.rendered(), vec!["X", "~X"]);
  assert_eq!(a.as_ref()[0], Expr::atom("X"));
  assert_eq!(a.predicate().name(), "X");
  assert!(a.warnings().is_empty());
}

#[test]
fn fixpoint_follows_last_level() {
  assert!(!attractor(vec![]).reached_fixpoint());
  let growing = LevelSummary {
    level: 0,
    candidates: 8,
    new_forms: 2,
  };
  let flat = LevelSummary {
    level: 1,
    candidates: 32,
    new_forms: 0,
  };
  assert!(!attractor(vec![growing]).reached_fixpoint());
  assert!(attractor(vec![growing, flat]).reached_fixpoint());
  assert!(flat.is_fixpoint());
}

#[test]
fn into_expressions_returns_owned_entries() {
  let exprs = attractor(vec![]).into_expressions();
  assert_eq!(exprs, vec![Expr::atom("X"), !Expr::atom("X")]);
}
