//! Summary of structural properties of an attractor.

use serde::{Deserialize, Serialize};

/// Read-only report produced by [crate::validate].
///
/// `passed` requires the atom, its negation and a non-empty attractor;
/// contradiction and tautology presence are informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
  pub total_expressions: usize,
  pub unique_canonical_count: usize,
  pub contains_base_predicate: bool,
  pub contains_base_negation: bool,
  pub contains_contradiction: bool,
  pub contains_tautology: bool,
  pub passed: bool,
  /// Set when canonicalization failed; `passed` is then false.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl ValidationReport {
  /// A failed report carrying `error`.
  pub fn failed(total_expressions: usize, error: impl Into<String>) -> Self {
    Self {
      total_expressions,
      error: Some(error.into()),
      ..Self::default()
    }
  }
}
