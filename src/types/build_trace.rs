//! Per-level bookkeeping recorded while building an attractor.

use serde::{Deserialize, Serialize};

/// Counts for one closure level.
///
/// A level with `new_forms == 0` added nothing to the attractor: the closure
/// has reached a fixpoint for the canonicalizer in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
  /// 0-based level index.
  pub level: usize,
  /// Candidates formed this level (the next frontier size).
  pub candidates: usize,
  /// Candidates whose canonical form had not been seen before.
  pub new_forms: usize,
}

impl LevelSummary {
  pub fn is_fixpoint(&self) -> bool {
    self.new_forms == 0
  }
}

/// A candidate dropped because it could not be canonicalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildWarning {
  /// Level at which the candidate was formed.
  pub level: usize,
  /// Rendered (non-canonical) candidate.
  pub candidate: String,
  pub message: String,
}
