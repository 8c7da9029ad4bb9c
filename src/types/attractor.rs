//! The ordered, deduplicated closure built from one predicate.

use super::{BuildWarning, Expr, LevelSummary, Predicate};

/// Result of [crate::build_attractor].
///
/// `expressions` is in discovery order: the base pair first, then each level's
/// first-seen canonical forms. No two entries share a canonical form.
#[derive(Debug, Clone, PartialEq)]
pub struct Attractor {
  pub(crate) predicate: Predicate,
  pub(crate) depth: usize,
  pub(crate) expressions: Vec<Expr>,
  pub(crate) levels: Vec<LevelSummary>,
  pub(crate) warnings: Vec<BuildWarning>,
}

impl Attractor {
  pub fn predicate(&self) -> &Predicate {
    &self.predicate
  }

  /// Requested depth.
  pub fn depth(&self) -> usize {
    self.depth
  }

  pub fn expressions(&self) -> &[Expr] {
    &self.expressions
  }

  pub fn len(&self) -> usize {
    self.expressions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.expressions.is_empty()
  }

  /// One entry per level actually iterated.
  pub fn levels(&self) -> &[LevelSummary] {
    &self.levels
  }

  /// Candidates dropped during the build.
  pub fn warnings(&self) -> &[BuildWarning] {
    &self.warnings
  }

  /// True once the last iterated level contributed no new canonical form.
  pub fn reached_fixpoint(&self) -> bool {
    self.levels.last().is_some_and(LevelSummary::is_fixpoint)
  }

  /// Rendered forms of the entries, in order.
  pub fn rendered(&self) -> Vec<String> {
    self.expressions.iter().map(ToString::to_string).collect()
  }

  pub fn into_expressions(self) -> Vec<Expr> {
    self.expressions
  }
}

impl AsRef<[Expr]> for Attractor {
  fn as_ref(&self) -> &[Expr] {
    &self.expressions
  }
}
