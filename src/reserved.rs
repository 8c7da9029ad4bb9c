//! Reserved-name table used to reject predicate names.

use std::collections::BTreeSet;

/// Names rejected by [ReservedNames::default]: boolean constants, logical
/// keywords and common control-flow keywords.
pub const DEFAULT_RESERVED_NAMES: &[&str] = &[
  "True", "False", "None", "true", "false", "none", "and", "or", "not", "xor", "if", "else",
  "elif", "for", "while", "def", "class", "return", "yield", "import", "from", "as", "try",
  "except", "finally", "with", "lambda", "global", "nonlocal", "in", "is",
];

/// Explicit, enumerable set of names a predicate may not use. Matching is exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedNames {
  names: BTreeSet<String>,
}

impl ReservedNames {
  pub fn new<I, S>(names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      names: names.into_iter().map(Into::into).collect(),
    }
  }

  /// A table that reserves nothing.
  pub fn empty() -> Self {
    Self {
      names: BTreeSet::new(),
    }
  }

  /// Returns a copy of this table with `name` added.
  pub fn with(mut self, name: impl Into<String>) -> Self {
    self.names.insert(name.into());
    self
  }

  pub fn contains(&self, name: &str) -> bool {
    self.names.contains(name)
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.names.iter().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.names.len()
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }
}

impl Default for ReservedNames {
  fn default() -> Self {
    Self::new(DEFAULT_RESERVED_NAMES.iter().copied())
  }
}
