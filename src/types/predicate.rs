//! A named Boolean atom paired with its negation.

use crate::canonical::{Canonicalizer, TruthTableCanonicalizer};
use crate::error::{Result, XiError, json_kind};
use crate::reserved::ReservedNames;
use crate::types::Expr;
use std::sync::Arc;
use tracing::instrument;

/// Returns true if `name` is identifier-shaped: a letter or `_`, then letters, digits or `_`.
pub(crate) fn is_identifier(name: &str) -> bool {
  let mut chars = name.chars();
  match chars.next() {
    Some(c) if c.is_alphabetic() || c == '_' => {}
    _ => return false,
  }
  chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// A validated predicate symbol.
///
/// Immutable after construction. `atom` and `negation` are always complementary;
/// the canonical contradiction and tautology are computed once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
  name: Arc<str>,
  atom: Expr,
  negation: Expr,
  contradiction: Expr,
  tautology: Expr,
}

impl Predicate {
  /// Creates a predicate, rejecting names in the default [ReservedNames] table.
  pub fn new(name: &str) -> Result<Self> {
    Self::with_reserved(name, &ReservedNames::default())
  }

  /// Creates a predicate, rejecting names in `reserved`.
  #[instrument(level = "trace", skip(reserved))]
  pub fn with_reserved(name: &str, reserved: &ReservedNames) -> Result<Self> {
    if name.trim().is_empty() {
      return Err(XiError::InvalidPredicate(
        "Predicate name cannot be empty".to_string(),
      ));
    }
    if !is_identifier(name) {
      return Err(XiError::InvalidPredicate(format!(
        "'{}' is not a valid identifier",
        name
      )));
    }
    if reserved.contains(name) {
      return Err(XiError::InvalidPredicate(format!(
        "'{}' is a reserved name",
        name
      )));
    }

    let name: Arc<str> = Arc::from(name);
    let atom = Expr::Atom(name.clone());
    let negation = Expr::negate(atom.clone());
    let canonicalizer = TruthTableCanonicalizer::default();
    let contradiction = canonicalizer.canonicalize(&Expr::and(atom.clone(), negation.clone()))?;
    let tautology = canonicalizer.canonicalize(&Expr::or(atom.clone(), negation.clone()))?;

    Ok(Self {
      name,
      atom,
      negation,
      contradiction,
      tautology,
    })
  }

  /// Creates a predicate from a dynamically typed value; non-strings are a type mismatch.
  pub fn from_json(value: &serde_json::Value) -> Result<Self> {
    match value {
      serde_json::Value::String(name) => Self::new(name),
      other => Err(XiError::TypeMismatch {
        expected: "string",
        found: json_kind(other),
      }),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn atom(&self) -> &Expr {
    &self.atom
  }

  pub fn negation(&self) -> &Expr {
    &self.negation
  }

  /// `[atom, negation]`, always in that order.
  pub fn base_pair(&self) -> [Expr; 2] {
    [self.atom.clone(), self.negation.clone()]
  }

  /// Canonical form of `atom & ~atom`.
  pub fn contradiction(&self) -> &Expr {
    &self.contradiction
  }

  /// Canonical form of `atom | ~atom`.
  pub fn tautology(&self) -> &Expr {
    &self.tautology
  }
}
