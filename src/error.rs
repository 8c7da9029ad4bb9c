//! Error taxonomy for predicate construction, attractor building and document I/O.

use thiserror::Error;

/// Failure to canonicalize a single expression.
///
/// Inside the attractor builder this is recoverable: the candidate is dropped
/// and recorded as a [crate::types::BuildWarning].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonicalError {
  #[error("expression has {found} free atoms, canonicalizer supports at most {max}")]
  TooManyAtoms { found: usize, max: usize },
  #[error("{0}")]
  Rejected(String),
}

/// Failure to parse expression text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error at offset {offset}: {message}")]
pub struct ParseError {
  pub offset: usize,
  pub message: String,
}

impl ParseError {
  pub(crate) fn new(offset: usize, message: impl Into<String>) -> Self {
    Self {
      offset,
      message: message.into(),
    }
  }
}

/// Errors surfaced by the public operations of this crate.
#[derive(Debug, Error)]
pub enum XiError {
  #[error("type mismatch: expected {expected}, found {found}")]
  TypeMismatch {
    expected: &'static str,
    found: String,
  },
  #[error("invalid predicate: {0}")]
  InvalidPredicate(String),
  #[error("{name} must be non-negative, got {value}")]
  ValueRange { name: &'static str, value: i64 },
  #[error("depth {depth} exceeds maximum allowed depth {max_depth}")]
  DepthLimitExceeded { depth: usize, max_depth: usize },
  #[error("canonicalization failed: {0}")]
  Canonicalization(#[from] CanonicalError),
  #[error(transparent)]
  Parse(#[from] ParseError),
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error(transparent)]
  Json(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, XiError>;

/// Converts a signed count (depth, steps) to `usize`, rejecting negatives.
pub fn non_negative(name: &'static str, value: i64) -> Result<usize> {
  usize::try_from(value).map_err(|_| XiError::ValueRange { name, value })
}

/// Describes a JSON value's kind for [XiError::TypeMismatch] messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> String {
  match value {
    serde_json::Value::Null => "null",
    serde_json::Value::Bool(_) => "bool",
    serde_json::Value::Number(_) => "number",
    serde_json::Value::String(_) => "string",
    serde_json::Value::Array(_) => "array",
    serde_json::Value::Object(_) => "object",
  }
  .to_string()
}
