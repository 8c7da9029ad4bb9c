//! Attractor document save/load (JSON).

use crate::error::{Result, XiError, json_kind};
use crate::expr_parser::parse_expr;
use crate::types::{Attractor, Expr, Predicate, ValidationReport};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::instrument;

/// An exported attractor: the predicate, build parameters and rendered entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttractorDocument {
  pub predicate: String,
  pub depth: usize,
  pub max_depth: usize,
  /// Rendered canonical forms, in attractor order.
  pub expressions: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub validation: Option<ValidationReport>,
}

impl AttractorDocument {
  pub fn from_attractor(
    attractor: &Attractor,
    max_depth: usize,
    validation: Option<ValidationReport>,
  ) -> Self {
    Self {
      predicate: attractor.predicate().name().to_string(),
      depth: attractor.depth(),
      max_depth,
      expressions: attractor.rendered(),
      validation,
    }
  }

  /// Re-creates the predicate and parses every entry.
  pub fn to_expressions(&self) -> Result<(Predicate, Vec<Expr>)> {
    let predicate = Predicate::new(&self.predicate)?;
    let expressions = self
      .expressions
      .iter()
      .map(|s| parse_expr(s))
      .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok((predicate, expressions))
  }
}

/// Saves `doc` to `path` as pretty JSON, creating parent directories.
#[instrument(level = "trace", skip(path, doc))]
pub fn save_attractor_document(path: &Path, doc: &AttractorDocument) -> Result<()> {
  save_json(path, doc)
}

/// Loads a document from `path`.
///
/// Field kinds are checked before deserializing so a wrong kind surfaces as
/// [XiError::TypeMismatch] rather than a generic JSON error.
#[instrument(level = "trace", skip(path))]
pub fn load_attractor_document(path: &Path) -> Result<AttractorDocument> {
  let bytes = std::fs::read(path)?;
  let value: serde_json::Value = serde_json::from_slice(&bytes)?;
  check_document_shape(&value)?;
  Ok(serde_json::from_value(value)?)
}

pub(crate) fn check_document_shape(value: &serde_json::Value) -> Result<()> {
  let obj = value.as_object().ok_or_else(|| XiError::TypeMismatch {
    expected: "object",
    found: json_kind(value),
  })?;
  if let Some(p) = obj.get("predicate") {
    if !p.is_string() {
      return Err(XiError::TypeMismatch {
        expected: "string",
        found: json_kind(p),
      });
    }
  }
  if let Some(exprs) = obj.get("expressions") {
    let items = exprs.as_array().ok_or_else(|| XiError::TypeMismatch {
      expected: "array",
      found: json_kind(exprs),
    })?;
    if let Some(bad) = items.iter().find(|v| !v.is_string()) {
      return Err(XiError::TypeMismatch {
        expected: "string",
        found: json_kind(bad),
      });
    }
  }
  Ok(())
}

/// Writes an oscillation history as `step,state` CSV lines.
#[instrument(level = "trace", skip(path, history))]
pub fn save_oscillation_csv(path: &Path, history: &[bool]) -> Result<()> {
  let body: String = history
    .iter()
    .enumerate()
    .map(|(i, state)| format!("{},{}\n", i, state))
    .collect();
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, body)?;
  Ok(())
}

/// Saves any serializable value as pretty JSON.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
  let json = serde_json::to_string_pretty(value)?;
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, json)?;
  Ok(())
}
