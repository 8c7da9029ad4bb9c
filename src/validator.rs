//! Structural checks of an attractor against its predicate.

use crate::canonical::{Canonicalizer, TruthTableCanonicalizer};
use crate::error::CanonicalError;
use crate::types::{Expr, Predicate, ValidationReport};
use std::collections::BTreeSet;
use tracing::{instrument, warn};

/// Validates with the default canonicalizer. Never fails; see [validate_with].
pub fn validate(attractor: &[Expr], predicate: &Predicate) -> ValidationReport {
  validate_with(attractor, predicate, &TruthTableCanonicalizer::default())
}

/// Canonicalizes every entry once and reports which of the predicate's atom,
/// negation, contradiction and tautology occur among the canonical forms.
///
/// Canonicalization failures are captured in [ValidationReport::error].
#[instrument(level = "trace", skip(attractor, predicate, canonicalizer), fields(total = attractor.len()))]
pub fn validate_with(
  attractor: &[Expr],
  predicate: &Predicate,
  canonicalizer: &dyn Canonicalizer,
) -> ValidationReport {
  match inspect(attractor, predicate, canonicalizer) {
    Ok(report) => report,
    Err(e) => {
      warn!(error = %e, "validation failed");
      ValidationReport::failed(attractor.len(), e.to_string())
    }
  }
}

fn inspect(
  attractor: &[Expr],
  predicate: &Predicate,
  canonicalizer: &dyn Canonicalizer,
) -> Result<ValidationReport, CanonicalError> {
  let forms = attractor
    .iter()
    .map(|e| canonicalizer.canonicalize(e))
    .collect::<Result<BTreeSet<Expr>, _>>()?;

  let present = |e: &Expr| -> Result<bool, CanonicalError> {
    Ok(forms.contains(&canonicalizer.canonicalize(e)?))
  };
  let contains_base_predicate = present(predicate.atom())?;
  let contains_base_negation = present(predicate.negation())?;
  let contains_contradiction = present(predicate.contradiction())?;
  let contains_tautology = present(predicate.tautology())?;

  let total_expressions = attractor.len();
  Ok(ValidationReport {
    total_expressions,
    unique_canonical_count: forms.len(),
    contains_base_predicate,
    contains_base_negation,
    contains_contradiction,
    contains_tautology,
    passed: contains_base_predicate && contains_base_negation && total_expressions > 0,
    error: None,
  })
}
