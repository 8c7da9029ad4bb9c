//! Level-by-level closure of a predicate's base pair under `&` and `|`.
//!
//! Each level combines every frontier expression with both base expressions
//! (frontier x base, AND before OR), canonicalizes the candidates and appends
//! first-seen canonical forms to the result. The whole candidate list, duplicates
//! included, becomes the next frontier. Nothing is cached across calls.

use crate::canonical::{Canonicalizer, TruthTableCanonicalizer};
use crate::error::{CanonicalError, Result, XiError, non_negative};
use crate::types::{Attractor, BuildWarning, Expr, LevelSummary, Predicate};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, instrument, warn};

/// Default ceiling for the requested depth.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Options for [build_attractor_with].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
  /// Requests with `depth > max_depth` fail before any work is done.
  pub max_depth: usize,
}

impl Default for BuildOptions {
  fn default() -> Self {
    Self {
      max_depth: DEFAULT_MAX_DEPTH,
    }
  }
}

impl BuildOptions {
  pub fn with_max_depth(max_depth: usize) -> Self {
    Self { max_depth }
  }

  /// Fails with [XiError::DepthLimitExceeded] when `depth` is above the ceiling.
  pub fn check_depth(&self, depth: usize) -> Result<()> {
    if depth > self.max_depth {
      return Err(XiError::DepthLimitExceeded {
        depth,
        max_depth: self.max_depth,
      });
    }
    Ok(())
  }
}

/// Converts a signed depth, raising [XiError::ValueRange] when negative.
pub fn depth_from_signed(depth: i64) -> Result<usize> {
  non_negative("depth", depth)
}

/// Builds the attractor with [BuildOptions::default] and the default canonicalizer.
pub fn build_attractor(predicate: &Predicate, depth: usize) -> Result<Attractor> {
  build_attractor_with(
    predicate,
    depth,
    &BuildOptions::default(),
    &TruthTableCanonicalizer::default(),
  )
}

/// Builds the attractor of `predicate` to `depth` levels.
///
/// Candidate canonicalization failures are recorded as [BuildWarning]s and the
/// candidate is skipped. Failure to canonicalize the base pair is an error.
#[instrument(level = "trace", skip(predicate, canonicalizer), fields(predicate = predicate.name()))]
pub fn build_attractor_with(
  predicate: &Predicate,
  depth: usize,
  options: &BuildOptions,
  canonicalizer: &dyn Canonicalizer,
) -> Result<Attractor> {
  options.check_depth(depth)?;

  let mut cache = CanonicalCache::new(canonicalizer);
  let mut base = Vec::with_capacity(2);
  for expr in predicate.base_pair() {
    base.push(cache.canonicalize(&expr)?);
  }

  let mut seen: HashSet<Expr> = HashSet::new();
  let mut expressions = Vec::new();
  for expr in &base {
    if seen.insert(expr.clone()) {
      expressions.push(expr.clone());
    }
  }

  let mut frontier = base.clone();
  let mut levels = Vec::new();
  let mut warnings = Vec::new();

  for level in 0..depth {
    let mut new_level = Vec::with_capacity(frontier.len() * base.len() * 2);
    for a in &frontier {
      for b in &base {
        for candidate in [Expr::and(a.clone(), b.clone()), Expr::or(a.clone(), b.clone())] {
          match cache.canonicalize(&candidate) {
            Ok(form) => new_level.push(form),
            Err(e) => {
              warn!(level, candidate = %candidate, error = %e, "skipping candidate");
              warnings.push(BuildWarning {
                level,
                candidate: candidate.to_string(),
                message: e.to_string(),
              });
            }
          }
        }
      }
    }

    let mut new_forms = 0;
    for form in &new_level {
      if seen.insert(form.clone()) {
        expressions.push(form.clone());
        new_forms += 1;
      }
    }

    debug!(level, candidates = new_level.len(), new_forms, "level complete");
    levels.push(LevelSummary {
      level,
      candidates: new_level.len(),
      new_forms,
    });

    frontier = new_level;
    if frontier.is_empty() {
      debug!(level, "no candidates formed, stopping");
      break;
    }
  }

  info!(
    depth,
    expressions = expressions.len(),
    warnings = warnings.len(),
    "attractor built"
  );
  Ok(Attractor {
    predicate: predicate.clone(),
    depth,
    expressions,
    levels,
    warnings,
  })
}

/// Per-call memo of canonical forms. Frontier entries repeat heavily, so most
/// candidates are already known.
struct CanonicalCache<'a> {
  canonicalizer: &'a dyn Canonicalizer,
  forms: HashMap<Expr, std::result::Result<Expr, CanonicalError>>,
}

impl<'a> CanonicalCache<'a> {
  fn new(canonicalizer: &'a dyn Canonicalizer) -> Self {
    Self {
      canonicalizer,
      forms: HashMap::new(),
    }
  }

  fn canonicalize(&mut self, expr: &Expr) -> std::result::Result<Expr, CanonicalError> {
    if let Some(cached) = self.forms.get(expr) {
      return cached.clone();
    }
    let result = self.canonicalizer.canonicalize(expr);
    self.forms.insert(expr.clone(), result.clone());
    result
  }
}
