//! Empirical checks of attractor convergence and oscillator behaviour.

use crate::builder::build_attractor;
use crate::error::Result;
use crate::oscillator::{PERIOD, XiOscillator};
use crate::types::Predicate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{info, instrument};

/// Depth used by [verify_contradiction_preservation].
pub const CONTRADICTION_DEPTH: usize = 3;

/// Sequence length used by [prove_period_stability].
pub const PERIOD_SEQUENCE_LENGTH: usize = 100;

/// Steps used by [run_formal_verification] for the entropy measurement.
pub const ENTROPY_STEPS: usize = 1000;

/// Metrics for one depth of [prove_attractor_stability].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthMetrics {
  pub depth: usize,
  pub total_expressions: usize,
  pub unique_canonical: usize,
  /// Sorted rendered canonical forms.
  pub expressions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilityProof {
  pub levels: Vec<DepthMetrics>,
  /// First depth whose unique count equals the previous depth's.
  pub convergence_depth: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodProof {
  pub base_period: usize,
  pub is_periodic: bool,
  pub sequence_length: usize,
  pub period_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationSummary {
  pub convergence_proof: StabilityProof,
  pub contradiction_preservation: bool,
  pub oscillation_stability: PeriodProof,
  pub entropy_conservation: f64,
}

/// Builds depths `1..=max_depth` and stops at the first depth that adds no
/// new canonical form.
#[instrument(level = "trace")]
pub fn prove_attractor_stability(predicate_name: &str, max_depth: usize) -> Result<StabilityProof> {
  let predicate = Predicate::new(predicate_name)?;
  let mut levels: Vec<DepthMetrics> = Vec::new();
  let mut convergence_depth = None;

  for depth in 1..=max_depth {
    let attractor = build_attractor(&predicate, depth)?;
    let forms = attractor
      .expressions()
      .iter()
      .map(|e| e.canonical_string())
      .collect::<std::result::Result<BTreeSet<String>, _>>()?;
    let metrics = DepthMetrics {
      depth,
      total_expressions: attractor.len(),
      unique_canonical: forms.len(),
      expressions: forms.into_iter().collect(),
    };
    let converged = levels
      .last()
      .is_some_and(|prev| prev.unique_canonical == metrics.unique_canonical);
    levels.push(metrics);
    if converged {
      convergence_depth = Some(depth);
      break;
    }
  }

  Ok(StabilityProof {
    levels,
    convergence_depth,
  })
}

/// True if the depth-3 attractor contains the canonical contradiction.
#[instrument(level = "trace")]
pub fn verify_contradiction_preservation(predicate_name: &str) -> Result<bool> {
  let predicate = Predicate::new(predicate_name)?;
  let attractor = build_attractor(&predicate, CONTRADICTION_DEPTH)?;
  Ok(
    attractor
      .expressions()
      .iter()
      .any(|e| e == predicate.contradiction()),
  )
}

/// Checks that a 100-step sequence repeats with the oscillator's period.
pub fn prove_period_stability(initial: bool) -> PeriodProof {
  let sequence = XiOscillator::new(initial).iterate(PERIOD_SEQUENCE_LENGTH);
  let is_periodic = (0..sequence.len().saturating_sub(PERIOD))
    .all(|i| sequence[i] == sequence[i + PERIOD]);
  PeriodProof {
    base_period: PERIOD,
    is_periodic,
    sequence_length: sequence.len(),
    period_verified: is_periodic,
  }
}

/// Shannon entropy in bits of the state frequencies over `steps` iterations.
pub fn measure_entropy(steps: usize) -> f64 {
  let sequence = XiOscillator::new(true).iterate(steps);
  let true_count = sequence.iter().filter(|&&s| s).count();
  let false_count = steps - true_count;
  if true_count == 0 || false_count == 0 {
    return 0.0;
  }
  let p_true = true_count as f64 / steps as f64;
  let p_false = false_count as f64 / steps as f64;
  -(p_true * p_true.log2() + p_false * p_false.log2())
}

/// Runs every check for predicate `X`.
#[instrument(level = "trace")]
pub fn run_formal_verification() -> Result<VerificationSummary> {
  let summary = VerificationSummary {
    convergence_proof: prove_attractor_stability("X", 5)?,
    contradiction_preservation: verify_contradiction_preservation("X")?,
    oscillation_stability: prove_period_stability(true),
    entropy_conservation: measure_entropy(ENTROPY_STEPS),
  };
  info!(
    convergence_depth = ?summary.convergence_proof.convergence_depth,
    contradiction_preservation = summary.contradiction_preservation,
    "verification complete"
  );
  Ok(summary)
}
