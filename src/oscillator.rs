//! Two-state oscillator alternating between a predicate and its negation.

use crate::error::{Result, non_negative};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Period of every [XiOscillator].
pub const PERIOD: usize = 2;

/// Minimum number of steps [XiOscillator::is_stable] inspects (two full periods).
const MIN_STABILITY_STEPS: usize = 4;

/// Alternates deterministically between `initial` and `!initial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XiOscillator {
  initial: bool,
}

impl XiOscillator {
  pub fn new(initial: bool) -> Self {
    Self { initial }
  }

  pub fn initial(&self) -> bool {
    self.initial
  }

  /// The state at each of `steps` iterations, starting with `initial`.
  #[instrument(level = "trace")]
  pub fn iterate(&self, steps: usize) -> Vec<bool> {
    let mut current = self.initial;
    let mut history = Vec::with_capacity(steps);
    for _ in 0..steps {
      history.push(current);
      current = !current;
    }
    history
  }

  /// [XiOscillator::iterate] for a signed step count; negative counts are a range error.
  pub fn iterate_signed(&self, steps: i64) -> Result<Vec<bool>> {
    Ok(self.iterate(non_negative("steps", steps)?))
  }

  pub fn period(&self) -> usize {
    PERIOD
  }

  /// True if the first `steps` states (at least 4) repeat with [PERIOD].
  pub fn is_stable(&self, steps: usize) -> bool {
    let sequence = self.iterate(steps.max(MIN_STABILITY_STEPS));
    let period = self.period();
    (period..sequence.len()).all(|i| sequence[i] == sequence[i - period])
  }
}
