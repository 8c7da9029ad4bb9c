//! Canonical forms for Boolean expressions.
//!
//! Canonicalization is the only notion of expression equality used by the
//! attractor builder and validator: two expressions are the same iff their
//! canonical forms are structurally equal.
//!
//! [TruthTableCanonicalizer] evaluates the truth table over the free atoms,
//! drops atoms that never influence the result, and emits a minimal
//! sum-of-products. Prime implicants come from Quine-McCluskey; the cover takes
//! essential primes first, then greedily the prime covering the most remaining
//! minterms (ties: fewer literals, then implicant order). Every step depends
//! only on the Boolean function, so equivalent inputs share one output.

use crate::error::CanonicalError;
use crate::types::Expr;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::instrument;

/// Default ceiling on free atoms for [TruthTableCanonicalizer].
pub const DEFAULT_MAX_ATOMS: usize = 12;

/// Maps an expression to its canonical representative.
pub trait Canonicalizer {
  fn canonicalize(&self, expr: &Expr) -> Result<Expr, CanonicalError>;

  /// True iff `a` and `b` have the same canonical form.
  fn equivalent(&self, a: &Expr, b: &Expr) -> Result<bool, CanonicalError> {
    Ok(self.canonicalize(a)? == self.canonicalize(b)?)
  }
}

/// Truth-table based canonicalizer with a bound on the number of free atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthTableCanonicalizer {
  max_atoms: usize,
}

impl TruthTableCanonicalizer {
  /// `max_atoms` is capped at 16 so row indices fit in `u32` implicants.
  pub fn new(max_atoms: usize) -> Self {
    Self {
      max_atoms: max_atoms.min(16),
    }
  }

  pub fn max_atoms(&self) -> usize {
    self.max_atoms
  }
}

impl Default for TruthTableCanonicalizer {
  fn default() -> Self {
    Self::new(DEFAULT_MAX_ATOMS)
  }
}

impl Canonicalizer for TruthTableCanonicalizer {
  #[instrument(level = "trace", skip(self), fields(expr = %expr))]
  fn canonicalize(&self, expr: &Expr) -> Result<Expr, CanonicalError> {
    let atoms = expr.atoms();
    if atoms.len() > self.max_atoms {
      return Err(CanonicalError::TooManyAtoms {
        found: atoms.len(),
        max: self.max_atoms,
      });
    }
    let table = TruthTable::of(expr, atoms).restrict_to_support();
    Ok(table.minimal_sum_of_products())
  }
}

impl Expr {
  /// Canonical form under the default [TruthTableCanonicalizer].
  pub fn canonical(&self) -> Result<Expr, CanonicalError> {
    TruthTableCanonicalizer::default().canonicalize(self)
  }

  /// Rendered canonical form, the stable textual identity of the expression.
  pub fn canonical_string(&self) -> Result<String, CanonicalError> {
    Ok(self.canonical()?.to_string())
  }
}

/// Truth table over sorted atoms. Row `r` assigns atom `i` the value of bit `i` of `r`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TruthTable {
  pub(crate) atoms: Vec<Arc<str>>,
  pub(crate) rows: Vec<bool>,
}

impl TruthTable {
  pub(crate) fn of(expr: &Expr, atoms: Vec<Arc<str>>) -> Self {
    let rows = (0..1usize << atoms.len())
      .map(|row| {
        expr.eval(&|name: &str| {
          atoms
            .binary_search_by(|a| a.as_ref().cmp(name))
            .map(|i| (row >> i) & 1 == 1)
            .unwrap_or(false)
        })
      })
      .collect();
    Self { atoms, rows }
  }

  /// True if flipping atom `i` changes the value of some row.
  pub(crate) fn depends_on(&self, i: usize) -> bool {
    let bit = 1usize << i;
    (0..self.rows.len())
      .filter(|row| row & bit == 0)
      .any(|row| self.rows[row] != self.rows[row | bit])
  }

  /// Drops atoms the function does not depend on.
  pub(crate) fn restrict_to_support(self) -> Self {
    let support: Vec<usize> = (0..self.atoms.len()).filter(|&i| self.depends_on(i)).collect();
    if support.len() == self.atoms.len() {
      return self;
    }
    let rows = (0..1usize << support.len())
      .map(|small| {
        let full = support
          .iter()
          .enumerate()
          .filter(|(j, _)| (small >> j) & 1 == 1)
          .fold(0usize, |acc, (_, &i)| acc | (1 << i));
        self.rows[full]
      })
      .collect();
    let atoms = support.iter().map(|&i| self.atoms[i].clone()).collect();
    Self { atoms, rows }
  }

  pub(crate) fn minterms(&self) -> Vec<u32> {
    self
      .rows
      .iter()
      .enumerate()
      .filter(|(_, v)| **v)
      .map(|(row, _)| row as u32)
      .collect()
  }

  pub(crate) fn minimal_sum_of_products(&self) -> Expr {
    let minterms = self.minterms();
    if minterms.is_empty() {
      return Expr::Const(false);
    }
    if minterms.len() == self.rows.len() {
      return Expr::Const(true);
    }
    let n = self.atoms.len() as u32;
    let primes = prime_implicants(&minterms);
    let cover = select_cover(&primes, &minterms, n);
    let mut terms: Vec<Expr> = cover.iter().map(|imp| imp.to_term(&self.atoms)).collect();
    terms.sort_by(|a, b| a.size().cmp(&b.size()).then_with(|| a.cmp(b)));
    if terms.len() == 1 {
      terms.remove(0)
    } else {
      Expr::Or(terms)
    }
  }
}

/// A product term: `mask` bits are don't-care; `bits` is zero wherever `mask` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Implicant {
  pub(crate) bits: u32,
  pub(crate) mask: u32,
}

impl Implicant {
  pub(crate) fn covers(&self, minterm: u32) -> bool {
    minterm & !self.mask == self.bits
  }

  pub(crate) fn literal_count(&self, n: u32) -> u32 {
    n - self.mask.count_ones()
  }

  pub(crate) fn combine(&self, other: &Implicant) -> Option<Implicant> {
    if self.mask != other.mask {
      return None;
    }
    let diff = self.bits ^ other.bits;
    (diff.count_ones() == 1).then(|| Implicant {
      bits: self.bits & !diff,
      mask: self.mask | diff,
    })
  }

  fn to_term(self, atoms: &[Arc<str>]) -> Expr {
    let mut literals: Vec<Expr> = atoms
      .iter()
      .enumerate()
      .filter(|(i, _)| (self.mask >> i) & 1 == 0)
      .map(|(i, name)| {
        let atom = Expr::Atom(name.clone());
        if (self.bits >> i) & 1 == 1 { atom } else { Expr::negate(atom) }
      })
      .collect();
    match literals.len() {
      0 => Expr::Const(true),
      1 => literals.remove(0),
      _ => Expr::And(literals),
    }
  }
}

pub(crate) fn prime_implicants(minterms: &[u32]) -> Vec<Implicant> {
  let mut current: BTreeSet<Implicant> = minterms
    .iter()
    .map(|&m| Implicant { bits: m, mask: 0 })
    .collect();
  let mut primes = BTreeSet::new();
  while !current.is_empty() {
    let items: Vec<Implicant> = current.iter().copied().collect();
    let mut merged = vec![false; items.len()];
    let mut next = BTreeSet::new();
    for i in 0..items.len() {
      for j in (i + 1)..items.len() {
        if let Some(c) = items[i].combine(&items[j]) {
          next.insert(c);
          merged[i] = true;
          merged[j] = true;
        }
      }
    }
    primes.extend(
      items
        .iter()
        .zip(merged)
        .filter(|(_, m)| !m)
        .map(|(imp, _)| *imp),
    );
    current = next;
  }
  primes.into_iter().collect()
}

pub(crate) fn select_cover(primes: &[Implicant], minterms: &[u32], n: u32) -> Vec<Implicant> {
  let mut chosen: Vec<Implicant> = Vec::new();
  for &m in minterms {
    let mut covering = primes.iter().filter(|p| p.covers(m));
    if let (Some(only), None) = (covering.next(), covering.next()) {
      if !chosen.contains(only) {
        chosen.push(*only);
      }
    }
  }
  let mut uncovered: BTreeSet<u32> = minterms
    .iter()
    .copied()
    .filter(|&m| !chosen.iter().any(|p| p.covers(m)))
    .collect();
  while !uncovered.is_empty() {
    let gain = |p: &Implicant| uncovered.iter().filter(|&&m| p.covers(m)).count();
    let best = primes
      .iter()
      .filter(|p| !chosen.contains(p))
      .max_by(|a, b| {
        gain(a)
          .cmp(&gain(b))
          .then_with(|| b.literal_count(n).cmp(&a.literal_count(n)))
          .then_with(|| b.cmp(a))
      })
      .copied();
    let Some(best) = best else { break };
    uncovered.retain(|&m| !best.covers(m));
    chosen.push(best);
  }
  chosen
}
