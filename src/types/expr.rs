//! Boolean expression value type over named atoms.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

/// A Boolean formula built from atoms, negation, conjunction and disjunction.
///
/// Expressions are immutable values. Structural equality (`==`) is syntactic;
/// semantic equality goes through a [crate::Canonicalizer].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Expr {
  Const(bool),
  Atom(Arc<str>),
  Not(Box<Expr>),
  /// Conjunction; empty is `true`.
  And(Vec<Expr>),
  /// Disjunction; empty is `false`.
  Or(Vec<Expr>),
}

impl Expr {
  pub fn atom(name: impl Into<Arc<str>>) -> Self {
    Expr::Atom(name.into())
  }

  pub fn negate(expr: Expr) -> Self {
    Expr::Not(Box::new(expr))
  }

  /// Binary conjunction. No flattening or simplification is performed.
  pub fn and(a: Expr, b: Expr) -> Self {
    Expr::And(vec![a, b])
  }

  /// Binary disjunction. No flattening or simplification is performed.
  pub fn or(a: Expr, b: Expr) -> Self {
    Expr::Or(vec![a, b])
  }

  /// Free atoms, sorted by name and deduplicated.
  pub fn atoms(&self) -> Vec<Arc<str>> {
    let mut out = BTreeSet::new();
    self.collect_atoms(&mut out);
    out.into_iter().collect()
  }

  fn collect_atoms(&self, out: &mut BTreeSet<Arc<str>>) {
    match self {
      Expr::Const(_) => {}
      Expr::Atom(name) => {
        out.insert(name.clone());
      }
      Expr::Not(inner) => inner.collect_atoms(out),
      Expr::And(items) | Expr::Or(items) => {
        for item in items {
          item.collect_atoms(out);
        }
      }
    }
  }

  /// Evaluates the expression under `assignment` (atom name to truth value).
  pub fn eval(&self, assignment: &dyn Fn(&str) -> bool) -> bool {
    match self {
      Expr::Const(v) => *v,
      Expr::Atom(name) => assignment(name),
      Expr::Not(inner) => !inner.eval(assignment),
      Expr::And(items) => items.iter().all(|e| e.eval(assignment)),
      Expr::Or(items) => items.iter().any(|e| e.eval(assignment)),
    }
  }

  /// Number of nodes in the expression tree.
  pub fn size(&self) -> usize {
    match self {
      Expr::Const(_) | Expr::Atom(_) => 1,
      Expr::Not(inner) => 1 + inner.size(),
      Expr::And(items) | Expr::Or(items) => 1 + items.iter().map(Expr::size).sum::<usize>(),
    }
  }

  pub fn is_const(&self) -> bool {
    matches!(self, Expr::Const(_))
  }

  /// Binding strength used by `Display` to decide on parentheses.
  fn precedence(&self) -> u8 {
    match self {
      Expr::Or(items) if items.len() > 1 => 1,
      Expr::And(items) if items.len() > 1 => 2,
      Expr::Or(items) | Expr::And(items) if items.len() == 1 => items[0].precedence(),
      _ => 3,
    }
  }

  fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, min_precedence: u8) -> fmt::Result {
    if self.precedence() < min_precedence {
      write!(f, "({})", self)
    } else {
      write!(f, "{}", self)
    }
  }

  fn fmt_joined(f: &mut fmt::Formatter<'_>, items: &[Expr], sep: &str, prec: u8) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
      if i > 0 {
        f.write_str(sep)?;
      }
      item.fmt_operand(f, prec)?;
    }
    Ok(())
  }
}

/// Renders with `~`, `&`, `|`; parentheses only where precedence requires them.
impl fmt::Display for Expr {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Expr::Const(true) => f.write_str("true"),
      Expr::Const(false) => f.write_str("false"),
      Expr::Atom(name) => f.write_str(name),
      Expr::Not(inner) => {
        f.write_str("~")?;
        inner.fmt_operand(f, 3)
      }
      Expr::And(items) if items.is_empty() => f.write_str("true"),
      Expr::Or(items) if items.is_empty() => f.write_str("false"),
      Expr::And(items) | Expr::Or(items) if items.len() == 1 => write!(f, "{}", items[0]),
      Expr::And(items) => Expr::fmt_joined(f, items, " & ", 2),
      Expr::Or(items) => Expr::fmt_joined(f, items, " | ", 1),
    }
  }
}

impl Not for Expr {
  type Output = Expr;

  fn not(self) -> Expr {
    Expr::negate(self)
  }
}

impl BitAnd for Expr {
  type Output = Expr;

  fn bitand(self, rhs: Expr) -> Expr {
    Expr::and(self, rhs)
  }
}

impl BitOr for Expr {
  type Output = Expr;

  fn bitor(self, rhs: Expr) -> Expr {
    Expr::or(self, rhs)
  }
}
