//! Tests for `canonical`.

use crate::canonical::{
  Canonicalizer, Implicant, TruthTable, TruthTableCanonicalizer, prime_implicants, select_cover,
};
use crate::error::CanonicalError;
use crate::types::Expr;
use proptest::prelude::*;

fn x() -> Expr {
  Expr::atom("X")
}

fn y() -> Expr {
  Expr::atom("Y")
}

fn z() -> Expr {
  Expr::atom("Z")
}

fn canon(e: &Expr) -> String {
  TruthTableCanonicalizer::default()
    .canonicalize(e)
    .unwrap()
    .to_string()
}

#[test]
fn single_atom_classes() {
  assert_eq!(canon(&x()), "X");
  assert_eq!(canon(&!x()), "~X");
  assert_eq!(canon(&(x() & x())), "X");
  assert_eq!(canon(&(x() | x())), "X");
  assert_eq!(canon(&(x() & !x())), "false");
  assert_eq!(canon(&(x() | !x())), "true");
  assert_eq!(canon(&!!x()), "X");
}

#[test]
fn constants_absorb() {
  assert_eq!(canon(&(Expr::Const(false) | x())), "X");
  assert_eq!(canon(&(Expr::Const(true) & !x())), "~X");
  assert_eq!(canon(&(Expr::Const(true) | x())), "true");
  assert_eq!(canon(&(Expr::Const(false) & x())), "false");
}

#[test]
fn vacuous_atoms_are_dropped() {
  assert_eq!(canon(&((x() & y()) | (x() & !y()))), "X");
  assert_eq!(canon(&(y() | !y() | (x() & z()))), "true");
}

#[test]
fn two_atom_forms_are_minimal() {
  assert_eq!(canon(&(x() & y())), "X & Y");
  assert_eq!(canon(&(y() | x())), "X | Y");
  assert_eq!(canon(&!(x() & y())), "~X | ~Y");
  assert_eq!(canon(&((x() & !y()) | (!x() & y()))), "X & ~Y | ~X & Y");
}

#[test]
fn absorption_and_distribution() {
  assert_eq!(canon(&(x() | (x() & y()))), "X");
  assert_eq!(canon(&((x() | y()) & (x() | z()))), "X | Y & Z");
}

#[test]
fn equivalent_uses_canonical_forms() {
  let c = TruthTableCanonicalizer::default();
  assert!(c.equivalent(&(x() & y()), &(y() & x())).unwrap());
  assert!(!c.equivalent(&(x() & y()), &(x() | y())).unwrap());
}

#[test]
fn too_many_atoms_is_an_error() {
  let c = TruthTableCanonicalizer::new(2);
  let err = c.canonicalize(&(x() & y() & z())).unwrap_err();
  assert_eq!(err, CanonicalError::TooManyAtoms { found: 3, max: 2 });
  assert!(c.canonicalize(&(x() & y())).is_ok());
}

#[test]
fn max_atoms_is_capped() {
  assert_eq!(TruthTableCanonicalizer::new(100).max_atoms(), 16);
  assert_eq!(TruthTableCanonicalizer::default().max_atoms(), 12);
}

#[test]
fn expr_canonical_helpers() {
  assert_eq!((x() & !x()).canonical().unwrap(), Expr::Const(false));
  assert_eq!((x() | x()).canonical_string().unwrap(), "X");
}

#[test]
fn truth_table_rows_and_support() {
  let e = x() & Expr::Const(true);
  let t = TruthTable::of(&(e | (y() & !y())), (x() | y()).atoms());
  assert_eq!(t.rows, vec![false, true, false, true]);
  assert!(t.depends_on(0));
  assert!(!t.depends_on(1));
  let r = t.restrict_to_support();
  assert_eq!(r.atoms.len(), 1);
  assert_eq!(r.rows, vec![false, true]);
  assert_eq!(r.minterms(), vec![1]);
}

#[test]
fn implicant_combine_and_cover() {
  let a = Implicant { bits: 0b01, mask: 0 };
  let b = Implicant { bits: 0b11, mask: 0 };
  let c = a.combine(&b).unwrap();
  assert_eq!(c, Implicant { bits: 0b01, mask: 0b10 });
  assert!(c.covers(0b01));
  assert!(c.covers(0b11));
  assert!(!c.covers(0b00));
  assert_eq!(c.literal_count(2), 1);
  assert!(a.combine(&Implicant { bits: 0b10, mask: 0 }).is_none());
  assert!(a.combine(&c).is_none());
}

#[test]
fn prime_implicants_of_or() {
  // X | Y over [X, Y]: minterms 1, 2, 3.
  let primes = prime_implicants(&[1, 2, 3]);
  assert_eq!(
    primes,
    vec![
      Implicant { bits: 0b01, mask: 0b10 },
      Implicant { bits: 0b10, mask: 0b01 },
    ]
  );
  let cover = select_cover(&primes, &[1, 2, 3], 2);
  assert_eq!(cover.len(), 2);
}

fn arb_expr() -> impl Strategy<Value = Expr> {
  let leaf = prop_oneof![
    Just(x()),
    Just(y()),
    Just(z()),
    any::<bool>().prop_map(Expr::Const),
  ];
  leaf.prop_recursive(4, 32, 3, |inner| {
    prop_oneof![
      inner.clone().prop_map(Expr::negate),
      (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::and(a, b)),
      (inner.clone(), inner).prop_map(|(a, b)| Expr::or(a, b)),
    ]
  })
}

fn agrees(a: &Expr, b: &Expr) -> bool {
  (0..8u32).all(|row| {
    let assign = move |name: &str| match name {
      "X" => row & 1 == 1,
      "Y" => row & 2 == 2,
      _ => row & 4 == 4,
    };
    a.eval(&assign) == b.eval(&assign)
  })
}

proptest! {
  #[test]
  fn canonical_form_is_equivalent_to_input(e in arb_expr()) {
    let c = e.canonical().unwrap();
    prop_assert!(agrees(&e, &c));
  }

  #[test]
  fn canonicalization_is_idempotent(e in arb_expr()) {
    let c = e.canonical().unwrap();
    prop_assert_eq!(c.canonical().unwrap(), c);
  }

  #[test]
  fn equivalent_inputs_share_a_canonical_form(a in arb_expr(), b in arb_expr()) {
    let same = agrees(&a, &b);
    prop_assert_eq!(a.canonical().unwrap() == b.canonical().unwrap(), same);
  }
}
