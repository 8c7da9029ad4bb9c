//! # xi-attractor
//!
//! Builds the "attractor" of a predicate: the depth-bounded closure of the pair
//! `{x, ~x}` under conjunction and disjunction, keeping only semantically
//! distinct expressions.
//!
//! ## Architecture
//!
//! - [types::Predicate]: a validated atom, its negation, and their canonical
//!   contradiction and tautology.
//! - [canonical]: truth-table canonical forms, the sole equality test.
//! - [builder]: level-by-level closure with a depth ceiling and recoverable
//!   per-candidate warnings.
//! - [validator]: presence checks over a built attractor.
//!
//! The oscillator, verification checks and JSON document I/O back the `xi` CLI.
//!
//! ```
//! use xi_attractor::{Predicate, build_attractor, validate};
//!
//! let p = Predicate::new("X").unwrap();
//! let a = build_attractor(&p, 1).unwrap();
//! assert_eq!(a.rendered(), vec!["X", "~X", "false", "true"]);
//! assert!(validate(a.expressions(), &p).passed);
//! ```

pub mod builder;
pub mod canonical;
#[cfg(test)]
mod canonical_test;
pub mod error;
pub mod expr_parser;
pub mod oscillator;
pub mod report_io;
#[cfg(test)]
mod report_io_test;
pub mod reserved;
pub mod types;
pub mod validator;
pub mod verification;

pub use builder::{BuildOptions, DEFAULT_MAX_DEPTH, build_attractor, build_attractor_with};
pub use canonical::{Canonicalizer, TruthTableCanonicalizer};
pub use error::{CanonicalError, ParseError, Result, XiError};
pub use expr_parser::parse_expr;
pub use oscillator::XiOscillator;
pub use reserved::ReservedNames;
pub use types::{Attractor, BuildWarning, Expr, LevelSummary, Predicate, ValidationReport};
pub use validator::{validate, validate_with};
