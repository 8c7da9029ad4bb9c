//! Value types shared by the builder, validator and CLI.

mod attractor;
#[cfg(test)]
mod attractor_test;
mod build_trace;
mod expr;
mod predicate;
mod validation_report;
#[cfg(test)]
mod validation_report_test;

pub use attractor::Attractor;
pub use build_trace::{BuildWarning, LevelSummary};
pub use expr::Expr;
pub use predicate::Predicate;
pub use validation_report::ValidationReport;
