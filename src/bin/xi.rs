//! CLI: build, validate and inspect Xi attractors.
//!
//! Usage: `xi <COMMAND> [OPTIONS]`
//! Example: xi symbolic --predicate X --depth 3 --validate --verbose
//!
//! Logs go to stderr; set RUST_LOG=xi_attractor=trace for span enter/exit and events.

use clap::{ArgAction, Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};
use xi_attractor::builder::{BuildOptions, DEFAULT_MAX_DEPTH, depth_from_signed};
use xi_attractor::report_io::{
  AttractorDocument, load_attractor_document, save_attractor_document, save_json,
  save_oscillation_csv,
};
use xi_attractor::verification::run_formal_verification;
use xi_attractor::{
  Predicate, TruthTableCanonicalizer, ValidationReport, XiError, XiOscillator, build_attractor,
  build_attractor_with, validate,
};

/// Environment variable that overrides `--max-depth` when set.
const MAX_DEPTH_ENV: &str = "XI_MAX_DEPTH";

/// Build and inspect Xi attractors: the closure of a predicate and its negation.
#[derive(Parser, Debug)]
#[command(name = "xi")]
#[command(
  after_help = r#"Environment variables:
  XI_MAX_DEPTH   Depth ceiling for `symbolic`; overrides --max-depth when set.
  RUST_LOG       Log filter (default: info). Logs are written to stderr.

Examples:
  xi oscillate --steps 10 --initial true
  xi symbolic --predicate X --depth 3 --validate
  xi symbolic --predicate X --depth 2 --output attractor.json
  xi validate attractor.json
  xi verify --output results.json
  xi demo"#
)]
struct Args {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Run the two-state oscillator.
  Oscillate {
    /// Number of oscillation steps.
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    steps: i64,
    /// Initial state (true for x, false for ~x).
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    initial: bool,
    /// Write `step,state` CSV lines here instead of printing.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
  },
  /// Build the attractor of a predicate.
  Symbolic {
    /// Predicate name.
    #[arg(long, default_value = "X")]
    predicate: String,
    /// Recursion depth.
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    depth: i64,
    /// Depth ceiling. Overridden by XI_MAX_DEPTH if set.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
    /// Validate the attractor.
    #[arg(long)]
    validate: bool,
    /// Print every expression.
    #[arg(long)]
    verbose: bool,
    /// Save the attractor (and validation, if requested) as JSON.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
  },
  /// Re-validate an attractor saved by `symbolic --output`.
  Validate {
    /// Path to the attractor JSON document.
    #[arg(value_name = "FILE")]
    path: PathBuf,
  },
  /// Run the convergence and oscillation checks.
  Verify {
    /// Save the results as JSON.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
  },
  /// Short tour of the oscillator, builder and validator.
  Demo,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();
  info!(command = ?args.command, "xi starting");

  let result = match args.command {
    Command::Oscillate {
      steps,
      initial,
      output,
    } => cmd_oscillate(steps, initial, output),
    Command::Symbolic {
      predicate,
      depth,
      max_depth,
      validate,
      verbose,
      output,
    } => cmd_symbolic(&predicate, depth, max_depth, validate, verbose, output),
    Command::Validate { path } => cmd_validate(path),
    Command::Verify { output } => cmd_verify(output),
    Command::Demo => cmd_demo(),
  };

  match result {
    Ok(true) => {}
    Ok(false) => process::exit(1),
    Err(e) => {
      eprintln!("Error: {}", e);
      process::exit(1);
    }
  }
}

/// Env var beats the flag. Unparsable values are reported, not ignored.
fn resolve_max_depth(flag: usize) -> Result<usize, XiError> {
  match env::var(MAX_DEPTH_ENV) {
    Ok(v) => v.trim().parse().map_err(|_| XiError::TypeMismatch {
      expected: "non-negative integer",
      found: format!("{}={:?}", MAX_DEPTH_ENV, v),
    }),
    Err(_) => Ok(flag),
  }
}

fn print_report(report: &ValidationReport) {
  println!(
    "Validation: {}",
    if report.passed { "PASSED" } else { "FAILED" }
  );
  println!("Contains contradiction: {}", report.contains_contradiction);
  println!("Contains tautology: {}", report.contains_tautology);
  println!("Unique canonical forms: {}", report.unique_canonical_count);
  if let Some(e) = &report.error {
    println!("Validation error: {}", e);
  }
}

fn cmd_oscillate(steps: i64, initial: bool, output: Option<PathBuf>) -> Result<bool, XiError> {
  let history = XiOscillator::new(initial).iterate_signed(steps)?;
  match output {
    Some(path) => {
      save_oscillation_csv(&path, &history)?;
      println!("Oscillation history saved to {}", path.display());
    }
    None => {
      println!("Oscillation history:");
      for (i, state) in history.iter().enumerate() {
        println!("Step {}: {}", i, state);
      }
    }
  }
  Ok(true)
}

fn cmd_symbolic(
  name: &str,
  depth: i64,
  max_depth: usize,
  run_validation: bool,
  verbose: bool,
  output: Option<PathBuf>,
) -> Result<bool, XiError> {
  let predicate = Predicate::new(name)?;
  let depth = depth_from_signed(depth)?;
  let max_depth = resolve_max_depth(max_depth)?;
  info!(predicate = name, depth, max_depth, "building attractor");

  let attractor = build_attractor_with(
    &predicate,
    depth,
    &BuildOptions::with_max_depth(max_depth),
    &TruthTableCanonicalizer::default(),
  )?;

  println!("Xi attractor for '{}' at depth {}:", name, depth);
  println!("Total expressions: {}", attractor.len());
  if attractor.reached_fixpoint() {
    println!("Fixpoint reached: no new forms at the last level");
  }
  for w in attractor.warnings() {
    eprintln!("Warning: level {}: skipped {}: {}", w.level, w.candidate, w.message);
  }

  let report = run_validation.then(|| validate(attractor.expressions(), &predicate));
  if let Some(r) = &report {
    print_report(r);
  }

  if verbose {
    println!();
    println!("Expressions:");
    for (i, expr) in attractor.expressions().iter().enumerate() {
      println!("  {}: {}", i + 1, expr);
    }
  }

  if let Some(path) = output {
    let doc = AttractorDocument::from_attractor(&attractor, max_depth, report);
    save_attractor_document(&path, &doc)?;
    println!("Attractor saved to {}", path.display());
  }
  Ok(true)
}

fn cmd_validate(path: PathBuf) -> Result<bool, XiError> {
  let doc = load_attractor_document(&path)?;
  let (predicate, expressions) = doc.to_expressions()?;
  let report = validate(&expressions, &predicate);
  println!(
    "Attractor for '{}' at depth {} ({} expressions)",
    doc.predicate,
    doc.depth,
    expressions.len()
  );
  print_report(&report);
  Ok(report.passed)
}

fn cmd_verify(output: Option<PathBuf>) -> Result<bool, XiError> {
  println!("Running formal verification suite...");
  let summary = run_formal_verification()?;

  println!();
  println!("CONVERGENCE PROOF:");
  for level in &summary.convergence_proof.levels {
    println!(
      "  depth {}: {} expressions, {} unique",
      level.depth, level.total_expressions, level.unique_canonical
    );
  }
  match summary.convergence_proof.convergence_depth {
    Some(d) => println!("  convergence_depth: {}", d),
    None => println!("  convergence_depth: none"),
  }
  println!("CONTRADICTION PRESERVATION:");
  println!("  Result: {}", summary.contradiction_preservation);
  println!("OSCILLATION STABILITY:");
  println!("  base_period: {}", summary.oscillation_stability.base_period);
  println!("  period_verified: {}", summary.oscillation_stability.period_verified);
  println!("ENTROPY CONSERVATION:");
  println!("  Result: {}", summary.entropy_conservation);

  if let Some(path) = output {
    save_json(&path, &summary)?;
    println!();
    println!("Results saved to {}", path.display());
  }
  Ok(true)
}

fn cmd_demo() -> Result<bool, XiError> {
  println!("Xi Attractor Demo");
  println!("=================");

  println!();
  println!("1. Oscillator:");
  println!("Oscillation: {:?}", XiOscillator::new(true).iterate(8));

  println!();
  println!("2. Attractor:");
  let predicate = Predicate::new("Demo")?;
  let attractor = build_attractor(&predicate, 2)?;
  println!("Xi attractor has {} expressions", attractor.len());
  println!("Expressions: {}", attractor.rendered().join(", "));

  println!();
  println!("3. Validation:");
  let report = validate(attractor.expressions(), &predicate);
  println!("Validation passed: {}", report.passed);
  Ok(report.passed)
}
