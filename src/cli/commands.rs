//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use invokegen_schema::{SchemaClosure, load_closure};

use crate::backend::{Codegen, GenerationError, stale_units, write_units};
use crate::config::GeneratorConfig;
use crate::frontend::diagnostics;

use super::{CliError, CliResult, ExitCode};

/// Validate the output directory to prevent path traversal.
fn validate_output_dir(out_dir: &Path) -> CliResult<()> {
    for component in out_dir.components() {
        if let std::path::Component::ParentDir = component {
            return Err(CliError::failure(format!(
                "Output directory '{}' contains path traversal (..)",
                out_dir.display()
            )));
        }
    }

    if out_dir.is_absolute() {
        tracing::warn!("Using absolute output path: {}", out_dir.display());
    }

    Ok(())
}

fn load_schema(schema: &Path) -> CliResult<SchemaClosure> {
    load_closure(schema).map_err(|e| CliError::failure(diagnostics::render_chain(&e)))
}

fn fatal(err: &GenerationError) -> CliError {
    CliError::failure(diagnostics::render(err))
}

/// Print per-function failures to stderr; returns the exit code they imply.
fn report_failures<'a>(failures: impl IntoIterator<Item = &'a dyn miette::Diagnostic>) -> ExitCode {
    let mut failed = false;
    for failure in failures {
        eprint!("{}", diagnostics::render(failure));
        failed = true;
    }
    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Generate every unit of the schema's root package into `out_dir`.
///
/// Functions that fail are reported and skipped; every other unit is still written, and the exit code is
/// nonzero. With `check`, nothing is written and stale or missing files fail the run instead.
pub fn generate(schema: &Path, out_dir: &Path, config: GeneratorConfig, check: bool) -> CliResult<ExitCode> {
    validate_output_dir(out_dir)?;
    let closure = load_schema(schema)?;
    let codegen = Codegen::new(config);
    let output = codegen.generate(&closure).map_err(|e| fatal(&e))?;

    let mut exit = report_failures(output.failures.iter().map(|f| f as &dyn miette::Diagnostic));

    if check {
        let stale = stale_units(&output.units, out_dir);
        for path in &stale {
            eprintln!("out of date: {}", path.display());
        }
        if stale.is_empty() {
            println!("{} units up to date", output.units.len());
        } else {
            exit = ExitCode::FAILURE;
        }
        return Ok(exit);
    }

    let report = write_units(&output.units, out_dir).map_err(|e| CliError::failure(diagnostics::render_chain(&e)))?;
    println!(
        "wrote {} units ({} unchanged) to {}",
        report.written.len(),
        report.unchanged.len(),
        out_dir.display()
    );
    Ok(exit)
}

/// Bind the schema and report every problem, without emitting.
pub fn check(schema: &Path, config: GeneratorConfig) -> CliResult<ExitCode> {
    let closure = load_schema(schema)?;
    let codegen = Codegen::new(config);
    let outcome = codegen.bind(&closure).map_err(|e| fatal(&e))?;

    let exit = report_failures(outcome.failures.iter().map(|f| f as &dyn miette::Diagnostic));
    println!(
        "{}: {} functions bound, {} failed",
        outcome.package,
        outcome.functions.len(),
        outcome.failures.len()
    );
    Ok(exit)
}

/// Print the unit for one function to stdout.
pub fn emit(schema: &Path, function: &str, config: GeneratorConfig) -> CliResult<ExitCode> {
    let closure = load_schema(schema)?;
    let codegen = Codegen::new(config);
    match codegen.generate_function(&closure, function).map_err(|e| fatal(&e))? {
        Some(unit) => {
            print!("{}", unit.source);
            Ok(ExitCode::SUCCESS)
        }
        None => Err(CliError::failure(format!(
            "no function `{function}` in package `{}`",
            closure.root
        ))),
    }
}
