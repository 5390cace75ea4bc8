//! CLI module for invokegen
//!
//! This module provides the command-line interface for the generator.
//!
//! ## Commands
//!
//! - `generate <schema> --out <dir>` - Emit one unit per function of the root package
//! - `check <schema>` - Bind the schema and report problems without emitting anything
//! - `emit <schema> <function>` - Print the unit for a single function
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use invokegen_core::Target;

use crate::config::GeneratorConfig;
use crate::frontend::diagnostics;
use crate::version::INVOKEGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate typed bindings for remote invoke functions
#[derive(Parser, Debug)]
#[command(name = "invokegen")]
#[command(version = INVOKEGEN_VERSION)]
#[command(about = "Generate typed bindings for remote invoke functions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command that binds or emits.
#[derive(Args, Debug, Clone, Default)]
pub struct GeneratorArgs {
    /// Target language (overrides the config file)
    #[arg(long = "lang", value_name = "LANG")]
    pub target: Option<Target>,

    /// Tool name written into generated-file headers
    #[arg(long, env = "INVOKEGEN_TOOL", value_name = "NAME")]
    pub tool: Option<String>,

    /// JSON generator config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GeneratorArgs {
    /// Load the config file (if any) and apply flag overrides on top.
    pub fn resolve(&self) -> CliResult<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path).map_err(|e| CliError::failure(diagnostics::render_chain(&e)))?,
            None => GeneratorConfig::default(),
        };
        if let Some(target) = self.target {
            config = config.with_target(target);
        }
        if let Some(tool) = &self.tool {
            config = config.with_tool(tool.clone());
        }
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Emit one source unit per function of the root package
    Generate {
        /// Schema closure (JSON)
        #[arg(value_name = "SCHEMA")]
        schema: PathBuf,
        /// Output directory
        #[arg(short, long = "out", value_name = "DIR")]
        out_dir: PathBuf,
        /// Compare with the files on disk instead of writing them
        #[arg(long)]
        check: bool,
        #[command(flatten)]
        generator: GeneratorArgs,
    },

    /// Bind the schema and report problems without emitting anything
    Check {
        /// Schema closure (JSON)
        #[arg(value_name = "SCHEMA")]
        schema: PathBuf,
        #[command(flatten)]
        generator: GeneratorArgs,
    },

    /// Print the unit for a single function
    Emit {
        /// Schema closure (JSON)
        #[arg(value_name = "SCHEMA")]
        schema: PathBuf,
        /// Wire name of the function
        #[arg(value_name = "FUNCTION")]
        function: String,
        #[command(flatten)]
        generator: GeneratorArgs,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Generate {
            schema,
            out_dir,
            check,
            generator,
        } => commands::generate(&schema, &out_dir, generator.resolve()?, check),
        Command::Check { schema, generator } => commands::check(&schema, generator.resolve()?),
        Command::Emit {
            schema,
            function,
            generator,
        } => commands::emit(&schema, &function, generator.resolve()?),
    }
}

// ============================================================================
// Tests
// ============================================================================
