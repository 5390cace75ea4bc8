//! Code generation facade
//!
//! [`Codegen`] runs the whole pipeline for one schema closure and one target:
//!
//! ```text
//! SchemaClosure → Binder → BoundFunction → {Rust,Python}Emitter → EmittedUnit
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use invokegen::backend::Codegen;
//! use invokegen::config::GeneratorConfig;
//!
//! let codegen = Codegen::new(GeneratorConfig::default());
//! let output = codegen.generate(&closure)?;
//! for unit in &output.units {
//!     println!("{}", unit.path.display());
//! }
//! ```
//!
//! ## Error Handling
//!
//! A fatal binding error (missing root package, unresolved reference) fails the whole run. Anything
//! scoped to one function (a casing collision, a failed emission) is collected in
//! [`GenerationOutput::failures`] and every other function is still emitted.

use std::collections::BTreeSet;
use std::path::PathBuf;

use invokegen_core::Target;
use invokegen_schema::SchemaClosure;
use miette::Diagnostic;
use thiserror::Error;

use super::python::PythonEmitter;
use super::rust::RustEmitter;
use super::EmitError;
use crate::config::GeneratorConfig;
use crate::frontend::binder::{BindError, BindOutcome, Binder, BoundFunction};

/// Error during generation.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerationError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Bind(#[from] BindError),

    #[error("failed to emit `{function}`")]
    #[diagnostic(code(invokegen::emit))]
    Emission {
        function: String,
        #[source]
        source: EmitError,
    },
}

impl GenerationError {
    /// Wire name of the function the error is scoped to, if any.
    pub fn function(&self) -> Option<&str> {
        match self {
            GenerationError::Bind(err) => err.function(),
            GenerationError::Emission { function, .. } => Some(function),
        }
    }
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedUnit {
    /// Wire name of the function the unit binds.
    pub function: String,
    /// Path relative to the output directory.
    pub path: PathBuf,
    pub source: String,
    /// External packages the unit imports.
    pub dependencies: BTreeSet<String>,
}

#[derive(Debug, Default)]
pub struct GenerationOutput {
    /// Emitted units, sorted by wire name.
    pub units: Vec<EmittedUnit>,
    /// Functions that were skipped, in the order they failed.
    pub failures: Vec<GenerationError>,
}

impl GenerationOutput {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Schema-to-source code generator for one target.
#[derive(Debug, Clone)]
pub struct Codegen {
    config: GeneratorConfig,
}

impl Codegen {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn target(&self) -> Target {
        self.config.target
    }

    /// Bind every function of the root package without emitting anything.
    pub fn bind(&self, closure: &SchemaClosure) -> Result<BindOutcome, GenerationError> {
        let binder = Binder::new(closure, self.config.target)?.with_rust_types_module(&self.config.local_types_module);
        Ok(binder.bind_all()?)
    }

    /// Generate one unit per function of the root package.
    ///
    /// ## Errors
    ///
    /// Only fatal errors are returned; per-function failures land in [`GenerationOutput::failures`].
    #[tracing::instrument(skip_all, fields(package = %closure.root, target = %self.config.target))]
    pub fn generate(&self, closure: &SchemaClosure) -> Result<GenerationOutput, GenerationError> {
        let outcome = self.bind(closure)?;
        let mut output = GenerationOutput {
            units: Vec::with_capacity(outcome.functions.len()),
            failures: outcome.failures.into_iter().map(GenerationError::from).collect(),
        };
        for function in &outcome.functions {
            match self.emit(function) {
                Ok(unit) => output.units.push(unit),
                Err(err) => {
                    tracing::warn!(function = %function.wire_name, error = %err, "emission failed");
                    output.failures.push(err);
                }
            }
        }
        tracing::info!(
            units = output.units.len(),
            failed = output.failures.len(),
            "generation complete"
        );
        Ok(output)
    }

    /// Emit one bound function.
    pub fn emit(&self, function: &BoundFunction) -> Result<EmittedUnit, GenerationError> {
        let emission = |source: EmitError| GenerationError::Emission {
            function: function.wire_name.clone(),
            source,
        };
        let source = match self.config.target {
            Target::Rust => RustEmitter::new(&self.config)
                .and_then(|emitter| emitter.emit_function(function))
                .map_err(emission)?,
            Target::Python => PythonEmitter::new(&self.config)
                .emit_function(function)
                .map_err(emission)?,
        };
        Ok(EmittedUnit {
            function: function.wire_name.clone(),
            path: unit_path(function, self.config.target),
            source,
            dependencies: function.dependencies.clone(),
        })
    }

    /// Generate the unit for a single function, by wire name.
    ///
    /// Returns `Ok(None)` when the root package has no such function.
    pub fn generate_function(
        &self,
        closure: &SchemaClosure,
        wire_name: &str,
    ) -> Result<Option<EmittedUnit>, GenerationError> {
        let binder = Binder::new(closure, self.config.target)?.with_rust_types_module(&self.config.local_types_module);
        binder.validate_references()?;
        let Some(spec) = binder.package().functions.iter().find(|f| f.wire_name == wire_name) else {
            return Ok(None);
        };
        let bound = binder.bind_function(spec)?;
        self.emit(&bound).map(Some)
    }
}

/// `<function identifier>.<extension>`, without any raw-identifier prefix.
fn unit_path(function: &BoundFunction, target: Target) -> PathBuf {
    let stem = function
        .idents
        .function
        .strip_prefix("r#")
        .unwrap_or(&function.idents.function);
    PathBuf::from(format!("{stem}.{}", target.file_extension()))
}
