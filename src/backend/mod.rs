//! invokegen backend
//!
//! This module turns bound functions into source files.
//!
//! The pipeline is:
//! 1. Bound functions from the frontend → target emitter → one source unit per function
//! 2. Units are written (or checked) under an output directory
//!
//! ## Module Organization
//!
//! - `codegen.rs` - [`Codegen`] facade over binding and emission
//! - `rust/` - Rust emitter (`quote!` → `syn` → `prettyplease`)
//! - `python/` - Python emitter (line-based, via [`crate::format::SourceWriter`])
//! - `output.rs` - writing and checking units on disk
//! - `errors.rs` - emission errors

pub mod codegen;
mod errors;
pub mod output;
pub mod python;
pub mod rust;

pub use codegen::{Codegen, EmittedUnit, GenerationError, GenerationOutput};
pub use errors::EmitError;
pub use output::{OutputError, WriteReport, stale_units, write_units};
pub use python::PythonEmitter;
pub use rust::RustEmitter;
