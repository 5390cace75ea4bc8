#![forbid(unsafe_code)]
//! invokegen: typed bindings for remote invoke functions
//!
//! Given a schema closure (a root package plus every package its functions reference), invokegen emits one
//! source unit per function of the root package. Each unit declares a typed result, an awaitable result, an
//! eager entry point and an `_apply` entry point that waits for pending arguments. The crate provides the
//! frontend (schema loading, binding, diagnostics), the backend (Rust and Python emitters, output writing)
//! and the CLI.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Generated code**: Emitted units never call `.unwrap()`; decoding and transport failures surface as
//!   the runtime's `InvokeError`.

pub mod backend;
pub mod cli;
pub mod config;
pub mod format;
pub mod frontend;
pub mod version;

pub use frontend::diagnostics;
pub use frontend::schema;

pub use backend::{Codegen, EmittedUnit, GenerationError, GenerationOutput};
pub use config::GeneratorConfig;
pub use format::{FormatConfig, finalize_source};
