//! Emit Rust bindings from bound functions.
//!
//! This module defines [`RustEmitter`] and wires together the focused submodules that implement emission.
//! `mod.rs` is intentionally thin.
//!
//! ## Notes
//! - Emission produces a Rust syntax tree (`syn`) and formats it via `prettyplease`.
//! - Every runtime item is spelled through the configured runtime crate path, so names coming from a schema
//!   can never shadow runtime helpers.
//!
//! ## See also
//! - [`program`]: unit-level emission and formatting
//! - [`decls`]: constants, result and argument types
//! - [`entry`]: the eager and apply entry points
//! - [`types`]: type and identifier helpers

mod decls;
mod entry;
mod program;
mod types;

use proc_macro2::TokenStream;
use quote::ToTokens;

use super::EmitError;
use crate::config::GeneratorConfig;

/// Emit Rust source for one bound function at a time.
///
/// ## Notes
/// - The public API is `emit_function()` (implemented in `program.rs`).
/// - The emitter holds no per-function state, so one instance can emit any number of functions.
pub struct RustEmitter<'a> {
    config: &'a GeneratorConfig,
    /// Parsed runtime crate path (e.g. `invokegen_runtime`).
    runtime: TokenStream,
}

impl<'a> RustEmitter<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Result<Self, EmitError> {
        let path: syn::Path = syn::parse_str(&config.runtime_crate)
            .map_err(|e| EmitError::SynParse(format!("runtime crate path `{}`: {e}", config.runtime_crate)))?;
        // local type paths are spliced in segment by segment
        syn::parse_str::<syn::Path>(&config.local_types_module).map_err(|e| {
            EmitError::SynParse(format!("local types module `{}`: {e}", config.local_types_module))
        })?;
        Ok(Self {
            config,
            runtime: path.to_token_stream(),
        })
    }
}
