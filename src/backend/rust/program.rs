//! Emit a whole unit (one function) to formatted Rust source.
//!
//! ## Notes
//!
//! - Items are generated with `quote`, parsed with `syn` and formatted with `prettyplease`, then run
//!   through [`finalize_source`] so the text is byte-stable.
//! - Emission is codegen-only: it does not read or write files.

use proc_macro2::TokenStream;
use quote::quote;

use super::RustEmitter;
use crate::backend::EmitError;
use crate::format::finalize_source;
use crate::frontend::binder::BoundFunction;

impl<'a> RustEmitter<'a> {
    /// Emit one bound function as a complete Rust source file.
    #[tracing::instrument(skip_all, fields(function = %f.token))]
    pub fn emit_function(&self, f: &BoundFunction) -> Result<String, EmitError> {
        let tokens = self.emit_function_tokens(f);
        let syntax_tree: syn::File = syn::parse2(tokens).map_err(|e| EmitError::SynParse(e.to_string()))?;
        let formatted = prettyplease::unparse(&syntax_tree);
        let source = format!("{}\n{formatted}", self.header());
        Ok(finalize_source(&source, &self.config.format))
    }

    /// Emit one bound function to a token stream (without formatting).
    pub fn emit_function_tokens(&self, f: &BoundFunction) -> TokenStream {
        let constants = self.emit_constants(f);
        let result = self.emit_result(f);
        let args = self.emit_args(f);
        let eager = self.emit_eager_fn(f);
        let apply = if self.config.emit_apply {
            let apply_args = self.emit_apply_args(f);
            let apply_fn = self.emit_apply_fn(f);
            quote! {
                #apply_args
                #apply_fn
            }
        } else {
            TokenStream::new()
        };

        quote! {
            #constants
            #result
            #args
            #eager
            #apply
        }
    }

    fn header(&self) -> String {
        format!(
            "// *** WARNING: this file was generated by {}. ***\n\
             // *** Do not edit by hand unless you're certain you know what you are doing! ***\n",
            self.config.tool
        )
    }
}
