//! Emit the two entry points of a unit.
//!
//! The eager entry point captures its arguments, stamps the default version and returns the awaitable
//! result immediately. The apply entry point waits for every pending argument, then delegates to the eager
//! one; when any argument fails, the call is never dispatched and the failure is the result.

use proc_macro2::TokenStream;
use quote::quote;

use super::RustEmitter;
use super::types::{doc_attrs, ident};
use crate::frontend::binder::{BoundFunction, BoundParam};

/// Used when a function has no description of its own.
const DEFAULT_FUNCTION_DOC: &str = "Use this data source to access information about an existing resource.";

const DISPATCH_DOC: &str = "The request is sent the first time the returned awaitable is polled, and only once. \
An awaitable that is dropped without being polled never reaches the invoker.";

impl<'a> RustEmitter<'a> {
    pub(super) fn emit_eager_fn(&self, f: &BoundFunction) -> TokenStream {
        let rt = &self.runtime;
        let name = ident(&f.idents.function);
        let args_ty = ident(&f.idents.args);
        let awaitable = ident(&f.idents.awaitable);
        let result = ident(&f.idents.result);
        let token_const = ident(&f.idents.token_const);
        let shape_const = ident(&f.idents.shape_const);
        let args = if f.params.is_empty() {
            ident("_args")
        } else {
            ident("args")
        };

        let captures = f.params.iter().map(|p| {
            let field = ident(&p.ident);
            let wire = &p.wire_name;
            if p.optional {
                quote! { .optional(#wire, #args.#field.as_ref()) }
            } else {
                quote! { .required(#wire, &#args.#field) }
            }
        });
        let doc = function_doc(f);

        quote! {
            #doc
            pub fn #name(
                invoker: std::sync::Arc<dyn #rt::Invoker>,
                #args: #args_ty,
                opts: Option<#rt::InvokeOptions>,
            ) -> #awaitable {
                let arguments = #rt::ArgCapture::new() #(#captures)*;
                #rt::invoke(invoker, #token_const, arguments, opts, &#shape_const, #result::from_raw)
            }
        }
    }

    pub(super) fn emit_apply_fn(&self, f: &BoundFunction) -> TokenStream {
        let rt = &self.runtime;
        let name = ident(&f.idents.apply_function);
        let eager = ident(&f.idents.function);
        let apply_args_ty = ident(&f.idents.apply_args);
        let args_ty = ident(&f.idents.args);
        let result = ident(&f.idents.result);
        let args = if f.params.is_empty() {
            ident("_args")
        } else {
            ident("args")
        };

        let plain = f.params.iter().filter(|p| p.plain).map(|p| {
            let field = ident(&p.ident);
            quote! { let #field = #args.#field; }
        });

        let deferred: Vec<_> = f.deferred_params().collect();
        let resolve = |p: &&BoundParam| {
            let field = ident(&p.ident);
            if p.optional {
                quote! { #rt::Input::resolve_optional(#args.#field) }
            } else {
                quote! { #args.#field.resolve() }
            }
        };
        let waits = match deferred.as_slice() {
            [] => TokenStream::new(),
            [single] => {
                let field = ident(&single.ident);
                let fut = resolve(single);
                quote! { let #field = #fut.await?; }
            }
            many => {
                let fields = many.iter().map(|p| ident(&p.ident));
                let futs = many.iter().map(resolve);
                quote! { let (#(#fields),*) = #rt::try_join!(#(#futs),*)?; }
            }
        };

        // parameters may shadow the eager function
        let fields = f.params.iter().map(|p| ident(&p.ident));
        let doc = format!(
            "Like [`{}`], but waits for pending arguments first; the call is only made once all of them resolve.",
            f.idents.function
        );
        let doc = doc_attrs(Some(doc.as_str()));

        quote! {
            #doc
            pub fn #name(
                invoker: std::sync::Arc<dyn #rt::Invoker>,
                #args: #apply_args_ty,
                opts: Option<#rt::InvokeOptions>,
            ) -> #rt::Deferred<#result> {
                #rt::Deferred::lift(async move {
                    #(#plain)*
                    #waits
                    self::#eager(invoker, #args_ty { #(#fields),* }, opts).resolve().await
                })
            }
        }
    }
}

fn function_doc(f: &BoundFunction) -> TokenStream {
    let mut text = f.description.as_deref().unwrap_or(DEFAULT_FUNCTION_DOC).to_string();
    text.push_str("\n\n");
    text.push_str(DISPATCH_DOC);
    let documented: Vec<_> = f
        .params
        .iter()
        .filter_map(|p| p.description.as_deref().map(|d| (p, d)))
        .collect();
    if !documented.is_empty() {
        text.push_str("\n\n# Arguments\n");
        for (p, d) in documented {
            text.push_str(&format!("\n* `{}`: {d}", p.ident));
        }
    }
    doc_attrs(Some(text.as_str()))
}
