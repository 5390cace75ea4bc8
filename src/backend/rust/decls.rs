//! Emit the declarations of a unit: constants, the result types and the argument types.
//!
//! ## Notes
//!
//! - Result properties decode in declaration order, so the first mismatching property is the one reported.
//! - The eager arguments type only derives `Default` when every parameter is optional.

use proc_macro2::TokenStream;
use quote::quote;

use super::RustEmitter;
use super::types::{doc_attrs, ident};
use crate::frontend::binder::BoundFunction;

impl<'a> RustEmitter<'a> {
    /// Token, dependency and result-shape constants.
    pub(super) fn emit_constants(&self, f: &BoundFunction) -> TokenStream {
        let rt = &self.runtime;
        let token_const = ident(&f.idents.token_const);
        let deps_const = ident(&f.idents.dependencies_const);
        let shape_const = ident(&f.idents.shape_const);
        let token = &f.token;
        let deps = f.dependencies.iter();
        let result_name = &f.idents.result;
        let properties = f.properties.iter().map(|p| &p.wire_name);

        quote! {
            /// Token the transport dispatches on.
            pub const #token_const: &str = #token;

            /// External packages this function's types come from.
            pub const #deps_const: &[&str] = &[#(#deps),*];

            pub static #shape_const: #rt::ResultShape = #rt::ResultShape {
                name: #result_name,
                properties: &[#(#properties),*],
            };
        }
    }

    /// The plain result struct, its decoder, and the awaitable alias.
    pub(super) fn emit_result(&self, f: &BoundFunction) -> TokenStream {
        let rt = &self.runtime;
        let result = ident(&f.idents.result);
        let awaitable = ident(&f.idents.awaitable);
        let result_doc = doc_attrs(Some(format!("Result of `{}`.", f.token).as_str()));

        let fields = f.properties.iter().map(|p| {
            let name = ident(&p.ident);
            let ty = self.emit_field_type(&p.ty, p.optional);
            let doc = doc_attrs(p.description.as_deref());
            quote! {
                #doc
                pub #name: #ty,
            }
        });

        let raw = if f.properties.is_empty() {
            ident("_raw")
        } else {
            ident("raw")
        };
        let decoders = f.properties.iter().map(|p| {
            let name = ident(&p.ident);
            let wire = &p.wire_name;
            if p.optional {
                quote! { #name: #rt::decode::optional(#raw, #wire)?, }
            } else {
                quote! { #name: #rt::decode::required(#raw, #wire)?, }
            }
        });

        quote! {
            #result_doc
            #[derive(Debug, Clone)]
            pub struct #result {
                #(#fields)*
            }

            impl #result {
                /// Decode a raw result, checking properties in declaration order.
                pub fn from_raw(#raw: &#rt::RawResult) -> Result<Self, #rt::TypeMismatchError> {
                    Ok(Self {
                        #(#decoders)*
                    })
                }
            }

            /// Awaitable handle returned by the eager entry point.
            pub type #awaitable = #rt::Awaitable<#result>;
        }
    }

    /// Arguments for the eager entry point.
    pub(super) fn emit_args(&self, f: &BoundFunction) -> TokenStream {
        let args = ident(&f.idents.args);
        let derives = if f.all_params_optional() {
            quote! { #[derive(Debug, Clone, Default)] }
        } else {
            quote! { #[derive(Debug, Clone)] }
        };
        let fields = f.params.iter().map(|p| {
            let name = ident(&p.ident);
            let ty = self.emit_field_type(&p.ty, p.optional);
            let doc = doc_attrs(p.description.as_deref());
            quote! {
                #doc
                pub #name: #ty,
            }
        });
        let doc = doc_attrs(Some(format!("Arguments for [`{}`].", f.idents.function).as_str()));

        quote! {
            #doc
            #derives
            pub struct #args {
                #(#fields)*
            }
        }
    }

    /// Arguments for the apply entry point; non-plain values may still be pending.
    pub(super) fn emit_apply_args(&self, f: &BoundFunction) -> TokenStream {
        let args = ident(&f.idents.apply_args);
        let derives = if f.all_params_optional() {
            quote! { #[derive(Debug, Clone, Default)] }
        } else {
            quote! { #[derive(Debug, Clone)] }
        };
        let fields = f.params.iter().map(|p| {
            let name = ident(&p.ident);
            let ty = self.emit_input_type(&p.ty, p.optional, p.plain);
            let doc = doc_attrs(p.description.as_deref());
            quote! {
                #doc
                pub #name: #ty,
            }
        });
        let doc = doc_attrs(Some(format!("Arguments for [`{}`].", f.idents.apply_function).as_str()));

        quote! {
            #doc
            #derives
            pub struct #args {
                #(#fields)*
            }
        }
    }
}
