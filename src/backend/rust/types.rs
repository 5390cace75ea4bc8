//! Type and identifier emission for bound types.
//!
//! Set types only become `BTreeSet` for element kinds with a total order (`bool`, `i64`, `String`);
//! everything else keeps declaration order in a `Vec`.

use invokegen_schema::PrimitiveKind;
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use super::RustEmitter;
use crate::frontend::binder::{BoundType, QualifiedType};

impl<'a> RustEmitter<'a> {
    /// Emit a bound type as Rust tokens.
    pub(super) fn emit_type(&self, ty: &BoundType) -> TokenStream {
        let rt = &self.runtime;
        match ty {
            BoundType::Primitive(PrimitiveKind::Bool) => quote! { bool },
            BoundType::Primitive(PrimitiveKind::Int) => quote! { i64 },
            BoundType::Primitive(PrimitiveKind::Number) => quote! { f64 },
            BoundType::Primitive(PrimitiveKind::String) => quote! { String },
            BoundType::Primitive(PrimitiveKind::Any) => quote! { #rt::Value },
            BoundType::List(elem) => {
                let e = self.emit_type(elem);
                quote! { Vec<#e> }
            }
            BoundType::Set(elem) if is_ordered(elem) => {
                let e = self.emit_type(elem);
                quote! { std::collections::BTreeSet<#e> }
            }
            BoundType::Set(elem) => {
                let e = self.emit_type(elem);
                quote! { Vec<#e> }
            }
            BoundType::Map(value) => {
                let v = self.emit_type(value);
                quote! { std::collections::BTreeMap<String, #v> }
            }
            BoundType::Named(q) => emit_path(q),
        }
    }

    /// Emit a field type, wrapping optional values in `Option`.
    pub(super) fn emit_field_type(&self, ty: &BoundType, optional: bool) -> TokenStream {
        let t = self.emit_type(ty);
        if optional { quote! { Option<#t> } } else { t }
    }

    /// Emit an apply-convention field type: deferrable values become `Input<T>`.
    pub(super) fn emit_input_type(&self, ty: &BoundType, optional: bool, plain: bool) -> TokenStream {
        if plain {
            return self.emit_field_type(ty, optional);
        }
        let rt = &self.runtime;
        let t = self.emit_type(ty);
        if optional {
            quote! { Option<#rt::Input<#t>> }
        } else {
            quote! { #rt::Input<#t> }
        }
    }
}

fn is_ordered(ty: &BoundType) -> bool {
    matches!(
        ty,
        BoundType::Primitive(PrimitiveKind::Bool | PrimitiveKind::Int | PrimitiveKind::String)
    )
}

fn emit_path(q: &QualifiedType) -> TokenStream {
    let segments: Vec<Ident> = q
        .module_path
        .iter()
        .chain(std::iter::once(&q.ident))
        .map(|s| ident(s))
        .collect();
    quote! { #(#segments)::* }
}

/// Build an identifier; `r#`-prefixed names become raw identifiers.
pub(super) fn ident(name: &str) -> Ident {
    format_ident!("{}", name)
}

/// Emit `#[doc = "..."]` attributes, one per line of `text`.
pub(super) fn doc_attrs(text: Option<&str>) -> TokenStream {
    let Some(text) = text else {
        return TokenStream::new();
    };
    let lines = text.lines().map(|line| {
        if line.is_empty() {
            String::new()
        } else {
            format!(" {line}")
        }
    });
    quote! { #(#[doc = #lines])* }
}
