//! Schema type model for invokegen.
//!
//! A [`SchemaClosure`] is the root package (which owns the functions to generate) plus every package its
//! functions reference. The model is plain data: it is loaded once, read by the binder, and dropped.
//!
//! ## See also
//!
//! - [`loader`] for reading a closure from JSON.

#![deny(clippy::unwrap_used)]

pub mod loader;
pub mod model;

pub use loader::{SchemaError, load_closure, parse_closure};
pub use model::{
    FunctionSpec, PackageSpec, ParamSpec, PrimitiveKind, PropertySpec, ReturnShape, SchemaClosure, TypeDef,
    TypeDefKind, TypeRef,
};
