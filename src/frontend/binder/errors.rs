//! Binding errors.
//!
//! An unresolved reference or missing package aborts the whole run; every other variant fails only the
//! function it names, and the remaining functions still bind.

use invokegen_core::naming::NamingError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum BindError {
    #[error("package `{package}` is not part of the schema closure")]
    #[diagnostic(
        code(invokegen::bind::missing_package),
        help("the closure must contain the root package and every package its functions reference")
    )]
    MissingPackage { package: String },

    #[error("`{package}::{function}`: `{location}` refers to unknown type `{reference}`")]
    #[diagnostic(
        code(invokegen::bind::unresolved_reference),
        help("add the defining package and type to the schema closure")
    )]
    UnresolvedReference {
        package: String,
        function: String,
        location: String,
        reference: String,
    },

    #[error("`{package}::{function}`: {namespace} name `{wire_name}` is declared more than once")]
    #[diagnostic(code(invokegen::bind::duplicate_name))]
    DuplicateName {
        package: String,
        function: String,
        namespace: String,
        wire_name: String,
    },

    #[error("`{package}::{function}`: {namespace} `{first}` and `{second}` both become `{identifier}`")]
    #[diagnostic(
        code(invokegen::bind::casing_collision),
        help("rename one of them in the schema; generated names are never suffixed to disambiguate")
    )]
    CasingCollision {
        package: String,
        function: String,
        namespace: String,
        first: String,
        second: String,
        identifier: String,
    },

    #[error("`{package}::{function}`: `{wire_name}` cannot be turned into an identifier")]
    #[diagnostic(
        code(invokegen::bind::invalid_name),
        help("identifiers are built from ASCII letters, digits and `_`; other characters only separate words")
    )]
    InvalidName {
        package: String,
        function: String,
        wire_name: String,
    },
}

impl BindError {
    /// Fatal errors abort the run; the rest fail one function.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BindError::MissingPackage { .. } | BindError::UnresolvedReference { .. })
    }

    /// Wire name of the function the error belongs to, if any.
    pub fn function(&self) -> Option<&str> {
        match self {
            BindError::MissingPackage { .. } => None,
            BindError::UnresolvedReference { function, .. }
            | BindError::DuplicateName { function, .. }
            | BindError::CasingCollision { function, .. }
            | BindError::InvalidName { function, .. } => Some(function),
        }
    }

    pub(super) fn from_naming(err: NamingError, package: &str, function: &str, namespace: &str) -> Self {
        match err {
            NamingError::Empty { wire } | NamingError::InvalidCharacter { wire, .. } => BindError::InvalidName {
                package: package.to_string(),
                function: function.to_string(),
                wire_name: wire,
            },
            NamingError::DuplicateWire { wire } => BindError::DuplicateName {
                package: package.to_string(),
                function: function.to_string(),
                namespace: namespace.to_string(),
                wire_name: wire,
            },
            NamingError::Collision {
                first,
                second,
                identifier,
            } => BindError::CasingCollision {
                package: package.to_string(),
                function: function.to_string(),
                namespace: namespace.to_string(),
                first,
                second,
                identifier,
            },
        }
    }
}
