//! Bind schema functions: resolve every type reference, compute optionality, and name everything.
//!
//! Binding runs in two passes over the root package:
//!
//! 1. every type reference of every function is checked against the closure; a dangling reference aborts
//!    the run with [`BindError::UnresolvedReference`];
//! 2. functions are named at package level (so two functions whose identifiers collide both fail) and then
//!    bound one by one, in lexical wire-name order. A function that fails is recorded in
//!    [`BindOutcome::failures`] and the others still bind.
//!
//! ## Notes
//!
//! - Identifiers come from [`invokegen_core::naming`]; collisions are reported, never suffixed.
//! - The binder only reads referenced packages; it never generates anything for them.
//!
//! ## See also
//!
//! - [`bound`] for the output data model.

pub mod bound;
mod errors;


use std::collections::BTreeSet;

use invokegen_core::Target;
use invokegen_core::naming::{IdentKind, Namespace, NamingError, to_identifier};
use invokegen_schema::{FunctionSpec, PackageSpec, SchemaClosure, TypeDefKind, TypeRef};

pub use bound::{
    BoundFunction, BoundParam, BoundProperty, BoundType, FunctionIdents, NamedKind, QualifiedType,
};
pub use errors::BindError;

/// Default Rust module for the root package's own types.
pub const DEFAULT_RUST_TYPES_MODULE: &str = "crate::types";

/// Result of binding a whole package.
#[derive(Debug, Clone, Default)]
pub struct BindOutcome {
    pub package: String,
    /// Successfully bound functions, sorted by wire name.
    pub functions: Vec<BoundFunction>,
    /// Per-function failures, in the order they were found.
    pub failures: Vec<BindError>,
}

impl BindOutcome {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Bind every function of the closure's root package for `target`.
pub fn bind(closure: &SchemaClosure, target: Target) -> Result<BindOutcome, BindError> {
    Binder::new(closure, target)?.bind_all()
}

/// Resolves and names functions of one root package for one target.
#[derive(Debug, Clone)]
pub struct Binder<'a> {
    closure: &'a SchemaClosure,
    package: &'a PackageSpec,
    target: Target,
    rust_types_module: Vec<String>,
}

impl<'a> Binder<'a> {
    pub fn new(closure: &'a SchemaClosure, target: Target) -> Result<Self, BindError> {
        let package = closure.root_package().ok_or_else(|| BindError::MissingPackage {
            package: closure.root.clone(),
        })?;
        Ok(Self {
            closure,
            package,
            target,
            rust_types_module: split_path(DEFAULT_RUST_TYPES_MODULE),
        })
    }

    /// Set the Rust module (e.g. `crate::types`) local object and enum references resolve to.
    pub fn with_rust_types_module(mut self, path: &str) -> Self {
        self.rust_types_module = split_path(path);
        self
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// The root package being bound.
    pub fn package(&self) -> &'a PackageSpec {
        self.package
    }

    /// Bind the whole package.
    ///
    /// ## Errors
    ///
    /// Only fatal errors are returned; per-function failures land in [`BindOutcome::failures`].
    #[tracing::instrument(skip_all, fields(package = %self.package.name, target = %self.target))]
    pub fn bind_all(&self) -> Result<BindOutcome, BindError> {
        self.validate_references()?;

        let mut functions: Vec<&FunctionSpec> = self.package.functions.iter().collect();
        functions.sort_by(|a, b| a.wire_name.cmp(&b.wire_name));

        let mut outcome = BindOutcome {
            package: self.package.name.clone(),
            ..BindOutcome::default()
        };

        let mut names = Namespace::new(self.target, IdentKind::Function);
        let mut rejected = BTreeSet::new();
        for function in &functions {
            if let Err(err) = names.insert(&function.wire_name) {
                if let NamingError::Collision { first, .. } = &err {
                    rejected.insert(first.clone());
                }
                rejected.insert(function.wire_name.clone());
                outcome.failures.push(BindError::from_naming(
                    err,
                    &self.package.name,
                    &function.wire_name,
                    "function",
                ));
            }
        }

        for function in functions {
            if rejected.contains(&function.wire_name) {
                continue;
            }
            match self.bind_function(function) {
                Ok(bound) => outcome.functions.push(bound),
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    tracing::debug!(function = %function.wire_name, error = %err, "function failed to bind");
                    outcome.failures.push(err);
                }
            }
        }

        tracing::debug!(
            bound = outcome.functions.len(),
            failed = outcome.failures.len(),
            "binding complete"
        );
        Ok(outcome)
    }

    /// Check that every type reference of every root function resolves.
    pub fn validate_references(&self) -> Result<(), BindError> {
        for function in &self.package.functions {
            for (location, ty) in function.type_refs() {
                for named in ty.named_refs() {
                    self.lookup(named, &function.wire_name, location)?;
                }
            }
        }
        Ok(())
    }

    /// Bind a single function.
    pub fn bind_function(&self, function: &FunctionSpec) -> Result<BoundFunction, BindError> {
        let package = self.package.name.as_str();
        let wire = function.wire_name.as_str();
        let ident = |name: String, kind: IdentKind| {
            to_identifier(&name, kind, self.target)
                .map_err(|err| BindError::from_naming(err, package, wire, kind.describe()))
        };

        let idents = FunctionIdents {
            function: ident(wire.to_string(), IdentKind::Function)?,
            apply_function: ident(format!("{wire}_apply"), IdentKind::Function)?,
            result: ident(format!("{wire}_result"), IdentKind::Type)?,
            awaitable: ident(format!("awaitable_{wire}_result"), IdentKind::Type)?,
            args: ident(format!("{wire}_args"), IdentKind::Type)?,
            apply_args: ident(format!("{wire}_apply_args"), IdentKind::Type)?,
            token_const: ident(format!("{wire}_token"), IdentKind::Constant)?,
            dependencies_const: ident(format!("{wire}_dependencies"), IdentKind::Constant)?,
            shape_const: ident(format!("{wire}_result_shape"), IdentKind::Constant)?,
        };

        let mut param_names = Namespace::new(self.target, IdentKind::Parameter);
        let mut params = Vec::with_capacity(function.parameters.len());
        for param in &function.parameters {
            let ident = param_names
                .insert(&param.wire_name)
                .map_err(|err| BindError::from_naming(err, package, wire, "parameter"))?;
            params.push(BoundParam {
                wire_name: param.wire_name.clone(),
                ident,
                ty: self.resolve(&param.type_ref, wire, &param.wire_name)?,
                optional: !param.required,
                plain: param.plain,
                description: param.description.clone(),
            });
        }

        let mut property_names = Namespace::new(self.target, IdentKind::Property);
        let mut properties = Vec::with_capacity(function.return_shape.properties.len());
        for property in &function.return_shape.properties {
            let ident = property_names
                .insert(&property.wire_name)
                .map_err(|err| BindError::from_naming(err, package, wire, "property"))?;
            properties.push(BoundProperty {
                wire_name: property.wire_name.clone(),
                ident,
                ty: self.resolve(&property.type_ref, wire, &property.wire_name)?,
                optional: property.is_optional(),
                description: property.description.clone(),
            });
        }

        let mut bound = BoundFunction {
            package: package.to_string(),
            wire_name: wire.to_string(),
            token: format!("{package}::{wire}"),
            description: function.description.clone(),
            idents,
            params,
            properties,
            dependencies: BTreeSet::new(),
        };
        bound.dependencies = bound
            .named_types()
            .into_iter()
            .filter(|q| !q.local)
            .filter_map(|q| q.module_path.first().cloned())
            .collect();

        tracing::debug!(
            function = %bound.token,
            params = bound.params.len(),
            properties = bound.properties.len(),
            "bound function"
        );
        Ok(bound)
    }

    fn resolve(&self, ty: &TypeRef, function: &str, location: &str) -> Result<BoundType, BindError> {
        Ok(match ty {
            TypeRef::Primitive { primitive } => BoundType::Primitive(*primitive),
            TypeRef::Collection { element, unique } => {
                let element = Box::new(self.resolve(element, function, location)?);
                if *unique {
                    BoundType::Set(element)
                } else {
                    BoundType::List(element)
                }
            }
            TypeRef::Map { value } => BoundType::Map(Box::new(self.resolve(value, function, location)?)),
            TypeRef::Object { .. } | TypeRef::Enum { .. } => {
                BoundType::Named(self.qualify(ty, function, location)?)
            }
        })
    }

    fn unresolved(&self, ty: &TypeRef, function: &str, location: &str) -> BindError {
        BindError::UnresolvedReference {
            package: self.package.name.clone(),
            function: function.to_string(),
            location: location.to_string(),
            reference: ty.to_string(),
        }
    }

    /// Find the definition a named reference points at, and what kind of thing it is.
    fn lookup(&self, ty: &TypeRef, function: &str, location: &str) -> Result<NamedKind, BindError> {
        let (package, name, want_enum) = match ty {
            TypeRef::Object { package, name } => (package, name, false),
            TypeRef::Enum { package, name } => (package, name, true),
            _ => return Err(self.unresolved(ty, function, location)),
        };
        let def = self
            .closure
            .lookup_type(package, name)
            .ok_or_else(|| self.unresolved(ty, function, location))?;
        match (&def.kind, want_enum) {
            (TypeDefKind::Enum { .. }, true) => Ok(NamedKind::Enum),
            (TypeDefKind::Object { .. }, false) => Ok(NamedKind::Object),
            (TypeDefKind::Resource, false) => Ok(NamedKind::Resource),
            _ => Err(self.unresolved(ty, function, location)),
        }
    }

    fn qualify(&self, ty: &TypeRef, function: &str, location: &str) -> Result<QualifiedType, BindError> {
        let kind = self.lookup(ty, function, location)?;
        let (TypeRef::Object { package, name } | TypeRef::Enum { package, name }) = ty else {
            return Err(self.unresolved(ty, function, location));
        };
        let naming_err = |err: NamingError| BindError::from_naming(err, &self.package.name, function, "type");
        let local = *package == self.package.name;
        let module_path = match (local, self.target, kind) {
            (true, Target::Rust, _) => self.rust_types_module.clone(),
            (true, Target::Python, NamedKind::Enum) => vec!["_enums".to_string()],
            (true, Target::Python, _) => vec!["outputs".to_string()],
            (false, _, _) => vec![to_identifier(package, IdentKind::Module, self.target).map_err(naming_err)?],
        };
        Ok(QualifiedType {
            package: package.clone(),
            name: name.clone(),
            kind,
            module_path,
            ident: to_identifier(name, IdentKind::Type, self.target).map_err(naming_err)?,
            local,
        })
    }
}

fn split_path(path: &str) -> Vec<String> {
    path.split("::")
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
