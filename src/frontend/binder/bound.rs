//! Bound (resolved and named) functions, ready for emission.
//!
//! Everything here is plain data computed once by the binder. Emitters only read it, so a
//! [`BoundFunction`] can be handed to any target without re-resolving the schema.

use std::collections::BTreeSet;

use invokegen_schema::PrimitiveKind;

/// What a named reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKind {
    Object,
    Enum,
    Resource,
}

/// A resolved reference to a named type, spelled for one target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedType {
    /// Schema package that defines the type.
    pub package: String,
    /// Schema name of the type.
    pub name: String,
    pub kind: NamedKind,
    /// Importable module path, outermost first (`["pulumi_random"]`, `["crate", "types"]`, `["outputs"]`).
    pub module_path: Vec<String>,
    /// Type identifier within that module.
    pub ident: String,
    /// Defined by the package being generated.
    pub local: bool,
}

impl QualifiedType {
    /// The full path joined with `separator` (`::` for Rust, `.` for Python).
    pub fn path(&self, separator: &str) -> String {
        let mut path = self.module_path.join(separator);
        if !path.is_empty() {
            path.push_str(separator);
        }
        path.push_str(&self.ident);
        path
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoundType {
    Primitive(PrimitiveKind),
    List(Box<BoundType>),
    Set(Box<BoundType>),
    /// String-keyed map.
    Map(Box<BoundType>),
    Named(QualifiedType),
}

impl BoundType {
    /// Visit every named reference nested in this type.
    pub fn for_each_named<'a>(&'a self, f: &mut impl FnMut(&'a QualifiedType)) {
        match self {
            BoundType::Primitive(_) => {}
            BoundType::List(inner) | BoundType::Set(inner) | BoundType::Map(inner) => inner.for_each_named(f),
            BoundType::Named(q) => f(q),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundParam {
    pub wire_name: String,
    pub ident: String,
    pub ty: BoundType,
    /// Omitted from the request when absent.
    pub optional: bool,
    /// Passed by value (never deferred) in the apply convention.
    pub plain: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundProperty {
    pub wire_name: String,
    pub ident: String,
    pub ty: BoundType,
    /// Nullable or not required; decodes to "no value" when absent.
    pub optional: bool,
    pub description: Option<String>,
}

/// Every identifier the emitted unit declares for one function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionIdents {
    /// Eager entry point (`arg_function`).
    pub function: String,
    /// Deferred entry point (`arg_function_apply`).
    pub apply_function: String,
    /// Plain result type (`ArgFunctionResult`).
    pub result: String,
    /// Awaitable result type (`AwaitableArgFunctionResult`).
    pub awaitable: String,
    /// Eager arguments type (`ArgFunctionArgs`).
    pub args: String,
    /// Apply arguments type (`ArgFunctionApplyArgs`).
    pub apply_args: String,
    /// Token constant (`ARG_FUNCTION_TOKEN`).
    pub token_const: String,
    /// Dependency list constant (`ARG_FUNCTION_DEPENDENCIES`).
    pub dependencies_const: String,
    /// Result shape descriptor (`ARG_FUNCTION_RESULT_SHAPE`).
    pub shape_const: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundFunction {
    pub package: String,
    pub wire_name: String,
    /// `"<package>::<wireName>"`, the name the transport dispatches on.
    pub token: String,
    pub description: Option<String>,
    pub idents: FunctionIdents,
    /// Declaration order.
    pub params: Vec<BoundParam>,
    /// Declaration order; also the decode order.
    pub properties: Vec<BoundProperty>,
    /// Importable names of the external packages this function touches.
    pub dependencies: BTreeSet<String>,
}

impl BoundFunction {
    pub fn all_params_optional(&self) -> bool {
        self.params.iter().all(|p| p.optional)
    }

    /// Parameters the apply convention has to wait for.
    pub fn deferred_params(&self) -> impl Iterator<Item = &BoundParam> {
        self.params.iter().filter(|p| !p.plain)
    }

    /// Every named type the function mentions, parameters first.
    pub fn named_types(&self) -> Vec<&QualifiedType> {
        let mut out = Vec::new();
        for ty in self.params.iter().map(|p| &p.ty).chain(self.properties.iter().map(|p| &p.ty)) {
            ty.for_each_named(&mut |q| out.push(q));
        }
        out
    }
}
