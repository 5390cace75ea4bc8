//! Plain data types describing packages, functions and type references.
//!
//! The JSON form uses `camelCase` keys, `name` for wire names and `type` for type references. Type references
//! are internally tagged by `kind`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The root package plus every package reachable from its functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaClosure {
    pub root: String,
    pub packages: BTreeMap<String, PackageSpec>,
}

impl SchemaClosure {
    /// Build a closure from a root package and its referenced packages.
    pub fn new(root: PackageSpec, referenced: impl IntoIterator<Item = PackageSpec>) -> Self {
        let mut packages = BTreeMap::new();
        let root_name = root.name.clone();
        for pkg in referenced {
            packages.insert(pkg.name.clone(), pkg);
        }
        packages.insert(root_name.clone(), root);
        Self {
            root: root_name,
            packages,
        }
    }

    pub fn root_package(&self) -> Option<&PackageSpec> {
        self.packages.get(&self.root)
    }

    pub fn package(&self, name: &str) -> Option<&PackageSpec> {
        self.packages.get(name)
    }

    /// Look up a type definition by package and type name.
    pub fn lookup_type(&self, package: &str, name: &str) -> Option<&TypeDef> {
        self.package(package)?.types.iter().find(|t| t.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub functions: Vec<FunctionSpec>,
    #[serde(default)]
    pub types: Vec<TypeDef>,
}

impl PackageSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            description: None,
            functions: Vec::new(),
            types: Vec::new(),
        }
    }

    pub fn with_function(mut self, function: FunctionSpec) -> Self {
        self.functions.push(function);
        self
    }

    pub fn with_type(mut self, ty: TypeDef) -> Self {
        self.types.push(ty);
        self
    }
}

/// A named type a package exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDef {
    pub name: String,
    #[serde(flatten)]
    pub kind: TypeDefKind,
}

impl TypeDef {
    pub fn resource(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeDefKind::Resource,
        }
    }

    pub fn object(name: impl Into<String>, properties: Vec<PropertySpec>) -> Self {
        Self {
            name: name.into(),
            kind: TypeDefKind::Object { properties },
        }
    }

    pub fn enumeration(name: impl Into<String>, values: Vec<serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            kind: TypeDefKind::Enum { values },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeDefKind {
    Object {
        #[serde(default)]
        properties: Vec<PropertySpec>,
    },
    Enum {
        #[serde(default)]
        values: Vec<serde_json::Value>,
    },
    /// A resource handle; referenced by invoke parameters but never generated here.
    Resource,
}

/// A remote read-only function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSpec {
    #[serde(rename = "name")]
    pub wire_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParamSpec>,
    #[serde(default)]
    pub return_shape: ReturnShape,
}

impl FunctionSpec {
    pub fn new(wire_name: impl Into<String>) -> Self {
        Self {
            wire_name: wire_name.into(),
            description: None,
            parameters: Vec::new(),
            return_shape: ReturnShape::default(),
        }
    }

    pub fn with_param(mut self, param: ParamSpec) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn with_property(mut self, property: PropertySpec) -> Self {
        self.return_shape.properties.push(property);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Every type reference the function mentions, parameters first, in declaration order.
    pub fn type_refs(&self) -> impl Iterator<Item = (&str, &TypeRef)> {
        self.parameters
            .iter()
            .map(|p| (p.wire_name.as_str(), &p.type_ref))
            .chain(
                self.return_shape
                    .properties
                    .iter()
                    .map(|p| (p.wire_name.as_str(), &p.type_ref)),
            )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamSpec {
    #[serde(rename = "name")]
    pub wire_name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub required: bool,
    /// Taken by value in the apply convention instead of as a deferred input.
    #[serde(default)]
    pub plain: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ParamSpec {
    /// An optional, non-plain parameter.
    pub fn new(wire_name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            wire_name: wire_name.into(),
            type_ref,
            required: false,
            plain: false,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn plain(mut self) -> Self {
        self.plain = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnShape {
    #[serde(default)]
    pub properties: Vec<PropertySpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySpec {
    #[serde(rename = "name")]
    pub wire_name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertySpec {
    /// A property that is neither required nor nullable (so it decodes as optional).
    pub fn new(wire_name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            wire_name: wire_name.into(),
            type_ref,
            required: false,
            nullable: false,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Optional iff nullable or not required.
    pub fn is_optional(&self) -> bool {
        self.nullable || !self.required
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Bool,
    Int,
    Number,
    String,
    Any,
}

impl PrimitiveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Number => "number",
            PrimitiveKind::String => "string",
            PrimitiveKind::Any => "any",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeRef {
    Primitive {
        primitive: PrimitiveKind,
    },
    /// A list, or a set when `unique` is true.
    Collection {
        element: Box<TypeRef>,
        #[serde(default)]
        unique: bool,
    },
    /// String-keyed map.
    Map {
        value: Box<TypeRef>,
    },
    Object {
        package: String,
        name: String,
    },
    Enum {
        package: String,
        name: String,
    },
}

impl TypeRef {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        TypeRef::Primitive { primitive: kind }
    }

    pub fn list(element: TypeRef) -> Self {
        TypeRef::Collection {
            element: Box::new(element),
            unique: false,
        }
    }

    pub fn set(element: TypeRef) -> Self {
        TypeRef::Collection {
            element: Box::new(element),
            unique: true,
        }
    }

    pub fn map(value: TypeRef) -> Self {
        TypeRef::Map { value: Box::new(value) }
    }

    pub fn object(package: impl Into<String>, name: impl Into<String>) -> Self {
        TypeRef::Object {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn enumeration(package: impl Into<String>, name: impl Into<String>) -> Self {
        TypeRef::Enum {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Collect every named (object or enum) reference nested in this type.
    pub fn named_refs(&self) -> Vec<&TypeRef> {
        let mut out = Vec::new();
        self.collect_named(&mut out);
        out
    }

    fn collect_named<'a>(&'a self, out: &mut Vec<&'a TypeRef>) {
        match self {
            TypeRef::Primitive { .. } => {}
            TypeRef::Collection { element, .. } => element.collect_named(out),
            TypeRef::Map { value } => value.collect_named(out),
            TypeRef::Object { .. } | TypeRef::Enum { .. } => out.push(self),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive { primitive } => f.write_str(primitive.as_str()),
            TypeRef::Collection { element, unique: false } => write!(f, "list<{element}>"),
            TypeRef::Collection { element, unique: true } => write!(f, "set<{element}>"),
            TypeRef::Map { value } => write!(f, "map<string, {value}>"),
            TypeRef::Object { package, name } => write!(f, "{package}:{name}"),
            TypeRef::Enum { package, name } => write!(f, "enum {package}:{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_json_shape() {
        let ty: TypeRef = serde_json::from_str(
            r#"{"kind": "collection", "element": {"kind": "object", "package": "p", "name": "T"}}"#,
        )
        .unwrap();
        assert_eq!(ty, TypeRef::list(TypeRef::object("p", "T")));
        assert_eq!(ty.to_string(), "list<p:T>");
    }

    #[test]
    fn test_named_refs_walks_nesting() {
        let ty = TypeRef::map(TypeRef::set(TypeRef::enumeration("p", "Color")));
        assert_eq!(ty.named_refs(), vec![&TypeRef::enumeration("p", "Color")]);
        assert!(TypeRef::primitive(PrimitiveKind::Int).named_refs().is_empty());
    }

    #[test]
    fn test_property_optionality() {
        let ty = TypeRef::primitive(PrimitiveKind::Int);
        assert!(PropertySpec::new("a", ty.clone()).is_optional());
        assert!(!PropertySpec::new("a", ty.clone()).required().is_optional());
        assert!(PropertySpec::new("a", ty).required().nullable().is_optional());
    }

    #[test]
    fn test_closure_lookup() {
        let closure = SchemaClosure::new(
            PackageSpec::new("example"),
            [PackageSpec::new("pulumi_random").with_type(TypeDef::resource("RandomPet"))],
        );
        assert_eq!(closure.root, "example");
        assert!(closure.root_package().is_some());
        assert!(closure.lookup_type("pulumi_random", "RandomPet").is_some());
        assert!(closure.lookup_type("pulumi_random", "RandomId").is_none());
    }
}
