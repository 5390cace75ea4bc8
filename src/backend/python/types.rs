//! Python spellings of bound types.
//!
//! Named types are written as quoted forward references (`'pulumi_random.RandomPet'`), so a unit never
//! depends on import order to evaluate its annotations.

use invokegen_schema::PrimitiveKind;

use crate::frontend::binder::{BoundType, NamedKind};

/// The annotation for a bound type.
pub(super) fn annotation(ty: &BoundType) -> String {
    match ty {
        BoundType::Primitive(kind) => primitive(*kind).to_string(),
        BoundType::List(elem) | BoundType::Set(elem) => format!("Sequence[{}]", annotation(elem)),
        BoundType::Map(value) => format!("Mapping[str, {}]", annotation(value)),
        BoundType::Named(q) => format!("'{}'", q.path(".")),
    }
}

/// The annotation with `Optional[...]` applied when the value may be absent.
pub(super) fn field_annotation(ty: &BoundType, optional: bool) -> String {
    let inner = annotation(ty);
    if optional { format!("Optional[{inner}]") } else { inner }
}

/// The apply-convention annotation: non-plain values are wrapped in `pulumi.Input[...]`.
pub(super) fn input_annotation(ty: &BoundType, optional: bool, plain: bool) -> String {
    let inner = if plain {
        annotation(ty)
    } else {
        format!("pulumi.Input[{}]", annotation(ty))
    };
    if optional { format!("Optional[{inner}]") } else { inner }
}

fn primitive(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Bool => "bool",
        PrimitiveKind::Int => "int",
        PrimitiveKind::Number => "float",
        PrimitiveKind::String => "str",
        PrimitiveKind::Any => "Any",
    }
}

/// The builtin a decoded value is checked against, if any.
///
/// `Any` and resource references are not checked; enums arrive as their string value.
pub(super) fn runtime_check(ty: &BoundType) -> Option<&'static str> {
    match ty {
        BoundType::Primitive(PrimitiveKind::Any) => None,
        BoundType::Primitive(kind) => Some(primitive(*kind)),
        BoundType::List(_) | BoundType::Set(_) => Some("list"),
        BoundType::Map(_) => Some("dict"),
        BoundType::Named(q) => match q.kind {
            NamedKind::Object => Some("dict"),
            NamedKind::Enum => Some("str"),
            NamedKind::Resource => None,
        },
    }
}

/// A single-quoted Python string literal.
pub(super) fn single_quoted(text: &str) -> String {
    format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// A double-quoted Python string literal.
pub(super) fn double_quoted(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Text that is safe inside a `"""` docstring.
pub(super) fn docstring_text(text: &str) -> String {
    text.replace('\\', "\\\\").replace("\"\"\"", "\\\"\\\"\\\"")
}
