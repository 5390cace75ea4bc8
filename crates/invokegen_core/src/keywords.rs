//! Keyword and reserved-name vocabulary per target (for identifier escaping).

use crate::Target;
use crate::naming::IdentKind;

/// Strict, reserved and edition-2024 keywords in Rust.
pub const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
    "trait", "true", "type", "unsafe", "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box",
    "do", "final", "gen", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
];

/// Rust keywords that cannot be written as raw identifiers (`r#self` is rejected by rustc).
pub const RUST_NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Python 3 hard keywords.
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del",
    "elif", "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Names the emitted Python function signature already binds.
pub const PYTHON_RESERVED_PARAMETERS: &[&str] = &["opts"];

/// Module and builtin names the emitted Python bodies and class scopes refer to.
pub const PYTHON_SHADOWED_NAMES: &[&str] = &[
    "pulumi",
    "_utilities",
    "isinstance",
    "property",
    "str",
    "int",
    "float",
    "bool",
    "dict",
    "list",
    "Optional",
];

/// Names the emitted Rust entry points bind next to parameter locals.
pub const RUST_RESERVED_PARAMETERS: &[&str] = &["invoker", "args", "opts"];

/// Check whether an identifier is a keyword of the target language.
pub fn is_keyword(target: Target, name: &str) -> bool {
    match target {
        Target::Rust => RUST_KEYWORDS.contains(&name),
        Target::Python => PYTHON_KEYWORDS.contains(&name),
    }
}

/// Check whether an identifier is reserved by the generated code for this kind of name.
pub fn is_reserved(target: Target, kind: IdentKind, name: &str) -> bool {
    match (target, kind) {
        (Target::Python, IdentKind::Parameter) => {
            PYTHON_RESERVED_PARAMETERS.contains(&name) || PYTHON_SHADOWED_NAMES.contains(&name)
        }
        (Target::Python, IdentKind::Property) => PYTHON_SHADOWED_NAMES.contains(&name),
        (Target::Rust, IdentKind::Parameter) => RUST_RESERVED_PARAMETERS.contains(&name),
        _ => false,
    }
}

/// Escape an identifier that is a keyword or reserved name.
///
/// Rust prefers raw identifiers; keywords that cannot be raw and every Python clash get a trailing `_`.
pub fn escape(target: Target, kind: IdentKind, name: String) -> String {
    if is_keyword(target, &name) {
        return match target {
            Target::Rust if !RUST_NON_RAW_KEYWORDS.contains(&name.as_str()) => format!("r#{name}"),
            _ => format!("{name}_"),
        };
    }
    if is_reserved(target, kind, &name) {
        return format!("{name}_");
    }
    name
}
