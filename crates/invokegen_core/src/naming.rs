//! Derive target identifiers from wire names and track them per namespace.
//!
//! The mapping is deterministic: the same wire name, kind and target always produce the same identifier.
//! A [`Namespace`] keeps the mapping in both directions so emitted code can always recover the wire name it
//! must put on the transport, and reports (rather than repairs) two wire names that land on one identifier.
//!
//! ## Notes
//!
//! - Casing conversions go through `heck`, so acronyms and digits follow its word-boundary rules.
//! - Escaping is delegated to [`crate::keywords::escape`].

use std::collections::BTreeMap;

use heck::{ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use thiserror::Error;

use crate::Target;
use crate::keywords;

/// The role an identifier plays in generated code (selects casing and reserved words).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IdentKind {
    Type,
    Function,
    Parameter,
    Property,
    Constant,
    Module,
}

impl IdentKind {
    pub fn describe(self) -> &'static str {
        match self {
            IdentKind::Type => "type",
            IdentKind::Function => "function",
            IdentKind::Parameter => "parameter",
            IdentKind::Property => "property",
            IdentKind::Constant => "constant",
            IdentKind::Module => "module",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    #[error("wire name `{wire}` has no characters usable in an identifier")]
    Empty { wire: String },

    #[error("wire name `{wire}` contains `{character}`, which cannot appear in an identifier")]
    InvalidCharacter { wire: String, character: char },

    #[error("wire name `{wire}` is declared more than once")]
    DuplicateWire { wire: String },

    #[error("wire names `{first}` and `{second}` both map to identifier `{identifier}`")]
    Collision {
        first: String,
        second: String,
        identifier: String,
    },
}

/// Convert a wire name into an identifier for `target`.
///
/// Types become `UpperCamelCase`, constants `SCREAMING_SNAKE_CASE`, everything else `snake_case`. Identifiers
/// starting with a digit are prefixed with `_`; keywords and reserved names are escaped per target.
///
/// ## Errors
///
/// - [`NamingError::Empty`] when the wire name contains no alphanumeric characters.
/// - [`NamingError::InvalidCharacter`] when the cased name keeps anything outside ASCII letters, digits and `_`.
pub fn to_identifier(wire: &str, kind: IdentKind, target: Target) -> Result<String, NamingError> {
    let cased = match kind {
        IdentKind::Type => wire.to_upper_camel_case(),
        IdentKind::Constant => wire.to_shouty_snake_case(),
        IdentKind::Function | IdentKind::Parameter | IdentKind::Property | IdentKind::Module => wire.to_snake_case(),
    };
    if cased.is_empty() {
        return Err(NamingError::Empty { wire: wire.to_string() });
    }
    if let Some(character) = cased.chars().find(|&c| !is_ident_char(c)) {
        return Err(NamingError::InvalidCharacter {
            wire: wire.to_string(),
            character,
        });
    }
    let cased = if cased.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{cased}")
    } else {
        cased
    };
    Ok(keywords::escape(target, kind, cased))
}

/// Characters both targets accept anywhere in an identifier (a leading digit is handled separately).
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A bidirectional wire-name ↔ identifier table for one scope (a parameter list, a return shape, a package).
#[derive(Debug, Clone)]
pub struct Namespace {
    target: Target,
    kind: IdentKind,
    by_wire: BTreeMap<String, String>,
    by_ident: BTreeMap<String, String>,
}

impl Namespace {
    pub fn new(target: Target, kind: IdentKind) -> Self {
        Self {
            target,
            kind,
            by_wire: BTreeMap::new(),
            by_ident: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> IdentKind {
        self.kind
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Register a wire name and return its identifier.
    ///
    /// ## Errors
    ///
    /// - [`NamingError::DuplicateWire`] when `wire` was already inserted.
    /// - [`NamingError::Collision`] when a different wire name already owns the identifier.
    /// - [`NamingError::Empty`] or [`NamingError::InvalidCharacter`] from [`to_identifier`].
    pub fn insert(&mut self, wire: &str) -> Result<String, NamingError> {
        if self.by_wire.contains_key(wire) {
            return Err(NamingError::DuplicateWire { wire: wire.to_string() });
        }
        let ident = to_identifier(wire, self.kind, self.target)?;
        if let Some(first) = self.by_ident.get(&ident) {
            return Err(NamingError::Collision {
                first: first.clone(),
                second: wire.to_string(),
                identifier: ident,
            });
        }
        self.by_wire.insert(wire.to_string(), ident.clone());
        self.by_ident.insert(ident.clone(), wire.to_string());
        Ok(ident)
    }

    pub fn identifier(&self, wire: &str) -> Option<&str> {
        self.by_wire.get(wire).map(String::as_str)
    }

    /// Recover the wire name that produced `ident`.
    pub fn wire_name(&self, ident: &str) -> Option<&str> {
        self.by_ident.get(ident).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_wire.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_wire.is_empty()
    }

    /// Iterate `(wire, identifier)` pairs in lexical wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_wire.iter().map(|(w, i)| (w.as_str(), i.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_casing_per_kind() {
        let rust = Target::Rust;
        assert_eq!(to_identifier("argFunction", IdentKind::Function, rust).unwrap(), "arg_function");
        assert_eq!(to_identifier("argFunction", IdentKind::Type, rust).unwrap(), "ArgFunction");
        assert_eq!(to_identifier("argFunction", IdentKind::Constant, rust).unwrap(), "ARG_FUNCTION");
        assert_eq!(to_identifier("random_pet", IdentKind::Module, rust).unwrap(), "random_pet");
    }

    #[test]
    fn test_leading_digit_is_prefixed() {
        assert_eq!(to_identifier("1st", IdentKind::Property, Target::Python).unwrap(), "_1st");
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let err = to_identifier("__", IdentKind::Property, Target::Rust).unwrap_err();
        assert_eq!(err, NamingError::Empty { wire: "__".to_string() });
    }

    #[test]
    fn test_non_identifier_characters_rejected() {
        for target in Target::ALL {
            let err = to_identifier("size²", IdentKind::Property, target).unwrap_err();
            assert_eq!(
                err,
                NamingError::InvalidCharacter {
                    wire: "size²".to_string(),
                    character: '²',
                }
            );
            assert!(to_identifier("größe", IdentKind::Type, target).is_err());
        }
        // separators are word boundaries, not part of the identifier
        assert_eq!(to_identifier("pet-name.v2", IdentKind::Property, Target::Rust).unwrap(), "pet_name_v2");
    }

    #[test]
    fn test_keywords_escaped() {
        assert_eq!(to_identifier("type", IdentKind::Property, Target::Rust).unwrap(), "r#type");
        assert_eq!(to_identifier("from", IdentKind::Parameter, Target::Python).unwrap(), "from_");
        assert_eq!(to_identifier("opts", IdentKind::Parameter, Target::Python).unwrap(), "opts_");
    }

    #[test]
    fn test_namespace_round_trip() {
        let mut ns = Namespace::new(Target::Python, IdentKind::Parameter);
        assert_eq!(ns.insert("random_pet").unwrap(), "random_pet");
        assert_eq!(ns.insert("ownerId").unwrap(), "owner_id");
        assert_eq!(ns.wire_name("random_pet"), Some("random_pet"));
        assert_eq!(ns.wire_name("owner_id"), Some("ownerId"));
        assert_eq!(ns.identifier("ownerId"), Some("owner_id"));
        assert_eq!(ns.len(), 2);
    }

    #[test]
    fn test_namespace_reports_collision() {
        let mut ns = Namespace::new(Target::Rust, IdentKind::Property);
        ns.insert("userId").unwrap();
        let err = ns.insert("user_id").unwrap_err();
        assert_eq!(
            err,
            NamingError::Collision {
                first: "userId".to_string(),
                second: "user_id".to_string(),
                identifier: "user_id".to_string(),
            }
        );
        // the failed insert leaves the table untouched
        assert_eq!(ns.len(), 1);
    }

    #[test]
    fn test_namespace_reports_duplicate_wire() {
        let mut ns = Namespace::new(Target::Rust, IdentKind::Parameter);
        ns.insert("name").unwrap();
        assert_eq!(
            ns.insert("name").unwrap_err(),
            NamingError::DuplicateWire { wire: "name".to_string() }
        );
    }

    proptest! {
        #[test]
        fn prop_identifier_is_deterministic(wire in "[a-z][a-zA-Z0-9_]{0,16}") {
            for target in Target::ALL {
                let a = to_identifier(&wire, IdentKind::Property, target);
                let b = to_identifier(&wire, IdentKind::Property, target);
                prop_assert_eq!(a, b);
            }
        }

        #[test]
        fn prop_identifier_is_ascii_or_rejected(wire in "\\PC{0,12}") {
            for target in Target::ALL {
                for kind in [IdentKind::Type, IdentKind::Property, IdentKind::Constant] {
                    let Ok(ident) = to_identifier(&wire, kind, target) else {
                        continue;
                    };
                    let bare = ident.strip_prefix("r#").unwrap_or(&ident);
                    prop_assert!(!bare.is_empty());
                    prop_assert!(bare.chars().all(is_ident_char), "{:?} -> {:?}", wire, ident);
                    prop_assert!(!bare.starts_with(|c: char| c.is_ascii_digit()));
                }
            }
        }

        #[test]
        fn prop_namespace_recovers_wire(wire in "[a-z][a-zA-Z0-9]{0,16}") {
            let mut ns = Namespace::new(Target::Rust, IdentKind::Parameter);
            let ident = ns.insert(&wire).unwrap();
            prop_assert_eq!(ns.wire_name(&ident), Some(wire.as_str()));
        }
    }
}
