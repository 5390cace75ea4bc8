//! Provide the naming engine and target-language vocabulary shared by the invokegen generator.
//!
//! This crate is intentionally small and free of IO. It contains deterministic helpers that both the binder
//! (to derive identifiers and detect collisions) and the emitters (to spell keywords and reserved names) rely on.
//!
//! ## Notes
//!
//! - Identifier derivation is a pure function of `(wire name, identifier kind, target)`.
//! - Collisions are reported, never resolved by suffixing.
//!
//! ## Examples
//! ```rust
//! use invokegen_core::naming::{IdentKind, Namespace};
//! use invokegen_core::Target;
//!
//! let mut params = Namespace::new(Target::Rust, IdentKind::Parameter);
//! let ident = params.insert("randomPet").unwrap();
//! assert_eq!(ident, "random_pet");
//! assert_eq!(params.wire_name("random_pet"), Some("randomPet"));
//! ```

pub mod keywords;
pub mod naming;

use std::fmt;
use std::str::FromStr;

/// Target language of an emitted binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Target {
    #[default]
    Rust,
    Python,
}

impl Target {
    /// All supported targets, in a stable order.
    pub const ALL: [Target; 2] = [Target::Rust, Target::Python];

    /// Canonical lowercase spelling (used by the CLI and config files).
    pub fn as_str(self) -> &'static str {
        match self {
            Target::Rust => "rust",
            Target::Python => "python",
        }
    }

    /// File extension of an emitted source unit.
    pub fn file_extension(self) -> &'static str {
        match self {
            Target::Rust => "rs",
            Target::Python => "py",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown target `{s}` (expected one of: rust, python)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_round_trips_through_str() {
        for target in Target::ALL {
            assert_eq!(target.as_str().parse::<Target>(), Ok(target));
        }
    }

    #[test]
    fn test_target_parse_is_case_insensitive() {
        assert_eq!("Python".parse::<Target>(), Ok(Target::Python));
    }

    #[test]
    fn test_target_parse_rejects_unknown() {
        assert!("cobol".parse::<Target>().is_err());
    }
}
