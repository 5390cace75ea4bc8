//! Define error types for binding → source emission.
//!
//! These errors represent *emission* failures (as opposed to schema loading or binding). Emission works on
//! bound functions only, so in practice they point at a bad configuration value (such as an unparsable
//! runtime crate path) rather than at the schema.

use thiserror::Error;

/// Error during emission.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Generated Rust tokens (or a configured path) failed to parse.
    #[error("syn parse error: {0}")]
    SynParse(String),

    #[error("failed to write emitted text: {0}")]
    Fmt(#[from] std::fmt::Error),
}
