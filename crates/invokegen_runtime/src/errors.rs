//! Failures an invoke can resolve to.
//!
//! Every error is `Clone`: a resolved [`crate::Deferred`] hands the same failure to each observer.

use serde_json::Value;
use thiserror::Error;

/// A failure reported by the transport. Propagated to callers unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failed: {message}")]
pub struct TransportError {
    pub message: String,
    pub code: Option<String>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// A raw result value whose dynamic shape does not match the declared property type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected `{field}` to be {expected}, found {found}")]
pub struct TypeMismatchError {
    pub field: String,
    pub expected: String,
    pub found: String,
}

impl TypeMismatchError {
    pub fn new(field: impl Into<String>, expected: impl Into<String>, found: &Value) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            found: describe(found).to_string(),
        }
    }

    /// A required property absent from the raw result.
    pub fn missing(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            found: "nothing".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokeError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),

    #[error("failed to serialize argument `{field}`: {message}")]
    Serialize { field: String, message: String },
}

/// Name the dynamic kind of a JSON value the way the decode errors spell it.
pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "int",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
