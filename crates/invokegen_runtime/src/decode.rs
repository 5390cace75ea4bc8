//! Typed decoding of raw invoke results.
//!
//! Each declared property kind checks the dynamic shape of its raw value; a mismatch is reported as a
//! [`TypeMismatchError`] naming the property, never coerced. Generated `from_raw` functions call
//! [`required`] or [`optional`] once per property in declaration order.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::args::RawResult;
use crate::errors::TypeMismatchError;

/// A type that can be checked and extracted from a raw JSON value.
pub trait FromRaw: Sized {
    /// How the expected kind is spelled in mismatch errors.
    fn expected() -> String;

    /// `None` when `value` does not have the expected shape.
    fn from_raw_value(value: &Value) -> Option<Self>;
}

impl FromRaw for bool {
    fn expected() -> String {
        "bool".to_string()
    }

    fn from_raw_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromRaw for i64 {
    fn expected() -> String {
        "int".to_string()
    }

    fn from_raw_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FromRaw for f64 {
    fn expected() -> String {
        "number".to_string()
    }

    fn from_raw_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromRaw for String {
    fn expected() -> String {
        "string".to_string()
    }

    fn from_raw_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromRaw for Value {
    fn expected() -> String {
        "any".to_string()
    }

    fn from_raw_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl<T: FromRaw> FromRaw for Vec<T> {
    fn expected() -> String {
        format!("list of {}", T::expected())
    }

    fn from_raw_value(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(T::from_raw_value).collect()
    }
}

impl<T: FromRaw + Ord> FromRaw for BTreeSet<T> {
    fn expected() -> String {
        format!("set of {}", T::expected())
    }

    fn from_raw_value(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(T::from_raw_value).collect()
    }
}

impl<T: FromRaw> FromRaw for BTreeMap<String, T> {
    fn expected() -> String {
        format!("map of {}", T::expected())
    }

    fn from_raw_value(value: &Value) -> Option<Self> {
        value
            .as_object()?
            .iter()
            .map(|(k, v)| T::from_raw_value(v).map(|v| (k.clone(), v)))
            .collect()
    }
}

/// Implement [`FromRaw`] for object and enum types through their `serde::Deserialize` impl.
///
/// ```rust
/// #[derive(serde::Deserialize)]
/// pub struct RandomPet {
///     pub id: String,
/// }
///
/// invokegen_runtime::impl_from_raw_via_serde!(RandomPet);
/// ```
#[macro_export]
macro_rules! impl_from_raw_via_serde {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::decode::FromRaw for $ty {
                fn expected() -> ::std::string::String {
                    ::std::string::String::from(stringify!($ty))
                }

                fn from_raw_value(value: &$crate::Value) -> ::std::option::Option<Self> {
                    $crate::serde_json::from_value(value.clone()).ok()
                }
            }
        )+
    };
}

/// Decode a property that must be present and non-null.
pub fn required<T: FromRaw>(raw: &RawResult, field: &str) -> Result<T, TypeMismatchError> {
    match raw.get(field) {
        None => Err(TypeMismatchError::missing(field, T::expected())),
        Some(value) => T::from_raw_value(value).ok_or_else(|| TypeMismatchError::new(field, T::expected(), value)),
    }
}

/// Decode a property where absence and `null` both mean "no value".
pub fn optional<T: FromRaw>(raw: &RawResult, field: &str) -> Result<Option<T>, TypeMismatchError> {
    match raw.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::from_raw_value(value)
            .map(Some)
            .ok_or_else(|| TypeMismatchError::new(field, T::expected(), value)),
    }
}
