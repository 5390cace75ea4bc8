//! Argument capture for a single invoke.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::InvokeError;

/// Wire name to serialized value. Absent optional parameters have no entry (never `null`).
pub type ArgMap = Map<String, Value>;

/// The object a transport returns for a successful invoke.
pub type RawResult = Map<String, Value>;

/// Serialize arguments into an [`ArgMap`].
///
/// Capture happens synchronously when the entry point is called. The first serialization failure is kept and
/// later fields are skipped; [`ArgCapture::finish`] reports it.
#[derive(Debug, Default)]
pub struct ArgCapture {
    args: ArgMap,
    error: Option<InvokeError>,
}

impl ArgCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required<T: Serialize + ?Sized>(mut self, wire_name: &str, value: &T) -> Self {
        if self.error.is_some() {
            return self;
        }
        match serde_json::to_value(value) {
            Ok(value) => {
                self.args.insert(wire_name.to_string(), value);
            }
            Err(err) => {
                self.error = Some(InvokeError::Serialize {
                    field: wire_name.to_string(),
                    message: err.to_string(),
                });
            }
        }
        self
    }

    pub fn optional<T: Serialize + ?Sized>(self, wire_name: &str, value: Option<&T>) -> Self {
        match value {
            Some(value) => self.required(wire_name, value),
            None => self,
        }
    }

    pub fn finish(self) -> Result<ArgMap, InvokeError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.args),
        }
    }
}
