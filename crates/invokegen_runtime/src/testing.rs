//! Stub transports for testing generated bindings.
//!
//! Enabled with the `testing` feature.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::args::ArgMap;
use crate::errors::TransportError;
use crate::invoke::{Invoker, ResultShape};
use crate::options::InvokeOptions;

/// One dispatched request as the transport saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub token: String,
    pub args: ArgMap,
    pub options: InvokeOptions,
    pub shape: ResultShape,
}

/// Records every dispatch and answers from a script.
///
/// Scripted responses are consumed in order; once exhausted, every call gets the fallback (an empty object
/// unless set with [`RecordingInvoker::with_response`]).
#[derive(Debug)]
pub struct RecordingInvoker {
    default_version: String,
    script: Mutex<VecDeque<Result<Value, TransportError>>>,
    fallback: Result<Value, TransportError>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingInvoker {
    pub fn new(default_version: impl Into<String>) -> Self {
        Self {
            default_version: default_version.into(),
            script: Mutex::new(VecDeque::new()),
            fallback: Ok(Value::Object(ArgMap::new())),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answer every unscripted call with `value`.
    pub fn with_response(mut self, value: Value) -> Self {
        self.fallback = Ok(value);
        self
    }

    /// Fail every unscripted call with `error`.
    pub fn with_failure(mut self, error: TransportError) -> Self {
        self.fallback = Err(error);
        self
    }

    /// Queue a one-off answer ahead of the fallback.
    pub fn push(&self, response: Result<Value, TransportError>) {
        lock(&self.script).push_back(response);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl Invoker for RecordingInvoker {
    fn resolve_default_version(&self) -> String {
        self.default_version.clone()
    }

    async fn dispatch(
        &self,
        token: &str,
        args: ArgMap,
        options: &InvokeOptions,
        shape: &ResultShape,
    ) -> Result<Value, TransportError> {
        lock(&self.calls).push(RecordedCall {
            token: token.to_string(),
            args,
            options: options.clone(),
            shape: *shape,
        });
        let scripted = lock(&self.script).pop_front();
        scripted.unwrap_or_else(|| self.fallback.clone())
    }
}
