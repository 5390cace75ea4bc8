//! Apply-convention inputs: a value now, or a deferred value later.

use std::sync::Arc;

use crate::awaitable::Awaitable;
use crate::deferred::Deferred;
use crate::errors::InvokeError;

#[derive(Debug, Clone)]
pub enum Input<T> {
    Value(T),
    Deferred(Deferred<T>),
}

impl<T: Clone + Send + Sync + 'static> Input<T> {
    pub fn value(value: T) -> Self {
        Input::Value(value)
    }

    /// Wait for the input. A failed deferred input fails the caller with the same error.
    pub async fn resolve(self) -> Result<T, InvokeError> {
        match self {
            Input::Value(value) => Ok(value),
            Input::Deferred(deferred) => deferred.await.map(Arc::unwrap_or_clone),
        }
    }

    pub async fn resolve_optional(input: Option<Self>) -> Result<Option<T>, InvokeError> {
        match input {
            Some(input) => input.resolve().await.map(Some),
            None => Ok(None),
        }
    }
}

impl<T> From<Deferred<T>> for Input<T> {
    fn from(deferred: Deferred<T>) -> Self {
        Input::Deferred(deferred)
    }
}

impl<T: Send + Sync + 'static> From<Awaitable<T>> for Input<T> {
    fn from(awaitable: Awaitable<T>) -> Self {
        Input::Deferred(awaitable.into_deferred())
    }
}
