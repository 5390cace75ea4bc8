//! The handle returned by eager entry points.

use std::fmt;
use std::future::IntoFuture;
use std::sync::Arc;

use crate::deferred::{Deferred, Resolution};
use crate::errors::InvokeError;
use crate::options::InvokeOptions;

/// A [`Deferred`] result together with the effective options the invoke was issued with.
///
/// Generated bindings alias this per function (`pub type AwaitableFooResult = Awaitable<FooResult>`), so the
/// awaitable form always carries exactly the fields of the plain result.
pub struct Awaitable<T> {
    value: Deferred<T>,
    options: InvokeOptions,
}

impl<T: Send + Sync + 'static> Awaitable<T> {
    pub fn new(value: Deferred<T>, options: InvokeOptions) -> Self {
        Self { value, options }
    }

    pub fn resolve(&self) -> Resolution<T> {
        self.value.resolve()
    }

    pub fn peek(&self) -> Option<Result<Arc<T>, InvokeError>> {
        self.value.peek()
    }

    pub fn into_deferred(self) -> Deferred<T> {
        self.value
    }
}

impl<T> Awaitable<T> {
    /// Options after defaulting and version stamping; the caller's options are never mutated.
    pub fn options(&self) -> &InvokeOptions {
        &self.options
    }
}

impl<T> Clone for Awaitable<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            options: self.options.clone(),
        }
    }
}

impl<T> IntoFuture for Awaitable<T> {
    type Output = Result<Arc<T>, InvokeError>;
    type IntoFuture = Resolution<T>;

    fn into_future(self) -> Self::IntoFuture {
        self.value.into_future()
    }
}

impl<T> fmt::Debug for Awaitable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Awaitable")
            .field("value", &self.value)
            .field("options", &self.options)
            .finish()
    }
}
