//! Resolve-once deferred values.
//!
//! A [`Deferred`] wraps a boxed future in [`futures::future::Shared`]: the underlying work runs at most once,
//! on first poll, and every clone observes the same `Arc` (or the same error). There is no cancellation;
//! dropping every handle simply drops the pending work.

use std::fmt;
use std::future::{Future, IntoFuture};
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};

use crate::errors::InvokeError;

/// The shared future behind a [`Deferred`]; awaiting it yields the cached outcome.
pub type Resolution<T> = Shared<BoxFuture<'static, Result<Arc<T>, InvokeError>>>;

pub struct Deferred<T> {
    inner: Resolution<T>,
}

impl<T: Send + Sync + 'static> Deferred<T> {
    /// Defer a computation producing `T`.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, InvokeError>> + Send + 'static,
    {
        Self::lift(future.map(|outcome| outcome.map(Arc::new)))
    }

    /// Defer a computation that already produces a shared value (e.g. another deferred's resolution).
    pub fn lift<F>(future: F) -> Self
    where
        F: Future<Output = Result<Arc<T>, InvokeError>> + Send + 'static,
    {
        Self {
            inner: future.boxed().shared(),
        }
    }

    pub fn ready(value: T) -> Self {
        Self::lift(futures::future::ready(Ok(Arc::new(value))))
    }

    pub fn failed(error: InvokeError) -> Self {
        Self::lift(futures::future::ready(Err(error)))
    }

    /// Derive a new deferred from this one's value; failures pass through untouched.
    pub fn map<U, F>(&self, f: F) -> Deferred<U>
    where
        U: Send + Sync + 'static,
        F: FnOnce(&T) -> U + Send + 'static,
    {
        let inner = self.inner.clone();
        Deferred::lift(async move { inner.await.map(|value| Arc::new(f(&value))) })
    }

    /// The cached outcome, if resolution already completed.
    pub fn peek(&self) -> Option<Result<Arc<T>, InvokeError>> {
        self.inner.peek().cloned()
    }

    /// Await the value. Each call shares the single underlying resolution.
    pub fn resolve(&self) -> Resolution<T> {
        self.inner.clone()
    }
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> IntoFuture for Deferred<T> {
    type Output = Result<Arc<T>, InvokeError>;
    type IntoFuture = Resolution<T>;

    fn into_future(self) -> Self::IntoFuture {
        self.inner
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.inner.peek() {
            None => "pending",
            Some(Ok(_)) => "resolved",
            Some(Err(_)) => "failed",
        };
        f.debug_struct("Deferred").field("state", &state).finish()
    }
}
