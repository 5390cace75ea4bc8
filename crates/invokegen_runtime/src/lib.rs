//! Runtime support for invoke bindings generated by invokegen.
//!
//! Generated modules reference every item here by absolute path (`invokegen_runtime::...`), so the names a
//! schema introduces can never shadow runtime helpers.
//!
//! The pieces, in the order a generated eager entry point uses them:
//!
//! - [`ArgCapture`] serializes caller arguments into an [`ArgMap`], skipping absent optionals;
//! - [`InvokeOptions::with_default_version`] derives the effective options;
//! - [`invoke`] dispatches through an [`Invoker`] and decodes the raw result with [`decode`];
//! - the outcome is an [`Awaitable`], a resolve-once [`Deferred`] plus the options it was issued with.
//!
//! The apply convention takes [`Input`] values that may themselves be deferred.

#![deny(clippy::unwrap_used)]

pub mod args;
pub mod awaitable;
pub mod decode;
pub mod deferred;
pub mod errors;
pub mod input;
pub mod invoke;
pub mod options;
pub mod prelude;
pub mod version;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use args::{ArgCapture, ArgMap, RawResult};
pub use awaitable::Awaitable;
pub use deferred::{Deferred, Resolution};
pub use errors::{InvokeError, TransportError, TypeMismatchError};
pub use input::Input;
pub use invoke::{Invoker, ResultShape, invoke};
pub use options::InvokeOptions;

// Re-exports used by generated code and by hand-written transports.
pub use async_trait::async_trait;
pub use futures::try_join;
pub use serde_json;
pub use serde_json::Value;
