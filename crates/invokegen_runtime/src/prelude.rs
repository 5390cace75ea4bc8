//! Common imports for hand-written transports and callers of generated bindings.

pub use crate::args::{ArgMap, RawResult};
pub use crate::awaitable::Awaitable;
pub use crate::deferred::Deferred;
pub use crate::errors::{InvokeError, TransportError, TypeMismatchError};
pub use crate::input::Input;
pub use crate::invoke::{Invoker, ResultShape};
pub use crate::options::InvokeOptions;
pub use async_trait::async_trait;
pub use serde_json::Value;
