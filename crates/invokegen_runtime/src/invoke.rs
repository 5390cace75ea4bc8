//! The transport seam and the single dispatch path shared by every generated entry point.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::args::{ArgCapture, ArgMap, RawResult};
use crate::awaitable::Awaitable;
use crate::deferred::Deferred;
use crate::errors::{InvokeError, TransportError, TypeMismatchError};
use crate::options::InvokeOptions;

/// Static description of a function's result type, handed to the transport with each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultShape {
    pub name: &'static str,
    /// Wire names in declaration order.
    pub properties: &'static [&'static str],
}

/// Performs remote invokes. Injected into every generated entry point.
#[async_trait]
pub trait Invoker: Send + Sync {
    /// Version stamped into options that do not carry one.
    fn resolve_default_version(&self) -> String;

    /// Send one request and return the raw result object.
    async fn dispatch(
        &self,
        token: &str,
        args: ArgMap,
        options: &InvokeOptions,
        shape: &ResultShape,
    ) -> Result<Value, TransportError>;
}

#[async_trait]
impl<I: Invoker + ?Sized> Invoker for Arc<I> {
    fn resolve_default_version(&self) -> String {
        (**self).resolve_default_version()
    }

    async fn dispatch(
        &self,
        token: &str,
        args: ArgMap,
        options: &InvokeOptions,
        shape: &ResultShape,
    ) -> Result<Value, TransportError> {
        (**self).dispatch(token, args, options, shape).await
    }
}

/// Issue an invoke and return its awaitable result.
///
/// Arguments were captured by the caller before this point and options are derived here, synchronously.
/// The request itself is sent when the awaitable is first polled, exactly once no matter how many
/// observers await it. Nothing is sent for an awaitable that is dropped unpolled, so callers that only
/// want the side effect must still await (or spawn) it. A non-object raw result is a type mismatch on the
/// result itself.
pub fn invoke<T, D>(
    invoker: Arc<dyn Invoker>,
    token: &'static str,
    arguments: ArgCapture,
    options: Option<InvokeOptions>,
    shape: &'static ResultShape,
    decode: D,
) -> Awaitable<T>
where
    T: Send + Sync + 'static,
    D: FnOnce(&RawResult) -> Result<T, TypeMismatchError> + Send + 'static,
{
    let options = InvokeOptions::with_default_version(options, invoker.as_ref());
    let captured = arguments.finish();
    let request_options = options.clone();

    let value = Deferred::new(async move {
        let args = captured?;
        tracing::debug!(token, args = args.len(), version = ?request_options.version, "dispatching invoke");
        let raw = invoker
            .dispatch(token, args, &request_options, shape)
            .await
            .map_err(|err| {
                tracing::debug!(token, error = %err, "invoke transport failed");
                InvokeError::Transport(err)
            })?;
        let object = match raw {
            Value::Object(object) => object,
            other => return Err(TypeMismatchError::new(shape.name, "object", &other).into()),
        };
        Ok(decode(&object)?)
    });

    Awaitable::new(value, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode;
    use crate::testing::RecordingInvoker;
    use serde_json::json;

    static SHAPE: ResultShape = ResultShape {
        name: "CountResult",
        properties: &["count"],
    };

    fn count(raw: &RawResult) -> Result<Option<i64>, TypeMismatchError> {
        decode::optional(raw, "count")
    }

    #[tokio::test]
    async fn test_dispatch_is_lazy_and_single() {
        let invoker = Arc::new(RecordingInvoker::new("1.0.0").with_response(json!({"count": 2})));
        let awaitable = invoke(invoker.clone(), "pkg::count", ArgCapture::new(), None, &SHAPE, count);
        assert_eq!(invoker.call_count(), 0);

        let (a, b) = futures::join!(awaitable.resolve(), awaitable.resolve());
        assert_eq!(*a.unwrap(), Some(2));
        assert!(b.is_ok());
        assert_eq!(invoker.call_count(), 1);
        assert_eq!(invoker.calls()[0].options.version.as_deref(), Some("1.0.0"));
    }

    #[tokio::test]
    async fn test_non_object_result_is_mismatch() {
        let invoker = Arc::new(RecordingInvoker::new("1.0.0").with_response(json!([1])));
        let err = invoke(invoker, "pkg::count", ArgCapture::new(), None, &SHAPE, count)
            .await
            .unwrap_err();
        assert!(matches!(err, InvokeError::TypeMismatch(ref m) if m.field == "CountResult"));
    }

    #[tokio::test]
    async fn test_serialization_failure_skips_dispatch() {
        let invoker = Arc::new(RecordingInvoker::new("1.0.0"));
        let mut bad = std::collections::BTreeMap::new();
        bad.insert((1, 2), "x");
        let args = ArgCapture::new().required("bad", &bad);
        let err = invoke(invoker.clone(), "pkg::count", args, None, &SHAPE, count)
            .await
            .unwrap_err();
        assert!(matches!(err, InvokeError::Serialize { .. }));
        assert_eq!(invoker.call_count(), 0);
    }
}
