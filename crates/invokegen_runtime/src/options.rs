//! Per-call invoke options.

use serde::{Deserialize, Serialize};

use crate::invoke::Invoker;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeOptions {
    /// Provider plugin version to dispatch against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Explicit provider reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl InvokeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// The effective options for one invoke: defaults when unset, and the invoker's default version only when
    /// no version was given. Returns a new value; the caller keeps its own options as they were.
    pub fn with_default_version(options: Option<Self>, invoker: &dyn Invoker) -> Self {
        let mut effective = options.unwrap_or_default();
        if effective.version.is_none() {
            effective.version = Some(invoker.resolve_default_version());
        }
        effective
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingInvoker;

    #[test]
    fn test_unset_options_get_default_version() {
        let invoker = RecordingInvoker::new("1.2.3");
        let options = InvokeOptions::with_default_version(None, &invoker);
        assert_eq!(options.version.as_deref(), Some("1.2.3"));
    }

    #[test]
    fn test_explicit_version_is_kept() {
        let invoker = RecordingInvoker::new("1.2.3");
        let given = InvokeOptions::new().with_version("0.9.0").with_provider("urn:provider");
        let options = InvokeOptions::with_default_version(Some(given.clone()), &invoker);
        assert_eq!(options, given);
    }
}
