//! Generator configuration.
//!
//! A [`GeneratorConfig`] selects the target and names the things emitted code refers to: the tool in the
//! generated-file header, the runtime crate path, and the module that holds the root package's own types.
//! It can be built in code or loaded from a JSON file; CLI flags override file values.

use std::path::{Path, PathBuf};

use invokegen_core::Target;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::FormatConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    #[serde(with = "target_name")]
    pub target: Target,
    /// Tool named in the generated-file header.
    pub tool: String,
    /// Path emitted Rust uses to reach the runtime shim.
    pub runtime_crate: String,
    /// Rust module holding the root package's object and enum types.
    pub local_types_module: String,
    /// Whether to emit the deferred `_apply` entry point.
    pub emit_apply: bool,
    pub format: FormatConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target: Target::Rust,
            tool: "invokegen".to_string(),
            runtime_crate: "invokegen_runtime".to_string(),
            local_types_module: "crate::types".to_string(),
            emit_apply: true,
            format: FormatConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl GeneratorConfig {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    pub fn with_runtime_crate(mut self, path: impl Into<String>) -> Self {
        self.runtime_crate = path.into();
        self
    }

    pub fn with_local_types_module(mut self, path: impl Into<String>) -> Self {
        self.local_types_module = path.into();
        self
    }

    pub fn with_emit_apply(mut self, emit: bool) -> Self {
        self.emit_apply = emit;
        self
    }

    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }

    /// Load a config file; missing keys keep their defaults.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Serialize [`Target`] by its canonical name.
mod target_name {
    use invokegen_core::Target;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(target: &Target, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(target.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Target, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.target, Target::Rust);
        assert_eq!(config.tool, "invokegen");
        assert_eq!(config.runtime_crate, "invokegen_runtime");
        assert!(config.emit_apply);
    }

    #[test]
    fn test_builders() {
        let config = GeneratorConfig::new(Target::Python)
            .with_tool("test")
            .with_emit_apply(false);
        assert_eq!(config.target, Target::Python);
        assert_eq!(config.tool, "test");
        assert!(!config.emit_apply);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"target": "python", "tool": "sdkgen", "format": {{"lineLength": 100}}}}"#).unwrap();
        let config = GeneratorConfig::load(file.path()).unwrap();
        assert_eq!(config.target, Target::Python);
        assert_eq!(config.tool, "sdkgen");
        assert_eq!(config.format.line_length, 100);
        assert_eq!(config.runtime_crate, "invokegen_runtime");
    }

    #[test]
    fn test_load_rejects_unknown_target() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"target": "cobol"}}"#).unwrap();
        let err = GeneratorConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }
}
