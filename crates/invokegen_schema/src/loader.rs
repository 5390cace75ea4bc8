//! Read a [`SchemaClosure`] from a JSON document.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::SchemaClosure;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read schema {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid schema {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("schema {} does not contain its root package `{root}`", path.display())]
    MissingRoot { path: PathBuf, root: String },
}

/// Load and validate a schema closure from `path`.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_closure(path: impl AsRef<Path>) -> Result<SchemaClosure, SchemaError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_at(&text, path)
}

/// Parse a schema closure from JSON text that did not come from a file.
pub fn parse_closure(text: &str) -> Result<SchemaClosure, SchemaError> {
    parse_at(text, Path::new("<memory>"))
}

fn parse_at(text: &str, path: &Path) -> Result<SchemaClosure, SchemaError> {
    let closure: SchemaClosure = serde_json::from_str(text).map_err(|source| SchemaError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if closure.root_package().is_none() {
        return Err(SchemaError::MissingRoot {
            path: path.to_path_buf(),
            root: closure.root,
        });
    }
    tracing::debug!(
        root = %closure.root,
        packages = closure.packages.len(),
        "loaded schema closure"
    );
    Ok(closure)
}
