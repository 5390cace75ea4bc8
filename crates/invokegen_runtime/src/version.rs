//! Package version files and a version-supplying invoker adapter.
//!
//! Generated SDK packages ship a two-line version file: the provider name on the first line, the package
//! version on the second. [`Versioned`] wraps any transport so the version stamped into unset options is
//! the package's own.

use std::str::FromStr;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::args::ArgMap;
use crate::errors::TransportError;
use crate::invoke::{Invoker, ResultShape};
use crate::options::InvokeOptions;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionFileError {
    #[error("version file is missing the provider line")]
    MissingProvider,
    #[error("version file is missing the version line")]
    MissingVersion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageVersion {
    pub provider: String,
    pub version: String,
}

impl PackageVersion {
    pub fn parse(text: &str) -> Result<Self, VersionFileError> {
        let mut lines = text.lines().map(str::trim);
        let provider = lines
            .next()
            .filter(|l| !l.is_empty())
            .ok_or(VersionFileError::MissingProvider)?;
        let version = lines
            .next()
            .filter(|l| !l.is_empty())
            .ok_or(VersionFileError::MissingVersion)?;
        Ok(Self {
            provider: provider.to_string(),
            version: version.to_string(),
        })
    }
}

impl FromStr for PackageVersion {
    type Err = VersionFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// An [`Invoker`] whose default version comes from a [`PackageVersion`].
#[derive(Debug, Clone)]
pub struct Versioned<I> {
    inner: I,
    version: PackageVersion,
}

impl<I> Versioned<I> {
    pub fn new(inner: I, version: PackageVersion) -> Self {
        Self { inner, version }
    }

    pub fn package_version(&self) -> &PackageVersion {
        &self.version
    }
}

#[async_trait]
impl<I: Invoker> Invoker for Versioned<I> {
    fn resolve_default_version(&self) -> String {
        self.version.version.clone()
    }

    async fn dispatch(
        &self,
        token: &str,
        args: ArgMap,
        options: &InvokeOptions,
        shape: &ResultShape,
    ) -> Result<Value, TransportError> {
        self.inner.dispatch(token, args, options, shape).await
    }
}
