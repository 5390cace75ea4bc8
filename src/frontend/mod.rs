//! invokegen frontend
//!
//! This module turns a loaded schema closure into bound functions:
//! - `binder`: reference resolution, optionality and naming
//! - `diagnostics`: rendering binding and loading errors for humans
//!
//! The schema model itself lives in the `invokegen_schema` crate and is re-exported here.

pub mod binder;
pub mod diagnostics;

pub use invokegen_schema as schema;
