//! Generator version information.
//!
//! This module exposes the generator version as a single constant so all subsystems
//! (CLI, config defaults, diagnostics) agree on the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Generated file headers name the tool but not its version, so output stays byte-identical across
//!   generator upgrades that do not change emission.

/// The invokegen version string (for example, `0.1.0-alpha.1`).
pub const INVOKEGEN_VERSION: &str = env!("CARGO_PKG_VERSION");
