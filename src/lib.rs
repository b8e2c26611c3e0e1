//! Rules installer.
//!
//! Copies the bundled `.cursorrules` document from the package directory
//! into the current project, asking before it overwrites an existing copy
//! and keeping a `.cursorrules.backup` when it does.
//!
//! The public API is organised into layers:
//!
//! - **[`paths`]** / **[`manifest`]**: find the package root and compute the
//!   source, destination and backup paths
//! - **[`fs`]** / **[`prompt`]**: the narrow I/O seams the installer uses
//! - **[`installer`]**: the install/overwrite decision procedure
//! - **[`commands`]**: command orchestration, guidance and remediation output
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod fs;
pub mod installer;
pub mod logging;
pub mod manifest;
pub mod paths;
pub mod prompt;

/// Release version: `CURSOR_RULES_VERSION` stamped by the build script, or
/// the crate version for builds outside a git checkout.
pub const VERSION: &str = match option_env!("CURSOR_RULES_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};
