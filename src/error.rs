//! Domain-specific error types for the installer.
//!
//! Internal modules return [`InstallError`] while the command handler at the
//! CLI boundary converts it to [`anyhow::Error`] via the standard `?`
//! operator, after printing the remediation hints from
//! [`InstallError::remediation`].
//!
//! # Error kinds
//!
//! ```text
//! InstallError
//! ├── WorkingDir     — current directory cannot be determined
//! ├── Resolution     — package root cannot be located
//! ├── Manifest       — cursor-rules.toml unreadable or malformed
//! ├── SourceNotFound — bundled .cursorrules missing (fatal)
//! ├── Copy           — copying the rules file failed (fatal)
//! ├── Backup         — backup before overwrite failed (warning only)
//! └── Prompt         — confirmation line could not be read (fatal)
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that arise while installing the rules file.
#[derive(Error, Debug)]
pub enum InstallError {
    /// The current directory (the project to install into) is unavailable,
    /// for example because it was deleted.
    #[error("cannot determine current directory: {0}")]
    WorkingDir(#[source] io::Error),

    /// The package root (the directory holding the bundled files) could not be located.
    #[error("cannot locate package root: {reason}")]
    Resolution {
        /// Human-readable explanation of why resolution failed.
        reason: String,
    },

    /// The package manifest exists but could not be read or parsed.
    #[error("invalid package manifest {path}: {reason}")]
    Manifest {
        /// Path to the manifest file.
        path: PathBuf,
        /// Underlying read or parse error message.
        reason: String,
    },

    /// The bundled rules file is absent from the package root.
    #[error("cannot find .cursorrules file in package: {path}")]
    SourceNotFound {
        /// Expected location of the bundled rules file.
        path: PathBuf,
    },

    /// Copying the rules file into the project failed.
    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        /// Source of the copy.
        from: PathBuf,
        /// Destination of the copy.
        to: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Backing up the existing destination failed.
    ///
    /// Never returned from the installer; it is logged as a warning and the
    /// overwrite proceeds.
    #[error("could not create backup {path}: {source}")]
    Backup {
        /// Backup path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Reading the confirmation answer from standard input failed.
    #[error("failed to read confirmation: {0}")]
    Prompt(#[source] io::Error),
}

impl InstallError {
    /// Manual-recovery instructions to print before exiting.
    ///
    /// `source` and `destination` are the paths the installer was working
    /// with so the user can finish the operation by hand.
    #[must_use]
    pub fn remediation(&self, source: &Path, destination: &Path) -> Vec<String> {
        match self {
            Self::Resolution { .. } | Self::Manifest { .. } => vec![
                "Point the installer at the package directory:".to_string(),
                "   cursor-rules-init --root <DIR>".to_string(),
                "   or set CURSOR_RULES_ROOT=<DIR>".to_string(),
            ],
            Self::WorkingDir(_) => vec![
                "Change into your project directory and run the installer again:".to_string(),
                "   cd <project> && cursor-rules-init".to_string(),
            ],
            Self::SourceNotFound { path } => vec![
                format!("Expected location: {}", path.display()),
                "Point the installer at a directory that contains .cursorrules:".to_string(),
                "   cursor-rules-init --root <DIR>".to_string(),
                "   or set CURSOR_RULES_ROOT=<DIR>".to_string(),
                "Or copy the rules file by hand to:".to_string(),
                format!("   {}", destination.display()),
            ],
            Self::Copy { .. } | Self::Prompt(_) => vec![
                "Manual installation:".to_string(),
                format!("   Copy from: {}", source.display()),
                format!("   To: {}", destination.display()),
                "Or try:".to_string(),
                format!("   cp {} {}", source.display(), destination.display()),
            ],
            Self::Backup { path, .. } => vec![format!(
                "Copy the existing file to {} by hand if you need to keep it",
                path.display()
            )],
        }
    }
}
