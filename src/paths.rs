//! Package root resolution and install path computation.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::InstallError;
use crate::logging::Log;
use crate::manifest::{MANIFEST_FILE, Manifest};

/// File name of the rules document, both in the package and in the project.
pub const RULES_FILE: &str = ".cursorrules";

/// Suffix appended to the destination to form the backup path.
pub const BACKUP_SUFFIX: &str = ".backup";

/// Environment variable that overrides package root detection.
pub const ROOT_ENV: &str = "CURSOR_RULES_ROOT";

/// The directory holding the installer's bundled files.
#[derive(Debug, Clone)]
pub struct PackageRoot {
    /// Package root directory.
    pub dir: PathBuf,
    /// Parsed manifest, or defaults when none was found.
    pub manifest: Manifest,
}

/// The three paths an install touches, computed once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    /// Bundled rules file (`<package-root>/.cursorrules`).
    pub source: PathBuf,
    /// Rules file in the project (`<project>/.cursorrules`).
    pub destination: PathBuf,
    /// Backup of an existing destination (`<project>/.cursorrules.backup`).
    pub backup: PathBuf,
}

impl InstallPaths {
    /// Compute source, destination and backup paths.
    #[must_use]
    pub fn new(package_root: &Path, project_dir: &Path) -> Self {
        let destination = project_dir.join(RULES_FILE);
        Self {
            source: package_root.join(RULES_FILE),
            backup: backup_path(&destination),
            destination,
        }
    }
}

/// Append [`BACKUP_SUFFIX`] to `destination` without touching its extension.
#[must_use]
pub fn backup_path(destination: &Path) -> PathBuf {
    let mut raw = OsString::from(destination.as_os_str());
    raw.push(BACKUP_SUFFIX);
    PathBuf::from(raw)
}

/// Walk up from `start` looking for a directory that contains [`MANIFEST_FILE`].
///
/// # Errors
///
/// Returns [`InstallError::Resolution`] if no ancestor holds a manifest.
pub fn find_manifest_dir(start: &Path) -> Result<PathBuf, InstallError> {
    start
        .ancestors()
        .find(|dir| dir.join(MANIFEST_FILE).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| InstallError::Resolution {
            reason: format!("no {MANIFEST_FILE} found above {}", start.display()),
        })
}

/// Resolve the package root.
///
/// Uses `explicit` (from `--root` or [`ROOT_ENV`]) when given, otherwise
/// searches upward from the running executable for the package manifest and
/// falls back to the directory above the executable.
///
/// # Errors
///
/// Returns [`InstallError::Resolution`] if the executable's own location
/// cannot be determined.
pub fn resolve_package_root(
    explicit: Option<&Path>,
    log: &dyn Log,
) -> Result<PackageRoot, InstallError> {
    if let Some(dir) = explicit {
        return Ok(with_explicit_root(dir, log));
    }
    let exe = std::env::current_exe().map_err(|e| InstallError::Resolution {
        reason: format!("cannot determine executable path: {e}"),
    })?;
    resolve_from_exe(&exe, log)
}

fn with_explicit_root(dir: &Path, log: &dyn Log) -> PackageRoot {
    log.debug(&format!("package root (explicit): {}", dir.display()));
    let manifest = if dir.join(MANIFEST_FILE).is_file() {
        load_or_default(dir, log)
    } else {
        Manifest::default()
    };
    PackageRoot {
        dir: dir.to_path_buf(),
        manifest,
    }
}

/// Load the manifest in `dir`; a broken one is reported and replaced by the
/// default so the directory still serves as the package root.
fn load_or_default(dir: &Path, log: &dyn Log) -> Manifest {
    Manifest::load(dir).unwrap_or_else(|e| {
        log.warn(&format!("ignoring package manifest: {e}"));
        Manifest::default()
    })
}

/// Resolve from a known executable path.
///
/// # Errors
///
/// Returns [`InstallError::Resolution`] if `exe` has no parent directory.
pub fn resolve_from_exe(exe: &Path, log: &dyn Log) -> Result<PackageRoot, InstallError> {
    let exe_dir = exe.parent().ok_or_else(|| InstallError::Resolution {
        reason: format!("executable has no parent directory: {}", exe.display()),
    })?;

    match find_manifest_dir(exe_dir) {
        Ok(dir) => {
            log.debug(&format!("package root: {}", dir.display()));
            let manifest = load_or_default(&dir, log);
            Ok(PackageRoot { dir, manifest })
        }
        Err(e) => {
            let fallback = exe_dir.join("..");
            let dir = std::fs::canonicalize(&fallback).unwrap_or(fallback);
            log.debug(&format!("{e}; falling back to {}", dir.display()));
            Ok(PackageRoot {
                dir,
                manifest: Manifest::default(),
            })
        }
    }
}
