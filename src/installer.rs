//! The install/overwrite decision procedure.
//!
//! [`Installer::run`] checks the bundled source, then the destination, and
//! depending on the [`Policy`] copies, prompts, backs up, or leaves the
//! project untouched. All filesystem and terminal access goes through the
//! [`FileSystem`] and [`Prompt`] traits.
use std::path::PathBuf;

use crate::error::InstallError;
use crate::fs::FileSystem;
use crate::logging::Log;
use crate::paths::{InstallPaths, RULES_FILE};
use crate::prompt::{Prompt, is_affirmative};

/// Question shown before overwriting an existing rules file.
pub const OVERWRITE_QUESTION: &str = "Overwrite existing .cursorrules? (yes/no): ";

/// How to proceed when the destination already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Ask before overwriting; back up the old file on "yes".
    Interactive,
    /// Never overwrite; print manual update instructions instead.
    NonInteractive,
    /// Overwrite without asking, backing up the old file first.
    AssumeYes,
}

impl Policy {
    /// Pick the policy from the command-line flags and the terminal state.
    ///
    /// `--yes` wins; otherwise prompting needs a terminal on stdin and no
    /// `--no-input`.
    #[must_use]
    pub const fn select(assume_yes: bool, no_input: bool, stdin_is_terminal: bool) -> Self {
        if assume_yes {
            Self::AssumeYes
        } else if no_input || !stdin_is_terminal {
            Self::NonInteractive
        } else {
            Self::Interactive
        }
    }
}

/// What a run did to the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No rules file existed; the bundled one was copied in.
    Installed,
    /// An existing rules file was overwritten.
    Replaced {
        /// Backup of the previous file, if the backup copy succeeded.
        backup: Option<PathBuf>,
    },
    /// The user declined to overwrite.
    Cancelled,
    /// A rules file exists and the policy forbids overwriting it.
    AlreadyExists,
}

impl Outcome {
    /// Return `true` if the destination now holds the bundled rules.
    #[must_use]
    pub const fn wrote_rules(&self) -> bool {
        matches!(self, Self::Installed | Self::Replaced { .. })
    }
}

/// Copies the bundled rules file into a project.
pub struct Installer<'a> {
    fs: &'a dyn FileSystem,
    prompt: &'a dyn Prompt,
    log: &'a dyn Log,
    paths: &'a InstallPaths,
}

impl std::fmt::Debug for Installer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Installer")
            .field("paths", self.paths)
            .finish_non_exhaustive()
    }
}

impl<'a> Installer<'a> {
    /// Create an installer over the given seams and paths.
    #[must_use]
    pub fn new(
        fs: &'a dyn FileSystem,
        prompt: &'a dyn Prompt,
        log: &'a dyn Log,
        paths: &'a InstallPaths,
    ) -> Self {
        Self {
            fs,
            prompt,
            log,
            paths,
        }
    }

    /// Install the rules file according to `policy`.
    ///
    /// # Errors
    ///
    /// - [`InstallError::SourceNotFound`] if the bundled file is missing
    ///   (nothing in the project is touched).
    /// - [`InstallError::Copy`] if copying into the project fails.
    /// - [`InstallError::Prompt`] if the confirmation cannot be read.
    pub fn run(&self, policy: Policy) -> Result<Outcome, InstallError> {
        let paths = self.paths;
        if !self.fs.exists(&paths.source) {
            return Err(InstallError::SourceNotFound {
                path: paths.source.clone(),
            });
        }

        if !self.fs.exists(&paths.destination) {
            self.log
                .debug(&format!("{} not present, installing", paths.destination.display()));
            self.copy_rules()?;
            self.log
                .info(&format!("SUCCESS: {RULES_FILE} installed to your project!"));
            return Ok(Outcome::Installed);
        }

        match policy {
            Policy::NonInteractive => {
                self.print_manual_update();
                Ok(Outcome::AlreadyExists)
            }
            Policy::AssumeYes => self.replace(),
            Policy::Interactive => {
                self.print_overwrite_notice();
                let answer = self
                    .prompt
                    .ask(OVERWRITE_QUESTION)
                    .map_err(InstallError::Prompt)?;
                if is_affirmative(&answer) {
                    self.replace()
                } else {
                    self.log
                        .notice(&format!("Installation cancelled. Existing {RULES_FILE} kept."));
                    Ok(Outcome::Cancelled)
                }
            }
        }
    }

    /// Back up the existing destination (best effort), then overwrite it.
    fn replace(&self) -> Result<Outcome, InstallError> {
        let paths = self.paths;
        let backup = match self.fs.copy(&paths.destination, &paths.backup) {
            Ok(()) => {
                self.log
                    .info(&format!("Backup created: {}", paths.backup.display()));
                Some(paths.backup.clone())
            }
            Err(source) => {
                let warning = InstallError::Backup {
                    path: paths.backup.clone(),
                    source,
                };
                self.log.warn(&warning.to_string());
                None
            }
        };

        self.copy_rules()?;
        self.log.info(&format!("SUCCESS: {RULES_FILE} updated!"));
        Ok(Outcome::Replaced { backup })
    }

    fn copy_rules(&self) -> Result<(), InstallError> {
        let paths = self.paths;
        self.fs
            .copy(&paths.source, &paths.destination)
            .map_err(|source| InstallError::Copy {
                from: paths.source.clone(),
                to: paths.destination.clone(),
                source,
            })
    }

    fn print_overwrite_notice(&self) {
        let log = self.log;
        log.notice(&format!("{RULES_FILE} already exists in your project."));
        log.info(&format!("Location: {}", self.paths.destination.display()));
        log.info("Options:");
        log.info("   1. Keep existing file (no action needed)");
        log.info("   2. Backup and replace with new version:");
        log.info(&format!("      mv {RULES_FILE} {RULES_FILE}.backup"));
        log.info("      cursor-rules-init");
        log.info("   3. Manually compare and merge changes");
    }

    fn print_manual_update(&self) {
        let log = self.log;
        log.notice(&format!("{RULES_FILE} already exists in your project."));
        log.info(&format!("Location: {}", self.paths.destination.display()));
        log.info("To update, please:");
        log.info(&format!("   1. Backup your current {RULES_FILE} file"));
        log.info("   2. Delete or rename it");
        log.info("   3. Run: cursor-rules-init");
        log.info("Or re-run with --yes to back it up and replace it, or manually copy from:");
        log.info(&format!("   {}", self.paths.source.display()));
    }
}
