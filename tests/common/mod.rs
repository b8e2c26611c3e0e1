// Shared helpers for integration tests.
//
// Provides a temporary package directory and a temporary project directory
// so each test can run the installer against real files without touching
// the working tree.
#![allow(dead_code)]

use std::cell::Cell;
use std::io;
use std::path::{Path, PathBuf};

use cursor_rules_cli::logging::Log;
use cursor_rules_cli::paths::InstallPaths;
use cursor_rules_cli::prompt::Prompt;

/// Rules text written into the fake package.
pub const BUNDLED_RULES: &str = "# Rules\n\n## Security\n- validate input\n\n## Testing\n- write tests\n";

/// A package directory and a project directory, both deleted on drop.
pub struct InstallFixture {
    /// Directory standing in for the installed package.
    pub package: tempfile::TempDir,
    /// Directory standing in for the user's project.
    pub project: tempfile::TempDir,
}

impl InstallFixture {
    /// Create a package containing [`BUNDLED_RULES`] and an empty project.
    pub fn new() -> Self {
        let fixture = Self::without_source();
        std::fs::write(fixture.package.path().join(".cursorrules"), BUNDLED_RULES)
            .expect("write bundled rules");
        fixture
    }

    /// Create an empty package (no bundled rules file) and an empty project.
    pub fn without_source() -> Self {
        Self {
            package: tempfile::tempdir().expect("create package dir"),
            project: tempfile::tempdir().expect("create project dir"),
        }
    }

    /// Pre-populate the project's `.cursorrules`.
    pub fn with_existing(self, content: &str) -> Self {
        std::fs::write(self.destination(), content).expect("write existing rules");
        self
    }

    /// Paths the installer will use for this fixture.
    pub fn paths(&self) -> InstallPaths {
        InstallPaths::new(self.package.path(), self.project.path())
    }

    /// The project's `.cursorrules`.
    pub fn destination(&self) -> PathBuf {
        self.project.path().join(".cursorrules")
    }

    /// The project's `.cursorrules.backup`.
    pub fn backup(&self) -> PathBuf {
        self.project.path().join(".cursorrules.backup")
    }

    /// Read a file, or `None` if it does not exist.
    pub fn read(path: &Path) -> Option<String> {
        std::fs::read_to_string(path).ok()
    }
}

/// A [`Prompt`] that returns a fixed answer and counts how often it was asked.
pub struct ScriptedPrompt {
    answer: Option<String>,
    asked: Cell<usize>,
}

impl ScriptedPrompt {
    /// Answer every question with `answer`.
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            asked: Cell::new(0),
        }
    }

    /// Fail if asked at all.
    pub fn silent() -> Self {
        Self {
            answer: None,
            asked: Cell::new(0),
        }
    }

    /// Number of times the prompt was shown.
    pub fn times_asked(&self) -> usize {
        self.asked.get()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&self, _question: &str) -> io::Result<String> {
        self.asked.set(self.asked.get() + 1);
        self.answer
            .clone()
            .ok_or_else(|| io::Error::other("unexpected prompt"))
    }
}

/// A [`Log`] that discards everything.
pub struct NullLog;

impl Log for NullLog {
    fn stage(&self, _: &str) {}
    fn info(&self, _: &str) {}
    fn notice(&self, _: &str) {}
    fn debug(&self, _: &str) {}
    fn warn(&self, _: &str) {}
    fn error(&self, _: &str) {}
}
