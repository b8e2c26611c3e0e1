//! Install command: resolve paths, run the installer, print guidance.
use std::io::IsTerminal as _;
use std::path::Path;

use anyhow::Result;

use crate::cli::Cli;
use crate::error::InstallError;
use crate::fs::{FileSystem, RealFs};
use crate::installer::{Installer, Outcome, Policy};
use crate::logging::{self, Log};
use crate::manifest::Manifest;
use crate::paths::{self, InstallPaths, RULES_FILE};
use crate::prompt::{Prompt, StdinPrompt};

/// Size of a rules document as shown after installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesStats {
    /// Number of lines.
    pub lines: usize,
    /// Number of `## ` section headings.
    pub sections: usize,
}

impl RulesStats {
    /// Count lines and second-level markdown headings in `text`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().count(),
            sections: text.lines().filter(|l| l.starts_with("## ")).count(),
        }
    }
}

/// Run the install command against the current directory.
///
/// # Errors
///
/// Returns an error if the current directory or package root cannot be
/// determined, the bundled rules file is missing, or the copy fails. The
/// error and its remediation hints have already been logged when this
/// returns.
pub fn run(args: &Cli, log: &dyn Log) -> Result<Outcome> {
    log.debug(&format!("cursor-rules-init {}", crate::VERSION));
    log.stage("Cursor Rules - Installation");

    let cwd = std::env::current_dir().map_err(InstallError::WorkingDir);
    let root = cwd.and_then(|cwd| {
        paths::resolve_package_root(args.root.as_deref(), log).map(|root| (cwd, root))
    });
    let (cwd, root) = match root {
        Ok(resolved) => resolved,
        Err(e) => {
            report_failure(&e, Path::new(RULES_FILE), Path::new(RULES_FILE), log);
            return Err(e.into());
        }
    };

    let paths = InstallPaths::new(&root.dir, &cwd);
    let policy = Policy::select(args.yes, args.no_input, std::io::stdin().is_terminal());
    logging::record_plan(&policy, &paths.source, &paths.destination);

    install(&paths, &root.manifest, policy, &RealFs, &StdinPrompt, log)
}

/// Install with explicit paths, policy and seams.
///
/// Prints the post-install guidance when the rules file was written.
///
/// # Errors
///
/// Returns the [`InstallError`] from the installer, after logging it with
/// manual-recovery instructions.
pub fn install(
    paths: &InstallPaths,
    manifest: &Manifest,
    policy: Policy,
    fs: &dyn FileSystem,
    prompt: &dyn Prompt,
    log: &dyn Log,
) -> Result<Outcome> {
    let outcome = match Installer::new(fs, prompt, log, paths).run(policy) {
        Ok(outcome) => outcome,
        Err(e) => {
            report_failure(&e, &paths.source, &paths.destination, log);
            return Err(e.into());
        }
    };

    if outcome.wrote_rules() {
        let stats = std::fs::read_to_string(&paths.destination)
            .ok()
            .map(|text| RulesStats::from_text(&text));
        for line in guidance(&paths.destination, stats, manifest) {
            log.info(&line);
        }
    }
    Ok(outcome)
}

/// Post-install guidance lines.
#[must_use]
pub fn guidance(destination: &Path, stats: Option<RulesStats>, manifest: &Manifest) -> Vec<String> {
    let mut lines = vec![format!("Location: {}", destination.display())];
    if let Some(stats) = stats {
        lines.push(format!(
            "Size: {} lines, {} sections",
            stats.lines, stats.sections
        ));
    }

    lines.push("What's Next?".to_string());
    lines.push("   1. Open your project in Cursor AI".to_string());
    lines.push("   2. Start coding - rules are automatically applied".to_string());
    lines.push("   3. See the difference in code quality".to_string());

    let package = &manifest.package;
    if package.repository.is_some() || package.documentation.is_some() {
        lines.push("Documentation:".to_string());
        if let Some(url) = &package.repository {
            lines.push(format!("   - Repository: {url}"));
        }
        if let Some(url) = &package.documentation {
            lines.push(format!("   - Guide: {url}"));
        }
    }

    if !manifest.rules.features.is_empty() {
        lines.push("Features Included:".to_string());
        lines.extend(manifest.rules.features.iter().map(|f| format!("   - {f}")));
    }

    match stats {
        Some(stats) => lines.push(format!(
            "Tip: Review {RULES_FILE} to explore all {} sections!",
            stats.sections
        )),
        None => lines.push(format!("Tip: Review {RULES_FILE} to explore all sections!")),
    }
    lines.push("Happy coding with enterprise-grade standards!".to_string());
    lines
}

/// Log a fatal error followed by its manual-recovery instructions.
fn report_failure(e: &InstallError, source: &Path, destination: &Path, log: &dyn Log) {
    log.error(&e.to_string());
    for hint in e.remediation(source, destination) {
        log.info(&hint);
    }
}
