//! Command-line argument definitions.
use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the rules installer.
///
/// Every flag is optional; with none given the installer copies the bundled
/// `.cursorrules` into the current directory and asks before overwriting
/// when stdin is a terminal.
#[derive(Parser, Debug)]
#[command(
    name = "cursor-rules-init",
    about = "Install the bundled .cursorrules into the current project",
    version = crate::VERSION
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Overwrite an existing .cursorrules without asking (a backup is kept)
    #[arg(short, long)]
    pub yes: bool,

    /// Never prompt; leave an existing .cursorrules untouched
    #[arg(long, conflicts_with = "yes")]
    pub no_input: bool,

    /// Override the package directory holding the bundled .cursorrules
    #[arg(long, env = "CURSOR_RULES_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,
}
