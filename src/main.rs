//! `cursor-rules-init`: install the bundled `.cursorrules` into the current directory.
use std::process::ExitCode;

use clap::Parser;

use cursor_rules_cli::{cli, commands, logging};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose, "install");
    let log = logging::Logger::new("install");

    // Failures are logged with remediation hints inside the command.
    match commands::install::run(&args, &log) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log.debug(&format!("{e:#}"));
            if let Some(path) = log.log_path() {
                log.info(&format!("\x1b[2mlog: {}\x1b[0m", path.display()));
            }
            ExitCode::FAILURE
        }
    }
}
