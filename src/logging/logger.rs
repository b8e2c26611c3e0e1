//! Console logger that routes every message through [`tracing`].
use std::fmt;
use std::path::{Path, PathBuf};

use super::types::Log;
use super::{NOTICE_TARGET, PLAN_TARGET, STAGE_TARGET};
use super::utils::log_file_path;

/// Implement [`Log`] by delegating to inherent methods of the same name.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Structured logger for installer output.
///
/// All messages are also written to a persistent log file at
/// `$XDG_CACHE_HOME/cursor-rules/<command>.log` (default
/// `~/.cache/cursor-rules/<command>.log`) by the
/// [`FileLayer`](super::subscriber::FileLayer) installed by
/// [`init_subscriber`](super::subscriber::init_subscriber).
#[derive(Debug)]
pub struct Logger {
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Create a new logger for `command`.
    ///
    /// Only remembers the log file path; the file itself is created by the
    /// subscriber.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            log_file: log_file_path(command),
        }
    }

    /// Return the log file path, if the cache directory is available.
    #[must_use]
    pub const fn log_path(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a notice about the project's existing rules file.
    pub fn notice(&self, msg: &str) {
        tracing::info!(target: NOTICE_TARGET, "{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose; always
    /// written to the log file).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, notice, debug, warn, error);
}

/// Record the policy and paths an install run resolved to.
///
/// Lands in the log file as one field per line; on the console only with
/// `--verbose`.
pub fn record_plan(policy: &dyn fmt::Debug, source: &Path, destination: &Path) {
    tracing::debug!(
        target: PLAN_TARGET,
        policy = ?policy,
        source = %source.display(),
        destination = %destination.display(),
        "install plan"
    );
}
