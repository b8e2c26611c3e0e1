//! The [`Log`] trait shared by the console logger and test doubles.

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) implements this for real runs; the
/// installer only depends on the trait so tests can capture what would have
/// been printed.
pub trait Log {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log something the user has to act on or know about: an existing
    /// rules file, a cancelled install.
    fn notice(&self, msg: &str);
    /// Log a debug message (suppressed on console unless verbose).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
}
