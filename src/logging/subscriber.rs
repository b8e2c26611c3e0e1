//! Tracing subscriber setup: console formatter, file layer, and initialisation.
use std::fs;
use std::io::Write as _;
use std::sync::Mutex;

use super::utils::{format_utc_datetime, format_utc_time, log_file_path, strip_ansi};
use super::{NOTICE_TARGET, PLAN_TARGET, STAGE_TARGET};

/// How an event is presented, derived from its level and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Stage,
    Notice,
    Plan,
    Info,
    Debug,
    Warn,
    Error,
}

impl Tag {
    fn of(metadata: &tracing::Metadata<'_>) -> Self {
        match (*metadata.level(), metadata.target()) {
            (_, PLAN_TARGET) => Self::Plan,
            (tracing::Level::ERROR, _) => Self::Error,
            (tracing::Level::WARN, _) => Self::Warn,
            (tracing::Level::INFO, STAGE_TARGET) => Self::Stage,
            (tracing::Level::INFO, NOTICE_TARGET) => Self::Notice,
            (tracing::Level::INFO, _) => Self::Info,
            _ => Self::Debug,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Stage => "stage",
            Self::Notice => "notice",
            Self::Plan => "plan",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// The `message` of an event plus any structured fields, in record order.
#[derive(Default)]
struct EventFields {
    message: String,
    extra: Vec<(&'static str, String)>,
}

impl EventFields {
    fn of(event: &tracing::Event<'_>) -> Self {
        let mut fields = Self::default();
        event.record(&mut fields);
        fields
    }
}

impl tracing::field::Visit for EventFields {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let rendered = format!("{value:?}");
        if field.name() == "message" {
            self.message = rendered;
        } else {
            self.extra.push((field.name(), rendered));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.extra.push((field.name(), value.to_string()));
        }
    }
}

/// A [`tracing_subscriber::Layer`] that appends every event to the
/// per-command log file, tagged and without colour codes.
///
/// Structured fields (the install plan) are written one per line under
/// their event so the resolved paths head each run's log.
#[derive(Debug)]
pub(super) struct FileLayer {
    file: Mutex<fs::File>,
}

impl FileLayer {
    /// Start a fresh log for `command` and return a layer appending to it.
    ///
    /// Returns `None` when no cache directory is available or the file
    /// cannot be opened; the run then logs to the console only.
    pub(super) fn new(command: &str) -> Option<Self> {
        let path = log_file_path(command)?;
        let header = format!(
            "# cursor-rules-init {} ({command}), started {} UTC\n",
            crate::VERSION,
            format_utc_datetime(),
        );
        fs::write(&path, header).ok()?;
        let file = fs::OpenOptions::new().append(true).open(&path).ok()?;
        Some(Self {
            file: Mutex::new(file),
        })
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for FileLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let tag = Tag::of(event.metadata());
        let fields = EventFields::of(event);
        let ts = format_utc_time();

        let Ok(mut f) = self.file.lock() else {
            return;
        };
        writeln!(f, "[{ts}] [{}] {}", tag.label(), strip_ansi(&fields.message)).ok();
        for (name, value) in &fields.extra {
            writeln!(f, "[{ts}]     {name}: {}", strip_ansi(value)).ok();
        }
    }
}

/// Console rendering: stage headers in bold, notices highlighted, warnings
/// and errors prefixed, plan fields inline.
struct ConsoleFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ConsoleFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let fields = EventFields::of(event);
        let msg = &fields.message;

        match Tag::of(event.metadata()) {
            Tag::Stage => writeln!(writer, "\x1b[1;36m::\x1b[0m \x1b[1m{msg}\x1b[0m"),
            Tag::Notice => writeln!(writer, "\x1b[1;33mNOTICE\x1b[0m {msg}"),
            Tag::Error => writeln!(writer, "\x1b[1;31merror:\x1b[0m {msg}"),
            Tag::Warn => writeln!(writer, "\x1b[33mwarning:\x1b[0m {msg}"),
            Tag::Info => writeln!(writer, "  {msg}"),
            Tag::Plan => {
                let detail = fields
                    .extra
                    .iter()
                    .map(|(name, value)| format!("{name}={value}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(writer, "  \x1b[2m{msg}: {detail}\x1b[0m")
            }
            Tag::Debug => writeln!(writer, "  \x1b[2m{msg}\x1b[0m"),
        }
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Console events at `INFO` (stage headers, notices, guidance) go to stdout
/// and `WARN`/`ERROR` to stderr; `DEBUG`, including the install plan,
/// reaches the console only when `verbose` is set. The file layer records
/// everything from `DEBUG` up.
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(verbose: bool, command: &str) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let make_writer = std::io::stderr
        .with_max_level(tracing::Level::WARN)
        .and(std::io::stdout.with_min_level(tracing::Level::INFO));

    let console_layer = fmt::layer()
        .event_format(ConsoleFormatter)
        .with_writer(make_writer)
        .with_filter(console_level);

    let file_layer = FileLayer::new(command).map(|l| l.with_filter(LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
