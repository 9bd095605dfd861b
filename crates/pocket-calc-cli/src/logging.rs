//! Logging setup.
//!
//! One `tracing` subscriber per process, installed by [`init`]. The level
//! comes from `-v`/`-q`; `RUST_LOG` takes precedence when set:
//!
//! ```bash
//! RUST_LOG=pocket_calc=trace pocketcalc eval "3+4*2="
//! pocketcalc -v tui --log-file calc.log
//! ```
//!
//! The interactive calculator owns the terminal, so it only logs when given
//! a file.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};

use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, LogFormat};
use crate::error::{CliError, CliResult};

static INIT: Once = Once::new();

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogSink {
    /// Standard error
    #[default]
    Stderr,
    /// Appended to a file
    File(PathBuf),
    /// Logging disabled
    Off,
}

/// Resolved logging settings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogConfig {
    /// Filter directive, used unless `RUST_LOG` is set
    pub filter: String,
    /// Line format
    pub format: LogFormat,
    /// Destination
    pub sink: LogSink,
    /// Whether to emit ANSI colors
    pub ansi: bool,
}

impl LogConfig {
    /// Logging to stderr, for one-shot commands
    #[must_use]
    pub fn stderr(config: &CliConfig) -> Self {
        Self {
            filter: config.log_filter().to_string(),
            format: config.log_format,
            sink: LogSink::Stderr,
            ansi: config.color.should_color(),
        }
    }

    /// Logging for the interactive calculator: the log file, or nothing
    #[must_use]
    pub fn interactive(config: &CliConfig) -> Self {
        let sink = config
            .log_file
            .clone()
            .map_or(LogSink::Off, LogSink::File);
        Self {
            filter: config.log_filter().to_string(),
            format: config.log_format,
            sink,
            ansi: false,
        }
    }

    /// Filter in effect, honouring `RUST_LOG`
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(&self.filter)
        }
    }
}

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

fn open_log_file(path: &Path) -> CliResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::config(format!("cannot open log file {}: {e}", path.display())))
}

/// Installs the global subscriber.
///
/// Only the first call takes effect. The log file, if any, is opened before
/// anything is installed so a bad path is reported as an error.
pub fn init(config: &LogConfig) -> CliResult<()> {
    let writer = match &config.sink {
        LogSink::Off => return Ok(()),
        LogSink::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogSink::File(path) => BoxMakeWriter::new(Mutex::new(open_log_file(path)?)),
    };

    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(config.ansi)
            .with_target(true)
            .with_timer(CompactTime)
            .with_level(true);

        let registry = tracing_subscriber::registry().with(config.env_filter());
        let installed = match config.format {
            LogFormat::Text => registry.with(fmt_layer).try_init(),
            LogFormat::Json => registry.with(fmt_layer.json()).try_init(),
        };
        if installed.is_err() {
            // Another subscriber is already global, e.g. in tests
            tracing::debug!("subscriber already installed");
        }
    });

    Ok(())
}
