//! A stderr backend for the `log` facade.

use std::io::{self, Write};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Writes log records to stderr, one per line, colored by level.
#[derive(Debug)]
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    /// Creates a logger that keeps records up to `level`.
    #[must_use]
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Installs a logger as the global `log` backend.
    ///
    /// Does nothing if a logger is already installed.
    pub fn install(level: LevelFilter) {
        let logger = Box::leak(Box::new(Self::new(level)));
        if log::set_logger(logger).is_ok() {
            log::set_max_level(level);
        }
    }

    /// Renders one record the way it is written.
    #[must_use]
    pub fn render(record: &Record<'_>) -> String {
        let color = match record.level() {
            Level::Error => "31",
            Level::Warn => "33",
            Level::Info => "32",
            Level::Debug => "36",
            Level::Trace => "2",
        };
        format!(
            "\x1b[{color}m{:<5}\x1b[0m {}: {}",
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(io::stderr().lock(), "{}", Self::render(record));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
