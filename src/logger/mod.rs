//! The `Logger` facade: validated configuration, one `log` call, and a console toggle.
//!
//! There is no global instance. Construct one and share it (`Arc<Logger>`) across threads.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::clock::Clock;
use crate::config::Config;
use crate::fmt::LineFormatter;
use crate::internal;
use crate::level::LevelSet;
use crate::output::{FileSink, LogRecord, Output};

use std::sync::atomic::{AtomicBool, Ordering};

/// Formats, persists and prints log lines.
pub struct Logger {
    config: Config,
    levels: LevelSet,
    formatter: LineFormatter,
    sink: FileSink,
    console: Box<dyn Output>,
    clock: Box<dyn Clock>,
    console_enabled: AtomicBool,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Validates `config` and builds a logger with the default collaborators.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` for malformed templates, an empty level set or a zero size ceiling.
    pub fn new(config: Config) -> Result<Self, crate::Error> {
        LoggerBuilder::from_config(config).build()
    }

    /// Logs `message` at `level`. `save` overrides the configured persistence for this call only.
    ///
    /// File failures are reported through diagnostics and do not fail the call.
    ///
    /// # Errors
    /// Returns `Error::InvalidLevel` if `level` is not configured; nothing is written in that case.
    pub fn log(&self, message: &str, level: &str, save: Option<bool>) -> Result<(), crate::Error> {
        self.levels.check(level)?;

        let record = LogRecord {
            message: message.to_string(),
            level: level.to_string(),
            timestamp: self.clock.now(),
            persist_override: save,
        };
        self.dispatch(&record);
        Ok(())
    }

    fn dispatch(&self, record: &LogRecord) {
        let line = self.render(record);

        if record.should_persist(self.config.save) {
            self.sink.persist(&record.message, &record.timestamp);
        }

        if self.console_enabled()
            && let Err(e) = self.console.write(&record.level, &line)
        {
            internal::error("CONSOLE", &format!("Console write failed: {e}"));
        }
    }

    /// The console line for `record`, without color.
    #[must_use]
    pub fn render(&self, record: &LogRecord) -> String {
        self.formatter
            .render(&record.level, &record.message, &record.timestamp)
    }

    /// # Errors
    /// Returns `Error::InvalidLevel` if `INFO` is not configured.
    pub fn info(&self, message: &str) -> Result<(), crate::Error> {
        self.log(message, "INFO", None)
    }

    /// # Errors
    /// Returns `Error::InvalidLevel` if `WARNING` is not configured.
    pub fn warning(&self, message: &str) -> Result<(), crate::Error> {
        self.log(message, "WARNING", None)
    }

    /// # Errors
    /// Returns `Error::InvalidLevel` if `ERROR` is not configured.
    pub fn error(&self, message: &str) -> Result<(), crate::Error> {
        self.log(message, "ERROR", None)
    }

    #[must_use]
    pub fn console_enabled(&self) -> bool {
        self.console_enabled.load(Ordering::Relaxed)
    }

    /// Takes effect from the next call.
    pub fn set_console_enabled(&self, enabled: bool) {
        self.console_enabled.store(enabled, Ordering::Relaxed);
    }

    /// # Errors
    /// Returns the console backend's I/O error.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.console.flush()
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn levels(&self) -> &LevelSet {
        &self.levels
    }

    #[must_use]
    pub const fn sink(&self) -> &FileSink {
        &self.sink
    }
}
