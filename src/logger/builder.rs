//! Stepwise construction: the configuration parameters plus the injectable collaborators
//! (clock, filesystem, color probe, console backend).

use super::Logger;
use crate::Error;
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::fmt::LineFormatter;
use crate::internal;
use crate::output::{ColorSupport, FileSink, Filesystem, Output, TerminalOutput};

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Builder for `Logger`. Nothing is validated until `build`.
pub struct LoggerBuilder {
    config: Config,
    clock: Box<dyn Clock>,
    filesystem: Option<Arc<dyn Filesystem>>,
    terminal: TerminalOutput,
    console: Option<Box<dyn Output>>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Starts from `Config::default()`, the system clock, the real filesystem and stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(Config::default())
    }

    /// Starts from an existing configuration.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            clock: Box::new(SystemClock),
            filesystem: None,
            terminal: TerminalOutput::new(),
            console: None,
        }
    }

    /// Default persistence for calls that pass no override.
    #[must_use]
    pub const fn save(mut self, enabled: bool) -> Self {
        self.config.save = enabled;
        self
    }

    /// Whether the console line carries the date part.
    #[must_use]
    pub const fn set_date(mut self, enabled: bool) -> Self {
        self.config.set_date = enabled;
        self
    }

    #[must_use]
    pub fn backup_location(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.backup_location = dir.into();
        self
    }

    #[must_use]
    pub fn date_format(mut self, template: impl Into<String>) -> Self {
        self.config.date_format = template.into();
        self
    }

    #[must_use]
    pub fn time_format(mut self, template: impl Into<String>) -> Self {
        self.config.time_format = template.into();
        self
    }

    /// Replaces the accepted level names; order is kept for error messages.
    #[must_use]
    pub fn log_levels<I, S>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.log_levels = levels.into_iter().map(Into::into).collect();
        self
    }

    /// Size ceiling in bytes.
    #[must_use]
    pub const fn max_file_size(mut self, bytes: u64) -> Self {
        self.config.max_file_size = bytes;
        self
    }

    /// Initial state of the console toggle.
    #[must_use]
    pub const fn console_output(mut self, enabled: bool) -> Self {
        self.config.console_output = enabled;
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn filesystem(mut self, fs: Arc<dyn Filesystem>) -> Self {
        self.filesystem = Some(fs);
        self
    }

    /// Color capability for the built-in terminal output. Pass a `bool` to force it.
    #[must_use]
    pub fn color_support(mut self, support: impl ColorSupport + 'static) -> Self {
        self.terminal = self.terminal.color_support(support);
        self
    }

    /// Replaces stdout with a custom backend; `color_support` no longer applies.
    #[must_use]
    pub fn console(mut self, output: impl Output + 'static) -> Self {
        self.console = Some(Box::new(output));
        self
    }

    /// Validates the configuration and assembles the logger.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` when a template lacks a placeholder, the level set is
    /// empty, or the size ceiling is zero.
    pub fn build(self) -> Result<Logger, Error> {
        let config = self.config;

        let formatter =
            LineFormatter::new(&config.date_format, &config.time_format, config.set_date)?;

        let levels = config.levels();
        if levels.is_empty() {
            return Err(Error::InvalidConfig(
                "log_levels must name at least one level".to_string(),
            ));
        }

        if config.max_file_size == 0 {
            return Err(Error::InvalidConfig(
                "max_file_size must be greater than zero".to_string(),
            ));
        }

        let mut sink = FileSink::new(config.backup_root(), config.max_file_size);
        if let Some(fs) = self.filesystem {
            sink = sink.with_filesystem(fs);
        }

        let console = self
            .console
            .unwrap_or_else(|| Box::new(self.terminal) as Box<dyn Output>);

        internal::debug(
            "LOGGER",
            &format!(
                "Logger ready: levels=[{levels}], save={}, root={}, max_file_size={}",
                config.save,
                sink.root().display(),
                config.max_file_size
            ),
        );

        Ok(Logger {
            console_enabled: AtomicBool::new(config.console_output),
            config,
            levels,
            formatter,
            sink,
            console,
            clock: self.clock,
        })
    }
}
