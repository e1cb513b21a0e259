//! Where rendered lines go: the hour-keyed file sink and the console.
//!
//! The console side is the `Output` trait so callers can swap stdout for something else.

mod file;
mod fs;
mod terminal;

pub use file::{BACKUP_SUFFIX, DEFAULT_MAX_FILE_SIZE, FILE_SUFFIX, FileSink, LOGS_DIR};
pub use fs::{Filesystem, OsFilesystem};
pub use terminal::{ColorSupport, TerminalOutput, TerminalProbe};

use crate::clock::Timestamp;

/// One call's worth of data; built by the logger and dropped when the call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub message: String,
    pub level: String,
    pub timestamp: Timestamp,
    /// Per-call override of the configured `save` flag.
    pub persist_override: Option<bool>,
}

impl LogRecord {
    /// Falls back to `default` when the call did not override persistence.
    #[must_use]
    pub fn should_persist(&self, default: bool) -> bool {
        self.persist_override.unwrap_or(default)
    }
}

/// Console backend. `Send + Sync` so a shared `Logger` can write from any thread.
pub trait Output: Send + Sync {
    /// Emits one rendered line; `level` selects styling.
    ///
    /// # Errors
    /// I/O errors from the underlying stream.
    fn write(&self, level: &str, line: &str) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying stream.
    fn flush(&self) -> Result<(), crate::Error>;
}
