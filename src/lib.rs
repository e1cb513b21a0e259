//! `hourlog` - embeddable logger with hour-keyed, size-rotated log files.
//!
//! Each call renders `[LEVEL] [ <date> - <time> ] <message>` for the console and, when
//! persistence is on, appends `[<SS>s ] <message>` to
//! `<backup_location>/Logs/<YYYY>/<MM>/<DD>/<HH>h.txt`. A file that has reached
//! `max_file_size` is renamed to `<HH>h_backup.txt` before the next line is written.
//!
//! # Example
//!
//! ```no_run
//! use hourlog::Logger;
//!
//! let logger = Logger::builder()
//!     .backup_location("./logs")
//!     .date_format("%YY-%MM-%DD")
//!     .log_levels(["INFO", "WARNING", "ERROR", "DEBUG"])
//!     .max_file_size(10 * 1024)
//!     .build()?;
//!
//! logger.log("Application started", "INFO", None)?;
//! logger.log("Console only", "DEBUG", Some(false))?;
//!
//! logger.set_console_enabled(false);
//! logger.warning("File only")?;
//! # Ok::<(), hourlog::Error>(())
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `hourlog` command-line binary

pub mod clock;
pub mod config;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use clock::{Clock, FixedClock, SystemClock, Timestamp};
pub use config::Config;
pub use error::Error;
pub use fmt::{Color, LineFormatter};
pub use level::LevelSet;
pub use logger::{Logger, LoggerBuilder};
pub use output::{
    ColorSupport, FileSink, Filesystem, LogRecord, OsFilesystem, Output, TerminalOutput,
    TerminalProbe,
};
