//! Hourlog's own diagnostics — where dropped log lines and console failures get reported.
//!
//! Writes straight to stderr rather than through a `Logger`, so a broken sink can never
//! recurse into itself. The threshold is fixed once via `OnceLock`.

use std::fmt;
use std::io::{self, Write};
use std::sync::OnceLock;

/// Environment variable that lowers the threshold to `Debug` when `init` was never called.
pub const DEBUG_ENV: &str = "HOURLOG_DEBUG";

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    Trace = 0,
    Debug = 1,
    Info = 2,
    #[default]
    Warn = 3,
    Error = 4,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static THRESHOLD: OnceLock<Severity> = OnceLock::new();

/// Sets the threshold. Only the first call takes effect.
pub fn init(min: Severity) {
    let was_init = THRESHOLD.get().is_some();
    THRESHOLD.get_or_init(|| min);
    if !was_init {
        debug("INTERNAL", &format!("Diagnostics threshold: {min}"));
    }
}

/// Active threshold, falling back to the environment when `init` was never called.
#[must_use]
pub fn threshold() -> Severity {
    *THRESHOLD.get_or_init(|| {
        if std::env::var_os(DEBUG_ENV).is_some() {
            Severity::Debug
        } else {
            Severity::Warn
        }
    })
}

/// Errors always print; everything else respects the threshold.
#[must_use]
pub fn enabled(severity: Severity) -> bool {
    severity == Severity::Error || severity >= threshold()
}

fn log(severity: Severity, scope: &str, msg: &str) {
    if !enabled(severity) {
        return;
    }
    let _ = writeln!(io::stderr(), "hourlog: {severity} {scope}  {msg}");
}

pub fn trace(scope: &str, msg: &str) {
    log(Severity::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Severity::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Severity::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Severity::Warn, scope, msg);
}

/// Used for dropped lines and other failures the caller never sees as an `Err`.
pub fn error(scope: &str, msg: &str) {
    log(Severity::Error, scope, msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(Severity::Trace < Severity::Debug);
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn errors_are_always_enabled() {
        assert!(enabled(Severity::Error));
    }
}
