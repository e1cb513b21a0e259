//! Console output: the rendered line on stdout, colored by level when the terminal can show it.

use super::Output;
use crate::fmt::colorize_level;

use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

/// Answers whether ANSI colors should be emitted.
pub trait ColorSupport: Send + Sync {
    fn supports_color(&self) -> bool;
}

/// A fixed answer.
impl ColorSupport for bool {
    fn supports_color(&self) -> bool {
        *self
    }
}

/// Probes the host: stdout must be a terminal, `NO_COLOR` unset, and `TERM` not `dumb`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalProbe;

impl ColorSupport for TerminalProbe {
    fn supports_color(&self) -> bool {
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            return false;
        }
        if std::env::var("TERM").is_ok_and(|term| term == "dumb") {
            return false;
        }
        io::stdout().is_terminal()
    }
}

/// Writes to stdout. Not separately locked; concurrent lines interleave at the OS's granularity.
#[derive(Clone)]
pub struct TerminalOutput {
    color_support: Arc<dyn ColorSupport>,
}

impl fmt::Debug for TerminalOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalOutput")
            .field("colors", &self.color_support.supports_color())
            .finish()
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalOutput {
    /// Probes the host terminal for color support.
    #[must_use]
    pub fn new() -> Self {
        Self {
            color_support: Arc::new(TerminalProbe),
        }
    }

    #[must_use]
    pub fn color_support(mut self, support: impl ColorSupport + 'static) -> Self {
        self.color_support = Arc::new(support);
        self
    }

    /// Colors are forced on or off instead of probed.
    #[must_use]
    pub fn colors(self, enabled: bool) -> Self {
        self.color_support(enabled)
    }

    /// The exact text `write` will emit, without the trailing newline.
    #[must_use]
    pub fn render(&self, level: &str, line: &str) -> String {
        if self.color_support.supports_color() {
            colorize_level(line, level)
        } else {
            line.to_string()
        }
    }
}

impl Output for TerminalOutput {
    fn write(&self, level: &str, line: &str) -> Result<(), crate::Error> {
        let rendered = self.render(level, line);
        writeln!(io::stdout(), "{rendered}")?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        Ok(())
    }
}
