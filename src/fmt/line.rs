//! Rendering of the console line: `[LEVEL] [ <date> - <time> ] <message>`.

use super::template::{FormatTemplate, TemplateKind};
use crate::Error;
use crate::clock::Timestamp;

/// Holds the parsed templates so each call only substitutes values.
#[derive(Debug, Clone)]
pub struct LineFormatter {
    date: FormatTemplate,
    time: FormatTemplate,
    include_date: bool,
}

impl LineFormatter {
    /// # Errors
    /// Returns `Error::InvalidConfig` if either template lacks one of its placeholders.
    pub fn new(date_format: &str, time_format: &str, include_date: bool) -> Result<Self, Error> {
        Ok(Self {
            date: FormatTemplate::parse(date_format, TemplateKind::Date)?,
            time: FormatTemplate::parse(time_format, TemplateKind::Time)?,
            include_date,
        })
    }

    #[must_use]
    pub fn format_date(&self, ts: &Timestamp) -> String {
        self.date.render(ts)
    }

    #[must_use]
    pub fn format_time(&self, ts: &Timestamp) -> String {
        self.time.render(ts)
    }

    /// Pure; level membership has already been checked by the caller.
    #[must_use]
    pub fn render(&self, level: &str, message: &str, ts: &Timestamp) -> String {
        let time = self.format_time(ts);
        if self.include_date {
            let date = self.format_date(ts);
            format!("[{level}] [ {date} - {time} ] {message}")
        } else {
            format!("[{level}] [ {time} ] {message}")
        }
    }

    #[must_use]
    pub const fn include_date(&self) -> bool {
        self.include_date
    }
}
