//! Date and time templates such as `%YY/%MM/%DD` and `%HH:%MM:%SS`.
//!
//! `%MM` is the month inside a date template and the minute inside a time template,
//! so a template is always parsed against its kind.

use crate::Error;
use crate::clock::Timestamp;

/// Closed set of substitution tokens — any other `%XX` passes through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Placeholder {
    /// The token as written in a template.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Year => "%YY",
            Self::Month | Self::Minute => "%MM",
            Self::Day => "%DD",
            Self::Hour => "%HH",
            Self::Second => "%SS",
        }
    }

    /// Zero-padded two-digit value.
    #[must_use]
    pub fn value(self, ts: &Timestamp) -> String {
        match self {
            Self::Year => ts.year2(),
            Self::Month => ts.month2(),
            Self::Day => ts.day2(),
            Self::Hour => ts.hour2(),
            Self::Minute => ts.minute2(),
            Self::Second => ts.second2(),
        }
    }
}

/// Which token table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Date,
    Time,
}

impl TemplateKind {
    /// Every one of these must appear for the template to be accepted.
    #[must_use]
    pub const fn placeholders(self) -> &'static [Placeholder] {
        match self {
            Self::Date => &[Placeholder::Year, Placeholder::Month, Placeholder::Day],
            Self::Time => &[Placeholder::Hour, Placeholder::Minute, Placeholder::Second],
        }
    }

    const fn example(self) -> &'static str {
        match self {
            Self::Date => "%YY/%MM/%DD",
            Self::Time => "%HH:%MM:%SS",
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
        }
    }

    fn match_token(self, token: &str) -> Option<Placeholder> {
        self.placeholders()
            .iter()
            .copied()
            .find(|ph| ph.token() == token)
    }
}

/// Parsed once at construction, rendered on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// A validated date or time template.
#[derive(Debug, Clone)]
pub struct FormatTemplate {
    kind: TemplateKind,
    source: String,
    segments: Vec<Segment>,
}

impl FormatTemplate {
    /// Splits the template into literals and tokens, then requires all of the kind's tokens.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` when any required token is missing.
    pub fn parse(template: &str, kind: TemplateKind) -> Result<Self, Error> {
        let segments = Self::split(template, kind);

        let missing: Vec<&str> = kind
            .placeholders()
            .iter()
            .filter(|ph| !segments.contains(&Segment::Placeholder(**ph)))
            .map(|ph| ph.token())
            .collect();

        if !missing.is_empty() {
            return Err(Error::InvalidConfig(format!(
                "{} format '{template}' is missing {} (example: \"{}\")",
                kind.name(),
                missing.join(", "),
                kind.example()
            )));
        }

        Ok(Self {
            kind,
            source: template.to_string(),
            segments,
        })
    }

    fn split(template: &str, kind: TemplateKind) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut rest = template;

        while let Some(c) = rest.chars().next() {
            if c == '%'
                && let Some(token) = rest.get(..3)
                && let Some(ph) = kind.match_token(token)
            {
                if !current.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut current)));
                }
                segments.push(Segment::Placeholder(ph));
                rest = &rest[3..];
                continue;
            }

            current.push(c);
            rest = &rest[c.len_utf8()..];
        }

        if !current.is_empty() {
            segments.push(Segment::Literal(current));
        }

        segments
    }

    #[must_use]
    pub const fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// The template text as configured.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn render(&self, ts: &Timestamp) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::Placeholder(ph) => out.push_str(&ph.value(ts)),
            }
        }
        out
    }
}
