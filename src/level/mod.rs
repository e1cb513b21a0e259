//! Level names are free-form strings chosen by the caller — this module keeps
//! the configured set in insertion order so rejections can list it back verbatim.

use crate::Error;
use std::fmt;

/// Level names used when the caller configures none.
pub const DEFAULT_LEVELS: [&str; 3] = ["INFO", "WARNING", "ERROR"];

/// Ordered, duplicate-free set of accepted level names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSet {
    names: Vec<String>,
}

impl Default for LevelSet {
    fn default() -> Self {
        Self::new(DEFAULT_LEVELS)
    }
}

impl LevelSet {
    /// Repeated names collapse onto their first occurrence.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Vec::new();
        for name in names {
            let name = name.into();
            if !set.contains(&name) {
                set.push(name);
            }
        }
        Self { names: set }
    }

    /// Membership is exact: `"info"` is not `"INFO"`.
    #[must_use]
    pub fn contains(&self, level: &str) -> bool {
        self.names.iter().any(|name| name == level)
    }

    /// Fails with `InvalidLevel` carrying the whole set, so the message tells the caller what would have worked.
    ///
    /// # Errors
    /// Returns `Error::InvalidLevel` when `level` is not a member.
    pub fn check(&self, level: &str) -> Result<(), Error> {
        if self.contains(level) {
            Ok(())
        } else {
            Err(Error::InvalidLevel {
                level: level.to_string(),
                allowed: self.names.clone(),
            })
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl fmt::Display for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(", "))
    }
}

impl<S: Into<String>> FromIterator<S> for LevelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
