//! Logger construction from hourlog config files.

use super::Logger;
use crate::config::Config;
use crate::internal;
use std::path::Path;

impl Logger {
    /// Builds a logger from `<config_dir>/hourlog/hourlog.toml`, or defaults if it does not exist.
    ///
    /// # Errors
    /// Config loading errors, then the same validation errors as `Logger::new`.
    pub fn from_config() -> Result<Self, crate::Error> {
        internal::debug("LOGGER", "Building logger from default config");
        Self::new(Config::load()?)
    }

    /// Builds a logger from the TOML file at `path`.
    ///
    /// # Errors
    /// Config loading errors, then the same validation errors as `Logger::new`.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = path.as_ref();
        internal::debug(
            "LOGGER",
            &format!("Building logger from {}", path.display()),
        );
        Self::new(Config::load_from(path)?)
    }
}
