//! Logger configuration: the construction parameters, their defaults, and TOML loading.
//!
//! Every key is optional, so an empty file (or no file) yields the documented defaults.

mod size;

pub use size::parse_size;

use crate::internal;
use crate::level::{DEFAULT_LEVELS, LevelSet};
use crate::output::DEFAULT_MAX_FILE_SIZE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default date template.
pub const DEFAULT_DATE_FORMAT: &str = "%YY/%MM/%DD";
/// Default time template.
pub const DEFAULT_TIME_FORMAT: &str = "%HH:%MM:%SS";

/// Construction parameters for a `Logger`. Validated by `Logger::new`, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Persist lines to disk unless a call overrides it.
    pub save: bool,
    /// Include the date part in the console line.
    pub set_date: bool,
    /// Root under which `Logs/` is created. `~` is expanded.
    pub backup_location: PathBuf,
    /// Must contain `%YY`, `%MM` and `%DD`.
    pub date_format: String,
    /// Must contain `%HH`, `%MM` and `%SS`.
    pub time_format: String,
    /// Accepted level names, in the order they are listed back in errors.
    pub log_levels: Vec<String>,
    /// Size in bytes at which the hour file is rotated. TOML also accepts `"10K"`-style strings.
    #[serde(deserialize_with = "size::deserialize_size")]
    pub max_file_size: u64,
    /// Initial state of the console toggle.
    pub console_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save: true,
            set_date: true,
            backup_location: PathBuf::from("./"),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            log_levels: DEFAULT_LEVELS.iter().map(ToString::to_string).collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            console_output: true,
        }
    }
}

/// On-disk shape: everything lives under `[logger]`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    logger: Config,
}

impl Config {
    /// Loads from the default location; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read, or TOML is malformed.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        internal::debug("CONFIG", &format!("Loading config from {}", path.display()));
        Self::load_from(&path)
    }

    /// Loads from an explicit path; a missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Parses TOML text.
    ///
    /// # Errors
    /// Returns `Error::ConfigParse` on malformed TOML or an invalid size string.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.logger)
    }

    /// `<config_dir>/hourlog/hourlog.toml`
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "hourlog")
            .map(|dirs| dirs.config_dir().join("hourlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// `backup_location` with a leading `~` expanded. Non-UTF-8 paths are used as given.
    #[must_use]
    pub fn backup_root(&self) -> PathBuf {
        self.backup_location
            .to_str()
            .map_or_else(
                || self.backup_location.clone(),
                |s| PathBuf::from(shellexpand::tilde(s).as_ref()),
            )
    }

    #[must_use]
    pub fn levels(&self) -> LevelSet {
        LevelSet::new(self.log_levels.iter().cloned())
    }
}
