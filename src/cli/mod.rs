//! Command-line front end: one-shot logging from shell scripts.

use crate::config::Config;
use crate::internal::{self, Severity};
use crate::logger::LoggerBuilder;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// hourlog - Log messages from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "hourlog",
    version,
    about = "Log messages to the console and hour-keyed log files"
)]
pub struct Cli {
    /// Config file (defaults to <config_dir>/hourlog/hourlog.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Level name; must be one of the configured levels
    #[arg(short, long, default_value = "INFO")]
    pub level: String,
    /// Do not write to the log file
    #[arg(long)]
    pub no_save: bool,
    /// Do not print to the console
    #[arg(short, long)]
    pub quiet: bool,
    /// Override the backup root
    #[arg(short, long, value_name = "DIR")]
    pub backup_location: Option<PathBuf>,
    /// Print hourlog's own debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
    /// Log message; multiple words are joined with spaces
    #[arg(required = true)]
    pub message: Vec<String>,
}

impl Cli {
    /// The message words joined with single spaces.
    #[must_use]
    pub fn message(&self) -> String {
        self.message.join(" ")
    }

    fn load_config(&self) -> Result<Config, crate::Error> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(dir) = &self.backup_location {
            config.backup_location.clone_from(dir);
        }
        Ok(config)
    }
}

/// Builds a logger from the command line and logs the message once.
///
/// # Errors
/// Returns `Error::InvalidConfig` (or a config loading error) when the logger cannot be
/// built, and `Error::InvalidLevel` when `--level` is not a configured level.
pub fn execute(cli: &Cli) -> Result<(), crate::Error> {
    let logger = LoggerBuilder::from_config(cli.load_config()?).build()?;
    if cli.quiet {
        logger.set_console_enabled(false);
    }
    let save = if cli.no_save { Some(false) } else { None };

    logger.log(&cli.message(), &cli.level, save)?;

    if let Err(e) = logger.flush() {
        internal::error("CLI", &format!("Console flush failed: {e}"));
    }
    Ok(())
}

/// Runs the parsed command line; any error is reported on stderr and yields a failure code.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    if cli.verbose {
        internal::init(Severity::Debug);
    }

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            internal::error("CLI", &e.to_string());
            ExitCode::FAILURE
        }
    }
}
