//! Usage:
//!   hourlog [--config PATH] [--level LEVEL] [--no-save] [--quiet]
//!           [--backup-location DIR] [--verbose] <message>...

use clap::Parser;
use hourlog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
