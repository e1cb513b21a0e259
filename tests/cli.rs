//! Tests for the command-line front end.

#![cfg(feature = "cli")]

use clap::Parser;
use hourlog::Error;
use hourlog::cli::{Cli, execute};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("hourlog").chain(args.iter().copied())).unwrap()
}

/// Arguments that keep a run inside `tmp`: an absent config file and a local backup root.
fn isolated(tmp: &TempDir) -> Vec<String> {
    vec![
        "--config".to_string(),
        tmp.path().join("absent.toml").display().to_string(),
        "--backup-location".to_string(),
        tmp.path().display().to_string(),
    ]
}

fn run_binary(args: &[String]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hourlog"))
        .args(args)
        .env_remove("HOURLOG_DEBUG")
        .output()
        .unwrap()
}

fn error_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .filter(|line| line.starts_with("hourlog: ERROR"))
        .map(ToString::to_string)
        .collect()
}

#[test]
fn parses_flat_form() {
    let cli = parse(&[
        "--level",
        "WARNING",
        "--no-save",
        "--quiet",
        "--backup-location",
        "/tmp/logs",
        "hello",
        "world",
    ]);

    assert_eq!(cli.level, "WARNING");
    assert!(cli.no_save);
    assert!(cli.quiet);
    assert_eq!(cli.backup_location.as_deref(), Some(Path::new("/tmp/logs")));
    assert_eq!(cli.message(), "hello world");
}

#[test]
fn level_defaults_to_info() {
    let cli = parse(&["just", "a", "note"]);
    assert_eq!(cli.level, "INFO");
    assert!(!cli.no_save);
    assert!(!cli.quiet);
    assert!(cli.config.is_none());
}

#[test]
fn message_is_required() {
    assert!(Cli::try_parse_from(["hourlog", "--level", "INFO"]).is_err());
}

#[test]
fn subcommand_words_are_just_message() {
    let cli = parse(&["log", "path"]);
    assert_eq!(cli.message(), "log path");
}

#[test]
fn execute_writes_hour_file() {
    let tmp = TempDir::new().unwrap();
    let mut args = isolated(&tmp);
    args.extend(["--quiet", "hello", "world"].map(String::from));
    let cli = Cli::try_parse_from(std::iter::once("hourlog".to_string()).chain(args)).unwrap();

    execute(&cli).unwrap();

    let logs = tmp.path().join("Logs");
    assert!(logs.is_dir());
    let file = walk_files(&logs).pop().unwrap();
    let content = fs::read_to_string(file).unwrap();
    assert!(content.ends_with("] hello world\n"), "{content:?}");
}

#[test]
fn execute_no_save_leaves_disk_untouched() {
    let tmp = TempDir::new().unwrap();
    let mut args = isolated(&tmp);
    args.extend(["--no-save", "--quiet", "nothing"].map(String::from));
    let cli = Cli::try_parse_from(std::iter::once("hourlog".to_string()).chain(args)).unwrap();

    execute(&cli).unwrap();

    assert!(!tmp.path().join("Logs").exists());
}

#[test]
fn execute_rejects_unknown_level() {
    let tmp = TempDir::new().unwrap();
    let mut args = isolated(&tmp);
    args.extend(["--level", "TRACE", "--quiet", "x"].map(String::from));
    let cli = Cli::try_parse_from(std::iter::once("hourlog".to_string()).chain(args)).unwrap();

    let err = execute(&cli).unwrap_err();

    assert!(matches!(err, Error::InvalidLevel { ref level, .. } if level == "TRACE"));
    assert!(!tmp.path().join("Logs").exists());
}

#[test]
fn execute_rejects_invalid_config() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("hourlog.toml");
    fs::write(&config, "[logger]\ntime_format = \"%HH:%MM\"\n").unwrap();
    let cli = parse(&["--config", config.to_str().unwrap(), "--quiet", "x"]);

    assert!(matches!(execute(&cli), Err(Error::InvalidConfig(_))));
}

#[test]
fn binary_exits_non_zero_on_invalid_level_and_config() {
    let tmp = TempDir::new().unwrap();

    let mut args = isolated(&tmp);
    args.extend(["--level", "TRACE", "x"].map(String::from));
    let output = run_binary(&args);
    assert!(!output.status.success());
    assert_eq!(error_lines(&output).len(), 1);

    let config = tmp.path().join("hourlog.toml");
    fs::write(&config, "[logger]\ndate_format = \"%YY\"\n").unwrap();
    let args = ["--config".to_string(), config.display().to_string(), "x".to_string()];
    let output = run_binary(&args);
    assert!(!output.status.success());
}

#[test]
fn binary_succeeds_with_message() {
    let tmp = TempDir::new().unwrap();
    let mut args = isolated(&tmp);
    args.extend(["--level", "ERROR", "disk", "full"].map(String::from));

    let output = run_binary(&args);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[ERROR]"), "{stdout:?}");
    assert!(stdout.contains("disk full"), "{stdout:?}");
    assert!(error_lines(&output).is_empty());
}

#[test]
fn unwritable_root_reports_dropped_line_once() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();
    let args = [
        "--config".to_string(),
        tmp.path().join("absent.toml").display().to_string(),
        "--backup-location".to_string(),
        blocker.display().to_string(),
        "--quiet".to_string(),
        "dropped".to_string(),
    ];

    let output = run_binary(&args);

    assert!(output.status.success());
    let errors = error_lines(&output);
    assert_eq!(errors.len(), 1, "{errors:?}");
    assert!(errors[0].contains("Log line dropped"), "{errors:?}");
}

fn walk_files(dir: &Path) -> Vec<std::path::PathBuf> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            out.extend(walk_files(&path));
        } else {
            out.push(path);
        }
    }
    out
}
