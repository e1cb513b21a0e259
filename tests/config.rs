use hourlog::{Config, Error, Logger};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(&tmp.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn empty_file_yields_defaults() {
    assert_eq!(Config::parse("").unwrap(), Config::default());
}

#[test]
fn parses_logger_table() {
    let config = Config::parse(
        r#"
[logger]
save = false
set_date = false
backup_location = "/var/log/app"
date_format = "%YY-%MM-%DD"
log_levels = ["INFO", "WARNING", "ERROR", "DEBUG"]
max_file_size = "10K"
console_output = false
"#,
    )
    .unwrap();

    assert!(!config.save);
    assert!(!config.set_date);
    assert_eq!(config.backup_location, Path::new("/var/log/app"));
    assert_eq!(config.date_format, "%YY-%MM-%DD");
    assert_eq!(config.time_format, "%HH:%MM:%SS");
    assert_eq!(config.log_levels.len(), 4);
    assert_eq!(config.max_file_size, 10 * 1024);
    assert!(!config.console_output);
}

#[test]
fn integer_size_is_bytes() {
    let config = Config::parse("[logger]\nmax_file_size = 2048\n").unwrap();
    assert_eq!(config.max_file_size, 2048);
}

#[test]
fn bad_size_is_a_parse_error() {
    let err = Config::parse("[logger]\nmax_file_size = \"huge\"\n").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn tilde_is_expanded_in_backup_root() {
    let config = Config {
        backup_location: "~/logs".into(),
        ..Config::default()
    };
    let root = config.backup_root();
    assert!(!root.starts_with("~"));
    assert!(root.ends_with("logs"));
}

#[test]
fn logger_from_config_file_validates_templates() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("hourlog.toml");
    fs::write(&path, "[logger]\ntime_format = \"%HH:%MM\"\n").unwrap();

    let result = Logger::from_config_file(&path);
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn logger_from_config_file_uses_values() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("hourlog.toml");
    fs::write(
        &path,
        format!(
            "[logger]\nbackup_location = \"{}\"\nlog_levels = [\"AUDIT\"]\nconsole_output = false\n",
            tmp.path().display()
        ),
    )
    .unwrap();

    let logger = Logger::from_config_file(&path).unwrap();
    assert!(logger.levels().contains("AUDIT"));
    assert!(!logger.console_enabled());
    assert_eq!(logger.sink().root(), tmp.path());
}
