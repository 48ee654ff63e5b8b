//! Configuration loading tests.

use std::io::Write;

use fillcast::config::Config;
use fillcast::error::{ConfigError, Error};
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn loads_full_config() {
    let file = write_temp_config(
        r#"
[logging]
level = "debug"
format = "json"

[book]
ttl_secs = 30
"#,
    );

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.book.ttl_secs, 30);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let file = write_temp_config("");

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "pretty");
    assert_eq!(config.book.ttl_secs, 10);
}

#[test]
fn rejects_unknown_log_format() {
    let file = write_temp_config(
        r#"
[logging]
level = "info"
format = "xml"
"#,
    );

    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "format", ..
        })) => {}
        other => panic!("expected invalid format error, got {other:?}"),
    }
}

#[test]
fn rejects_empty_log_level() {
    let file = write_temp_config(
        r#"
[logging]
level = ""
"#,
    );

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::MissingField { field: "level" }))
    ));
}

#[test]
fn load_or_default_without_file_uses_defaults() {
    let config = Config::load_or_default("does-not-exist.toml").unwrap();
    assert_eq!(config.logging.level, "info");
}

#[test]
fn load_or_default_still_rejects_broken_files() {
    let file = write_temp_config("this is not toml [");
    assert!(matches!(
        Config::load_or_default(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}
