//! Tests for loading the TOML config.

use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tally_tui::{Theme, TuiConfig};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_full_config_file() {
    let file = write_config(
        r#"
theme = "light"
tick_rate_ms = 50
spark_ticks = 4
log_file = "/tmp/tally-test.log"
"#,
    );

    let config = TuiConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(*config.theme(), Theme::Light);
    assert_eq!(config.tick_rate(), Duration::from_millis(50));
    assert_eq!(*config.spark_ticks(), 4);
    assert_eq!(config.log_file(), Path::new("/tmp/tally-test.log"));
}

#[test]
fn test_empty_file_is_all_defaults() {
    let file = write_config("");
    let config = TuiConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_explicit_missing_path_is_an_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("nope.toml");

    let err = TuiConfig::load(Some(missing.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_bad_theme_is_a_parse_error() {
    let file = write_config("theme = \"sepia\"");
    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_load_explicit_path() {
    let file = write_config("spark_ticks = 2");
    let config = TuiConfig::load(Some(file.path())).expect("Valid config");
    assert_eq!(*config.spark_ticks(), 2);
    assert_eq!(*config.theme(), Theme::Dark);
}
