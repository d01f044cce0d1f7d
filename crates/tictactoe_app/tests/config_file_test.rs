//! Tests for loading the TOML config file.

use std::io::Write;
use std::path::PathBuf;
use tictactoe_app::AppConfig;
use tictactoe_core::Order;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ascending = true").unwrap();
    writeln!(file, "log_file = \"game.log\"").unwrap();
    writeln!(file, "show_coordinates = false").unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(config.order(), Order::Ascending);
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(config.log_filter(), "info");
    assert!(!*config.show_coordinates());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ascending = \"sometimes\"").unwrap();

    let err = AppConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
