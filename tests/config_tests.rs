//! Configuration file loading.

use std::io::Write;

use publishing_api::config::{AppConfig, ConfigError, LogFormat};

#[test]
fn missing_optional_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load(dir.path().join("absent.toml"), true).unwrap();
    assert_eq!(config.http.host, "0.0.0.0");
    assert_eq!(config.logging.format, LogFormat::Text);
}

#[test]
fn missing_required_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load(dir.path().join("absent.toml"), false).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn loads_settings_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[http]\nhost = \"127.0.0.1\"\nshutdown_grace_seconds = 3\n\n[logging]\nformat = \"json\""
    )
    .unwrap();

    let config = AppConfig::load(file.path(), false).unwrap();
    assert_eq!(config.http.host, "127.0.0.1");
    assert_eq!(config.http.shutdown_grace_seconds, 3);
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn malformed_file_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[http\nport = ").unwrap();

    let err = AppConfig::load(file.path(), false).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
