//! Invalid configurations must fail before anything is written.

use tempfile::TempDir;
use testfile_gen::populate::ConfigError;
use testfile_gen::RunConfig;

#[test]
fn test_percent_sum_over_100_creates_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("out");
    let config = RunConfig {
        file_count: 10,
        empty_percent: 60,
        header_only_percent: 60,
        detailed_logging: true,
        ..RunConfig::new(&target)
    };

    let err = config.resolve().unwrap_err();

    assert_eq!(
        err,
        ConfigError::PercentSum {
            empty: 60,
            header_only: 60
        }
    );
    assert!(!target.exists());
}

#[test]
fn test_zero_file_count_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config = RunConfig {
        file_count: 0,
        ..RunConfig::new(temp_dir.path().join("out"))
    };

    assert_eq!(config.resolve().unwrap_err(), ConfigError::FileCount(0));
}

#[test]
fn test_negative_percent_message() {
    let config = RunConfig {
        header_only_percent: -3,
        ..RunConfig::new("out")
    };

    let err = config.resolve().unwrap_err();

    assert_eq!(
        err.to_string(),
        "Header-only percent must be between 0 and 100, got -3"
    );
}

#[test]
fn test_invalid_log_dir_rejected() {
    let config = RunConfig {
        detailed_logging: true,
        log_dir: Some("logs\0".into()),
        ..RunConfig::new("out")
    };

    assert!(matches!(
        config.resolve(),
        Err(ConfigError::InvalidPath {
            role: "log directory",
            ..
        })
    ));
}
