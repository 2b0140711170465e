//! Error types for the file populator.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid run parameters. Always raised before any file is written.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A path that cannot be used as a directory name.
    #[error("Invalid {role} path '{path}': {reason}")]
    InvalidPath {
        role: &'static str,
        path: PathBuf,
        reason: &'static str,
    },

    #[error("File count must be at least 1, got {0}")]
    FileCount(i64),

    #[error("Maximum row count must be at least 1, got {0}")]
    MaxRowCount(i64),

    /// A percentage outside 0..=100.
    #[error("{name} must be between 0 and 100, got {value}")]
    Percent { name: &'static str, value: i32 },

    #[error(
        "Empty percent ({empty}) plus header-only percent ({header_only}) must not exceed 100"
    )]
    PercentSum { empty: i32, header_only: i32 },

    /// A file name prefix or extension that would leave the target directory.
    #[error("Invalid file {part} '{value}': {reason}")]
    FileNamePart {
        part: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Errors that abort a populate run.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// Creating the target or log directory failed.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
