//! Run configuration and its validation.

use crate::error::{ConfigError, PopulateError};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_FILE_COUNT: i64 = 1000;
pub const DEFAULT_EMPTY_PERCENT: i32 = 10;
pub const DEFAULT_HEADER_ONLY_PERCENT: i32 = 20;
pub const DEFAULT_MAX_ROW_COUNT: i64 = 1000;
pub const DEFAULT_SEPARATOR: &str = ",";
pub const DEFAULT_TARGET_DIR: &str = "testfiles";
pub const DEFAULT_FILE_PREFIX: &str = "TestFile";
pub const DEFAULT_EXTENSION: &str = "csv";

/// Name of the log directory created under the target directory when no
/// explicit log directory is given.
pub const DEFAULT_LOG_SUBDIR: &str = "Log";

/// Run parameters as supplied by the caller, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub target_dir: PathBuf,
    pub file_count: i64,
    pub empty_percent: i32,
    pub header_only_percent: i32,
    pub max_row_count: i64,
    pub separator: String,
    pub detailed_logging: bool,
    pub log_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub file_prefix: String,
    pub extension: String,
    pub dry_run: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            file_count: DEFAULT_FILE_COUNT,
            empty_percent: DEFAULT_EMPTY_PERCENT,
            header_only_percent: DEFAULT_HEADER_ONLY_PERCENT,
            max_row_count: DEFAULT_MAX_ROW_COUNT,
            separator: DEFAULT_SEPARATOR.to_string(),
            detailed_logging: false,
            log_dir: None,
            seed: None,
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            dry_run: false,
        }
    }
}

impl RunConfig {
    /// Configuration writing to `target_dir` with all other values defaulted.
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            ..Self::default()
        }
    }

    /// Check every parameter and normalize it into a [`ResolvedConfig`].
    ///
    /// This does no I/O; directories are created by
    /// [`ResolvedConfig::prepare_directories`].
    pub fn resolve(self) -> Result<ResolvedConfig, ConfigError> {
        validate_path_syntax("target directory", &self.target_dir)?;

        if self.file_count < 1 {
            return Err(ConfigError::FileCount(self.file_count));
        }
        let empty_percent = percent("Empty percent", self.empty_percent)?;
        let header_only_percent = percent("Header-only percent", self.header_only_percent)?;
        if self.empty_percent + self.header_only_percent > 100 {
            return Err(ConfigError::PercentSum {
                empty: self.empty_percent,
                header_only: self.header_only_percent,
            });
        }
        if self.max_row_count < 1 {
            return Err(ConfigError::MaxRowCount(self.max_row_count));
        }
        validate_file_name_part("prefix", &self.file_prefix)?;
        validate_file_name_part("extension", &self.extension)?;

        let log_dir = if self.detailed_logging {
            let dir = self
                .log_dir
                .unwrap_or_else(|| self.target_dir.join(DEFAULT_LOG_SUBDIR));
            validate_path_syntax("log directory", &dir)?;
            Some(dir)
        } else {
            None
        };

        Ok(ResolvedConfig {
            target_dir: self.target_dir,
            file_count: self.file_count as u64,
            empty_percent,
            header_only_percent,
            max_row_count: self.max_row_count as u64,
            separator: self.separator,
            log_dir,
            seed: self.seed,
            file_prefix: self.file_prefix,
            extension: self.extension,
            dry_run: self.dry_run,
        })
    }
}

/// Validated run parameters.
///
/// `empty_percent + header_only_percent <= 100` always holds, and `log_dir`
/// is `Some` exactly when detailed logging is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub target_dir: PathBuf,
    pub file_count: u64,
    pub empty_percent: u8,
    pub header_only_percent: u8,
    pub max_row_count: u64,
    pub separator: String,
    pub log_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub file_prefix: String,
    pub extension: String,
    pub dry_run: bool,
}

impl ResolvedConfig {
    /// Create the target directory and, with logging on, the log directory.
    /// Existing directories are left alone.
    pub fn prepare_directories(&self) -> Result<(), PopulateError> {
        create_dir(&self.target_dir)?;
        if let Some(log_dir) = &self.log_dir {
            create_dir(log_dir)?;
        }
        Ok(())
    }
}

fn create_dir(path: &Path) -> Result<(), PopulateError> {
    debug!("Ensuring directory {} exists", path.display());
    std::fs::create_dir_all(path).map_err(|source| PopulateError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn percent(name: &'static str, value: i32) -> Result<u8, ConfigError> {
    u8::try_from(value)
        .ok()
        .filter(|v| *v <= 100)
        .ok_or(ConfigError::Percent { name, value })
}

/// Generated files must land directly in the target directory, so name parts
/// cannot carry separators or parent references.
fn validate_file_name_part(part: &'static str, value: &str) -> Result<(), ConfigError> {
    let reason = if value.contains(['/', '\\']) {
        Some("contains a path separator")
    } else if value.contains('\0') {
        Some("contains a NUL byte")
    } else if value.contains("..") {
        Some("contains '..'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ConfigError::FileNamePart {
            part,
            value: value.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Reject paths that can never name a directory.
pub fn validate_path_syntax(role: &'static str, path: &Path) -> Result<(), ConfigError> {
    let invalid = |reason| ConfigError::InvalidPath {
        role,
        path: path.to_path_buf(),
        reason,
    };

    if path.as_os_str().is_empty() {
        return Err(invalid("path is empty"));
    }
    let text = path.to_string_lossy();
    if text.contains('\0') {
        return Err(invalid("path contains a NUL byte"));
    }
    if cfg!(windows) {
        // Skip the drive prefix ("C:") so its colon is not flagged.
        let rest = match text.char_indices().nth(1) {
            Some((i, ':')) => &text[i + 1..],
            _ => &text[..],
        };
        if rest.contains(|c: char| matches!(c, '<' | '>' | '"' | '|' | '?' | '*' | ':')) {
            return Err(invalid("path contains a character not allowed in file names"));
        }
    }
    Ok(())
}
