//! CLI argument definitions for the file populator.

use clap::Args;
use std::path::PathBuf;

use crate::config::RunConfig;

/// Arguments controlling a generation run.
///
/// Counts and percentages are parsed as signed integers so that out of range
/// values reach [`RunConfig::resolve`] and get a proper diagnostic.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Directory the test files are written to (created if missing)
    #[arg(long, short = 'o', default_value = "testfiles", env = "TESTFILE_GEN_TARGET_DIR")]
    pub target_dir: PathBuf,

    /// Number of files to generate
    #[arg(
        long,
        default_value_t = 1000,
        allow_negative_numbers = true,
        env = "TESTFILE_GEN_FILE_COUNT"
    )]
    pub file_count: i64,

    /// Percentage of files that are created empty (0-100)
    #[arg(
        long,
        default_value_t = 10,
        allow_negative_numbers = true,
        env = "TESTFILE_GEN_EMPTY_PERCENT"
    )]
    pub empty_percent: i32,

    /// Percentage of files that only contain the header line (0-100)
    #[arg(
        long,
        default_value_t = 20,
        allow_negative_numbers = true,
        env = "TESTFILE_GEN_HEADER_ONLY_PERCENT"
    )]
    pub header_only_percent: i32,

    /// Upper bound for the number of data rows in a file
    #[arg(
        long,
        default_value_t = 1000,
        allow_negative_numbers = true,
        env = "TESTFILE_GEN_MAX_ROW_COUNT"
    )]
    pub max_row_count: i64,

    /// Field separator
    #[arg(long, default_value = ",", env = "TESTFILE_GEN_SEPARATOR")]
    pub separator: String,

    /// Write a timestamped run log
    #[arg(long, env = "TESTFILE_GEN_DETAILED_LOGGING")]
    pub detailed_logging: bool,

    /// Directory for the run log (default: <target-dir>/Log)
    #[arg(long, env = "TESTFILE_GEN_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Random seed for reproducible output (same seed and date = same files)
    #[arg(long, env = "TESTFILE_GEN_SEED")]
    pub seed: Option<u64>,

    /// File name prefix
    #[arg(long, default_value = "TestFile", env = "TESTFILE_GEN_FILE_PREFIX")]
    pub file_prefix: String,

    /// File name extension, without the dot
    #[arg(long, default_value = "csv", env = "TESTFILE_GEN_EXTENSION")]
    pub extension: String,

    /// Validate the configuration and report the plan without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl From<GenerateArgs> for RunConfig {
    fn from(args: GenerateArgs) -> Self {
        Self {
            target_dir: args.target_dir,
            file_count: args.file_count,
            empty_percent: args.empty_percent,
            header_only_percent: args.header_only_percent,
            max_row_count: args.max_row_count,
            separator: args.separator,
            detailed_logging: args.detailed_logging,
            log_dir: args.log_dir,
            seed: args.seed,
            file_prefix: args.file_prefix,
            extension: args.extension,
            dry_run: args.dry_run,
        }
    }
}
