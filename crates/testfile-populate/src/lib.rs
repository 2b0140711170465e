//! Synthetic test file populator.
//!
//! This crate writes the files described by `testfile-generator` into a
//! target directory, one line at a time through a retrying writer, and can
//! keep a timestamped run log next to them.
//!
//! # Example
//!
//! ```ignore
//! use testfile_populate::{FilePopulator, RunConfig};
//!
//! let config = RunConfig {
//!     file_count: 50,
//!     empty_percent: 5,
//!     header_only_percent: 10,
//!     ..RunConfig::new("/tmp/ingest-fixtures")
//! };
//!
//! let metrics = FilePopulator::new(config.resolve()?).populate()?;
//! println!("{} rows in {} files", metrics.rows_written, metrics.files_created);
//! ```

pub mod args;
pub mod config;
mod error;
mod populator;
pub mod retry;
pub mod run_log;
pub mod writer;

pub use args::GenerateArgs;
pub use config::{ResolvedConfig, RunConfig};
pub use error::{ConfigError, PopulateError};
pub use populator::{file_name, FilePopulator, GeneratedFile, PopulateMetrics};
pub use retry::{retry, RetryError, RetryPolicy};
pub use run_log::RunLog;
pub use writer::{LineSink, LineWriter};
