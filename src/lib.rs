//! testfile-gen library
//!
//! Generates synthetic delimited files for exercising file-ingestion and
//! archiving pipelines.
//!
//! # Features
//!
//! - Three file shapes: empty, header-only, header plus random rows
//! - Configurable shape percentages, row count bound and separator
//! - Best-effort writes: every line is retried, a lost line never aborts a run
//! - Optional timestamped run log
//! - Reproducible output with a fixed seed
//!
//! # CLI Usage
//!
//! ```bash
//! # 1000 files with default proportions (10% empty, 20% header-only)
//! testfile-gen --target-dir /data/inbox
//!
//! # Semicolon separated, small files, with a run log
//! testfile-gen --target-dir /data/inbox --file-count 50 \
//!   --max-row-count 10 --separator ';' --detailed-logging
//! ```

pub mod testing;

// Re-export the workspace crates for convenience
pub use testfile_generator as generator;
pub use testfile_populate as populate;

pub use testfile_populate::{FilePopulator, GenerateArgs, PopulateMetrics, RunConfig};
