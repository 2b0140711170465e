//! Command-line interface for testfile-gen
//!
//! # Usage Examples
//!
//! ```bash
//! # Defaults: 1000 files in ./testfiles, 10% empty, 20% header-only
//! testfile-gen
//!
//! # Only files with data, at most 5 rows each, reproducible
//! testfile-gen --target-dir /tmp/fixtures --file-count 20 \
//!   --empty-percent 0 --header-only-percent 0 --max-row-count 5 --seed 42
//!
//! # Check a configuration without touching the disk
//! testfile-gen --empty-percent 60 --header-only-percent 60 --dry-run
//! ```
//!
//! Every flag can also be set through a `TESTFILE_GEN_*` environment
//! variable. Log verbosity is controlled with `RUST_LOG`.

use anyhow::Context;
use clap::Parser;
use testfile_gen::{FilePopulator, GenerateArgs, RunConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "testfile-gen",
    version,
    about = "Generate synthetic delimited files for testing ingestion pipelines"
)]
struct Cli {
    #[command(flatten)]
    args: GenerateArgs,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = RunConfig::from(cli.args)
        .resolve()
        .context("Invalid configuration")?;
    let target_dir = config.target_dir.clone();

    let metrics = FilePopulator::new(config)
        .populate()
        .with_context(|| format!("Failed to generate files in {}", target_dir.display()))?;

    tracing::info!(
        "Done: {} files created ({} empty, {} header-only, {} with data), {} rows in {:?}",
        metrics.files_created,
        metrics.empty_files,
        metrics.header_only_files,
        metrics.data_files,
        metrics.rows_written,
        metrics.total_duration
    );

    Ok(())
}
