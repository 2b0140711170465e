//! Test file populator.

use crate::config::ResolvedConfig;
use crate::error::PopulateError;
use crate::retry::RetryPolicy;
use crate::run_log::RunLog;
use crate::writer::{LineSink, LineWriter};
use chrono::{DateTime, Local, NaiveDate};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use testfile_generator::{header_line, FileContentGenerator, FileShape};
use tracing::{debug, info, warn};

/// Files between two progress messages.
const PROGRESS_INTERVAL: u64 = 100;

/// One file produced by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name, unique within the run.
    pub name: String,
    pub path: PathBuf,
    pub shape: FileShape,
    /// False when the file itself could not be created.
    pub created: bool,
    /// Data rows that made it to disk.
    pub rows_written: u64,
    /// Lines that were dropped after exhausting their retries.
    pub failed_lines: u64,
    pub elapsed: Duration,
}

impl GeneratedFile {
    fn summary(&self) -> String {
        let mut line = match self.shape {
            FileShape::WithData { rows } => {
                format!("Created {} ({}, {} rows)", self.name, self.shape, rows)
            }
            _ => format!("Created {} ({})", self.name, self.shape),
        };
        if self.failed_lines > 0 {
            line.push_str(&format!(", {} lines failed", self.failed_lines));
        }
        line.push_str(&format!(" in {:?}", self.elapsed));
        line
    }
}

/// Totals of a populate run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulateMetrics {
    pub files_created: u64,
    /// Files that could not be created at all.
    pub files_failed: u64,
    pub empty_files: u64,
    pub header_only_files: u64,
    pub data_files: u64,
    /// Data rows written, headers excluded.
    pub rows_written: u64,
    pub failed_lines: u64,
    pub total_duration: Duration,
}

impl PopulateMetrics {
    fn record(&mut self, file: &GeneratedFile) {
        if !file.created {
            self.files_failed += 1;
            return;
        }
        self.files_created += 1;
        match file.shape {
            FileShape::Empty => self.empty_files += 1,
            FileShape::HeaderOnly => self.header_only_files += 1,
            FileShape::WithData { .. } => self.data_files += 1,
        }
        self.rows_written += file.rows_written;
        self.failed_lines += file.failed_lines;
    }

    /// Calculate files per second.
    pub fn files_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.files_created as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    fn summary(&self) -> String {
        format!(
            "{} files ({} empty, {} header-only, {} with data), {} rows",
            self.files_created,
            self.empty_files,
            self.header_only_files,
            self.data_files,
            self.rows_written
        )
    }
}

/// Everything one run carries from file to file.
struct RunContext {
    config: ResolvedConfig,
    generator: FileContentGenerator,
    writer: Box<dyn LineSink>,
    log: Option<RunLog>,
    header: String,
    index_width: usize,
}

impl RunContext {
    fn log(&self, message: impl AsRef<str>) {
        if let Some(log) = &self.log {
            log.write(message);
        }
    }

    /// Create and fill file number `index`.
    fn generate_file(&mut self, index: u64) -> GeneratedFile {
        let start = Instant::now();
        let name = file_name(
            &self.config.file_prefix,
            index,
            self.index_width,
            Local::now(),
            &self.config.extension,
        );
        let path = self.config.target_dir.join(&name);
        let shape = self.generator.classify(
            self.config.empty_percent,
            self.config.header_only_percent,
            self.config.max_row_count,
        );

        if self.writer.create_empty(&path).is_err() {
            warn!("Skipping {}: file could not be created", path.display());
            return GeneratedFile {
                name,
                path,
                shape,
                created: false,
                rows_written: 0,
                failed_lines: 0,
                elapsed: start.elapsed(),
            };
        }

        let mut rows_written = 0;
        let mut failed_lines = 0;
        if shape.has_header() && self.writer.append_line(&path, &self.header).is_err() {
            failed_lines += 1;
        }
        for sequence in 1..=shape.row_count() {
            let line = self
                .generator
                .next_row(sequence)
                .to_line(&self.config.separator);
            match self.writer.append_line(&path, &line) {
                Ok(()) => rows_written += 1,
                Err(_) => failed_lines += 1,
            }
        }

        let file = GeneratedFile {
            name,
            path,
            shape,
            created: true,
            rows_written,
            failed_lines,
            elapsed: start.elapsed(),
        };
        debug!("{}", file.summary());
        file
    }
}

/// Writes a run's worth of synthetic test files.
pub struct FilePopulator {
    config: ResolvedConfig,
    retry_policy: RetryPolicy,
    current_date: Option<NaiveDate>,
    sink: Option<Box<dyn LineSink>>,
}

impl FilePopulator {
    /// Create a populator for a validated configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config = RunConfig::new("/tmp/testfiles").resolve()?;
    /// let metrics = FilePopulator::new(config).populate()?;
    /// ```
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            config,
            retry_policy: RetryPolicy::default(),
            current_date: None,
            sink: None,
        }
    }

    /// Override the retry policy used for every line and file.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Date row dates are counted back from. Defaults to today.
    pub fn with_current_date(mut self, date: NaiveDate) -> Self {
        self.current_date = Some(date);
        self
    }

    /// Write generated files through `sink` instead of a [`LineWriter`].
    ///
    /// The run log always uses a [`LineWriter`] with the populator's retry
    /// policy.
    pub fn with_sink(mut self, sink: impl LineSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Generate all files.
    ///
    /// Fails only when a directory cannot be created; individual lines and
    /// files that fail are counted in the returned metrics instead.
    pub fn populate(self) -> Result<PopulateMetrics, PopulateError> {
        let start = Instant::now();
        let started_at = Local::now();
        let config = self.config;

        if config.dry_run {
            info!(
                "[DRY-RUN] Would generate {} files in {} (empty={}%, header-only={}%, max rows={}, seed={:?})",
                config.file_count,
                config.target_dir.display(),
                config.empty_percent,
                config.header_only_percent,
                config.max_row_count,
                config.seed
            );
            if let Some(log_dir) = &config.log_dir {
                info!("[DRY-RUN] Run log would be written to {}", log_dir.display());
            }
            info!("[DRY-RUN] Configuration validated successfully");
            return Ok(PopulateMetrics {
                total_duration: start.elapsed(),
                ..PopulateMetrics::default()
            });
        }

        config.prepare_directories()?;

        let writer = LineWriter::new(self.retry_policy);
        let log = config
            .log_dir
            .as_deref()
            .map(|dir| RunLog::new(dir, started_at, writer));
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(writer) as Box<dyn LineSink>);
        let current_date = self
            .current_date
            .unwrap_or_else(|| started_at.date_naive());

        let mut ctx = RunContext {
            generator: FileContentGenerator::new(config.seed, current_date),
            header: header_line(&config.separator),
            index_width: config.file_count.to_string().len(),
            writer: sink,
            log,
            config,
        };

        if let Some(log) = &ctx.log {
            info!("Writing run log to {}", log.path().display());
        }
        ctx.log("Run started");
        ctx.log(format!(
            "Target directory {} is ready",
            ctx.config.target_dir.display()
        ));
        ctx.log(format!(
            "Generating {} files: empty={}%, header-only={}%, max rows={}, separator='{}'",
            ctx.config.file_count,
            ctx.config.empty_percent,
            ctx.config.header_only_percent,
            ctx.config.max_row_count,
            ctx.config.separator
        ));

        info!(
            "Generating {} files in {}",
            ctx.config.file_count,
            ctx.config.target_dir.display()
        );

        let mut metrics = PopulateMetrics::default();
        for index in 1..=ctx.config.file_count {
            let file = ctx.generate_file(index);
            if file.created {
                ctx.log(file.summary());
            } else {
                ctx.log(format!("Failed to create {}", file.name));
            }
            metrics.record(&file);

            if index % PROGRESS_INTERVAL == 0 {
                info!("Generated {}/{} files", index, ctx.config.file_count);
            }
        }

        metrics.total_duration = start.elapsed();
        ctx.log(format!(
            "Run completed: {} in {:?}",
            metrics.summary(),
            metrics.total_duration
        ));

        info!(
            "Generation complete: {} in {:?} ({:.2} files/sec)",
            metrics.summary(),
            metrics.total_duration,
            metrics.files_per_second()
        );
        if metrics.failed_lines > 0 || metrics.files_failed > 0 {
            warn!(
                "{} lines and {} files could not be written",
                metrics.failed_lines, metrics.files_failed
            );
        }

        Ok(metrics)
    }
}

/// `<prefix>_<index>_<yyyyMMdd_HHmmss>.<ext>`, index zero-padded to `width`.
pub fn file_name(
    prefix: &str,
    index: u64,
    width: usize,
    created_at: DateTime<Local>,
    extension: &str,
) -> String {
    let stamp = created_at.format("%Y%m%d_%H%M%S");
    if extension.is_empty() {
        format!("{prefix}_{index:0width$}_{stamp}")
    } else {
        format!("{prefix}_{index:0width$}_{stamp}.{extension}")
    }
}
