//! Optional human-readable log of a generation run.

use crate::writer::{LineSink, LineWriter};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Timestamp format of log entries.
pub const ENTRY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only run log, one timestamped line per event.
///
/// Entries go through the retrying [`LineWriter`]; an entry that cannot be
/// written is dropped after the writer has reported it.
#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
    writer: LineWriter,
}

impl RunLog {
    /// Log file in `log_dir`, named after the run's start time.
    pub fn new(log_dir: &Path, started_at: DateTime<Local>, writer: LineWriter) -> Self {
        let path = log_dir.join(format!(
            "testfile-gen_{}.log",
            started_at.format("%Y%m%d_%H%M%S")
        ));
        Self { path, writer }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, message: impl AsRef<str>) {
        let entry = format_entry(Local::now(), message.as_ref());
        // The writer already reported the failure; the entry is dropped.
        let _ = self.writer.append_line(&self.path, &entry);
    }
}

/// Render a log line as `yyyy-MM-dd HH:mm:ss - message`.
pub fn format_entry(timestamp: DateTime<Local>, message: &str) -> String {
    format!("{} - {}", timestamp.format(ENTRY_TIME_FORMAT), message)
}
