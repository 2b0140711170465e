//! Line-at-a-time file writer with retries.

use crate::retry::{retry, RetryError, RetryPolicy};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::error;

/// Where generated files and their lines are written.
pub trait LineSink {
    /// Create `path` as an empty file, truncating any existing content.
    fn create_empty(&self, path: &Path) -> Result<(), RetryError<io::Error>>;

    /// Append `text` plus a newline to `path`, creating the file if needed.
    fn append_line(&self, path: &Path, text: &str) -> Result<(), RetryError<io::Error>>;
}

/// Appends single lines to files, retrying transient I/O failures.
///
/// Each call opens the file, writes and closes it again. A line that still
/// fails after the last attempt is reported on the console and returned as
/// an error; nothing panics and the caller decides whether to carry on.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineWriter {
    policy: RetryPolicy,
}

impl LineWriter {
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }
}

impl LineSink for LineWriter {
    fn create_empty(&self, path: &Path) -> Result<(), RetryError<io::Error>> {
        retry(&self.policy, |_| File::create(path).map(drop)).inspect_err(|e| {
            error!(
                "Failed to create {} after {} attempts: {}",
                path.display(),
                e.attempts,
                e.last_error
            );
        })
    }

    fn append_line(&self, path: &Path, text: &str) -> Result<(), RetryError<io::Error>> {
        retry(&self.policy, |_| append_once(path, text)).inspect_err(|e| {
            error!(
                "Failed to write line to {} after {} attempts: {}",
                path.display(),
                e.attempts,
                e.last_error
            );
        })
    }
}

fn append_once(path: &Path, text: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut line = String::with_capacity(text.len() + 1);
    line.push_str(text);
    line.push('\n');
    file.write_all(line.as_bytes())
}
