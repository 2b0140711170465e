//! File shape classification.

use rand::Rng;
use std::fmt;

/// What a generated file contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileShape {
    /// Zero bytes.
    Empty,
    /// Only the header line.
    HeaderOnly,
    /// Header followed by `rows` data lines.
    WithData { rows: u64 },
}

impl FileShape {
    /// Number of data rows (excluding the header).
    pub fn row_count(&self) -> u64 {
        match self {
            FileShape::WithData { rows } => *rows,
            _ => 0,
        }
    }

    /// Whether the file gets a header line.
    pub fn has_header(&self) -> bool {
        !matches!(self, FileShape::Empty)
    }

    pub fn name(&self) -> &'static str {
        match self {
            FileShape::Empty => "empty",
            FileShape::HeaderOnly => "header-only",
            FileShape::WithData { .. } => "with-data",
        }
    }
}

impl fmt::Display for FileShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick a shape for one file.
///
/// Draws a single value in `1..=100`. Values up to `empty_percent` give an
/// empty file, the next `header_only_percent` values a header-only file, and
/// everything above that a file with `1..=max_row_count` rows.
///
/// Each call is independent, so the proportions over many files only
/// approximate the requested percentages.
pub fn classify<R: Rng>(
    rng: &mut R,
    empty_percent: u8,
    header_only_percent: u8,
    max_row_count: u64,
) -> FileShape {
    let draw: u16 = rng.random_range(1..=100);
    let empty = u16::from(empty_percent);
    let header_only = empty + u16::from(header_only_percent);

    if draw <= empty {
        FileShape::Empty
    } else if draw <= header_only {
        FileShape::HeaderOnly
    } else {
        let rows = rng.random_range(1..=max_row_count.max(1));
        FileShape::WithData { rows }
    }
}
