//! Data row synthesis.

use chrono::{Days, NaiveDate};
use rand::Rng;

/// Column names of the fixed row layout.
pub const HEADER_COLUMNS: [&str; 5] = ["ID", "DateVal", "StringVal1", "StringVal2", "NumVal"];

/// Largest number of days a row date lies before the current date.
pub const MAX_DATE_OFFSET_DAYS: u64 = 1000;

/// Inclusive length bounds for the random string fields.
pub const MIN_TEXT_LEN: usize = 5;
pub const MAX_TEXT_LEN: usize = 19;

/// Inclusive upper bound for the numeric field.
pub const MAX_NUMBER: u32 = 999_999;

const POOL_SYMBOLS: [char; 4] = ['#', '$', '%', '&'];

/// Build the header line for the given separator.
pub fn header_line(separator: &str) -> String {
    HEADER_COLUMNS.join(separator)
}

/// Characters the random string fields are drawn from.
///
/// Build it once per run and share it across rows.
#[derive(Debug, Clone)]
pub struct CharPool {
    chars: Vec<char>,
}

impl CharPool {
    pub fn new() -> Self {
        let chars = ('A'..='Z')
            .chain('a'..='z')
            .chain('0'..='9')
            .chain(POOL_SYMBOLS)
            .collect();
        Self { chars }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Random string of `MIN_TEXT_LEN..=MAX_TEXT_LEN` characters, drawn with
    /// replacement.
    pub fn random_text<R: Rng>(&self, rng: &mut R) -> String {
        let len = rng.random_range(MIN_TEXT_LEN..=MAX_TEXT_LEN);
        (0..len)
            .map(|_| self.chars[rng.random_range(0..self.chars.len())])
            .collect()
    }
}

impl Default for CharPool {
    fn default() -> Self {
        Self::new()
    }
}

/// One data line of a generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow {
    /// 1-based position within the file.
    pub sequence: u64,
    pub date: NaiveDate,
    pub text_a: String,
    pub text_b: String,
    pub number: u32,
}

impl DataRow {
    /// Draw a random row.
    pub fn random<R: Rng>(
        rng: &mut R,
        sequence: u64,
        current_date: NaiveDate,
        pool: &CharPool,
    ) -> Self {
        let offset = rng.random_range(0..=MAX_DATE_OFFSET_DAYS);
        let date = current_date
            .checked_sub_days(Days::new(offset))
            .unwrap_or(NaiveDate::MIN);
        let text_a = pool.random_text(rng);
        let text_b = pool.random_text(rng);
        let number = rng.random_range(0..=MAX_NUMBER);

        Self {
            sequence,
            date,
            text_a,
            text_b,
            number,
        }
    }

    /// Render the row with fields in header order.
    pub fn to_line(&self, separator: &str) -> String {
        [
            self.sequence.to_string(),
            self.date.format("%Y-%m-%d").to_string(),
            self.text_a.clone(),
            self.text_b.clone(),
            self.number.to_string(),
        ]
        .join(separator)
    }
}

/// Draw a random row and render it in one step.
pub fn synthesize_row<R: Rng>(
    rng: &mut R,
    sequence: u64,
    separator: &str,
    current_date: NaiveDate,
    pool: &CharPool,
) -> String {
    DataRow::random(rng, sequence, current_date, pool).to_line(separator)
}
