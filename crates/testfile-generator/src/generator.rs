//! Stateful generator that owns the RNG and the per-run constants.

use crate::row::{CharPool, DataRow};
use crate::shape::{classify, FileShape};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Produces file shapes and data rows for one run.
///
/// With a seed the output is reproducible for a given `current_date`;
/// without one the RNG is seeded from the operating system.
pub struct FileContentGenerator {
    rng: StdRng,
    pool: CharPool,
    current_date: NaiveDate,
}

impl FileContentGenerator {
    pub fn new(seed: Option<u64>, current_date: NaiveDate) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            pool: CharPool::new(),
            current_date,
        }
    }

    /// The date row dates are counted back from.
    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn pool(&self) -> &CharPool {
        &self.pool
    }

    /// Pick the shape of the next file.
    pub fn classify(
        &mut self,
        empty_percent: u8,
        header_only_percent: u8,
        max_row_count: u64,
    ) -> FileShape {
        classify(
            &mut self.rng,
            empty_percent,
            header_only_percent,
            max_row_count,
        )
    }

    /// Draw the row at 1-based position `sequence`.
    pub fn next_row(&mut self, sequence: u64) -> DataRow {
        DataRow::random(&mut self.rng, sequence, self.current_date, &self.pool)
    }
}
