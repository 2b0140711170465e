//! Content generator for testfile-gen.
//!
//! This crate decides what each synthetic file looks like and produces the
//! lines that go into it. It does no I/O; writing the lines is the job of
//! the `testfile-populate` crate.
//!
//! # Architecture
//!
//! ```text
//!  percentages, max rows
//!          │
//!          ▼
//! ┌──────────────────────┐
//! │ FileContentGenerator │
//! │                      │
//! │  - rng (StdRng)      │
//! │  - pool (CharPool)   │
//! │  - current_date      │
//! └──────────┬───────────┘
//!            │
//!            ├──► FileShape { Empty | HeaderOnly | WithData { rows } }
//!            │
//!            └──► DataRow { sequence, date, text_a, text_b, number }
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use testfile_generator::{header_line, FileContentGenerator, FileShape};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let mut generator = FileContentGenerator::new(Some(42), today);
//!
//! let shape = generator.classify(0, 0, 3);
//! assert!(matches!(shape, FileShape::WithData { .. }));
//!
//! assert_eq!(header_line(","), "ID,DateVal,StringVal1,StringVal2,NumVal");
//! let line = generator.next_row(1).to_line(",");
//! assert!(line.starts_with("1,"));
//! ```

pub mod generator;
pub mod row;
pub mod shape;

pub use generator::FileContentGenerator;
pub use row::{header_line, synthesize_row, CharPool, DataRow, HEADER_COLUMNS};
pub use shape::{classify, FileShape};
