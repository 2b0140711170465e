//! Parse generated rows back and check every field.

use crate::{generation_date, populator};
use chrono::{Days, NaiveDate};
use tempfile::TempDir;
use testfile_gen::generator::CharPool;
use testfile_gen::testing::generated_files;
use testfile_gen::RunConfig;

fn read_records(
    path: &std::path::Path,
    separator: u8,
) -> Result<(Vec<String>, Vec<csv::StringRecord>), Box<dyn std::error::Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(separator)
        .has_headers(true)
        .from_path(path)?;
    let headers = reader.headers()?.iter().map(str::to_string).collect();
    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    Ok((headers, records))
}

fn check_rows(separator: &str) -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config = RunConfig {
        file_count: 8,
        empty_percent: 0,
        header_only_percent: 0,
        max_row_count: 40,
        separator: separator.to_string(),
        seed: Some(1234),
        ..RunConfig::new(temp_dir.path())
    };

    let metrics = populator(config).populate()?;

    let pool = CharPool::new();
    let latest = generation_date();
    let earliest = latest - Days::new(1000);
    let mut rows_seen = 0;

    for path in generated_files(temp_dir.path())? {
        let (headers, records) = read_records(&path, separator.as_bytes()[0])?;
        assert_eq!(
            headers,
            vec!["ID", "DateVal", "StringVal1", "StringVal2", "NumVal"]
        );
        assert!(!records.is_empty() && records.len() <= 40);

        for (position, record) in records.iter().enumerate() {
            assert_eq!(record.len(), 5);
            assert_eq!(record[0].parse::<usize>()?, position + 1);

            let date = NaiveDate::parse_from_str(&record[1], "%Y-%m-%d")?;
            assert!(date <= latest && date >= earliest, "date {date} out of range");

            for text in [&record[2], &record[3]] {
                assert!((5..=19).contains(&text.len()), "bad length: {text}");
                assert!(text.chars().all(|c| pool.contains(c)), "bad chars: {text}");
            }

            assert!(record[4].parse::<u32>()? <= 999_999);
            rows_seen += 1;
        }
    }

    assert_eq!(metrics.rows_written, rows_seen);
    Ok(())
}

#[test]
fn test_comma_separated_rows() -> Result<(), Box<dyn std::error::Error>> {
    check_rows(",")
}

#[test]
fn test_semicolon_separated_rows() -> Result<(), Box<dyn std::error::Error>> {
    check_rows(";")
}

#[test]
fn test_multi_char_separator() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config = RunConfig {
        file_count: 1,
        empty_percent: 0,
        header_only_percent: 0,
        max_row_count: 5,
        separator: " | ".to_string(),
        ..RunConfig::new(temp_dir.path())
    };

    populator(config).populate()?;

    let files = generated_files(temp_dir.path())?;
    let content = std::fs::read_to_string(&files[0])?;
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("ID | DateVal | StringVal1 | StringVal2 | NumVal")
    );
    for line in lines {
        assert_eq!(line.split(" | ").count(), 5);
    }
    Ok(())
}
