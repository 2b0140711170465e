//! File shape scenarios.

use crate::populator;
use tempfile::TempDir;
use testfile_gen::testing::{generated_files, read_lines};
use testfile_gen::RunConfig;

#[test]
fn test_all_files_empty() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config = RunConfig {
        file_count: 5,
        empty_percent: 100,
        header_only_percent: 0,
        ..RunConfig::new(temp_dir.path())
    };

    let metrics = populator(config).populate()?;

    assert_eq!(metrics.files_created, 5);
    assert_eq!(metrics.empty_files, 5);
    let files = generated_files(temp_dir.path())?;
    assert_eq!(files.len(), 5);
    for path in &files {
        assert_eq!(std::fs::metadata(path)?.len(), 0, "{path:?} is not empty");
    }
    Ok(())
}

#[test]
fn test_single_header_only_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config = RunConfig {
        file_count: 1,
        empty_percent: 0,
        header_only_percent: 100,
        ..RunConfig::new(temp_dir.path())
    };

    populator(config).populate()?;

    let files = generated_files(temp_dir.path())?;
    assert_eq!(files.len(), 1);
    assert_eq!(
        read_lines(&files[0])?,
        vec!["ID,DateVal,StringVal1,StringVal2,NumVal".to_string()]
    );
    Ok(())
}

#[test]
fn test_single_row_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config = RunConfig {
        file_count: 1,
        empty_percent: 0,
        header_only_percent: 0,
        max_row_count: 1,
        ..RunConfig::new(temp_dir.path())
    };

    let metrics = populator(config).populate()?;

    assert_eq!(metrics.rows_written, 1);
    let files = generated_files(temp_dir.path())?;
    let lines = read_lines(&files[0])?;
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("1,"), "unexpected row: {}", lines[1]);
    Ok(())
}

#[test]
fn test_exact_file_count_with_mixed_shapes() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config = RunConfig {
        file_count: 120,
        empty_percent: 30,
        header_only_percent: 30,
        max_row_count: 3,
        seed: Some(7),
        ..RunConfig::new(temp_dir.path())
    };

    let metrics = populator(config).populate()?;

    let files = generated_files(temp_dir.path())?;
    assert_eq!(files.len(), 120);
    assert_eq!(metrics.files_created, 120);
    assert_eq!(
        metrics.empty_files + metrics.header_only_files + metrics.data_files,
        120
    );

    let mut empty = 0;
    let mut header_only = 0;
    let mut with_data = 0;
    for path in &files {
        let lines = read_lines(path)?;
        match lines.len() {
            0 => empty += 1,
            1 => header_only += 1,
            n => {
                assert!(n <= 4, "{path:?} has {n} lines");
                with_data += 1;
            }
        }
    }
    assert_eq!(empty, metrics.empty_files);
    assert_eq!(header_only, metrics.header_only_files);
    assert_eq!(with_data, metrics.data_files);
    Ok(())
}

#[test]
fn test_same_seed_same_output() -> Result<(), Box<dyn std::error::Error>> {
    let run = |dir: &std::path::Path| -> Result<Vec<Vec<String>>, Box<dyn std::error::Error>> {
        let config = RunConfig {
            file_count: 10,
            max_row_count: 15,
            seed: Some(42),
            ..RunConfig::new(dir)
        };
        populator(config).populate()?;
        let mut contents = Vec::new();
        for path in generated_files(dir)? {
            contents.push(read_lines(&path)?);
        }
        Ok(contents)
    };

    let first = TempDir::new()?;
    let second = TempDir::new()?;

    assert_eq!(run(first.path())?, run(second.path())?);
    Ok(())
}
