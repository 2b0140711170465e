//! Run log written alongside the generated files.

use crate::populator;
use tempfile::TempDir;
use testfile_gen::testing::{generated_files, read_lines};
use testfile_gen::RunConfig;

#[test]
fn test_run_log_in_custom_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let target = temp_dir.path().join("files");
    let log_dir = temp_dir.path().join("logs");
    let config = RunConfig {
        file_count: 3,
        empty_percent: 0,
        header_only_percent: 0,
        max_row_count: 2,
        detailed_logging: true,
        log_dir: Some(log_dir.clone()),
        ..RunConfig::new(&target)
    };

    populator(config).populate()?;

    assert_eq!(generated_files(&target)?.len(), 3);
    assert!(!target.join("Log").exists());

    let logs = generated_files(&log_dir)?;
    assert_eq!(logs.len(), 1);
    let name = logs[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("testfile-gen_") && name.ends_with(".log"));

    let lines = read_lines(&logs[0])?;
    // start, directory, parameters, one line per file, completion
    assert_eq!(lines.len(), 3 + 3 + 1);
    assert!(lines[0].ends_with(" - Run started"));
    assert_eq!(
        lines
            .iter()
            .filter(|l| l.contains("(with-data, ") && l.contains(" rows) in "))
            .count(),
        3
    );
    assert!(lines[6].contains("Run completed: 3 files"));
    Ok(())
}

#[test]
fn test_no_log_without_detailed_logging() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config = RunConfig {
        file_count: 2,
        ..RunConfig::new(temp_dir.path())
    };

    populator(config).populate()?;

    assert!(!temp_dir.path().join("Log").exists());
    Ok(())
}
