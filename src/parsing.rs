//! File parsing functionality for deadlock experiment metrics
//!
//! This module handles loading and parsing the abba_metrics.csv file.

use crate::common::{Dataset, Run};
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during file parsing
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),
}

type Result<T> = core::result::Result<T, ParsingError>;

/// Parse the abba_metrics.csv file and load the data for analysis
///
/// The file must carry a header row with at least the columns `Status`,
/// `BlockedThreads` and `WaitQueue`; additional columns are ignored. Blank
/// numeric cells deserialize as missing values, which downstream statistics
/// skip. Anything else that fails to parse is a fatal error for the caller.
///
/// # Arguments
/// * `file_path` - Path to the abba_metrics.csv file
///
/// # Returns
/// * `Ok(Dataset)` - Successfully parsed metrics data
/// * `Err(ParsingError)` - If file reading or CSV parsing failed
pub fn parse_metrics(file_path: &Path) -> Result<Dataset> {
    let file = File::open(file_path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut runs = Vec::new();
    for record in reader.deserialize() {
        let run: Run = record?;
        runs.push(run);
    }

    Ok(Dataset::new(runs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_metrics() {
        let path = write_temp_csv(
            "abba_parse_basic.csv",
            "Status,BlockedThreads,WaitQueue\nDEADLOCK,2,5\nTIMEOUT,0,0\nDEADLOCK,1,3\n",
        );

        let dataset = parse_metrics(&path).unwrap();
        assert_eq!(dataset.total_runs(), 3);
        assert_eq!(dataset.blocked_threads(), vec![2, 0, 1]);
        assert_eq!(dataset.wait_queues(), vec![5, 0, 3]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_parse_metrics_ignores_extra_columns() {
        let path = write_temp_csv(
            "abba_parse_extra.csv",
            "RunId,Status,BlockedThreads,WaitQueue,Duration\n1,DEADLOCK,2,5,30\n2,TIMEOUT,0,0,60\n",
        );

        let dataset = parse_metrics(&path).unwrap();
        assert_eq!(dataset.total_runs(), 2);
        assert_eq!(dataset.status_counts().len(), 2);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_parse_metrics_blank_numeric_cells_are_missing() {
        let path = write_temp_csv(
            "abba_parse_blank.csv",
            "Status,BlockedThreads,WaitQueue\nDEADLOCK,2,\nERROR,,\n",
        );

        let dataset = parse_metrics(&path).unwrap();
        assert_eq!(dataset.total_runs(), 2);
        assert_eq!(dataset.blocked_threads(), vec![2]);
        assert!(dataset.wait_queues().is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_parse_metrics_rejects_non_numeric_cells() {
        let path = write_temp_csv(
            "abba_parse_bad.csv",
            "Status,BlockedThreads,WaitQueue\nDEADLOCK,two,5\n",
        );

        let result = parse_metrics(&path);
        assert!(matches!(result, Err(ParsingError::CsvParse(_))));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_parse_metrics_missing_file() {
        let path = std::env::temp_dir().join("abba_parse_does_not_exist.csv");
        let result = parse_metrics(&path);
        assert!(matches!(result, Err(ParsingError::FileRead(_))));
    }
}
