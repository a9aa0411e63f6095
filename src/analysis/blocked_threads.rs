//! Blocked thread distribution analysis functionality
//!
//! This module produces the frequency distribution of blocked thread counts
//! and renders it as a bar chart.

use crate::common::plots::create_blocked_threads_plot;
use crate::common::{Dataset, PlotError};
use std::collections::BTreeMap;
use std::path::Path;

/// Errors that can occur during blocked thread analysis
#[derive(Debug)]
pub enum BlockedThreadsError {
    PlotGeneration(PlotError),
}

impl std::fmt::Display for BlockedThreadsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockedThreadsError::PlotGeneration(e) => write!(f, "Failed to generate plot: {}", e),
        }
    }
}

impl std::error::Error for BlockedThreadsError {}

impl From<PlotError> for BlockedThreadsError {
    fn from(err: PlotError) -> Self {
        BlockedThreadsError::PlotGeneration(err)
    }
}

type Result<T> = core::result::Result<T, BlockedThreadsError>;

/// Frequency of each distinct blocked-thread count, in ascending value order
///
/// Rows with a missing BlockedThreads cell are skipped. Ordering is by the
/// observed value itself, not by frequency, so bars read left-to-right with
/// strictly increasing x-values.
pub fn blocked_thread_frequencies(dataset: &Dataset) -> Vec<(u32, u64)> {
    let mut frequencies: BTreeMap<u32, u64> = BTreeMap::new();
    for value in dataset.blocked_threads() {
        *frequencies.entry(value).or_insert(0) += 1;
    }
    frequencies.into_iter().collect()
}

/// Generate the blocked-thread frequency plot
///
/// Creates blocked_threads.png with one bar per distinct blocked-thread
/// count. A dataset without any present BlockedThreads values skips plot
/// generation entirely.
///
/// # Arguments
/// * `dataset` - The loaded metrics data
/// * `output_dir` - Directory where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the plot was successfully generated (or there was no data)
/// * `Err(BlockedThreadsError)` - If plot generation failed
pub fn generate_blocked_threads_plot(dataset: &Dataset, output_dir: &Path) -> Result<()> {
    let frequencies = blocked_thread_frequencies(dataset);
    if frequencies.is_empty() {
        return Ok(());
    }

    let output_path = create_blocked_threads_plot(&frequencies, output_dir)?;
    println!("[+] Saved plot: {}", output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Run;

    fn runs_with_blocked(values: &[u32]) -> Dataset {
        Dataset::new(
            values
                .iter()
                .map(|&value| Run {
                    status: "DEADLOCK".to_string(),
                    blocked_threads: Some(value),
                    wait_queue: Some(0),
                })
                .collect(),
        )
    }

    #[test]
    fn test_frequencies_ascending_by_value() {
        // Reference scenario: [0,0,1,1,1,3] -> (0,2), (1,3), (3,1)
        let dataset = runs_with_blocked(&[0, 0, 1, 1, 1, 3]);
        let frequencies = blocked_thread_frequencies(&dataset);

        assert_eq!(frequencies, vec![(0, 2), (1, 3), (3, 1)]);
    }

    #[test]
    fn test_frequencies_ordered_by_value_not_frequency() {
        // 5 appears most often but must still come last
        let dataset = runs_with_blocked(&[5, 5, 5, 1, 2]);
        let frequencies = blocked_thread_frequencies(&dataset);

        assert_eq!(frequencies, vec![(1, 1), (2, 1), (5, 3)]);
        assert!(frequencies.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn test_frequencies_skip_missing_values() {
        let dataset = Dataset::new(vec![
            Run {
                status: "DEADLOCK".to_string(),
                blocked_threads: Some(2),
                wait_queue: None,
            },
            Run {
                status: "ERROR".to_string(),
                blocked_threads: None,
                wait_queue: None,
            },
        ]);

        assert_eq!(blocked_thread_frequencies(&dataset), vec![(2, 1)]);
    }

    #[test]
    fn test_generate_plot_empty_dataset_is_noop() {
        let dataset = Dataset::new(Vec::new());
        let temp_dir = std::env::temp_dir();

        assert!(generate_blocked_threads_plot(&dataset, &temp_dir).is_ok());
        assert!(!temp_dir.join("blocked_threads.png").exists());
    }
}
