//! Status outcome analysis functionality
//!
//! This module provides the console summary of run outcomes and the status
//! distribution plot.

use crate::common::plots::create_status_distribution_plot;
use crate::common::{Dataset, PlotError};
use std::fmt::Write as _;
use std::path::Path;

/// Status label marking a successfully reproduced deadlock
///
/// The label set is open-ended; this is the only value the analysis singles out.
pub const DEADLOCK_STATUS: &str = "DEADLOCK";

/// Errors that can occur during status analysis
#[derive(Debug)]
pub enum StatusError {
    PlotGeneration(PlotError),
}

impl std::fmt::Display for StatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusError::PlotGeneration(e) => write!(f, "Failed to generate plot: {}", e),
        }
    }
}

impl std::error::Error for StatusError {}

impl From<PlotError> for StatusError {
    fn from(err: PlotError) -> Self {
        StatusError::PlotGeneration(err)
    }
}

type Result<T> = core::result::Result<T, StatusError>;

/// Number of runs carrying the exact [`DEADLOCK_STATUS`] label, 0 if absent
pub fn deadlock_count(status_counts: &[(String, u64)]) -> u64 {
    status_counts
        .iter()
        .find(|(status, _)| status == DEADLOCK_STATUS)
        .map(|(_, count)| *count)
        .unwrap_or(0)
}

/// Deadlock reproduction rate as a percentage, 0.0 for an empty dataset
pub fn deadlock_rate(deadlocks: u64, total_runs: usize) -> f64 {
    if total_runs == 0 {
        return 0.0;
    }
    (deadlocks as f64 / total_runs as f64) * 100.0
}

/// Render the console summary report
///
/// Banner, total run count, deadlock count, success rate to one decimal
/// place, then the full status breakdown in descending count order.
///
/// # Arguments
/// * `dataset` - The loaded metrics data
///
/// # Returns
/// The complete report as a [`String`], ready to print
pub fn render_status_summary(dataset: &Dataset) -> String {
    let status_counts = dataset.status_counts();
    let total = dataset.total_runs();
    let deadlocks = deadlock_count(&status_counts);
    let rate = deadlock_rate(deadlocks, total);

    let mut output = String::new();
    let rule = "-".repeat(40);

    let _ = writeln!(output, "{}", rule);
    let _ = writeln!(output, "       AB-BA DEADLOCK METRICS       ");
    let _ = writeln!(output, "{}", rule);
    let _ = writeln!(output, "Total Runs:              {}", total);
    let _ = writeln!(output, "Successful Deadlocks:    {}", deadlocks);
    let _ = writeln!(output, "Deadlock Success Rate:   {:.1}%", rate);
    let _ = writeln!(output, "\nStatus Breakdown:");
    for (status, count) in &status_counts {
        let _ = writeln!(output, "{:<12} {}", status, count);
    }
    let _ = write!(output, "{}", rule);

    output
}

/// Print the status summary report to standard output
pub fn generate_status_summary(dataset: &Dataset) {
    println!("{}", render_status_summary(dataset));
}

/// Generate the status distribution plot
///
/// Creates status_distribution.png with one bar per outcome label in
/// descending count order, each annotated with its exact count. An empty
/// dataset skips plot generation entirely.
///
/// # Arguments
/// * `dataset` - The loaded metrics data
/// * `output_dir` - Directory where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the plot was successfully generated (or the dataset was empty)
/// * `Err(StatusError)` - If plot generation failed
pub fn generate_status_plot(dataset: &Dataset, output_dir: &Path) -> Result<()> {
    let status_counts = dataset.status_counts();
    if status_counts.is_empty() {
        return Ok(());
    }

    let output_path =
        create_status_distribution_plot(&status_counts, dataset.total_runs(), output_dir)?;
    println!("[+] Saved plot: {}", output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Run;

    fn run(status: &str, blocked: u32, queue: u32) -> Run {
        Run {
            status: status.to_string(),
            blocked_threads: Some(blocked),
            wait_queue: Some(queue),
        }
    }

    #[test]
    fn test_deadlock_count_exact_label_only() {
        let counts = vec![
            ("DEADLOCK".to_string(), 2),
            ("deadlock".to_string(), 5),
            ("TIMEOUT".to_string(), 1),
        ];
        assert_eq!(deadlock_count(&counts), 2);

        let without = vec![("TIMEOUT".to_string(), 3)];
        assert_eq!(deadlock_count(&without), 0);
    }

    #[test]
    fn test_deadlock_rate_zero_total() {
        assert_eq!(deadlock_rate(0, 0), 0.0);
        assert_eq!(deadlock_rate(5, 0), 0.0);
    }

    #[test]
    fn test_render_status_summary_scenario() {
        // Reference scenario: 2 deadlocks out of 3 runs
        let dataset = Dataset::new(vec![
            run("DEADLOCK", 2, 5),
            run("TIMEOUT", 0, 0),
            run("DEADLOCK", 1, 3),
        ]);

        let report = render_status_summary(&dataset);
        assert!(report.contains("AB-BA DEADLOCK METRICS"));
        assert!(report.contains("Total Runs:              3"));
        assert!(report.contains("Successful Deadlocks:    2"));
        assert!(report.contains("Deadlock Success Rate:   66.7%"));

        // Breakdown lines pad the label to 12 columns before the count
        let deadlock_pos = report.find("DEADLOCK     2").unwrap();
        let timeout_pos = report.find("TIMEOUT      1").unwrap();
        assert!(!report.contains("DEADLOCK    2"));

        // Breakdown is ordered by descending count
        assert!(deadlock_pos < timeout_pos);
    }

    #[test]
    fn test_render_status_summary_empty_dataset() {
        let dataset = Dataset::new(Vec::new());
        let report = render_status_summary(&dataset);

        assert!(report.contains("Total Runs:              0"));
        assert!(report.contains("Deadlock Success Rate:   0.0%"));
    }

    #[test]
    fn test_generate_status_plot_empty_dataset_is_noop() {
        let dataset = Dataset::new(Vec::new());
        let temp_dir = std::env::temp_dir();

        assert!(generate_status_plot(&dataset, &temp_dir).is_ok());
        assert!(!temp_dir.join("status_distribution.png").exists());
    }
}
