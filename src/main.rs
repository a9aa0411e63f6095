mod analysis;
mod common;
mod parsing;

use std::path::PathBuf;
use thiserror::Error;

// Import analysis functions
use analysis::{
    generate_blocked_threads_plot, generate_numeric_summary, generate_status_plot,
    generate_status_summary,
};

// Import parsing functionality
use parsing::parse_metrics;

/// File name of the metrics dataset produced by the stress harness
const INPUT_FILE_NAME: &str = "abba_metrics.csv";

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Parsing error: {0}")]
    Parsing(#[from] parsing::ParsingError),

    #[error("Status analysis error: {0}")]
    Status(#[from] analysis::status::StatusError),

    #[error("Blocked thread analysis error: {0}")]
    BlockedThreads(#[from] analysis::blocked_threads::BlockedThreadsError),
}

type Result<T> = core::result::Result<T, AnalysisError>;

fn main() -> Result<()> {
    // Input and output both live in the project-relative artefacts directory
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let artefacts_dir = manifest_dir.join("artefacts");
    let input_file = artefacts_dir.join(INPUT_FILE_NAME);

    // A missing input is a clean stop: the harness has not run yet, nothing
    // downstream may execute and no output files may be written.
    if !input_file.exists() {
        eprintln!(
            "Error: Missing {}. Run collect_metrics.sh first.",
            input_file.display()
        );
        return Ok(());
    }

    // Parse the metrics file; the dataset is immutable from here on
    let dataset = parse_metrics(&input_file)?;

    // Console summary report
    generate_status_summary(&dataset);

    // Chart artifacts, each confirming its save on stdout
    generate_status_plot(&dataset, &artefacts_dir)?;
    generate_blocked_threads_plot(&dataset, &artefacts_dir)?;

    // Descriptive statistics table plus LaTeX rendering
    generate_numeric_summary(&dataset);

    Ok(())
}
