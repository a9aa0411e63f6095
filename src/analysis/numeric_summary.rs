//! Descriptive statistics over the numeric metric columns
//!
//! This module computes count/mean/std/min/quartiles/max for the
//! BlockedThreads and WaitQueue columns and renders them as a console table
//! plus an equivalent LaTeX tabular.

use crate::common::Dataset;
use std::fmt::Write as _;
use tabled::{Table, Tabled};

/// Errors that can occur during LaTeX table rendering
#[derive(Debug)]
pub enum LatexError {
    NoData,
}

impl std::fmt::Display for LatexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LatexError::NoData => write!(f, "No numeric data available to render"),
        }
    }
}

impl std::error::Error for LatexError {}

/// Statistic row names, in pandas describe() order
const STATISTIC_NAMES: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Descriptive statistics for a single numeric column
///
/// Standard deviation is the sample standard deviation (N-1 denominator);
/// percentiles use linear interpolation between the closest ranks. Undefined
/// statistics (empty column, std of a single value) come out as NaN, matching
/// conventional descriptive-statistics semantics.
#[derive(Debug, Clone, Copy)]
pub struct NumericSummary {
    pub count: f64,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

impl NumericSummary {
    /// Compute the summary over the present values of a column
    pub fn describe(values: &[u32]) -> Self {
        let data: Vec<f64> = values.iter().map(|&value| value as f64).collect();
        let count = data.len();

        if count == 0 {
            return Self {
                count: 0.0,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                p25: f64::NAN,
                p50: f64::NAN,
                p75: f64::NAN,
                max: f64::NAN,
            };
        }

        let mean = data.iter().sum::<f64>() / count as f64;

        let std = if count < 2 {
            f64::NAN
        } else {
            let sum_sq: f64 = data.iter().map(|value| (value - mean).powi(2)).sum();
            (sum_sq / (count - 1) as f64).sqrt()
        };

        let mut sorted = data;
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Self {
            count: count as f64,
            mean,
            std,
            min: sorted[0],
            p25: percentile(&sorted, 0.25),
            p50: percentile(&sorted, 0.50),
            p75: percentile(&sorted, 0.75),
            max: sorted[count - 1],
        }
    }

    /// Statistic values in [`STATISTIC_NAMES`] order
    fn values(&self) -> [f64; 8] {
        [
            self.count, self.mean, self.std, self.min, self.p25, self.p50, self.p75, self.max,
        ]
    }
}

/// Linear-interpolated percentile over ascending-sorted data
///
/// `fraction` is in 0.0..=1.0. The rank is `(n - 1) * fraction`; fractional
/// ranks interpolate between the two surrounding values.
fn percentile(sorted: &[f64], fraction: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }

    let rank = (sorted.len() - 1) as f64 * fraction;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }

    let weight = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Statistic")]
    statistic: &'static str,
    #[tabled(rename = "BlockedThreads")]
    blocked_threads: String,
    #[tabled(rename = "WaitQueue")]
    wait_queue: String,
}

/// Render the console statistics table for both numeric columns
pub fn render_summary_table(blocked: &NumericSummary, wait_queue: &NumericSummary) -> String {
    let blocked_values = blocked.values();
    let wait_queue_values = wait_queue.values();

    let rows: Vec<SummaryRow> = STATISTIC_NAMES
        .iter()
        .enumerate()
        .map(|(index, &statistic)| SummaryRow {
            statistic,
            blocked_threads: format!("{:.2}", blocked_values[index]),
            wait_queue: format!("{:.2}", wait_queue_values[index]),
        })
        .collect();

    Table::new(rows).to_string()
}

/// Render the statistics as a booktabs-style LaTeX tabular
///
/// Numeric cells use two decimal places, matching the console table.
///
/// # Returns
/// * `Ok(String)` - The LaTeX source for the table
/// * `Err(LatexError)` - If neither column has any data to tabulate
pub fn render_latex_table(
    blocked: &NumericSummary,
    wait_queue: &NumericSummary,
) -> core::result::Result<String, LatexError> {
    if blocked.count == 0.0 && wait_queue.count == 0.0 {
        return Err(LatexError::NoData);
    }

    let blocked_values = blocked.values();
    let wait_queue_values = wait_queue.values();

    let mut output = String::new();
    let _ = writeln!(output, "\\begin{{tabular}}{{lrr}}");
    let _ = writeln!(output, "\\toprule");
    let _ = writeln!(output, " & BlockedThreads & WaitQueue \\\\");
    let _ = writeln!(output, "\\midrule");
    for (index, &statistic) in STATISTIC_NAMES.iter().enumerate() {
        let _ = writeln!(
            output,
            "{} & {:.2} & {:.2} \\\\",
            statistic, blocked_values[index], wait_queue_values[index]
        );
    }
    let _ = writeln!(output, "\\bottomrule");
    let _ = write!(output, "\\end{{tabular}}");

    Ok(output)
}

/// Print the numeric summary section to standard output
///
/// The console table always renders; the LaTeX rendering may fail, in which
/// case a single diagnostic line replaces it and the pipeline continues.
pub fn generate_numeric_summary(dataset: &Dataset) {
    let blocked = NumericSummary::describe(&dataset.blocked_threads());
    let wait_queue = NumericSummary::describe(&dataset.wait_queues());

    let rule = "-".repeat(20);

    println!("\n[Summary Statistics]");
    println!("{}", rule);
    println!("{}", render_summary_table(&blocked, &wait_queue));

    println!("\n[LaTeX Table Code]");
    println!("{}", rule);
    match render_latex_table(&blocked, &wait_queue) {
        Ok(latex) => println!("{}", latex),
        Err(e) => println!("[!] Could not generate LaTeX code: {}", e),
    }
    println!("{}", rule);
}
