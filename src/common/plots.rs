//! Plotting infrastructure for categorical bar charts
//!
//! This module provides functionality to create vertical bar charts using the
//! [`plotters`] crate. Charts are saved as PNG files with fixed 1200x800 resolution.

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Creates a vertical bar chart over categorical labels and saves it as a PNG file
///
/// Bars are drawn left-to-right in the order given in `bars`; this module does
/// not reorder them, so callers control the visual ordering (descending count
/// for status charts, ascending value for frequency charts).
///
/// # Arguments
/// * `bars` - Slice of (label, height) pairs, one bar per entry
/// * `title` - Chart title displayed at the top of the plot
/// * `x_label` - Label for the X-axis
/// * `y_label` - Label for the Y-axis
/// * `annotate_bars` - If true, each bar's exact height is drawn centered just
///   above the bar top
/// * `output_path` - Path where the PNG file should be saved (overwritten if present)
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
///
/// # Chart Properties
/// * Resolution: 1200x800 pixels
/// * Format: PNG
/// * X-axis: one segment per bar, tick labels at segment centers
/// * Font rendering: sans-serif via the bitmap backend (works in headless environments)
pub fn create_bar_chart(
    bars: &[(String, u64)],
    title: &str,
    x_label: &str,
    y_label: &str,
    annotate_bars: bool,
    output_path: &Path,
) -> Result<()> {
    if bars.is_empty() {
        return Err(PlotError::InvalidData("Bar data cannot be empty".to_string()));
    }

    let root = BitMapBackend::new(output_path, (1200, 800));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    // Leave ~10% headroom above the tallest bar so annotations are not clipped
    let max_height = bars.iter().map(|(_, height)| *height).max().unwrap_or(0);
    let y_end = max_height + (max_height / 10).max(1);

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d((0u32..bars.len() as u32).into_segmented(), 0u64..y_end)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len())
        .x_desc(x_label)
        .x_label_style(("sans-serif", 25))
        .y_desc(y_label)
        .y_label_style(("sans-serif", 25))
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(index) => bars
                .get(*index as usize)
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart_context
        .draw_series(bars.iter().enumerate().map(|(index, (_, height))| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(index as u32), 0u64),
                    (SegmentValue::Exact(index as u32 + 1), *height),
                ],
                BLUE.filled(),
            );
            bar.set_margin(0, 0, 8, 8);
            bar
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    if annotate_bars {
        let label_style = TextStyle::from(("sans-serif", 25))
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        chart_context
            .draw_series(bars.iter().enumerate().map(|(index, (_, height))| {
                Text::new(
                    height.to_string(),
                    (SegmentValue::CenterOf(index as u32), *height),
                    label_style.clone(),
                )
            }))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Creates the status distribution bar chart
///
/// One bar per outcome label with its exact count annotated above the bar.
///
/// # Arguments
/// * `status_counts` - (label, count) pairs in descending count order
/// * `total_runs` - Total number of runs, shown in the chart title
/// * `output_dir` - Directory where the PNG file should be saved
pub fn create_status_distribution_plot(
    status_counts: &[(String, u64)],
    total_runs: usize,
    output_dir: &Path,
) -> Result<std::path::PathBuf> {
    let output_path = output_dir.join("status_distribution.png");

    create_bar_chart(
        status_counts,
        &format!("Race Condition Outcome (N={})", total_runs),
        "Outcome",
        "Count",
        true,
        &output_path,
    )?;

    Ok(output_path)
}

/// Creates the blocked-thread frequency bar chart
///
/// One bar per distinct blocked-thread count, in ascending value order.
///
/// # Arguments
/// * `frequencies` - (blocked thread count, frequency) pairs in ascending value order
/// * `output_dir` - Directory where the PNG file should be saved
pub fn create_blocked_threads_plot(
    frequencies: &[(u32, u64)],
    output_dir: &Path,
) -> Result<std::path::PathBuf> {
    let bars: Vec<(String, u64)> = frequencies
        .iter()
        .map(|(value, frequency)| (value.to_string(), *frequency))
        .collect();

    let output_path = output_dir.join("blocked_threads.png");

    create_bar_chart(
        &bars,
        "Blocked Threads in D-State per Run",
        "Number of Blocked Threads",
        "Frequency",
        false,
        &output_path,
    )?;

    Ok(output_path)
}
