//! Common infrastructure modules shared across analysis phases
//!
//! This module provides reusable infrastructure for:
//! - Data structures for deadlock experiment metrics
//! - Plotting categorical bar charts

pub mod data_structures;
pub mod plots;

// Re-export commonly used items
pub use data_structures::{Dataset, Run};
pub use plots::PlotError;
