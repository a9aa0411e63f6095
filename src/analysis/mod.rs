//! Domain-specific analysis modules
//!
//! This module contains domain-specific analysis logic for:
//! - Status outcome summary and distribution
//! - Blocked thread frequency distribution
//! - Descriptive statistics over the numeric columns

pub mod blocked_threads;
pub mod numeric_summary;
pub mod status;

// Re-export analysis functions for convenience
pub use blocked_threads::generate_blocked_threads_plot;
pub use numeric_summary::generate_numeric_summary;
pub use status::{generate_status_plot, generate_status_summary};
