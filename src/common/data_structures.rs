use serde::Deserialize;
use std::collections::HashMap;

/// One recorded outcome of a single execution of the deadlock experiment
#[derive(Debug, Clone, Deserialize)]
pub struct Run {
    /// Terminal state label reported by the harness (open set, e.g. "DEADLOCK", "TIMEOUT")
    #[serde(rename = "Status")]
    pub status: String,
    /// Threads observed parked in uninterruptible (D-state) wait, if measured
    #[serde(rename = "BlockedThreads")]
    pub blocked_threads: Option<u32>,
    /// Observed wait queue depth, if measured
    #[serde(rename = "WaitQueue")]
    pub wait_queue: Option<u32>,
}

/// Immutable collection of runs loaded from the metrics file
///
/// Built once by the parser and shared read-only by every analysis phase.
/// All accessors are order-independent aggregations over the rows.
#[derive(Debug, Clone)]
pub struct Dataset {
    runs: Vec<Run>,
}

impl Dataset {
    pub fn new(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    /// Total number of rows, including those with missing numeric cells
    pub fn total_runs(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Occurrence count per status label, sorted by descending count
    ///
    /// Ties are broken by first appearance in the file, so repeated runs on
    /// the same input produce identical orderings.
    pub fn status_counts(&self) -> Vec<(String, u64)> {
        let mut counts: HashMap<&str, (u64, usize)> = HashMap::new();
        for (index, run) in self.runs.iter().enumerate() {
            let entry = counts.entry(&run.status).or_insert((0, index));
            entry.0 += 1;
        }

        let mut entries: Vec<(String, u64, usize)> = counts
            .into_iter()
            .map(|(status, (count, first_seen))| (status.to_string(), count, first_seen))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        entries
            .into_iter()
            .map(|(status, count, _)| (status, count))
            .collect()
    }

    /// Blocked thread counts for rows where the value is present
    pub fn blocked_threads(&self) -> Vec<u32> {
        self.runs.iter().filter_map(|run| run.blocked_threads).collect()
    }

    /// Wait queue depths for rows where the value is present
    pub fn wait_queues(&self) -> Vec<u32> {
        self.runs.iter().filter_map(|run| run.wait_queue).collect()
    }
}
