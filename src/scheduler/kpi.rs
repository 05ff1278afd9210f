//! Batch timing metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean time ready before execution |
//! | Avg Turnaround | Mean time from submission to completion |
//! | Max Waiting | Longest single wait |
//! | Makespan | Completion of the last dispatched process (= total burst) |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use crate::models::TimingRecord;

/// Aggregate timing indicators of a scheduled batch.
///
/// Averages are `None` for an empty batch: the mean of zero values is
/// undefined, not zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingKpi {
    /// Number of processes.
    pub process_count: usize,
    /// Sum of burst times.
    pub total_burst: u64,
    /// Mean waiting time.
    pub avg_waiting: Option<f64>,
    /// Mean turnaround time.
    pub avg_turnaround: Option<f64>,
    /// Largest waiting time of any process.
    pub max_waiting: u64,
    /// Completion time of the last process.
    pub makespan: u64,
}

impl TimingKpi {
    /// Computes KPIs from timing records.
    pub fn calculate(records: &[TimingRecord]) -> Self {
        let process_count = records.len();
        // Wide sums: per-process waits can add up past u64 even when the
        // makespan fits.
        let sum = |f: fn(&TimingRecord) -> u64| -> u128 {
            records.iter().map(|r| u128::from(f(r))).sum()
        };
        let total_burst = u64::try_from(sum(|r| r.burst_time)).unwrap_or(u64::MAX);
        let total_waiting = sum(|r| r.waiting_time);
        let total_turnaround = sum(|r| r.turnaround_time);
        let max_waiting = records.iter().map(|r| r.waiting_time).max().unwrap_or(0);
        let makespan = records
            .iter()
            .map(|r| r.completion_time())
            .max()
            .unwrap_or(0);

        let mean = |total: u128| {
            if process_count == 0 {
                None
            } else {
                Some(total as f64 / process_count as f64)
            }
        };

        Self {
            process_count,
            total_burst,
            avg_waiting: mean(total_waiting),
            avg_turnaround: mean(total_turnaround),
            max_waiting,
            makespan,
        }
    }

    /// Whether the batch had no processes.
    pub fn is_empty(&self) -> bool {
        self.process_count == 0
    }
}
