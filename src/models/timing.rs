//! Per-process timing records.

use serde::{Deserialize, Serialize};

/// Timing of one process under a given dispatch sequence.
///
/// Computed by the timing engine, never supplied as input. All processes
/// arrive at t=0, so completion time equals turnaround time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingRecord {
    /// Original input index of the process.
    pub process: usize,
    /// Position in the dispatch sequence (0 = runs first).
    pub position: usize,
    /// CPU burst time.
    pub burst_time: u64,
    /// Time spent ready before execution starts.
    pub waiting_time: u64,
    /// Waiting time plus burst time.
    pub turnaround_time: u64,
}

impl TimingRecord {
    /// Time at which the process finishes.
    pub fn completion_time(&self) -> u64 {
        self.turnaround_time
    }
}
