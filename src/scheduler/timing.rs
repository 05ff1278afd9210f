//! Timing engine.
//!
//! # Algorithm
//!
//! Single forward pass over the dispatch sequence:
//!
//! ```text
//! waiting[0]    = 0
//! waiting[i]    = waiting[i-1] + burst[seq[i-1]]
//! turnaround[i] = waiting[i] + burst[seq[i]]
//! ```
//!
//! Exact integer arithmetic; only the KPI averages divide.
//!
//! # Complexity
//! O(n).

use tracing::debug;

use crate::models::{DispatchSequence, Process, TimingRecord};
use crate::validation::{validate_batch, ValidationError, ValidationErrorKind};

/// Computes waiting and turnaround times for a batch.
///
/// `processes` must be in input order (`processes[i].index == i`), as
/// produced by validation, and its bursts must sum without overflow;
/// otherwise nothing is timed. Records are returned in dispatch order.
///
/// # Example
/// ```
/// use u_cpu_sched::models::{DispatchSequence, Process};
/// use u_cpu_sched::scheduler::compute_timings;
///
/// let batch = Process::batch(&[10, 5, 8]);
/// let records = compute_timings(&DispatchSequence::identity(3), &batch).unwrap();
/// let waiting: Vec<u64> = records.iter().map(|r| r.waiting_time).collect();
/// assert_eq!(waiting, vec![0, 10, 15]);
/// ```
pub fn compute_timings(
    sequence: &DispatchSequence,
    processes: &[Process],
) -> Result<Vec<TimingRecord>, ValidationError> {
    if sequence.len() != processes.len() {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidSequence,
            format!(
                "Dispatch sequence has {} entries, batch has {} processes",
                sequence.len(),
                processes.len()
            ),
        ));
    }

    validate_batch(processes)?;

    let mut records = Vec::with_capacity(processes.len());
    let mut clock: u64 = 0;

    for (position, index) in sequence.iter().enumerate() {
        let process = &processes[index];
        let waiting_time = clock;
        // Bounded by the validated total burst.
        let turnaround_time = waiting_time + process.burst_time;

        records.push(TimingRecord {
            process: process.index,
            position,
            burst_time: process.burst_time,
            waiting_time,
            turnaround_time,
        });
        clock = turnaround_time;
    }

    debug!(processes = records.len(), makespan = clock, "computed timings");
    Ok(records)
}
