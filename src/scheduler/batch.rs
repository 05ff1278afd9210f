//! Batch scheduler: validation, dispatch ordering and timing in one pass.
//!
//! # Algorithm
//!
//! 1. Validate raw burst times (the whole batch fails on any negative value).
//! 2. Compute the dispatch sequence for the configured policy.
//! 3. Run the timing engine over the sequence and aggregate KPIs.
//!
//! The scheduler holds only its configuration, so one instance can be
//! shared across threads and invoked on independent batches.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{compute_timings, TimingKpi};
use crate::config::{BatchConfig, RowOrder};
use crate::dispatching::DispatchPolicy;
use crate::error::ScheduleError;
use crate::models::{DispatchSequence, Process, TimingRecord};
use crate::validation::{validate_batch, validate_bursts};

/// Result of scheduling one batch under one policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Policy that produced the sequence.
    pub policy: DispatchPolicy,
    /// Execution order.
    pub sequence: DispatchSequence,
    /// Timing records in dispatch order.
    pub records: Vec<TimingRecord>,
    /// Aggregate metrics.
    pub kpi: TimingKpi,
    /// Resolved row order for presentation (`Input` or `Dispatch`).
    pub row_order: RowOrder,
    /// Display label per process, by original index.
    pub labels: Vec<String>,
}

impl BatchReport {
    /// Records in the configured row order.
    pub fn rows(&self) -> Vec<&TimingRecord> {
        let mut rows: Vec<&TimingRecord> = self.records.iter().collect();
        if self.row_order == RowOrder::Input {
            rows.sort_by_key(|r| r.process);
        }
        rows
    }

    /// Timing record of a process by original index.
    pub fn record_for(&self, process: usize) -> Option<&TimingRecord> {
        self.records.iter().find(|r| r.process == process)
    }

    /// Label of a process by original index.
    pub fn label(&self, process: usize) -> &str {
        self.labels.get(process).map(String::as_str).unwrap_or("?")
    }

    /// Waiting times indexed by original process index.
    pub fn waiting_times(&self) -> Vec<u64> {
        let mut out = vec![0; self.records.len()];
        for r in &self.records {
            out[r.process] = r.waiting_time;
        }
        out
    }

    /// Turnaround times indexed by original process index.
    pub fn turnaround_times(&self) -> Vec<u64> {
        let mut out = vec![0; self.records.len()];
        for r in &self.records {
            out[r.process] = r.turnaround_time;
        }
        out
    }

    /// Number of scheduled processes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the batch was empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Scheduler for static batches of CPU-bound processes.
///
/// # Example
///
/// ```
/// use u_cpu_sched::config::BatchConfig;
/// use u_cpu_sched::dispatching::DispatchPolicy;
/// use u_cpu_sched::scheduler::BatchScheduler;
///
/// let scheduler = BatchScheduler::new(BatchConfig::new(DispatchPolicy::Sjf));
/// let report = scheduler.schedule(&[10, 5, 8]).unwrap();
/// assert_eq!(report.sequence.as_slice(), &[1, 2, 0]);
/// assert_eq!(report.kpi.avg_waiting, Some(6.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchScheduler {
    config: BatchConfig,
}

impl BatchScheduler {
    /// Creates a scheduler with the given configuration.
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Shorthand for a scheduler with default reporting and the given policy.
    pub fn with_policy(policy: DispatchPolicy) -> Self {
        Self::new(BatchConfig::new(policy))
    }

    /// Active configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Validates and schedules raw burst times.
    ///
    /// # Errors
    /// `ScheduleError::Invalid` with every `InvalidBurstTime` found. No
    /// ordering or timing runs for a rejected batch.
    pub fn schedule(&self, burst_times: &[i64]) -> Result<BatchReport, ScheduleError> {
        let processes = validate_bursts(burst_times).map_err(|errors| {
            warn!(
                policy = %self.config.policy,
                rejected = errors.len(),
                "rejected batch"
            );
            ScheduleError::Invalid(errors)
        })?;
        self.schedule_processes(&processes)
    }

    /// Schedules an already-validated batch.
    ///
    /// # Errors
    /// `InvalidSequence` unless `processes[i].index == i`; `BurstOverflow`
    /// if the bursts cannot be summed.
    pub fn schedule_processes(&self, processes: &[Process]) -> Result<BatchReport, ScheduleError> {
        validate_batch(processes)?;
        let sequence = self.config.policy.sequence(processes)?;
        self.schedule_with_sequence(processes, sequence)
    }

    /// Times a batch under a caller-chosen dispatch sequence.
    ///
    /// The configured policy only labels the report and picks the default
    /// row order.
    pub fn schedule_with_sequence(
        &self,
        processes: &[Process],
        sequence: DispatchSequence,
    ) -> Result<BatchReport, ScheduleError> {
        let records = compute_timings(&sequence, processes)?;
        let kpi = TimingKpi::calculate(&records);
        debug!(
            policy = %self.config.policy,
            processes = kpi.process_count,
            avg_waiting = ?kpi.avg_waiting,
            avg_turnaround = ?kpi.avg_turnaround,
            "scheduled batch"
        );

        Ok(BatchReport {
            policy: self.config.policy,
            sequence,
            records,
            kpi,
            row_order: self.config.row_order.resolve(self.config.policy),
            labels: (0..processes.len()).map(|i| self.config.label(i)).collect(),
        })
    }
}

/// FCFS and SJF results for the same batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyComparison {
    pub fcfs: BatchReport,
    pub sjf: BatchReport,
}

impl PolicyComparison {
    /// Reduction in average waiting time from FCFS to SJF.
    ///
    /// `None` for an empty batch. Never negative: SJF minimizes mean
    /// waiting time for a batch arriving together.
    pub fn waiting_time_saved(&self) -> Option<f64> {
        Some(self.fcfs.kpi.avg_waiting? - self.sjf.kpi.avg_waiting?)
    }
}

/// Schedules the same batch under both policies with default reporting.
pub fn compare_policies(burst_times: &[i64]) -> Result<PolicyComparison, ScheduleError> {
    let processes = validate_bursts(burst_times)?;
    Ok(PolicyComparison {
        fcfs: BatchScheduler::with_policy(DispatchPolicy::Fcfs).schedule_processes(&processes)?,
        sjf: BatchScheduler::with_policy(DispatchPolicy::Sjf).schedule_processes(&processes)?,
    })
}
