//! Non-preemptive CPU scheduling metrics for static process batches.
//!
//! Given the burst times of a batch that arrives together, computes the
//! dispatch order under First-Come-First-Served or Shortest-Job-First and
//! the resulting waiting and turnaround time of every process, plus their
//! averages. An offline calculator, not a live scheduler.
//!
//! # Modules
//!
//! - **`models`**: `Process`, `DispatchSequence`, `TimingRecord`
//! - **`dispatching`**: Order selector — `Fcfs`/`Sjf` rules, `RuleEngine`, `DispatchPolicy`
//! - **`scheduler`**: Timing engine, `TimingKpi`, `BatchScheduler`
//! - **`validation`**: Boundary checks (counts, burst times, sequences)
//! - **`config`**: `BatchConfig` (policy, row order, labels)
//! - **`input`** / **`report`**: Text input parsing and table rendering
//! - **`workload`**: Seeded random batches
//!
//! # Example
//!
//! ```
//! use u_cpu_sched::dispatching::DispatchPolicy;
//! use u_cpu_sched::scheduler::BatchScheduler;
//!
//! let report = BatchScheduler::with_policy(DispatchPolicy::Fcfs)
//!     .schedule(&[10, 5, 8])
//!     .unwrap();
//! assert_eq!(report.waiting_times(), vec![0, 10, 15]);
//! assert_eq!(report.kpi.avg_turnaround, Some(16.0));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod input;
pub mod models;
mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use config::{BatchConfig, RowOrder};
pub use dispatching::DispatchPolicy;
pub use error::ScheduleError;
pub use scheduler::{compare_policies, BatchReport, BatchScheduler, PolicyComparison};
