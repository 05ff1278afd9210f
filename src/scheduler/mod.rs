//! Timing engine, KPIs and the batch scheduler.
//!
//! # Algorithm
//!
//! `compute_timings` walks a dispatch sequence once, accumulating a clock:
//! each process waits for the sum of the bursts dispatched before it.
//!
//! # KPI
//!
//! `TimingKpi` reports mean waiting and turnaround time, longest wait and
//! makespan. Means are undefined (`None`) for an empty batch.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod batch;
mod kpi;
mod timing;

pub use batch::{compare_policies, BatchReport, BatchScheduler, PolicyComparison};
pub use kpi::TimingKpi;
pub use timing::compute_timings;
