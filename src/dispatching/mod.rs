//! Dispatching rules and rule engine (the order selector).
//!
//! Provides the FCFS and SJF dispatching rules, a rule engine that turns a
//! rule chain into a dispatch sequence, and `DispatchPolicy` to pick one.
//!
//! # Usage
//!
//! ```
//! use u_cpu_sched::dispatching::DispatchPolicy;
//! use u_cpu_sched::models::Process;
//!
//! let batch = Process::batch(&[10, 5, 8]);
//! let sequence = DispatchPolicy::Sjf.sequence(&batch).unwrap();
//! assert_eq!(sequence.as_slice(), &[1, 2, 0]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
mod policy;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};
pub use policy::DispatchPolicy;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched earlier. Scores are exact integers, so equal
/// burst times compare equal without an epsilon.
pub type RuleScore = u64;

/// A dispatching rule that ranks processes in a batch.
///
/// # Score Convention
/// **Lower score = earlier dispatch.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "FCFS", "SJF").
    fn name(&self) -> &'static str;

    /// Evaluates the dispatch rank of a process.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
