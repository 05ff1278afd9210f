//! Built-in dispatching rules.
//!
//! Both rules are non-preemptive: once dispatched, a process runs to
//! completion.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// First-Come-First-Served.
///
/// Dispatches in arrival order. Every process arrives at t=0 in input
/// order, so the arrival rank is the input index.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DispatchingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.index as RuleScore
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

/// Shortest-Job-First (non-preemptive).
///
/// Dispatches the shortest burst first. Minimizes average waiting time
/// for a batch that arrives together.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchingRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest-Job-First"
    }
}
