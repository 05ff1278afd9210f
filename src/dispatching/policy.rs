//! Named dispatch policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{rules, RuleEngine};
use crate::error::ScheduleError;
use crate::models::{DispatchSequence, Process};
use crate::validation::ValidationError;

/// Non-preemptive dispatch policy for a batch that arrives at t=0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchPolicy {
    /// First-Come-First-Served: input order.
    #[default]
    Fcfs,
    /// Shortest-Job-First: ascending burst time, ties by input index.
    Sjf,
}

impl DispatchPolicy {
    /// All supported policies.
    pub const ALL: [DispatchPolicy; 2] = [DispatchPolicy::Fcfs, DispatchPolicy::Sjf];

    /// Rule engine equivalent to this policy.
    pub fn rule_engine(self) -> RuleEngine {
        match self {
            Self::Fcfs => RuleEngine::new().with_rule(rules::Fcfs),
            Self::Sjf => RuleEngine::new().with_rule(rules::Sjf),
        }
    }

    /// Dispatch sequence of a batch under this policy.
    ///
    /// FCFS needs no comparison: arrival order is the input order.
    pub fn sequence(self, processes: &[Process]) -> Result<DispatchSequence, ValidationError> {
        match self {
            Self::Fcfs => DispatchSequence::from_order(
                processes.iter().map(|p| p.index).collect(),
                processes.len(),
            ),
            Self::Sjf => self.rule_engine().sequence(processes),
        }
    }

    /// Short policy name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
        }
    }
}

impl fmt::Display for DispatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DispatchPolicy {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" | "spt" => Ok(Self::Sjf),
            _ => Err(ScheduleError::UnknownPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_sequence_is_identity() {
        let batch = Process::batch(&[10, 5, 8]);
        let seq = DispatchPolicy::Fcfs.sequence(&batch).unwrap();
        assert_eq!(seq, DispatchSequence::identity(3));
    }

    #[test]
    fn test_sjf_sequence() {
        let batch = Process::batch(&[10, 5, 8]);
        let seq = DispatchPolicy::Sjf.sequence(&batch).unwrap();
        assert_eq!(seq.as_slice(), &[1, 2, 0]);
    }

    #[test]
    fn test_sjf_tie_keeps_input_index_order() {
        let batch = Process::batch(&[4, 4, 2]);
        let seq = DispatchPolicy::Sjf.sequence(&batch).unwrap();
        assert_eq!(seq.as_slice(), &[2, 0, 1]);
    }

    #[test]
    fn test_empty_sequences() {
        for policy in DispatchPolicy::ALL {
            assert!(policy.sequence(&[]).unwrap().is_empty());
        }
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!("fcfs".parse::<DispatchPolicy>().unwrap(), DispatchPolicy::Fcfs);
        assert_eq!("FIFO".parse::<DispatchPolicy>().unwrap(), DispatchPolicy::Fcfs);
        assert_eq!(" Sjf ".parse::<DispatchPolicy>().unwrap(), DispatchPolicy::Sjf);
        assert_eq!("spt".parse::<DispatchPolicy>().unwrap(), DispatchPolicy::Sjf);
        assert_eq!(
            "rr".parse::<DispatchPolicy>().unwrap_err(),
            ScheduleError::UnknownPolicy("rr".into())
        );
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(DispatchPolicy::Sjf.to_string(), "SJF");
        let json = serde_json::to_string(&DispatchPolicy::Sjf).unwrap();
        assert_eq!(json, "\"sjf\"");
        let back: DispatchPolicy = serde_json::from_str("\"fcfs\"").unwrap();
        assert_eq!(back, DispatchPolicy::Fcfs);
    }
}
