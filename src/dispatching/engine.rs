//! Rule engine for dispatch ordering.
//!
//! Applies a chain of dispatching rules in sequence: the next rule is
//! consulted only when all earlier rules tie. A final tie-breaker settles
//! whatever the chain leaves equal.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use super::DispatchingRule;
use crate::models::{DispatchSequence, Process};
use crate::validation::ValidationError;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Lower original input index first (default).
    #[default]
    ByIndex,
    /// Leave tied processes in the order they were given (stable sort).
    Stable,
}

/// A composable rule engine for process ordering.
///
/// # Example
/// ```
/// use u_cpu_sched::dispatching::{rules, RuleEngine};
/// use u_cpu_sched::models::Process;
///
/// let engine = RuleEngine::new().with_rule(rules::Sjf);
/// let batch = Process::batch(&[4, 4, 2]);
/// assert_eq!(engine.sort_indices(&batch), vec![2, 0, 1]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    ///
    /// With no rules every process ties, so the tie-breaker alone decides.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::ByIndex,
        }
    }

    /// Appends a rule to the chain.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the rules in the chain.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts processes into dispatch order.
    ///
    /// Returns positions into the given slice. The sort is stable, so
    /// processes that compare equal keep their relative slice order.
    pub fn sort_indices(&self, processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    /// Computes the dispatch sequence of a batch, as original process indices.
    ///
    /// Fails with `InvalidSequence` when the processes' indices are not
    /// exactly `0..len` (e.g. a sub-slice of a batch).
    pub fn sequence(&self, processes: &[Process]) -> Result<DispatchSequence, ValidationError> {
        let order: Vec<usize> = self
            .sort_indices(processes)
            .into_iter()
            .map(|i| processes[i].index)
            .collect();
        debug!(rules = ?self.rule_names(), ?order, "computed dispatch order");
        DispatchSequence::from_order(order, processes.len())
    }

    /// Returns the position of the process dispatched first.
    pub fn select_first(&self, processes: &[Process]) -> Option<usize> {
        self.sort_indices(processes).first().copied()
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        // All rules tied → use final tie-breaker
        match self.tie_breaker {
            TieBreaker::ByIndex => a.index.cmp(&b.index),
            TieBreaker::Stable => Ordering::Equal,
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    #[test]
    fn test_sjf_ordering() {
        let batch = Process::batch(&[10, 5, 8]);
        let engine = RuleEngine::new().with_rule(rules::Sjf);
        assert_eq!(engine.sort_indices(&batch), vec![1, 2, 0]);
    }

    #[test]
    fn test_fcfs_ordering_is_identity() {
        let batch = Process::batch(&[10, 5, 8]);
        let engine = RuleEngine::new().with_rule(rules::Fcfs);
        assert_eq!(engine.sequence(&batch).unwrap(), DispatchSequence::identity(3));
    }

    #[test]
    fn test_tie_broken_by_index() {
        let batch = Process::batch(&[4, 4, 2]);
        let engine = RuleEngine::new().with_rule(rules::Sjf);
        assert_eq!(engine.sequence(&batch).unwrap().as_slice(), &[2, 0, 1]);
    }

    #[test]
    fn test_by_index_overrides_slice_order() {
        // Slice order disagrees with input index for the tied pair.
        let processes = vec![Process::new(1, 4), Process::new(0, 4)];
        let by_index = RuleEngine::new().with_rule(rules::Sjf);
        assert_eq!(by_index.sequence(&processes).unwrap().as_slice(), &[0, 1]);

        let stable = RuleEngine::new()
            .with_rule(rules::Sjf)
            .with_tie_breaker(TieBreaker::Stable);
        assert_eq!(stable.sequence(&processes).unwrap().as_slice(), &[1, 0]);
    }

    #[test]
    fn test_rule_chain() {
        // SJF ties on burst → FCFS decides.
        let batch = Process::batch(&[3, 1, 3]);
        let engine = RuleEngine::new()
            .with_rule(rules::Sjf)
            .with_rule(rules::Fcfs)
            .with_tie_breaker(TieBreaker::Stable);
        assert_eq!(engine.sort_indices(&batch), vec![1, 0, 2]);
        assert_eq!(engine.rule_names(), vec!["SJF", "FCFS"]);
    }

    #[test]
    fn test_empty_batch() {
        let engine = RuleEngine::new().with_rule(rules::Sjf);
        assert!(engine.sort_indices(&[]).is_empty());
        assert!(engine.sequence(&[]).unwrap().is_empty());
        assert!(engine.select_first(&[]).is_none());
    }

    #[test]
    fn test_sequence_rejects_partial_batch() {
        let processes = vec![Process::new(3, 1), Process::new(5, 2)];
        let engine = RuleEngine::new().with_rule(rules::Sjf);
        assert!(engine.sequence(&processes).is_err());
    }

    #[test]
    fn test_select_first() {
        let batch = Process::batch(&[9, 2, 7]);
        let engine = RuleEngine::new().with_rule(rules::Sjf);
        assert_eq!(engine.select_first(&batch), Some(1));
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::new().with_rule(rules::Sjf);
        let text = format!("{engine:?}");
        assert!(text.contains("SJF"));
        assert!(text.contains("ByIndex"));
    }
}
