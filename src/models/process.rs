//! Process and dispatch sequence model.
//!
//! A process is identified by its 0-based position in the submitted batch
//! and carries a single attribute, its CPU burst time.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, ValidationErrorKind};

/// A CPU-bound process in a static batch.
///
/// Immutable once read: the batch is created once from input and only
/// borrowed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Original input index (0-based). Doubles as arrival order.
    pub index: usize,
    /// CPU time the process needs to run to completion.
    pub burst_time: u64,
}

impl Process {
    /// Creates a process at the given input position.
    pub fn new(index: usize, burst_time: u64) -> Self {
        Self { index, burst_time }
    }

    /// Builds a batch from already non-negative burst times, in input order.
    pub fn batch(burst_times: &[u64]) -> Vec<Process> {
        burst_times
            .iter()
            .enumerate()
            .map(|(index, &burst_time)| Process::new(index, burst_time))
            .collect()
    }
}

/// Execution order of a batch, as original process indices.
///
/// Always a permutation of `0..len`: no duplicates, no omissions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DispatchSequence(Vec<usize>);

impl DispatchSequence {
    /// Input order `[0, 1, ..., len - 1]`.
    pub fn identity(len: usize) -> Self {
        Self((0..len).collect())
    }

    /// Wraps a caller-supplied order after checking it is a permutation of `0..len`.
    pub fn from_order(order: Vec<usize>, len: usize) -> Result<Self, ValidationError> {
        if order.len() != len {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidSequence,
                format!(
                    "Dispatch sequence has {} entries, batch has {} processes",
                    order.len(),
                    len
                ),
            ));
        }

        let mut seen = vec![false; len];
        for &index in &order {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(ValidationError::new(
                        ValidationErrorKind::InvalidSequence,
                        format!("Process {index} is dispatched more than once"),
                    ))
                }
                None => {
                    return Err(ValidationError::new(
                        ValidationErrorKind::InvalidSequence,
                        format!("Process {index} is out of range for a batch of {len}"),
                    ))
                }
            }
        }

        Ok(Self(order))
    }

    /// Process indices in dispatch order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of dispatched processes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Dispatch position of a process, if present.
    pub fn position_of(&self, process: usize) -> Option<usize> {
        self.0.iter().position(|&p| p == process)
    }

    /// Iterates process indices in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_keeps_input_order() {
        let batch = Process::batch(&[10, 5, 8]);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[1], Process::new(1, 5));
        assert_eq!(batch[2].index, 2);
    }

    #[test]
    fn test_identity_sequence() {
        assert_eq!(DispatchSequence::identity(3).as_slice(), &[0, 1, 2]);
        assert!(DispatchSequence::identity(0).is_empty());
    }

    #[test]
    fn test_from_order_accepts_permutation() {
        let seq = DispatchSequence::from_order(vec![1, 2, 0], 3).unwrap();
        assert_eq!(seq.position_of(0), Some(2));
        assert_eq!(seq.position_of(7), None);
    }

    #[test]
    fn test_from_order_rejects_duplicate() {
        let err = DispatchSequence::from_order(vec![0, 0, 1], 3).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidSequence);
    }

    #[test]
    fn test_from_order_rejects_out_of_range() {
        let err = DispatchSequence::from_order(vec![0, 3], 2).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidSequence);
        assert!(err.message.contains("out of range"));
    }

    #[test]
    fn test_from_order_rejects_wrong_length() {
        assert!(DispatchSequence::from_order(vec![0], 2).is_err());
    }
}
