//! Input validation for scheduling batches.
//!
//! Checks the batch at the boundary, before any dispatch order or timing
//! is computed. Detects:
//! - Negative process counts
//! - Negative burst times
//! - Batches whose total burst time does not fit the clock
//! - Process slices that are not in input order
//! - Dispatch sequences that are not permutations of the batch
//!
//! A malformed batch fails as a whole: every offending value is reported
//! and no partial result is produced.

use thiserror::Error;

use crate::models::Process;

/// Validation result.
pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Process count is negative or otherwise unusable.
    InvalidInputCount,
    /// A process has a negative burst time.
    InvalidBurstTime,
    /// A dispatch sequence is not a permutation of the batch, or the
    /// batch is not in input order.
    InvalidSequence,
    /// The sum of all burst times overflows the scheduling clock.
    BurstOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process count read from an input source.
pub fn validate_count(count: i64) -> Result<usize, ValidationError> {
    usize::try_from(count).map_err(|_| {
        ValidationError::new(
            ValidationErrorKind::InvalidInputCount,
            format!("Process count must be non-negative, got {count}"),
        )
    })
}

/// Validates raw burst times and builds the process batch.
///
/// Zero is accepted; any negative value rejects the whole batch.
///
/// # Returns
/// The batch in input order, or every `InvalidBurstTime` error found
/// (plus `BurstOverflow` if the valid bursts cannot be summed).
pub fn validate_bursts(burst_times: &[i64]) -> ValidationResult<Vec<Process>> {
    let mut errors = Vec::new();
    let mut processes = Vec::with_capacity(burst_times.len());

    for (index, &burst) in burst_times.iter().enumerate() {
        match u64::try_from(burst) {
            Ok(burst_time) => processes.push(Process::new(index, burst_time)),
            Err(_) => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurstTime,
                format!("Process {index} has negative burst time {burst}"),
            )),
        }
    }

    if let Err(e) = total_burst(&processes) {
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(processes)
    } else {
        Err(errors)
    }
}

/// Checks a process slice before timing it.
///
/// The slice must be in input order (`processes[i].index == i`) and its
/// burst times must sum without overflow, so every completion time fits.
///
/// # Returns
/// The total burst time (= makespan).
pub fn validate_batch(processes: &[Process]) -> Result<u64, ValidationError> {
    if let Some((position, process)) = processes
        .iter()
        .enumerate()
        .find(|(position, p)| p.index != *position)
    {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidSequence,
            format!(
                "Process at position {position} has index {}, batch must be in input order",
                process.index
            ),
        ));
    }
    total_burst(processes)
}

fn total_burst(processes: &[Process]) -> Result<u64, ValidationError> {
    processes
        .iter()
        .try_fold(0u64, |acc, p| acc.checked_add(p.burst_time))
        .ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::BurstOverflow,
                format!("Total burst time of {} processes overflows", processes.len()),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bursts() {
        let processes = validate_bursts(&[10, 5, 8]).unwrap();
        assert_eq!(processes, Process::batch(&[10, 5, 8]));
    }

    #[test]
    fn test_zero_burst_accepted() {
        let processes = validate_bursts(&[0, 3]).unwrap();
        assert_eq!(processes[0].burst_time, 0);
    }

    #[test]
    fn test_empty_batch_is_valid() {
        assert!(validate_bursts(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_negative_burst_rejected() {
        let errors = validate_bursts(&[4, -1, 3]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidBurstTime);
        assert!(errors[0].message.contains("Process 1"));
    }

    #[test]
    fn test_all_negative_bursts_reported() {
        let errors = validate_bursts(&[-2, 7, -9]).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidBurstTime));
    }

    #[test]
    fn test_total_burst_overflow_rejected() {
        let errors = validate_bursts(&[i64::MAX, i64::MAX, i64::MAX]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::BurstOverflow);

        // Largest total that still fits is accepted.
        assert!(validate_bursts(&[i64::MAX, i64::MAX, 1]).is_ok());
    }

    #[test]
    fn test_negative_and_overflow_reported_together() {
        let errors = validate_bursts(&[-1, i64::MAX, i64::MAX, i64::MAX]).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::InvalidBurstTime,
                ValidationErrorKind::BurstOverflow
            ]
        );
    }

    #[test]
    fn test_batch_in_input_order() {
        assert_eq!(validate_batch(&Process::batch(&[10, 5, 8])).unwrap(), 23);
        assert_eq!(validate_batch(&[]).unwrap(), 0);
    }

    #[test]
    fn test_batch_out_of_order_rejected() {
        let swapped = [Process::new(1, 5), Process::new(0, 10)];
        let err = validate_batch(&swapped).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidSequence);

        let out_of_range = [Process::new(5, 1)];
        assert_eq!(
            validate_batch(&out_of_range).unwrap_err().kind,
            ValidationErrorKind::InvalidSequence
        );
    }

    #[test]
    fn test_batch_overflow_rejected() {
        let batch = Process::batch(&[u64::MAX, 1]);
        assert_eq!(
            validate_batch(&batch).unwrap_err().kind,
            ValidationErrorKind::BurstOverflow
        );
    }

    #[test]
    fn test_count() {
        assert_eq!(validate_count(3).unwrap(), 3);
        assert_eq!(validate_count(0).unwrap(), 0);
        let err = validate_count(-1).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidInputCount);
        assert_eq!(err.to_string(), "Process count must be non-negative, got -1");
    }
}
