//! Caller-facing error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by the scheduling pipeline and its input collaborator.
///
/// None of these are transient; the input is simply invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The batch failed validation. Holds every problem found.
    #[error("invalid batch: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
    /// A token in the textual input is not an integer.
    #[error("malformed input token '{token}' at position {position}")]
    MalformedToken { position: usize, token: String },
    /// Fewer burst times were supplied than the declared count.
    #[error("expected {expected} burst times, found {found}")]
    MissingBurstTimes { expected: usize, found: usize },
    /// The textual input did not start with a process count.
    #[error("missing process count")]
    MissingCount,
    /// A policy name did not match any known dispatch policy.
    #[error("unknown dispatch policy '{0}'")]
    UnknownPolicy(String),
}

impl ScheduleError {
    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Invalid(errors) => errors,
            _ => &[],
        }
    }
}

impl From<ValidationError> for ScheduleError {
    fn from(error: ValidationError) -> Self {
        Self::Invalid(vec![error])
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Invalid(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_bursts;

    #[test]
    fn test_invalid_message_lists_all_errors() {
        let err = ScheduleError::from(validate_bursts(&[-1, 2, -3]).unwrap_err());
        assert_eq!(
            err.to_string(),
            "invalid batch: Process 0 has negative burst time -1; \
             Process 2 has negative burst time -3"
        );
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_non_validation_error_has_no_validation_errors() {
        let err = ScheduleError::UnknownPolicy("rr".into());
        assert!(err.validation_errors().is_empty());
        assert_eq!(err.to_string(), "unknown dispatch policy 'rr'");
    }
}
