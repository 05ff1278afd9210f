//! Textual batch input.
//!
//! Reads the interactive format: a process count followed by that many
//! burst times, separated by any whitespace.

use crate::error::ScheduleError;
use crate::validation::validate_count;

/// Parses "count, then count burst times".
///
/// Tokens past the declared count are ignored. Burst times are returned
/// raw; negative values are rejected later by `validate_bursts`.
///
/// # Example
/// ```
/// use u_cpu_sched::input::parse_batch;
///
/// assert_eq!(parse_batch("3\n10 5 8\n").unwrap(), vec![10, 5, 8]);
/// ```
pub fn parse_batch(text: &str) -> Result<Vec<i64>, ScheduleError> {
    let mut tokens = parse_tokens(text);

    let count = match tokens.next() {
        Some(token) => validate_count(token?)?,
        None => return Err(ScheduleError::MissingCount),
    };

    let bursts = tokens.take(count).collect::<Result<Vec<_>, _>>()?;

    if bursts.len() < count {
        return Err(ScheduleError::MissingBurstTimes {
            expected: count,
            found: bursts.len(),
        });
    }
    Ok(bursts)
}

/// Parses a bare list of burst times with no leading count.
pub fn parse_bursts(text: &str) -> Result<Vec<i64>, ScheduleError> {
    parse_tokens(text).collect()
}

fn parse_tokens(text: &str) -> impl Iterator<Item = Result<i64, ScheduleError>> + '_ {
    text.split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map_err(|_| ScheduleError::MalformedToken {
                position,
                token: token.to_string(),
            })
        })
}
