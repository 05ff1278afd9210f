//! CPU scheduling domain models.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Process` | Input index + burst time, read-only after input |
//! | `DispatchSequence` | Execution order, a permutation of process indices |
//! | `TimingRecord` | Waiting/turnaround time of one process |

mod process;
mod timing;

pub use process::{DispatchSequence, Process};
pub use timing::TimingRecord;
