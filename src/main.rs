//! Command-line entry: reads a batch from stdin and prints the schedule.
//!
//! ```text
//! u-cpu-sched [fcfs|sjf|both]
//! ```
//!
//! Input: process count, then that many burst times. Set `RUST_LOG=debug`
//! to trace dispatch and timing.

use std::io::Read;

use anyhow::{Context, Result};
use tracing_subscriber::filter::EnvFilter;

use u_cpu_sched::input::parse_batch;
use u_cpu_sched::{compare_policies, BatchScheduler, DispatchPolicy};

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "both".to_string());

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read burst times from stdin")?;
    let bursts = parse_batch(&text)?;

    if mode.eq_ignore_ascii_case("both") {
        println!("{}", compare_policies(&bursts)?);
    } else {
        let policy: DispatchPolicy = mode.parse()?;
        println!("{}", BatchScheduler::with_policy(policy).schedule(&bursts)?);
    }

    Ok(())
}
