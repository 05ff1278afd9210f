//! Tabular rendering of batch reports.

use std::fmt;

use crate::scheduler::{BatchReport, PolicyComparison};

fn average(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.6}"),
        None => "undefined".to_string(),
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} schedule", self.policy)?;
        writeln!(
            f,
            "{:<10}{:>12}{:>15}{:>18}",
            "PROCESS", "BURST TIME", "WAITING TIME", "TURNAROUND TIME"
        )?;
        for record in self.rows() {
            writeln!(
                f,
                "{:<10}{:>12}{:>15}{:>18}",
                self.label(record.process),
                record.burst_time,
                record.waiting_time,
                record.turnaround_time
            )?;
        }
        writeln!(f, "Average Waiting Time = {}", average(self.kpi.avg_waiting))?;
        write!(f, "Average Turnaround Time = {}", average(self.kpi.avg_turnaround))
    }
}

impl fmt::Display for PolicyComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.fcfs)?;
        writeln!(f)?;
        writeln!(f, "{}", self.sjf)?;
        writeln!(f)?;
        write!(
            f,
            "Waiting time saved by SJF = {}",
            average(self.waiting_time_saved())
        )
    }
}
