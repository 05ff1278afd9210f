//! Configuration for batch scheduling runs.

use serde::{Deserialize, Serialize};

use crate::dispatching::DispatchPolicy;

/// Order in which per-process rows are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOrder {
    /// Input order for FCFS, dispatch order for SJF.
    #[default]
    PolicyDefault,
    /// Original submission order.
    Input,
    /// Execution order.
    Dispatch,
}

impl RowOrder {
    /// Resolves `PolicyDefault` against a concrete policy.
    pub fn resolve(self, policy: DispatchPolicy) -> RowOrder {
        match (self, policy) {
            (RowOrder::PolicyDefault, DispatchPolicy::Fcfs) => RowOrder::Input,
            (RowOrder::PolicyDefault, DispatchPolicy::Sjf) => RowOrder::Dispatch,
            (order, _) => order,
        }
    }
}

/// Settings for a `BatchScheduler` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Dispatch policy.
    pub policy: DispatchPolicy,
    /// Row order of the per-process report.
    pub row_order: RowOrder,
    /// Prefix of process labels ("P" → "P0", "P1", ...).
    pub label_prefix: String,
    /// Number assigned to the first process in labels.
    pub label_base: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            policy: DispatchPolicy::Fcfs,
            row_order: RowOrder::PolicyDefault,
            label_prefix: "P".to_string(),
            label_base: 0,
        }
    }
}

impl BatchConfig {
    /// Creates a configuration for the given policy with default reporting.
    pub fn new(policy: DispatchPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Sets the dispatch policy.
    pub fn with_policy(mut self, policy: DispatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the report row order.
    pub fn with_row_order(mut self, row_order: RowOrder) -> Self {
        self.row_order = row_order;
        self
    }

    /// Sets the label prefix and base number.
    pub fn with_labels(mut self, prefix: impl Into<String>, base: usize) -> Self {
        self.label_prefix = prefix.into();
        self.label_base = base;
        self
    }

    /// Label of a process by original index.
    pub fn label(&self, process: usize) -> String {
        format!("{}{}", self.label_prefix, process + self.label_base)
    }
}
