//! Run reports.

use crate::core::{FunctionRef, RunHistory, Symbol, Termination};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Outcome of one run together with its escalation history.
#[must_use]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RunReport<T: Symbol> {
    /// Identifier used to correlate the run's log events
    pub run_id: Uuid,
    pub function: FunctionRef,
    pub termination: Termination<T>,
    pub history: RunHistory,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl<T: Symbol> RunReport<T> {
    /// Number of attempts made.
    pub fn attempts(&self) -> usize {
        self.history.attempts().len()
    }

    /// Total transition-function applications.
    pub fn applications(&self) -> u64 {
        self.history.applications()
    }

    /// Wall-clock time of the run.
    pub fn duration(&self) -> Duration {
        self.finished_at
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn into_termination(self) -> Termination<T> {
        self.termination
    }
}
