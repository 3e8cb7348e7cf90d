//! Attempt history for a single run.
//!
//! Records the observable escalation boundaries: which level each attempt
//! ran at, the budget it was granted, how much of it was used, and why it
//! ended. The history is immutable; `record` returns a new one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Why an attempt ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum AttemptOutcome {
    /// Budget used up without a signal; the run moved to the next level
    Escalated,
    /// An application produced `Exit`
    Exited,
    /// An application produced `Return`
    Returned,
    /// Budget used up at the highest level; the abort hook fired
    Exhausted,
}

impl AttemptOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Exited | Self::Returned)
    }
}

/// Record of one attempt.
///
/// # Example
///
/// ```rust
/// use continuation_machine::core::{AttemptOutcome, AttemptRecord};
/// use chrono::Utc;
///
/// let record = AttemptRecord {
///     level: 2,
///     budget: 4,
///     applications: 3,
///     outcome: AttemptOutcome::Returned,
///     finished_at: Utc::now(),
/// };
/// assert!(record.short_circuited());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Escalation level of the attempt
    pub level: u32,
    /// Applications granted (`2^level`)
    pub budget: u64,
    /// Applications actually performed
    pub applications: u64,
    pub outcome: AttemptOutcome,
    pub finished_at: DateTime<Utc>,
}

impl AttemptRecord {
    /// True when a signal ended the attempt before its budget ran out.
    pub fn short_circuited(&self) -> bool {
        self.applications < self.budget
    }
}

/// Ordered attempts of a run.
///
/// # Example
///
/// ```rust
/// use continuation_machine::core::{AttemptOutcome, AttemptRecord, RunHistory};
/// use chrono::Utc;
///
/// let history = RunHistory::new();
/// let history = history.record(AttemptRecord {
///     level: 0,
///     budget: 1,
///     applications: 1,
///     outcome: AttemptOutcome::Escalated,
///     finished_at: Utc::now(),
/// });
/// let history = history.record(AttemptRecord {
///     level: 1,
///     budget: 2,
///     applications: 1,
///     outcome: AttemptOutcome::Returned,
///     finished_at: Utc::now(),
/// });
///
/// assert_eq!(history.attempts().len(), 2);
/// assert_eq!(history.applications(), 2);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RunHistory {
    attempts: Vec<AttemptRecord>,
}

impl RunHistory {
    pub fn new() -> Self {
        Self {
            attempts: Vec::new(),
        }
    }

    /// Record an attempt, returning a new history.
    ///
    /// A run records at most one attempt per escalation level, so a history
    /// never holds more than `MAX_SUPPORTED_LEVEL + 1` entries.
    pub fn record(&self, attempt: AttemptRecord) -> Self {
        let mut attempts = self.attempts.clone();
        attempts.push(attempt);
        Self { attempts }
    }

    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    pub fn last(&self) -> Option<&AttemptRecord> {
        self.attempts.last()
    }

    /// Total applications across all attempts.
    pub fn applications(&self) -> u64 {
        self.attempts.iter().map(|a| a.applications).sum()
    }

    /// Highest level reached, if any attempt ran.
    pub fn highest_level(&self) -> Option<u32> {
        self.attempts.iter().map(|a| a.level).max()
    }

    /// Time between the first and last attempt finishing.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.attempts.first(), self.attempts.last()) {
            last.finished_at
                .signed_duration_since(first.finished_at)
                .to_std()
                .ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(level: u32, applications: u64, outcome: AttemptOutcome) -> AttemptRecord {
        AttemptRecord {
            level,
            budget: 1 << level,
            applications,
            outcome,
            finished_at: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = RunHistory::new();
        assert!(history.attempts().is_empty());
        assert_eq!(history.applications(), 0);
        assert!(history.highest_level().is_none());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = RunHistory::new();
        let new_history = history.record(attempt(0, 1, AttemptOutcome::Escalated));

        assert_eq!(history.attempts().len(), 0);
        assert_eq!(new_history.attempts().len(), 1);
    }

    #[test]
    fn applications_sum_across_attempts() {
        let history = RunHistory::new()
            .record(attempt(0, 1, AttemptOutcome::Escalated))
            .record(attempt(1, 2, AttemptOutcome::Escalated))
            .record(attempt(2, 3, AttemptOutcome::Returned));

        assert_eq!(history.applications(), 6);
        assert_eq!(history.highest_level(), Some(2));
        assert_eq!(history.last().map(|a| a.outcome), Some(AttemptOutcome::Returned));
    }

    #[test]
    fn short_circuit_is_detected() {
        assert!(attempt(2, 3, AttemptOutcome::Returned).short_circuited());
        assert!(!attempt(2, 4, AttemptOutcome::Escalated).short_circuited());
    }

    #[test]
    fn terminal_outcomes() {
        assert!(AttemptOutcome::Exited.is_terminal());
        assert!(AttemptOutcome::Returned.is_terminal());
        assert!(!AttemptOutcome::Escalated.is_terminal());
        assert!(!AttemptOutcome::Exhausted.is_terminal());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = RunHistory::new().record(attempt(0, 1, AttemptOutcome::Exited));
        let json = serde_json::to_string(&history).unwrap();
        let back: RunHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back.attempts().len(), 1);
        assert_eq!(back.attempts()[0].outcome, AttemptOutcome::Exited);
    }
}
