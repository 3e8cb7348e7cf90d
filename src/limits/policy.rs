//! Escalation limits and the budgets derived from them.

use serde::{Deserialize, Serialize};

/// Highest escalation level used when none is configured.
pub const DEFAULT_MAX_LEVEL: u32 = 9;

/// Highest level whose cumulative budget still fits in a `u64`.
pub const MAX_SUPPORTED_LEVEL: u32 = 62;

/// Escalation cap for a machine.
///
/// `max_level` is the single source of truth; every other bound is derived
/// from it.
///
/// # Example
///
/// ```rust
/// use continuation_machine::limits::Limits;
///
/// let limits = Limits::default();
/// assert_eq!(limits.max_level, 9);
/// assert_eq!(limits.budget(3), 8);
/// assert_eq!(limits.capacity(), 1023);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_level: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
        }
    }
}

impl Limits {
    pub fn new(max_level: u32) -> Self {
        Self { max_level }
    }

    /// Load limits from JSON. Missing fields take their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use continuation_machine::limits::Limits;
    ///
    /// let limits = Limits::from_json(r#"{ "max_level": 4 }"#).unwrap();
    /// assert_eq!(limits.capacity(), 31);
    ///
    /// let defaults = Limits::from_json("{}").unwrap();
    /// assert_eq!(defaults, Limits::default());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Applications granted to the attempt at `level`.
    pub fn budget(&self, level: u32) -> u64 {
        1u64 << level
    }

    /// Applications granted by levels `0..=level` together.
    pub fn cumulative_budget(&self, level: u32) -> u64 {
        (1u64 << level) - 1 + (1u64 << level)
    }

    /// Applications a run may perform before the abort hook fires.
    pub fn capacity(&self) -> u64 {
        self.cumulative_budget(self.max_level)
    }

    /// Attempts a run needs to perform `applications` applications, or `None`
    /// if that exceeds the capacity.
    ///
    /// A run always makes at least one attempt.
    ///
    /// # Example
    ///
    /// ```rust
    /// use continuation_machine::limits::Limits;
    ///
    /// let limits = Limits::default();
    /// assert_eq!(limits.attempts_for(0), Some(1));
    /// assert_eq!(limits.attempts_for(1), Some(1));
    /// assert_eq!(limits.attempts_for(3), Some(2));
    /// assert_eq!(limits.attempts_for(4), Some(3));
    /// assert_eq!(limits.attempts_for(1023), Some(10));
    /// assert_eq!(limits.attempts_for(1024), None);
    /// ```
    pub fn attempts_for(&self, applications: u64) -> Option<u32> {
        if applications > self.capacity() {
            return None;
        }
        (0..=self.max_level)
            .find(|&level| self.cumulative_budget(level) >= applications)
            .map(|level| level + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_doubles_per_level() {
        let limits = Limits::default();
        assert_eq!(limits.budget(0), 1);
        assert_eq!(limits.budget(1), 2);
        assert_eq!(limits.budget(9), 512);
    }

    #[test]
    fn cumulative_budget_is_one_less_than_next_power() {
        let limits = Limits::default();
        for level in 0..=20 {
            assert_eq!(limits.cumulative_budget(level), (1u64 << (level + 1)) - 1);
        }
    }

    #[test]
    fn capacity_follows_max_level() {
        assert_eq!(Limits::new(0).capacity(), 1);
        assert_eq!(Limits::new(9).capacity(), 1023);
        assert_eq!(Limits::new(10).capacity(), 2047);
    }

    #[test]
    fn supported_level_does_not_overflow() {
        let limits = Limits::new(MAX_SUPPORTED_LEVEL);
        assert_eq!(limits.capacity(), u64::MAX >> 1);
    }

    #[test]
    fn attempts_for_matches_log2() {
        let limits = Limits::default();
        for n in 1..=1023u64 {
            let expected = 64 - n.leading_zeros();
            assert_eq!(limits.attempts_for(n), Some(expected), "n = {n}");
        }
    }

    #[test]
    fn limits_deserialize_with_defaults() {
        let limits: Limits = serde_json::from_str("{}").unwrap();
        assert_eq!(limits.max_level, DEFAULT_MAX_LEVEL);

        let limits = Limits::from_json(r#"{"max_level": 3}"#).unwrap();
        assert_eq!(limits.max_level, 3);
    }

    #[test]
    fn limits_reject_malformed_json() {
        assert!(Limits::from_json(r#"{"max_level": "nine"}"#).is_err());
    }
}
