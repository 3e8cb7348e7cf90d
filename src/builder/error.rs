//! Build errors for continuation machines.

use crate::limits::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(
        "Invalid machine configuration ({} violations): {}",
        .violations.len(),
        render(.violations)
    )]
    InvalidConfiguration { violations: Vec<ConfigViolation> },
}

impl BuildError {
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            BuildError::InvalidConfiguration { violations } => violations,
        }
    }
}

fn render(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
