//! Configuration violations.

use thiserror::Error;

/// Problems found while validating a machine configuration
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Maximum escalation level {requested} exceeds supported level {supported}")]
    MaxLevelTooLarge { requested: u32, supported: u32 },

    #[error("No transition functions registered")]
    NoFunctions,

    #[error("Transition function registered with an empty name")]
    EmptyFunctionName,

    #[error("Transition function '{name}' registered more than once")]
    DuplicateFunction { name: String },
}
