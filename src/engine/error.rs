//! Engine error types.

use crate::core::IterationLimit;
use thiserror::Error;

/// Errors that can end a run.
///
/// Only `IterationLimitReached` comes from the engine itself: the default
/// abort hook fails the run with it, and
/// [`crate::core::Termination::into_result`] maps an abort to it. The other
/// variants are caller errors detected while dispatching.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    #[error("Transition function '{name}' is not registered")]
    UnresolvedFunction { name: String },

    #[error("Transition function switched from '{expected}' to '{found}' mid-run")]
    FunctionSwitched { expected: String, found: String },

    #[error("{0}")]
    IterationLimitReached(IterationLimit),
}
