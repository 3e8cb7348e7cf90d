//! Step and termination signals.
//!
//! A transition function answers each round with a [`Step`]. A run ends with
//! a [`Termination`]. Only an abort hook can produce
//! [`Termination::AbortIterationLimit`]; `Step` has no variant for it.

use super::state::MachineState;
use super::symbol::{FunctionRef, Symbol};
use crate::engine::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Output of a single transition-function application.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum Step<T: Symbol> {
    /// Keep going with this state
    Continue(MachineState<T>),

    /// Stop; the run produces nothing
    Exit,

    /// Stop; the run produces exactly this value
    Return(Vec<T>),
}

impl<T: Symbol> Step<T> {
    /// Shorthand for `Step::Continue(MachineState::new(..))`.
    pub fn next(
        function: impl Into<FunctionRef>,
        user_state: Vec<T>,
        remaining_args: Vec<T>,
    ) -> Self {
        Step::Continue(MachineState::new(function, user_state, remaining_args))
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Step::Continue(_))
    }
}

/// Diagnostic for a run that exhausted every escalation level.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct IterationLimit {
    /// Highest escalation level that was run
    pub max_level: u32,
    /// Number of attempts made (`max_level + 1`)
    pub attempts: u32,
    /// Total transition-function applications performed
    pub applications: u64,
}

impl Display for IterationLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "iteration limit reached: escalation exhausted level {} after {} attempts and {} applications",
            self.max_level, self.attempts, self.applications
        )
    }
}

/// How a run ended.
///
/// # Example
///
/// ```rust
/// use continuation_machine::core::Termination;
///
/// let done: Termination<u64> = Termination::Return(vec![1, 2, 3]);
/// assert_eq!(done.value(), &[1, 2, 3]);
/// assert_eq!(done.to_string(), "1 2 3");
///
/// let exit: Termination<u64> = Termination::Exit;
/// assert!(exit.value().is_empty());
/// assert_eq!(exit.to_string(), "");
/// ```
#[must_use]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum Termination<T: Symbol> {
    Exit,
    Return(Vec<T>),
    AbortIterationLimit(IterationLimit),
}

impl<T: Symbol> Termination<T> {
    /// The produced value. Empty for `Exit` and for an abort.
    pub fn value(&self) -> &[T] {
        match self {
            Self::Return(value) => value.as_slice(),
            Self::Exit | Self::AbortIterationLimit(_) => &[],
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }

    pub fn is_return(&self) -> bool {
        matches!(self, Self::Return(_))
    }

    pub fn is_abort(&self) -> bool {
        matches!(self, Self::AbortIterationLimit(_))
    }

    /// Collapse into a `Result`, turning an abort into an error.
    ///
    /// `Exit` becomes an empty value.
    pub fn into_result(self) -> Result<Vec<T>, EngineError> {
        match self {
            Self::Exit => Ok(Vec::new()),
            Self::Return(value) => Ok(value),
            Self::AbortIterationLimit(limit) => Err(EngineError::IterationLimitReached(limit)),
        }
    }
}

impl<T: Symbol + Display> Display for Termination<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exit => Ok(()),
            Self::Return(value) => {
                for (i, symbol) in value.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{symbol}")?;
                }
                Ok(())
            }
            Self::AbortIterationLimit(limit) => write!(f, "{limit}"),
        }
    }
}
