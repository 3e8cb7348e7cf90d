//! Core data of the continuation machine.
//!
//! This module contains the pure data every round consumes and produces:
//! - Symbols, function references and disambiguation tags
//! - Machine state and the step/termination signals
//! - Deferred materialization of the next call
//! - Immutable attempt history
//!
//! Nothing here runs a transition function on its own; the scheduler in
//! [`crate::engine`] decides when a deferred call is invoked.

mod history;
mod hygiene;
mod signal;
mod state;
mod symbol;

pub use history::{AttemptOutcome, AttemptRecord, RunHistory};
pub use hygiene::{Deferred, Invocation};
pub use signal::{IterationLimit, Step, Termination};
pub use state::MachineState;
pub use symbol::{FunctionRef, Symbol, Tag};
