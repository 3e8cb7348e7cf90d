//! Ready-made transition functions built on the engine.
//!
//! These use the engine exactly like any caller would: they register a
//! transition function, build a machine and run it.

mod foreach;
mod probe;

pub use foreach::{concat_args, for_each, for_each_iterate, for_each_with, FOREACH_ITERATE};
pub use probe::iteration_capacity;

use crate::builder::BuildError;
use crate::engine::EngineError;
use thiserror::Error;

/// Errors from the convenience consumers.
#[derive(Debug, Error)]
pub enum ConsumerError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
