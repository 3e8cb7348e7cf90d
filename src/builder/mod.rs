//! Builder API for constructing continuation machines.
//!
//! Limits and the abort hook are chosen here, before any run starts. A built
//! machine cannot be reconfigured.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::MachineBuilder;

use crate::core::{FunctionRef, Symbol};
use crate::engine::{AbortHook, ContinuationMachine, TransitionFunction};
use crate::limits::Limits;

/// Build a machine that knows exactly one transition function.
///
/// # Example
///
/// ```
/// use continuation_machine::builder::single_function;
/// use continuation_machine::core::{MachineState, Step, Termination};
/// use continuation_machine::engine::AbortHook;
/// use continuation_machine::limits::Limits;
///
/// let machine = single_function(
///     "HEAD",
///     |state: MachineState<u64>| -> Step<u64> {
///         Step::Return(state.remaining_args().iter().take(1).copied().collect())
///     },
///     Limits::default(),
///     AbortHook::default(),
/// )
/// .unwrap();
///
/// let result = machine.run("HEAD", vec![], vec![7, 8, 9]).unwrap();
/// assert_eq!(result, Termination::Return(vec![7]));
/// ```
pub fn single_function<T, F>(
    name: impl Into<FunctionRef>,
    function: F,
    limits: Limits,
    abort_hook: AbortHook<T>,
) -> Result<ContinuationMachine<T>, BuildError>
where
    T: Symbol,
    F: TransitionFunction<T> + 'static,
{
    MachineBuilder::new()
        .limits(limits)
        .on_abort(abort_hook)
        .register(name, function)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MachineState, Step, Termination};

    #[test]
    fn single_function_builds_and_runs() {
        let machine = single_function(
            "EXIT",
            |_state: MachineState<u64>| -> Step<u64> { Step::Exit },
            Limits::new(0),
            AbortHook::default(),
        )
        .unwrap();

        assert_eq!(machine.limits().max_level, 0);
        assert_eq!(machine.run("EXIT", vec![1], vec![]).unwrap(), Termination::Exit);
    }

    #[test]
    fn single_function_validates_limits() {
        let result = single_function(
            "EXIT",
            |_state: MachineState<u64>| -> Step<u64> { Step::Exit },
            Limits::new(63),
            AbortHook::default(),
        );

        assert!(result.is_err());
    }
}
