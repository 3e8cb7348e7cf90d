//! Measures how many iterations a machine can reach.

use crate::builder::single_function;
use crate::consumers::ConsumerError;
use crate::core::{MachineState, Step};
use crate::engine::AbortHook;
use crate::limits::Limits;

const COUNT: &str = "COUNT";

fn count(state: MachineState<u64>) -> Step<u64> {
    let n = state.user_state().first().copied().unwrap_or(0);
    Step::Continue(state.advance(vec![n + 1], vec![]))
}

/// Run a never-terminating counter until the cap and report how far it got.
///
/// The abort hook is replaced with a soft return of the counter, so the
/// result is the number of applications the cap allows.
///
/// # Example
///
/// ```rust
/// use continuation_machine::consumers::iteration_capacity;
///
/// assert_eq!(iteration_capacity(9).unwrap(), 1023);
/// assert_eq!(iteration_capacity(0).unwrap(), 1);
/// ```
pub fn iteration_capacity(max_level: u32) -> Result<u64, ConsumerError> {
    let machine = single_function(
        COUNT,
        count,
        Limits::new(max_level),
        AbortHook::return_state(),
    )?;

    let counted = machine.run(COUNT, vec![0], vec![])?.into_result()?;
    Ok(counted.first().copied().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_matches_limits() {
        for max_level in 0..=12 {
            assert_eq!(
                iteration_capacity(max_level).unwrap(),
                Limits::new(max_level).capacity()
            );
        }
    }

    #[test]
    fn capacity_is_stable_across_runs() {
        let first = iteration_capacity(9).unwrap();
        let second = iteration_capacity(9).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unsupported_level_is_rejected() {
        assert!(matches!(
            iteration_capacity(100),
            Err(ConsumerError::Build(_))
        ));
    }
}
