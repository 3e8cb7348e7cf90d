//! Deferred materialization of the next call.
//!
//! A state selected by one round is kept as plain data until the scheduler
//! explicitly invokes it. The function it names is looked up and called in a
//! single `materialize` + `invoke` step, never earlier.

use super::signal::Step;
use super::state::MachineState;
use super::symbol::{FunctionRef, Symbol, Tag};
use crate::engine::{EngineError, TransitionFunction};

/// A selected-but-not-yet-invoked call.
#[derive(Clone, Debug)]
pub struct Deferred<T: Symbol> {
    state: MachineState<T>,
}

impl<T: Symbol> Deferred<T> {
    /// Defer the first call of a run. The tag is left empty.
    pub fn new(state: MachineState<T>) -> Self {
        Self {
            state: state.clear_tag(),
        }
    }

    /// Defer a state produced by application number `round`, stamping it with
    /// a fresh tag.
    pub fn stamp(state: MachineState<T>, round: u64) -> Self {
        Self {
            state: state.with_tag(Tag::new(round)),
        }
    }

    pub fn state(&self) -> &MachineState<T> {
        &self.state
    }

    pub fn into_state(self) -> MachineState<T> {
        self.state
    }

    /// Bind the deferred state to the run's resolved function.
    ///
    /// The state must still name `expected`. The tag is cleared here, so the
    /// transition function always receives an untagged state.
    pub fn materialize<'f>(
        self,
        expected: &FunctionRef,
        function: &'f dyn TransitionFunction<T>,
    ) -> Result<Invocation<'f, T>, EngineError> {
        if self.state.next() != expected {
            return Err(EngineError::FunctionSwitched {
                expected: expected.to_string(),
                found: self.state.next().to_string(),
            });
        }

        Ok(Invocation {
            function,
            state: self.state.clear_tag(),
        })
    }
}

/// A materialized call, ready to run exactly once.
pub struct Invocation<'f, T: Symbol> {
    function: &'f dyn TransitionFunction<T>,
    state: MachineState<T>,
}

impl<T: Symbol> Invocation<'_, T> {
    pub fn invoke(self) -> Step<T> {
        debug_assert!(self.state.tag().is_none());
        self.function.apply(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn stamped_state_reaches_function_untagged() {
        let seen_tag = Arc::new(AtomicUsize::new(usize::MAX));
        let seen = Arc::clone(&seen_tag);
        let function = move |state: MachineState<u64>| -> Step<u64> {
            seen.store(state.tag().map_or(0, |_| 1), Ordering::SeqCst);
            Step::Exit
        };

        let deferred = Deferred::stamp(MachineState::new("F", vec![1u64], vec![]), 12);
        assert_eq!(deferred.state().tag(), Some(Tag::new(12)));

        let step = deferred
            .materialize(&FunctionRef::new("F"), &function)
            .unwrap()
            .invoke();

        assert_eq!(step, Step::Exit);
        assert_eq!(seen_tag.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn deferral_does_not_call_function() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let function = move |_state: MachineState<u64>| -> Step<u64> {
            counter.fetch_add(1, Ordering::SeqCst);
            Step::Exit
        };

        let deferred = Deferred::new(MachineState::<u64>::new("F", vec![], vec![]));
        let invocation = deferred
            .materialize(&FunctionRef::new("F"), &function)
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        invocation.invoke();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn materialize_rejects_other_function() {
        let function = |_state: MachineState<u64>| -> Step<u64> { Step::Exit };
        let deferred = Deferred::new(MachineState::<u64>::new("OTHER", vec![], vec![]));

        let result = deferred.materialize(&FunctionRef::new("F"), &function);

        match result {
            Err(EngineError::FunctionSwitched { expected, found }) => {
                assert_eq!(expected, "F");
                assert_eq!(found, "OTHER");
            }
            _ => panic!("Expected FunctionSwitched error"),
        }
    }
}
