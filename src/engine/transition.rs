//! Transition functions and the registry that names them.

use crate::core::{FunctionRef, MachineState, Step, Symbol};
use crate::engine::error::EngineError;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A pure mapping from one machine state to the next step.
///
/// Implementations must be deterministic and must not keep state between
/// calls. Any `Fn(MachineState<T>) -> Step<T>` closure qualifies.
///
/// # Example
///
/// ```rust
/// use continuation_machine::core::{MachineState, Step};
/// use continuation_machine::engine::TransitionFunction;
///
/// let countdown = |state: MachineState<u64>| -> Step<u64> {
///     let n = state.user_state()[0];
///     if n <= 1 {
///         Step::Return(vec![0])
///     } else {
///         Step::Continue(state.advance(vec![n - 1], vec![]))
///     }
/// };
///
/// let step = countdown.apply(MachineState::new("COUNTDOWN", vec![1], vec![]));
/// assert_eq!(step, Step::Return(vec![0]));
/// ```
pub trait TransitionFunction<T: Symbol>: Send + Sync {
    fn apply(&self, state: MachineState<T>) -> Step<T>;
}

impl<T, F> TransitionFunction<T> for F
where
    T: Symbol,
    F: Fn(MachineState<T>) -> Step<T> + Send + Sync,
{
    fn apply(&self, state: MachineState<T>) -> Step<T> {
        self(state)
    }
}

/// Shared handle to a registered transition function.
pub type TransitionHandle<T> = Arc<dyn TransitionFunction<T>>;

/// Name-based lookup of transition functions.
pub struct Registry<T: Symbol> {
    functions: HashMap<FunctionRef, TransitionHandle<T>>,
}

impl<T: Symbol> Registry<T> {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Register a function, replacing any previous one with the same name.
    ///
    /// Use [`crate::builder::MachineBuilder`] to have duplicates reported
    /// instead.
    pub fn insert<F>(&mut self, name: impl Into<FunctionRef>, function: F)
    where
        F: TransitionFunction<T> + 'static,
    {
        self.functions.insert(name.into(), Arc::new(function));
    }

    /// Look up a function by name.
    pub fn resolve(&self, name: &FunctionRef) -> Result<TransitionHandle<T>, EngineError> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| EngineError::UnresolvedFunction {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &FunctionRef) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&FunctionRef> {
        let mut names: Vec<&FunctionRef> = self.functions.keys().collect();
        names.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        names
    }
}

impl<T: Symbol> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Symbol> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            functions: self.functions.clone(),
        }
    }
}

impl<T: Symbol> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("functions", &self.names())
            .finish()
    }
}
