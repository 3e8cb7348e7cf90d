//! Builder for constructing continuation machines.

use crate::builder::error::BuildError;
use crate::core::{FunctionRef, Symbol};
use crate::engine::{AbortHook, ContinuationMachine, Registry, TransitionFunction};
use crate::limits::{validate, Limits};
use stillwater::validation::Validation;

/// Builder for constructing continuation machines with a fluent API.
///
/// Problems are collected, not raised one at a time: `build` reports every
/// violation found.
pub struct MachineBuilder<T: Symbol> {
    limits: Limits,
    abort_hook: AbortHook<T>,
    registry: Registry<T>,
    names: Vec<FunctionRef>,
}

impl<T: Symbol> MachineBuilder<T> {
    /// Create a new builder with default limits and the default abort hook.
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
            abort_hook: AbortHook::default(),
            registry: Registry::new(),
            names: Vec::new(),
        }
    }

    /// Set the highest escalation level.
    pub fn max_level(mut self, max_level: u32) -> Self {
        self.limits.max_level = max_level;
        self
    }

    /// Replace all limits at once, e.g. with values loaded from config.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the strategy used when escalation runs out of levels.
    pub fn on_abort(mut self, hook: AbortHook<T>) -> Self {
        self.abort_hook = hook;
        self
    }

    /// Register a transition function under `name`.
    pub fn register<F>(mut self, name: impl Into<FunctionRef>, function: F) -> Self
    where
        F: TransitionFunction<T> + 'static,
    {
        let name = name.into();
        if !self.names.contains(&name) {
            self.registry.insert(name.clone(), function);
        }
        self.names.push(name);
        self
    }

    /// Build the machine.
    /// Returns an error listing every configuration violation.
    pub fn build(self) -> Result<ContinuationMachine<T>, BuildError> {
        match validate(&self.limits, &self.names) {
            Validation::Success(_) => {
                tracing::debug!(
                    max_level = self.limits.max_level,
                    functions = self.registry.len(),
                    "continuation machine built"
                );
                Ok(ContinuationMachine::new(
                    self.registry,
                    self.limits,
                    self.abort_hook,
                ))
            }
            Validation::Failure(errors) => Err(BuildError::InvalidConfiguration {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }
}

impl<T: Symbol> Default for MachineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MachineState, Step, Termination};
    use crate::engine::EngineError;
    use crate::limits::ConfigViolation;

    fn exit(_state: MachineState<u64>) -> Step<u64> {
        Step::Exit
    }

    fn forever(state: MachineState<u64>) -> Step<u64> {
        Step::Continue(state)
    }

    #[test]
    fn builder_requires_functions() {
        let result = MachineBuilder::<u64>::new().build();

        match result {
            Err(error) => assert_eq!(error.violations(), &[ConfigViolation::NoFunctions]),
            Ok(_) => panic!("Expected build failure"),
        }
    }

    #[test]
    fn builder_reports_all_violations() {
        let result = MachineBuilder::<u64>::new()
            .max_level(99)
            .register("F", exit)
            .register("F", exit)
            .register("", exit)
            .build();

        let violations = match result {
            Err(error) => error.violations().to_vec(),
            Ok(_) => panic!("Expected build failure"),
        };
        assert_eq!(violations.len(), 3);
        assert!(violations.contains(&ConfigViolation::DuplicateFunction {
            name: "F".to_string()
        }));
        assert!(violations.contains(&ConfigViolation::EmptyFunctionName));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = MachineBuilder::<u64>::new()
            .max_level(4)
            .register("EXIT", exit)
            .build()
            .unwrap();

        assert_eq!(machine.limits().max_level, 4);
        assert!(machine.registry().contains(&FunctionRef::new("EXIT")));
        assert_eq!(
            machine.run("EXIT", vec![], vec![]).unwrap(),
            Termination::Exit
        );
    }

    #[test]
    fn limits_from_config_are_applied() {
        let limits = Limits::from_json(r#"{"max_level": 2}"#).unwrap();
        let machine = MachineBuilder::<u64>::new()
            .limits(limits)
            .register("FOREVER", forever)
            .build()
            .unwrap();

        match machine.run("FOREVER", vec![], vec![]) {
            Err(EngineError::IterationLimitReached(limit)) => {
                assert_eq!(limit.max_level, 2);
                assert_eq!(limit.applications, 7);
            }
            other => panic!("Expected iteration limit error, got {other:?}"),
        }
    }

    #[test]
    fn abort_hook_is_applied() {
        let machine = MachineBuilder::<u64>::new()
            .max_level(1)
            .on_abort(AbortHook::custom(|ctx| {
                Termination::Return(vec![ctx.limit.applications])
            }))
            .register("FOREVER", forever)
            .build()
            .unwrap();

        assert_eq!(
            machine.run("FOREVER", vec![], vec![]).unwrap(),
            Termination::Return(vec![3])
        );
    }
}
