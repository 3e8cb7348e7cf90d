//! The escalation scheduler.

use crate::core::{
    AttemptOutcome, AttemptRecord, Deferred, FunctionRef, IterationLimit, MachineState,
    RunHistory, Step, Symbol, Termination,
};
use crate::engine::abort::{AbortContext, AbortHook};
use crate::engine::error::EngineError;
use crate::engine::report::RunReport;
use crate::engine::transition::Registry;
use crate::limits::Limits;
use chrono::Utc;
use uuid::Uuid;

/// Runs a transition function repeatedly in attempts of doubling budget.
///
/// Attempt `i` may apply the function `2^i` times. A `Return` or `Exit`
/// ends the run at once; the rest of that attempt's budget is discarded. An
/// attempt that uses its whole budget hands its last state to attempt
/// `i + 1`. Once level `max_level` is exhausted the abort hook decides the
/// outcome.
///
/// Machines are built with [`crate::builder::MachineBuilder`] and are
/// immutable afterwards. Runs share nothing; every call starts at level 0.
pub struct ContinuationMachine<T: Symbol> {
    registry: Registry<T>,
    limits: Limits,
    abort_hook: AbortHook<T>,
}

impl<T: Symbol> ContinuationMachine<T> {
    pub(crate) fn new(registry: Registry<T>, limits: Limits, abort_hook: AbortHook<T>) -> Self {
        Self {
            registry,
            limits,
            abort_hook,
        }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn registry(&self) -> &Registry<T> {
        &self.registry
    }

    pub fn abort_hook(&self) -> &AbortHook<T> {
        &self.abort_hook
    }

    /// Run `function` from the given state until it terminates.
    ///
    /// Returns `Err` for caller errors (an unregistered function name, or a
    /// state that switches to another function mid-run) and, with the default
    /// abort hook, when the iteration cap is reached.
    pub fn run(
        &self,
        function: impl Into<FunctionRef>,
        initial_state: Vec<T>,
        initial_args: Vec<T>,
    ) -> Result<Termination<T>, EngineError> {
        self.run_with_report(function, initial_state, initial_args)
            .map(RunReport::into_termination)
    }

    /// Like [`run`](Self::run), also returning the attempt history.
    pub fn run_with_report(
        &self,
        function: impl Into<FunctionRef>,
        initial_state: Vec<T>,
        initial_args: Vec<T>,
    ) -> Result<RunReport<T>, EngineError> {
        let function = function.into();
        let handle = self.registry.resolve(&function)?;

        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let span = tracing::debug_span!("continuation_run", %run_id, function = %function);
        let _enter = span.enter();

        let max_level = self.limits.max_level;
        let mut history = RunHistory::new();
        let mut applications: u64 = 0;
        let mut pending = Deferred::new(MachineState::new(
            function.clone(),
            initial_state,
            initial_args,
        ));

        for level in 0..=max_level {
            let budget = self.limits.budget(level);
            let mut used: u64 = 0;

            while used < budget {
                let step = pending.materialize(&function, handle.as_ref())?.invoke();
                used += 1;
                applications += 1;
                tracing::trace!(escalation_level = level, applications, "transition applied");

                let (termination, outcome) = match step {
                    Step::Continue(next) => {
                        pending = Deferred::stamp(next, applications);
                        continue;
                    }
                    Step::Exit => (Termination::Exit, AttemptOutcome::Exited),
                    Step::Return(value) => (Termination::Return(value), AttemptOutcome::Returned),
                };

                history = history.record(AttemptRecord {
                    level,
                    budget,
                    applications: used,
                    outcome,
                    finished_at: Utc::now(),
                });
                tracing::info!(
                    attempts = history.attempts().len(),
                    applications,
                    ?outcome,
                    "run terminated"
                );

                return Ok(RunReport {
                    run_id,
                    function,
                    termination,
                    history,
                    started_at,
                    finished_at: Utc::now(),
                });
            }

            let outcome = if level < max_level {
                AttemptOutcome::Escalated
            } else {
                AttemptOutcome::Exhausted
            };
            history = history.record(AttemptRecord {
                level,
                budget,
                applications: used,
                outcome,
                finished_at: Utc::now(),
            });
            tracing::debug!(
                escalation_level = level,
                budget,
                applications,
                ?outcome,
                "attempt used its whole budget"
            );
        }

        let limit = IterationLimit {
            max_level,
            attempts: max_level + 1,
            applications,
        };
        let termination = self.abort_hook.fire(AbortContext {
            limit,
            state: pending.into_state().clear_tag(),
        })?;

        Ok(RunReport {
            run_id,
            function,
            termination,
            history,
            started_at,
            finished_at: Utc::now(),
        })
    }
}
