//! The abort path taken when escalation runs out of levels.

use crate::core::{IterationLimit, MachineState, Symbol, Termination};
use crate::engine::error::EngineError;
use std::fmt;
use std::sync::Arc;

/// Everything known at the moment the cap is reached.
#[derive(Clone, Debug)]
pub struct AbortContext<T: Symbol> {
    pub limit: IterationLimit,
    /// The state the next application would have consumed
    pub state: MachineState<T>,
}

/// Caller-supplied replacement for the default abort behaviour.
pub type AbortFn<T> = Arc<dyn Fn(AbortContext<T>) -> Termination<T> + Send + Sync>;

/// Strategy invoked when a run exhausts its highest escalation level.
///
/// The hook is fixed when the machine is built and cannot change mid-run.
///
/// # Example
///
/// ```rust
/// use continuation_machine::core::Termination;
/// use continuation_machine::engine::AbortHook;
///
/// // Default: fail the run with `EngineError::IterationLimitReached`.
/// let hook: AbortHook<u64> = AbortHook::default();
/// assert!(matches!(hook, AbortHook::Fail));
///
/// // Soft return of the partial state, for probing the reachable count.
/// let probe: AbortHook<u64> = AbortHook::return_state();
///
/// // Keep the abort as a value instead of an error.
/// let quiet: AbortHook<u64> =
///     AbortHook::custom(|ctx| Termination::AbortIterationLimit(ctx.limit));
///
/// // Anything else.
/// let custom: AbortHook<u64> = AbortHook::custom(|_ctx| Termination::Exit);
/// ```
pub enum AbortHook<T: Symbol> {
    /// Log the diagnostic and fail the run with
    /// `EngineError::IterationLimitReached`
    Fail,

    /// Halt the run by panicking with the diagnostic as message
    Panic,

    /// Decide the termination from the abort context
    Custom(AbortFn<T>),
}

impl<T: Symbol> AbortHook<T> {
    pub fn custom<F>(hook: F) -> Self
    where
        F: Fn(AbortContext<T>) -> Termination<T> + Send + Sync + 'static,
    {
        AbortHook::Custom(Arc::new(hook))
    }

    /// End with `Return` of whatever user state the run has built so far.
    pub fn return_state() -> Self {
        Self::custom(|ctx: AbortContext<T>| {
            let (_, user_state, _) = ctx.state.into_parts();
            Termination::Return(user_state)
        })
    }

    /// Run the hook.
    pub(crate) fn fire(&self, ctx: AbortContext<T>) -> Result<Termination<T>, EngineError> {
        match self {
            AbortHook::Fail => {
                tracing::error!(
                    max_level = ctx.limit.max_level,
                    attempts = ctx.limit.attempts,
                    applications = ctx.limit.applications,
                    function = %ctx.state.next(),
                    "{}",
                    ctx.limit
                );
                Err(EngineError::IterationLimitReached(ctx.limit))
            }
            AbortHook::Panic => panic!("{}", ctx.limit),
            AbortHook::Custom(hook) => Ok(hook(ctx)),
        }
    }
}

impl<T: Symbol> Default for AbortHook<T> {
    fn default() -> Self {
        AbortHook::Fail
    }
}

impl<T: Symbol> Clone for AbortHook<T> {
    fn clone(&self) -> Self {
        match self {
            AbortHook::Fail => AbortHook::Fail,
            AbortHook::Panic => AbortHook::Panic,
            AbortHook::Custom(hook) => AbortHook::Custom(Arc::clone(hook)),
        }
    }
}

impl<T: Symbol> fmt::Debug for AbortHook<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortHook::Fail => f.write_str("Fail"),
            AbortHook::Panic => f.write_str("Panic"),
            AbortHook::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn context() -> AbortContext<u64> {
        AbortContext {
            limit: IterationLimit {
                max_level: 2,
                attempts: 3,
                applications: 7,
            },
            state: MachineState::new("COUNT", vec![7], vec![]),
        }
    }

    #[test]
    fn default_hook_fails_with_iteration_limit() {
        let hook: AbortHook<u64> = AbortHook::default();

        match hook.fire(context()) {
            Err(EngineError::IterationLimitReached(limit)) => {
                assert_eq!(limit.applications, 7);
                assert_eq!(limit.max_level, 2);
            }
            other => panic!("Expected iteration limit error, got {other:?}"),
        }
    }

    #[test]
    fn custom_hook_may_keep_abort_as_value() {
        let hook: AbortHook<u64> =
            AbortHook::custom(|ctx| Termination::AbortIterationLimit(ctx.limit));

        let termination = hook.fire(context()).unwrap();
        assert!(termination.is_abort());
    }

    #[test]
    fn panic_hook_halts_with_diagnostic() {
        let hook: AbortHook<u64> = AbortHook::Panic;
        let result = catch_unwind(AssertUnwindSafe(|| hook.fire(context())));

        let payload = result.unwrap_err();
        let message = payload
            .downcast_ref::<String>()
            .cloned()
            .unwrap_or_default();
        assert!(message.starts_with("iteration limit reached"));
    }

    #[test]
    fn return_state_hook_returns_partial_state() {
        let hook: AbortHook<u64> = AbortHook::return_state();
        assert_eq!(hook.fire(context()), Ok(Termination::Return(vec![7])));
    }

    #[test]
    fn custom_hook_sees_context() {
        let hook: AbortHook<u64> =
            AbortHook::custom(|ctx| Termination::Return(vec![ctx.limit.applications]));
        assert_eq!(hook.fire(context()), Ok(Termination::Return(vec![7])));
    }

    #[test]
    fn cloned_hook_keeps_strategy() {
        let hook: AbortHook<u64> = AbortHook::return_state();
        let cloned = hook.clone();
        assert_eq!(cloned.fire(context()), Ok(Termination::Return(vec![7])));
        assert_eq!(format!("{:?}", cloned), "Custom(..)");
    }
}
