//! Sequence traversal on top of the continuation machine.

use crate::builder::single_function;
use crate::consumers::ConsumerError;
use crate::core::{MachineState, Step, Symbol, Termination};
use crate::engine::AbortHook;
use crate::limits::Limits;

/// Name under which the traversal is registered.
pub const FOREACH_ITERATE: &str = "FOREACH_ITERATE";

/// Transition function that applies `f` to each argument in order.
///
/// Each round takes the head of the remaining arguments and appends `f(head)`
/// to the user state. The accumulated state is returned once no arguments
/// remain; an empty argument list returns an empty value.
///
/// # Example
///
/// ```rust
/// use continuation_machine::builder::MachineBuilder;
/// use continuation_machine::consumers::{for_each_iterate, FOREACH_ITERATE};
///
/// let machine = MachineBuilder::<u64>::new()
///     .register(FOREACH_ITERATE, for_each_iterate(|n: &u64| vec![n * 10]))
///     .build()
///     .unwrap();
///
/// let result = machine.run(FOREACH_ITERATE, vec![], vec![1, 2, 3]).unwrap();
/// assert_eq!(result.value(), &[10, 20, 30]);
/// ```
pub fn for_each_iterate<T, F>(f: F) -> impl Fn(MachineState<T>) -> Step<T> + Send + Sync + 'static
where
    T: Symbol,
    F: Fn(&T) -> Vec<T> + Send + Sync + 'static,
{
    move |state: MachineState<T>| {
        let (next, mut acc, args) = state.into_parts();
        let mut args = args.into_iter();

        let Some(head) = args.next() else {
            return Step::Return(acc);
        };
        acc.extend(f(&head));

        let rest: Vec<T> = args.collect();
        if rest.is_empty() {
            Step::Return(acc)
        } else {
            Step::Continue(MachineState::new(next, acc, rest))
        }
    }
}

/// Apply `f` to every item, collecting the results in order.
///
/// # Example
///
/// ```rust
/// use continuation_machine::consumers::for_each;
///
/// let result = for_each(vec![1u64, 2, 3], |n| vec![*n]).unwrap();
/// assert_eq!(result.to_string(), "1 2 3");
/// ```
pub fn for_each<T, F>(items: Vec<T>, f: F) -> Result<Termination<T>, ConsumerError>
where
    T: Symbol,
    F: Fn(&T) -> Vec<T> + Send + Sync + 'static,
{
    for_each_with(items, f, Limits::default())
}

/// [`for_each`] with explicit limits.
pub fn for_each_with<T, F>(
    items: Vec<T>,
    f: F,
    limits: Limits,
) -> Result<Termination<T>, ConsumerError>
where
    T: Symbol,
    F: Fn(&T) -> Vec<T> + Send + Sync + 'static,
{
    let machine = single_function(
        FOREACH_ITERATE,
        for_each_iterate(f),
        limits,
        AbortHook::default(),
    )?;
    Ok(machine.run(FOREACH_ITERATE, Vec::new(), items)?)
}

/// Join all arguments into one value, in order.
///
/// # Example
///
/// ```rust
/// use continuation_machine::consumers::concat_args;
///
/// let result = concat_args(vec![1u64, 2, 3, 4, 5]).unwrap();
/// assert_eq!(result.to_string(), "1 2 3 4 5");
/// ```
pub fn concat_args<T: Symbol>(items: Vec<T>) -> Result<Termination<T>, ConsumerError> {
    for_each(items, |item: &T| vec![item.clone()])
}
