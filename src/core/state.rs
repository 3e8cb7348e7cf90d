//! Machine state carried between rounds.
//!
//! A `MachineState` is created once per round, consumed exactly once by the
//! transition function, and discarded. Transition functions build a fresh
//! state for the next round instead of mutating the one they were given.

use super::symbol::{FunctionRef, Symbol, Tag};
use serde::{Deserialize, Serialize};

/// The unit of information passed from one round to the next.
///
/// # Example
///
/// ```rust
/// use continuation_machine::core::MachineState;
///
/// let state = MachineState::new("COUNT", vec![3u64], vec![]);
/// assert_eq!(state.next().as_str(), "COUNT");
/// assert_eq!(state.user_state(), &[3]);
/// assert!(state.tag().is_none());
///
/// let (next, user_state, args) = state.into_parts();
/// assert_eq!(next.as_str(), "COUNT");
/// assert_eq!(user_state, vec![3]);
/// assert!(args.is_empty());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineState<T: Symbol> {
    tag: Option<Tag>,
    next: FunctionRef,
    user_state: Vec<T>,
    remaining_args: Vec<T>,
}

impl<T: Symbol> MachineState<T> {
    /// Create a state with an empty tag.
    pub fn new(next: impl Into<FunctionRef>, user_state: Vec<T>, remaining_args: Vec<T>) -> Self {
        Self {
            tag: None,
            next: next.into(),
            user_state,
            remaining_args,
        }
    }

    /// Build the successor state, keeping the same function reference.
    ///
    /// The current state is consumed; the tag never carries over.
    ///
    /// # Example
    ///
    /// ```rust
    /// use continuation_machine::core::MachineState;
    ///
    /// let state = MachineState::new("STEP", vec![1u64], vec![2, 3]);
    /// let next = state.advance(vec![1, 2], vec![3]);
    ///
    /// assert_eq!(next.next().as_str(), "STEP");
    /// assert_eq!(next.user_state(), &[1, 2]);
    /// assert_eq!(next.remaining_args(), &[3]);
    /// ```
    pub fn advance(self, user_state: Vec<T>, remaining_args: Vec<T>) -> Self {
        Self::new(self.next, user_state, remaining_args)
    }

    pub fn tag(&self) -> Option<Tag> {
        self.tag
    }

    /// The function to invoke on this state.
    pub fn next(&self) -> &FunctionRef {
        &self.next
    }

    pub fn user_state(&self) -> &[T] {
        &self.user_state
    }

    pub fn remaining_args(&self) -> &[T] {
        &self.remaining_args
    }

    /// Split into `(next, user_state, remaining_args)`, dropping the tag.
    pub fn into_parts(self) -> (FunctionRef, Vec<T>, Vec<T>) {
        (self.next, self.user_state, self.remaining_args)
    }

    pub(crate) fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub(crate) fn clear_tag(mut self) -> Self {
        self.tag = None;
        self
    }
}
