//! Symbols, function references and the disambiguation tag.
//!
//! Everything in this module is inert data. Holding a [`FunctionRef`] never
//! resolves or invokes the function it names.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Element type carried in a machine's user state and argument list.
///
/// The engine never inspects symbols; it only moves them between rounds.
/// Any cloneable, serializable, thread-safe type qualifies.
///
/// # Example
///
/// ```rust
/// use continuation_machine::core::Symbol;
///
/// fn assert_symbol<T: Symbol>() {}
///
/// assert_symbol::<u64>();
/// assert_symbol::<String>();
/// ```
pub trait Symbol:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
}

impl<T> Symbol for T where
    T: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
}

/// Symbolic name of a transition function.
///
/// Resolved against a registry only at the moment of invocation.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionRef(String);

impl FunctionRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for FunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FunctionRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FunctionRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Disambiguation tag stamped on a state between rounds.
///
/// The value is the ordinal of the application that produced the state.
/// It is always cleared before a transition function sees the state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Tag(u64);

impl Tag {
    pub fn new(round: u64) -> Self {
        Self(round)
    }

    pub fn round(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_ref_displays_its_name() {
        let f = FunctionRef::from("FOREACH_ITERATE");
        assert_eq!(f.to_string(), "FOREACH_ITERATE");
        assert_eq!(f.as_str(), "FOREACH_ITERATE");
        assert!(!f.is_empty());
    }

    #[test]
    fn function_ref_serializes_as_plain_string() {
        let f = FunctionRef::new("COUNT");
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(json, "\"COUNT\"");

        let back: FunctionRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, f);
    }

    #[test]
    fn tag_keeps_round() {
        assert_eq!(Tag::new(7).round(), 7);
    }
}
