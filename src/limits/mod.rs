//! Escalation limits and configuration validation.
//!
//! The only knobs a machine exposes are its escalation cap and its abort
//! hook. This module owns the cap: the [`Limits`] value, the budgets derived
//! from it, and the checks run when a machine is built.
//!
//! Validation uses Stillwater's `Validation` type, so a bad configuration
//! reports every problem at once instead of the first one found.
//!
//! # Example
//!
//! ```rust
//! use continuation_machine::core::FunctionRef;
//! use continuation_machine::limits::{validate, Limits};
//!
//! let names = vec![FunctionRef::new("COUNT")];
//! assert!(validate(&Limits::default(), &names).is_success());
//! assert!(validate(&Limits::new(100), &names).is_failure());
//! ```

pub mod policy;
pub mod rules;
pub mod violations;

pub use policy::{Limits, DEFAULT_MAX_LEVEL, MAX_SUPPORTED_LEVEL};
pub use rules::validate;
pub use violations::ConfigViolation;
