//! Continuation Machine: a bounded iterative rewriting engine
//!
//! A continuation machine applies one pure transition function to a machine
//! state over and over, until the function signals `Exit` or `Return`, or
//! until a hard iteration cap is reached. The applications are grouped into
//! attempts whose budgets double (1, 2, 4, ...), so short runs stay cheap
//! while long runs still finish in a logarithmic number of attempts.
//!
//! # Core Concepts
//!
//! - **Machine state**: the function to call next, an opaque user state and
//!   the arguments still to consume
//! - **Transition function**: pure `MachineState -> Step` mapping, looked up
//!   by name
//! - **Escalation**: attempt `i` may apply the function `2^i` times
//! - **Abort hook**: replaceable strategy run when the cap is reached
//!
//! # Example
//!
//! ```rust
//! use continuation_machine::builder::MachineBuilder;
//! use continuation_machine::core::{MachineState, Step, Termination};
//! use continuation_machine::engine::AbortHook;
//!
//! let machine = MachineBuilder::<u64>::new()
//!     .max_level(9)
//!     .on_abort(AbortHook::default())
//!     .register("SUM", |state: MachineState<u64>| -> Step<u64> {
//!         let (_, acc, mut args) = state.into_parts();
//!         let total = acc.first().copied().unwrap_or(0);
//!         match args.pop() {
//!             Some(n) => Step::next("SUM", vec![total + n], args),
//!             None => Step::Return(vec![total]),
//!         }
//!     })
//!     .build()
//!     .unwrap();
//!
//! let result = machine.run("SUM", vec![], vec![1, 2, 3, 4]).unwrap();
//! assert_eq!(result, Termination::Return(vec![10]));
//! ```

pub mod builder;
pub mod consumers;
pub mod core;
pub mod engine;
pub mod limits;

// Re-export commonly used types
pub use self::builder::{BuildError, MachineBuilder};
pub use self::core::{FunctionRef, MachineState, Step, Symbol, Termination};
pub use self::engine::{AbortHook, ContinuationMachine, EngineError, RunReport};
pub use self::limits::Limits;
