//! The run loop around the pure core.
//!
//! # Key Concepts
//!
//! - **Transition functions**: pure `MachineState -> Step` mappings, looked
//!   up by name in a [`Registry`]
//! - **Escalation**: attempts with budgets `1, 2, 4, ...` applications, cut
//!   short by the first `Exit` or `Return`
//! - **Abort hook**: the replaceable strategy that decides what happens
//!   after the highest level is exhausted
//!
//! # Example
//!
//! ```rust
//! use continuation_machine::builder::MachineBuilder;
//! use continuation_machine::core::{MachineState, Step, Termination};
//!
//! let machine = MachineBuilder::<u64>::new()
//!     .register("COUNTDOWN", |state: MachineState<u64>| -> Step<u64> {
//!         let n = state.user_state()[0];
//!         if n <= 1 {
//!             Step::Return(vec![0])
//!         } else {
//!             Step::Continue(state.advance(vec![n - 1], vec![]))
//!         }
//!     })
//!     .build()
//!     .unwrap();
//!
//! let report = machine.run_with_report("COUNTDOWN", vec![100], vec![]).unwrap();
//! assert_eq!(report.termination, Termination::Return(vec![0]));
//! assert_eq!(report.attempts(), 7);
//! ```

mod abort;
mod error;
mod machine;
mod report;
mod transition;

pub use abort::{AbortContext, AbortFn, AbortHook};
pub use error::EngineError;
pub use machine::ContinuationMachine;
pub use report::RunReport;
pub use transition::{Registry, TransitionFunction, TransitionHandle};
