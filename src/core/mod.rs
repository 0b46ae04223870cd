//! Core step machine types and logic.
//!
//! This module contains the pure core of the wizard:
//! - State definitions via the `State` and `Sequential` traits
//! - Guard predicates over machine context
//! - Immutable navigation history
//! - The gated `StepMachine` itself
//!
//! Nothing here knows about pricing or the application form.

mod guard;
mod history;
mod machine;
mod state;

pub use guard::Guard;
pub use history::{Direction, StateHistory, StateTransition};
pub use machine::{StepMachine, StepResult};
pub use state::{Sequential, State};
