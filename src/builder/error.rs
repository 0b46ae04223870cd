//! Build errors for step machine builders.

use thiserror::Error;

/// Errors that can occur when building a step machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("State '{state}' is gated more than once")]
    DuplicateGate { state: String },

    #[error("State '{state}' is final and cannot be gated; nothing follows it")]
    GateOnFinalState { state: String },
}
