//! Errors raised while saving or restoring a wizard session.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Could not encode session checkpoint: {0}")]
    Encode(String),

    #[error("Could not decode session checkpoint: {0}")]
    Decode(String),

    #[error("Checkpoint format {found} is not supported (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Consecutive entries do not join up, or one skips or repeats a step.
    #[error("Checkpoint history is not a continuous walk: {reason}")]
    BrokenHistory { reason: String },

    /// The saved step disagrees with where the saved history ends.
    #[error("Checkpoint is on step '{step}' but its history ends at '{history_end}'")]
    StepMismatch { step: String, history_end: String },
}
