//! Checkpoint and resume for onboarding sessions.
//!
//! A checkpoint captures where a customer is in the wizard and what they
//! have entered, so a session can be picked up again later. The quote is
//! deliberately absent: it is recomputed from the restored form.

use crate::core::{Direction, Sequential, State, StateHistory};
use crate::quote::Package;
use crate::wizard::{ApplicationForm, WizardStep};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of an in-progress wizard session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WizardCheckpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Step the customer was on
    pub step: WizardStep,

    pub form: ApplicationForm,

    pub package: Package,

    /// Navigation so far
    pub history: StateHistory<WizardStep>,
}

impl WizardCheckpoint {
    /// Snapshot the given session state now.
    pub fn capture(
        step: WizardStep,
        form: ApplicationForm,
        package: Package,
        history: StateHistory<WizardStep>,
    ) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            step,
            form,
            package,
            history,
        }
    }

    /// Check version and internal consistency.
    ///
    /// The history must be a walk a live session could have made: it starts
    /// on step 1, every entry moves exactly one step in its direction, each
    /// entry begins where the previous one ended, and the walk ends on
    /// `step`. An empty history means the session never left step 1.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let transitions = self.history.transitions();
        let start = WizardStep::first();
        if let Some(first) = transitions.first() {
            if first.from != start {
                return Err(broken(format!(
                    "history starts at '{}' instead of '{}'",
                    first.from.name(),
                    start.name()
                )));
            }
        }

        for transition in transitions {
            let expected = match transition.direction {
                Direction::Forward => transition.from.next(),
                Direction::Back => transition.from.previous(),
            };
            if expected != Some(transition.to) {
                return Err(broken(format!(
                    "'{}' to '{}' is not a single {:?} step",
                    transition.from.name(),
                    transition.to.name(),
                    transition.direction
                )));
            }
        }

        for pair in transitions.windows(2) {
            if pair[0].to != pair[1].from {
                return Err(broken(format!(
                    "entry ending at '{}' is followed by one leaving '{}'",
                    pair[0].to.name(),
                    pair[1].from.name()
                )));
            }
        }

        let history_end = transitions.last().map_or(start, |last| last.to);
        if history_end != self.step {
            return Err(CheckpointError::StepMismatch {
                step: self.step.name().to_string(),
                history_end: history_end.name().to_string(),
            });
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::Decode(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::Decode(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }
}

fn broken(reason: String) -> CheckpointError {
    CheckpointError::BrokenHistory { reason }
}
