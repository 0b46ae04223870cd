//! Requirement violations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single unmet requirement reported when a step cannot be left.
///
/// Violations are data, not failures: a blocked step hands the full list
/// back to the caller so every missing input can be highlighted at once.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    #[error("Required field '{field}' is empty")]
    MissingField { field: String },

    #[error("Requirement not met: {message}")]
    Unmet { message: String },
}

impl Violation {
    /// The form field this violation points at, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field } => Some(field),
            Self::Unmet { .. } => None,
        }
    }
}
