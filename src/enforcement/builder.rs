//! Builder API for requirement sets.

use crate::core::Guard;
use crate::enforcement::rules::{RequirementCheck, Requirements};
use crate::enforcement::violations::Violation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating requirement sets
pub struct RequirementsBuilder<C> {
    checks: Vec<RequirementCheck<C>>,
}

impl<C: 'static> RequirementsBuilder<C> {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&C) -> Validation<(), NonEmptyVec<Violation>> + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Add a guard that reports `violation` when it rejects the context
    pub fn require_guard(self, guard: Guard<C>, violation: Violation) -> Self {
        self.require(move |ctx: &C| {
            if guard.check(ctx) {
                Validation::success(())
            } else {
                Validation::fail(violation.clone())
            }
        })
    }

    /// Add a predicate check with an error message
    pub fn require_pred<F>(self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.require_guard(
            Guard::new(predicate),
            Violation::Unmet {
                message: message.into(),
            },
        )
    }

    /// Require a named field to be filled in
    pub fn require_field<F>(self, field: impl Into<String>, is_present: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.require_guard(
            Guard::new(is_present),
            Violation::MissingField {
                field: field.into(),
            },
        )
    }

    pub fn build(self) -> Requirements<C> {
        Requirements {
            checks: self.checks,
        }
    }
}

impl<C: 'static> Default for RequirementsBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
