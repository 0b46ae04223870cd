//! Requirement sets evaluated with `Validation`.

use crate::enforcement::violations::Violation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for a single requirement check.
pub type RequirementCheck<C> =
    Box<dyn Fn(&C) -> Validation<(), NonEmptyVec<Violation>> + Send + Sync>;

/// Everything a context must satisfy before a machine may leave a state.
///
/// Evaluation runs every check and accumulates all violations instead of
/// stopping at the first one.
pub struct Requirements<C> {
    pub(crate) checks: Vec<RequirementCheck<C>>,
}

impl<C> Requirements<C> {
    /// A requirement set that is always satisfied.
    pub fn none() -> Self {
        Self { checks: Vec::new() }
    }

    /// Run every check against `context`.
    ///
    /// Returns `Validation::Success(())` if all pass, otherwise a failure
    /// carrying every violation found.
    pub fn enforce(&self, context: &C) -> Validation<(), NonEmptyVec<Violation>> {
        if self.checks.is_empty() {
            return Validation::success(());
        }

        let results: Vec<Validation<(), NonEmptyVec<Violation>>> =
            self.checks.iter().map(|check| check(context)).collect();

        Validation::all_vec(results).map(|_| ())
    }

    /// Whether `context` passes every check.
    pub fn is_satisfied(&self, context: &C) -> bool {
        self.enforce(context).is_success()
    }

    /// Every violation `context` currently produces, in check order.
    pub fn violations(&self, context: &C) -> Vec<Violation> {
        match self.enforce(context) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl<C> Default for Requirements<C> {
    fn default() -> Self {
        Self::none()
    }
}
