//! Guard predicates over machine context.
//!
//! Guards are pure boolean functions over the data a machine gates on (for
//! the onboarding wizard, the application form). They carry no state of
//! their own, so evaluating one any number of times gives the same answer.

use std::fmt;

/// Pure predicate deciding whether a context satisfies a condition.
///
/// # Example
///
/// ```rust
/// use onboarding::core::Guard;
///
/// struct Contact {
///     email: String,
/// }
///
/// let has_email = Guard::new(|c: &Contact| !c.email.trim().is_empty());
///
/// assert!(has_email.check(&Contact { email: "ops@example.com".into() }));
/// assert!(!has_email.check(&Contact { email: "  ".into() }));
/// ```
pub struct Guard<C> {
    predicate: Box<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the predicate against `context`.
    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }
}

impl<C> fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
