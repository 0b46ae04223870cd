//! Navigation history.
//!
//! Every move a step machine makes is recorded as an immutable
//! [`StateTransition`]. Recording returns a new [`StateHistory`] rather than
//! mutating the old one.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which way a transition moved through the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Back,
}

/// Record of a single move between states.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Forward for an advance, back for a retreat
    pub direction: Direction,
    /// When the move happened
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Record a move that happened just now.
    pub fn now(from: S, to: S, direction: Direction) -> Self {
        Self {
            from,
            to,
            direction,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use onboarding::core::{Direction, StateHistory, StateTransition};
/// use onboarding::wizard::WizardStep;
///
/// let history = StateHistory::new().record(StateTransition::now(
///     WizardStep::BusinessInfo,
///     WizardStep::StorageRequirements,
///     Direction::Forward,
/// ));
///
/// assert_eq!(history.get_path().len(), 2);
/// assert_eq!(history.count(Direction::Forward), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States visited in order: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Number of moves made in the given direction.
    pub fn count(&self, direction: Direction) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.direction == direction)
            .count()
    }

    /// All recorded transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
