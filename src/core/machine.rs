//! Gated step machine.
//!
//! A `StepMachine` walks a [`Sequential`] state space one position at a
//! time. Leaving a state forwards requires the context to satisfy that
//! state's [`Requirements`]; states without a gate can always be left.
//! Moving back is never gated.

use super::history::{Direction, StateHistory, StateTransition};
use super::state::{Sequential, State};
use crate::enforcement::{Requirements, Violation};

/// Outcome of a navigation request.
///
/// Navigation never fails: a request that cannot move reports why and
/// leaves the machine where it was.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult<S: State> {
    /// The machine moved.
    Moved { from: S, to: S },

    /// The current state's requirements are not met.
    Blocked { at: S, violations: Vec<Violation> },

    /// There is no state in the requested direction.
    AtBoundary(S),
}

impl<S: State> StepResult<S> {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Step machine over a fixed sequence of states.
pub struct StepMachine<S: Sequential, C> {
    current: S,
    gates: Vec<(S, Requirements<C>)>,
    history: StateHistory<S>,
}

impl<S: Sequential, C> StepMachine<S, C> {
    /// Create an ungated machine in the first state of the sequence.
    pub fn new() -> Self {
        Self::starting_at(S::first())
    }

    /// Create an ungated machine in `initial`.
    pub fn starting_at(initial: S) -> Self {
        Self {
            current: initial,
            gates: Vec::new(),
            history: StateHistory::new(),
        }
    }

    /// Register the requirements for leaving `state`.
    ///
    /// A later gate for the same state replaces the earlier one.
    pub fn add_gate(&mut self, state: S, requirements: Requirements<C>) {
        self.gates.retain(|(s, _)| *s != state);
        self.gates.push((state, requirements));
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Get navigation history (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// The gate registered for `state`, if any.
    pub fn requirements_for(&self, state: &S) -> Option<&Requirements<C>> {
        self.gates
            .iter()
            .find(|(s, _)| s == state)
            .map(|(_, requirements)| requirements)
    }

    /// Whether `context` satisfies the gate on `state`.
    pub fn can_leave(&self, state: &S, context: &C) -> bool {
        self.requirements_for(state)
            .is_none_or(|requirements| requirements.is_satisfied(context))
    }

    /// Whether `context` satisfies the gate on the current state.
    pub fn can_proceed(&self, context: &C) -> bool {
        self.can_leave(&self.current, context)
    }

    /// Every unmet requirement of `state` for `context`.
    pub fn violations(&self, state: &S, context: &C) -> Vec<Violation> {
        self.requirements_for(state)
            .map(|requirements| requirements.violations(context))
            .unwrap_or_default()
    }

    /// Move to the next state if the current gate allows it.
    pub fn advance(&mut self, context: &C) -> StepResult<S> {
        let Some(next) = self.current.next() else {
            tracing::debug!(state = self.current.name(), "advance ignored at last step");
            return StepResult::AtBoundary(self.current.clone());
        };

        let violations = self.violations(&self.current, context);
        if !violations.is_empty() {
            tracing::debug!(
                state = self.current.name(),
                violations = violations.len(),
                "advance blocked"
            );
            return StepResult::Blocked {
                at: self.current.clone(),
                violations,
            };
        }

        self.move_to(next, Direction::Forward)
    }

    /// Move to the previous state. Never gated.
    pub fn retreat(&mut self) -> StepResult<S> {
        match self.current.previous() {
            Some(previous) => self.move_to(previous, Direction::Back),
            None => StepResult::AtBoundary(self.current.clone()),
        }
    }

    /// Replace position and history, keeping the gates.
    pub(crate) fn restore(&mut self, current: S, history: StateHistory<S>) {
        self.current = current;
        self.history = history;
    }

    fn move_to(&mut self, to: S, direction: Direction) -> StepResult<S> {
        let from = std::mem::replace(&mut self.current, to.clone());
        tracing::debug!(
            from = from.name(),
            to = to.name(),
            ?direction,
            "step changed"
        );
        self.history = self
            .history
            .record(StateTransition::now(from.clone(), to.clone(), direction));
        StepResult::Moved { from, to }
    }
}

impl<S: Sequential, C> Default for StepMachine<S, C> {
    fn default() -> Self {
        Self::new()
    }
}
