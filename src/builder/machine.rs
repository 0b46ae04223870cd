//! Builder for constructing step machines.

use crate::builder::error::BuildError;
use crate::core::{Sequential, StepMachine};
use crate::enforcement::{Requirements, RequirementsBuilder};

/// Builder for constructing step machines with a fluent API.
///
/// Gates are collected as an explicit table, one entry per gated state,
/// and validated when the machine is built.
pub struct StepMachineBuilder<S: Sequential, C> {
    gates: Vec<(S, Requirements<C>)>,
}

impl<S: Sequential, C: 'static> StepMachineBuilder<S, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { gates: Vec::new() }
    }

    /// Gate `state` with a prepared requirement set.
    pub fn gate(mut self, state: S, requirements: Requirements<C>) -> Self {
        self.gates.push((state, requirements));
        self
    }

    /// Gate `state` with requirements described by a closure.
    pub fn gate_with<F>(self, state: S, describe: F) -> Self
    where
        F: FnOnce(RequirementsBuilder<C>) -> RequirementsBuilder<C>,
    {
        let requirements = describe(RequirementsBuilder::new()).build();
        self.gate(state, requirements)
    }

    /// Build the step machine, starting in `S::first()`.
    /// Returns an error if the gate table is inconsistent.
    pub fn build(self) -> Result<StepMachine<S, C>, BuildError> {
        let mut machine = StepMachine::new();
        let mut seen: Vec<S> = Vec::new();

        for (state, requirements) in self.gates {
            if state.is_final() {
                return Err(BuildError::GateOnFinalState {
                    state: state.name().to_string(),
                });
            }
            if seen.contains(&state) {
                return Err(BuildError::DuplicateGate {
                    state: state.name().to_string(),
                });
            }
            seen.push(state.clone());
            machine.add_gate(state, requirements);
        }

        Ok(machine)
    }
}

impl<S: Sequential, C: 'static> Default for StepMachineBuilder<S, C> {
    fn default() -> Self {
        Self::new()
    }
}
