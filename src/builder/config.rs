//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::core::{MachineConfig, StateDef};
use indexmap::IndexMap;

/// Builder for constructing configurations with a fluent API.
pub struct ConfigBuilder {
    initial: Option<String>,
    states: IndexMap<String, StateDef>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: IndexMap::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with no outgoing transitions.
    ///
    /// Declaring an already-known state is a no-op, so terminal states can
    /// be listed alongside transitions without disturbing their rules.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.entry(name.into()).or_default();
        self
    }

    /// Declare a transition, implicitly declaring the source state.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if required pieces are missing or inconsistent.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        if !self.states.contains_key(&initial) {
            return Err(BuildError::UndefinedInitialState(initial));
        }

        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
