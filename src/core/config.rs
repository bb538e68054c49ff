//! Declarative machine configuration.
//!
//! A configuration names every state, marks one of them as initial, and maps
//! events to target states per source state. It is plain data: the engine
//! never mutates it after construction.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Definition of a single state: its outgoing transitions.
///
/// Keys are event names, values are target state names. The map preserves
/// insertion order, which is what makes [`crate::StateMachine::states`]
/// deterministic.
///
/// # Example
///
/// ```rust
/// use statewalk::StateDef;
///
/// let mut def = StateDef::default();
/// def.transitions.insert("run".to_string(), "busy".to_string());
///
/// assert_eq!(def.transitions.get("run").map(String::as_str), Some("busy"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event name → target state name.
    #[serde(default)]
    pub transitions: IndexMap<String, String>,
}

impl StateDef {
    /// Create a definition with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, returning the definition for chaining.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::StateDef;
    ///
    /// let def = StateDef::new().on("run", "busy").on("sleep", "idle");
    /// assert_eq!(def.transitions.len(), 2);
    /// ```
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }
}

/// Complete machine configuration.
///
/// The natural external layout is JSON:
///
/// ```rust
/// use statewalk::MachineConfig;
///
/// let config = MachineConfig::from_json(
///     r#"{
///         "initial": "idle",
///         "states": {
///             "idle": { "transitions": { "run": "busy" } },
///             "busy": { "transitions": { "stop": "idle" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Name of the starting state. Must be a key of `states`.
    pub initial: String,
    /// State name → state definition, in declaration order.
    pub states: IndexMap<String, StateDef>,
}

impl MachineConfig {
    /// Start a fluent builder for a configuration.
    ///
    /// See [`crate::builder::ConfigBuilder`] for the full API.
    pub fn builder() -> crate::builder::ConfigBuilder {
        crate::builder::ConfigBuilder::new()
    }

    /// Parse a configuration from its JSON layout.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Render the configuration as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MachineConfig {
        let mut states = IndexMap::new();
        states.insert("idle".to_string(), StateDef::new().on("run", "busy"));
        states.insert("busy".to_string(), StateDef::new().on("stop", "idle"));
        MachineConfig {
            initial: "idle".to_string(),
            states,
        }
    }

    #[test]
    fn state_map_preserves_declaration_order() {
        let config = sample();
        let names: Vec<&str> = config.states.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["idle", "busy"]);
    }

    #[test]
    fn json_round_trip_preserves_config() {
        let config = sample();
        let json = config.to_json().unwrap();
        let parsed = MachineConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn missing_transitions_field_defaults_to_empty() {
        let config = MachineConfig::from_json(
            r#"{ "initial": "done", "states": { "done": {} } }"#,
        )
        .unwrap();

        assert!(config.states["done"].transitions.is_empty());
    }

    #[test]
    fn state_def_on_chains_transitions() {
        let def = StateDef::new().on("a", "x").on("b", "y");
        let events: Vec<&str> = def.transitions.keys().map(String::as_str).collect();
        assert_eq!(events, vec!["a", "b"]);
    }
}
