//! Fluent builder for machine configurations.

use crate::builder::error::BuildError;
use crate::core::{MachineConfig, StateDefinition};
use std::collections::HashSet;

/// Builder that validates a configuration eagerly at build time.
///
/// Unlike direct [`MachineConfig`] construction, the builder rejects
/// configurations referencing undeclared states, so a machine built from
/// its output can never start in or resolve a transition into an unknown
/// state.
pub struct MachineConfigBuilder {
    initial: Option<String>,
    states: Vec<String>,
    transitions: Vec<(String, String, String)>,
}

impl MachineConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, id: impl Into<String>) -> Self {
        self.initial = Some(id.into());
        self
    }

    /// Declare a state. Declaration order is preserved in the built
    /// configuration.
    pub fn state(mut self, id: impl Into<String>) -> Self {
        self.states.push(id.into());
        self
    }

    /// Register a transition from `from` to `to` fired by `event`.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.transitions.push((from.into(), event.into(), to.into()));
        self
    }

    /// Validate and build the configuration.
    ///
    /// Checks that the initial state is set and declared, that no state is
    /// declared twice, that every transition source and target is
    /// declared, and that no state registers the same event twice.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut declared = HashSet::new();
        for id in &self.states {
            if !declared.insert(id.as_str()) {
                return Err(BuildError::DuplicateState { id: id.clone() });
            }
        }

        if !declared.contains(initial.as_str()) {
            return Err(BuildError::UndeclaredInitialState { initial });
        }

        for (from, event, to) in &self.transitions {
            if !declared.contains(from.as_str()) {
                return Err(BuildError::UndeclaredTransitionSource {
                    state: from.clone(),
                });
            }
            if !declared.contains(to.as_str()) {
                return Err(BuildError::UndeclaredTransitionTarget {
                    state: from.clone(),
                    event: event.clone(),
                    target: to.clone(),
                });
            }
        }

        let mut config = MachineConfig::new(initial);
        for id in &self.states {
            let mut definition = StateDefinition::new();
            for (from, event, to) in &self.transitions {
                if from == id && definition.insert(event.clone(), to.clone()).is_some() {
                    return Err(BuildError::DuplicateTransition {
                        state: from.clone(),
                        event: event.clone(),
                    });
                }
            }
            config.declare(id.clone(), definition);
        }

        Ok(config)
    }
}

impl Default for MachineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_initial_state() {
        let result = MachineConfigBuilder::new().state("idle").build();
        assert_eq!(result.unwrap_err(), BuildError::MissingInitialState);
    }

    #[test]
    fn builder_rejects_undeclared_initial_state() {
        let result = MachineConfigBuilder::new()
            .initial("ghost")
            .state("idle")
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::UndeclaredInitialState {
                initial: "ghost".to_string()
            }
        );
    }

    #[test]
    fn builder_rejects_duplicate_states() {
        let result = MachineConfigBuilder::new()
            .initial("idle")
            .state("idle")
            .state("idle")
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateState {
                id: "idle".to_string()
            }
        );
    }

    #[test]
    fn builder_rejects_undeclared_transition_source() {
        let result = MachineConfigBuilder::new()
            .initial("idle")
            .state("idle")
            .transition("ghost", "start", "idle")
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::UndeclaredTransitionSource {
                state: "ghost".to_string()
            }
        );
    }

    #[test]
    fn builder_rejects_undeclared_transition_target() {
        let result = MachineConfigBuilder::new()
            .initial("idle")
            .state("idle")
            .transition("idle", "start", "ghost")
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::UndeclaredTransitionTarget {
                state: "idle".to_string(),
                event: "start".to_string(),
                target: "ghost".to_string()
            }
        );
    }

    #[test]
    fn builder_rejects_duplicate_event_in_state() {
        let result = MachineConfigBuilder::new()
            .initial("idle")
            .state("idle")
            .state("running")
            .transition("idle", "start", "running")
            .transition("idle", "start", "idle")
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateTransition {
                state: "idle".to_string(),
                event: "start".to_string()
            }
        );
    }

    #[test]
    fn fluent_api_builds_configuration() {
        let config = MachineConfigBuilder::new()
            .initial("idle")
            .state("idle")
            .state("running")
            .transition("idle", "start", "running")
            .transition("running", "stop", "idle")
            .build()
            .unwrap();

        assert_eq!(config.initial(), "idle");
        assert_eq!(config.target_for("idle", "start"), Some("running"));
        assert_eq!(config.target_for("running", "stop"), Some("idle"));
        assert_eq!(config.state_ids().collect::<Vec<_>>(), vec!["idle", "running"]);
    }

    #[test]
    fn builder_allows_states_without_transitions() {
        let config = MachineConfigBuilder::new()
            .initial("done")
            .state("done")
            .build()
            .unwrap();

        assert!(config.definition("done").unwrap().is_empty());
    }
}
