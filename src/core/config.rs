//! Machine configuration: declared states and their transition tables.
//!
//! A configuration is supplied once at machine construction and never
//! changes afterwards. Direct construction performs no validation, matching
//! the lazy semantics of resolving transition targets only when a
//! transition actually fires; the builder in [`crate::builder`] validates
//! eagerly instead.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Transition table for a single state.
///
/// Maps event identifiers to target state identifiers. Targets are not
/// checked against the declared state set here — an undeclared target is
/// only rejected when a transition tries to enter it.
///
/// # Example
///
/// ```rust
/// use waypoint::core::StateDefinition;
///
/// let def = StateDefinition::new()
///     .on("start", "running")
///     .on("configure", "configuring");
///
/// assert_eq!(def.target("start"), Some("running"));
/// assert!(def.handles("configure"));
/// assert!(!def.handles("stop"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDefinition {
    transitions: HashMap<String, String>,
}

impl StateDefinition {
    /// Create a definition with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transition, replacing any previous target for `event`.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Register a transition in place.
    ///
    /// Returns the previously registered target for `event`, if any.
    pub fn insert(&mut self, event: impl Into<String>, target: impl Into<String>) -> Option<String> {
        self.transitions.insert(event.into(), target.into())
    }

    /// Target state for `event`, if one is registered.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Whether this state reacts to `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Number of registered transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether the state has no outgoing transitions.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

/// The declared states of a machine plus the identifier it starts in.
///
/// Declaration order is preserved: [`state_ids`](MachineConfig::state_ids)
/// yields states in the order they were declared, regardless of how they
/// are stored for lookup.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{MachineConfig, StateDefinition};
///
/// let mut config = MachineConfig::new("idle");
/// config.declare("idle", StateDefinition::new().on("start", "running"));
/// config.declare("running", StateDefinition::new().on("stop", "idle"));
///
/// assert_eq!(config.initial(), "idle");
/// assert_eq!(config.target_for("idle", "start"), Some("running"));
/// assert_eq!(config.state_ids().collect::<Vec<_>>(), vec!["idle", "running"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MachineConfig {
    initial: String,
    order: Vec<String>,
    states: HashMap<String, StateDefinition>,
}

impl MachineConfig {
    /// Create a configuration with no declared states.
    ///
    /// `initial` is trusted to name a state that will be declared; nothing
    /// checks it here. Use [`MachineConfig::builder`] to have the whole
    /// configuration validated at build time.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            order: Vec::new(),
            states: HashMap::new(),
        }
    }

    /// Entry point for the validating fluent builder.
    pub fn builder() -> crate::builder::MachineConfigBuilder {
        crate::builder::MachineConfigBuilder::new()
    }

    /// Declare a state.
    ///
    /// Re-declaring an existing id replaces its definition but keeps its
    /// original position in declaration order.
    pub fn declare(&mut self, id: impl Into<String>, definition: StateDefinition) {
        let id = id.into();
        if !self.states.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.states.insert(id, definition);
    }

    /// The configured initial state identifier.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Whether `id` names a declared state.
    pub fn contains(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    /// The transition table declared for `id`, if any.
    pub fn definition(&self, id: &str) -> Option<&StateDefinition> {
        self.states.get(id)
    }

    /// Declared state identifiers in declaration order.
    pub fn state_ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Resolve the target of `event` fired in `state`.
    ///
    /// `None` when `state` is undeclared or has no transition for `event`.
    pub fn target_for(&self, state: &str, event: &str) -> Option<&str> {
        self.states.get(state).and_then(|def| def.target(event))
    }

    /// Number of declared states.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no states are declared.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MachineConfig {
        let mut config = MachineConfig::new("idle");
        config.declare("idle", StateDefinition::new().on("start", "running"));
        config.declare(
            "running",
            StateDefinition::new().on("stop", "idle").on("pause", "paused"),
        );
        config.declare("paused", StateDefinition::new().on("resume", "running"));
        config
    }

    #[test]
    fn declaration_order_is_preserved() {
        let config = sample();
        let ids: Vec<_> = config.state_ids().collect();
        assert_eq!(ids, vec!["idle", "running", "paused"]);
    }

    #[test]
    fn redeclaring_keeps_order_position() {
        let mut config = sample();
        config.declare("idle", StateDefinition::new().on("boot", "running"));

        let ids: Vec<_> = config.state_ids().collect();
        assert_eq!(ids, vec!["idle", "running", "paused"]);
        assert_eq!(config.target_for("idle", "boot"), Some("running"));
        assert_eq!(config.target_for("idle", "start"), None);
        assert_eq!(config.len(), 3);
    }

    #[test]
    fn target_for_resolves_declared_transitions() {
        let config = sample();
        assert_eq!(config.target_for("running", "pause"), Some("paused"));
        assert_eq!(config.target_for("running", "bogus"), None);
        assert_eq!(config.target_for("ghost", "start"), None);
    }

    #[test]
    fn contains_and_definition_agree() {
        let config = sample();
        assert!(config.contains("paused"));
        assert!(!config.contains("ghost"));
        assert!(config.definition("paused").is_some());
        assert!(config.definition("ghost").is_none());
    }

    #[test]
    fn definition_handles_reports_registered_events() {
        let config = sample();
        let running = config.definition("running").unwrap();
        assert!(running.handles("stop"));
        assert!(running.handles("pause"));
        assert!(!running.handles("resume"));
        assert_eq!(running.len(), 2);
    }

    #[test]
    fn insert_replaces_and_reports_previous_target() {
        let mut def = StateDefinition::new().on("go", "a");
        assert_eq!(def.insert("go", "b"), Some("a".to_string()));
        assert_eq!(def.insert("halt", "c"), None);
        assert_eq!(def.target("go"), Some("b"));
    }

    #[test]
    fn empty_definition_handles_nothing() {
        let def = StateDefinition::new();
        assert!(def.is_empty());
        assert!(!def.handles("anything"));
        assert_eq!(def.target("anything"), None);
    }

    #[test]
    fn definition_serializes_correctly() {
        let def = StateDefinition::new().on("start", "running");
        let json = serde_json::to_string(&def).unwrap();
        let deserialized: StateDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(def, deserialized);
    }
}
