//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a declaration macro, both of
//! which validate the configuration eagerly so that construction mistakes
//! surface at build time rather than mid-run.

pub mod config;
pub mod error;
pub mod macros;

pub use config::MachineConfigBuilder;
pub use error::BuildError;

use crate::core::MachineConfig;

/// Build a linear chain of states where each state advances to the next
/// on a `"next"` event.
///
/// The first identifier becomes the initial state; the last state has no
/// outgoing transitions.
///
/// # Example
///
/// ```
/// use waypoint::builder::linear_config;
///
/// let config = linear_config(&["draft", "review", "published"]).unwrap();
/// assert_eq!(config.initial(), "draft");
/// assert_eq!(config.target_for("draft", "next"), Some("review"));
/// assert_eq!(config.target_for("published", "next"), None);
/// ```
pub fn linear_config(ids: &[&str]) -> Result<MachineConfig, BuildError> {
    let first = ids.first().ok_or(BuildError::MissingInitialState)?;
    let mut builder = MachineConfigBuilder::new().initial(*first);
    for id in ids {
        builder = builder.state(*id);
    }
    for pair in ids.windows(2) {
        builder = builder.transition(pair[0], "next", pair[1]);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateMachine;

    #[test]
    fn linear_config_chains_states() {
        let config = linear_config(&["a", "b", "c"]).unwrap();
        let mut machine = StateMachine::new(config);

        machine.trigger("next").unwrap();
        machine.trigger("next").unwrap();
        assert_eq!(machine.current_state(), "c");
        assert!(machine.trigger("next").is_err());
    }

    #[test]
    fn linear_config_rejects_empty_chain() {
        assert_eq!(
            linear_config(&[]).unwrap_err(),
            BuildError::MissingInitialState
        );
    }

    #[test]
    fn linear_config_rejects_duplicate_ids() {
        assert_eq!(
            linear_config(&["a", "b", "a"]).unwrap_err(),
            BuildError::DuplicateState {
                id: "a".to_string()
            }
        );
    }
}
