//! Build errors for the validating configuration builder.

use thiserror::Error;

/// Errors that can occur when building a machine configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial state '{initial}' is not declared")]
    UndeclaredInitialState { initial: String },

    #[error("State '{id}' is declared more than once")]
    DuplicateState { id: String },

    #[error("Transition source state '{state}' is not declared")]
    UndeclaredTransitionSource { state: String },

    #[error("Transition target '{target}' for event '{event}' in state '{state}' is not declared")]
    UndeclaredTransitionTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("State '{state}' already has a transition for event '{event}'")]
    DuplicateTransition { state: String, event: String },
}
