//! Waypoint: a declarative finite state machine with linear undo/redo
//!
//! Waypoint tracks a single active state, enforces declared transition rules
//! between states, and keeps a two-stack history so state changes can be
//! undone and redone linearly. It is meant to be embedded wherever an
//! application needs explicit state control (UI flows, workflow steps,
//! protocol phases) without hand-rolled conditionals in calling code.
//!
//! # Core Concepts
//!
//! - **Configuration**: the declared states and their per-event transition
//!   tables, immutable for the machine's lifetime
//! - **Transitions**: direct jumps via `change_state` or event-driven moves
//!   via `trigger`, both validated against the configuration
//! - **History**: undo/redo stacks maintained automatically; any new
//!   transition invalidates the redo stack
//!
//! # Example
//!
//! ```rust
//! use waypoint::core::StateMachine;
//! use waypoint::machine_config;
//!
//! let config = machine_config! {
//!     initial: "idle",
//!     states: {
//!         "idle" => { "start" => "running" },
//!         "running" => { "stop" => "idle", "pause" => "paused" },
//!         "paused" => { "resume" => "running" },
//!     }
//! }
//! .unwrap();
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("start").unwrap();
//! machine.trigger("pause").unwrap();
//! assert_eq!(machine.current_state(), "paused");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "running");
//! assert!(machine.redo());
//! assert_eq!(machine.current_state(), "paused");
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, MachineConfigBuilder};
pub use core::{MachineConfig, MachineError, StateDefinition, StateMachine, TransitionHistory};
