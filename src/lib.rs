//! Statewalk: a configuration-driven finite state machine with undo/redo.
//!
//! A machine is described by plain data — an initial state plus a map from
//! state names to event-triggered transitions — and driven through a small
//! synchronous API. Every successful state change is recorded, so the
//! machine can walk its own history backwards (`undo`) and forwards
//! (`redo`) one step at a time.
//!
//! # Core Concepts
//!
//! - **Configuration**: declarative states and transitions, via
//!   [`MachineConfig`] (built by hand, with [`builder::ConfigBuilder`], the
//!   [`machine_config!`] macro, or from JSON)
//! - **Engine**: [`StateMachine`], tracking the current state and resolving
//!   `trigger`/`change_state` against the configuration
//! - **History**: linear undo/redo over visited states, via [`History`]
//!
//! # Example
//!
//! ```rust
//! use statewalk::{machine_config, StateMachine};
//!
//! let config = machine_config! {
//!     initial: "idle",
//!     states: {
//!         "idle" => { "run" => "busy" },
//!         "busy" => { "stop" => "idle" },
//!     }
//! };
//!
//! let mut machine = StateMachine::new(config).unwrap();
//!
//! machine.trigger("run").unwrap();
//! assert_eq!(machine.current_state(), "busy");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "idle");
//!
//! assert!(machine.redo());
//! assert_eq!(machine.current_state(), "busy");
//!
//! // Which states handle "stop"?
//! assert_eq!(machine.states_with_event("stop"), vec!["busy"]);
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::core::{History, MachineConfig, MachineError, StateDef, StateMachine};
