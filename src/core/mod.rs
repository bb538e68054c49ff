//! Core state machine types and logic.
//!
//! This module contains the engine itself:
//! - Configuration data model (`MachineConfig`, `StateDef`)
//! - The `StateMachine` engine with transition resolution
//! - Linear undo/redo via `History`
//!
//! Everything here is synchronous and I/O-free; a failed operation never
//! leaves partial mutations behind.

mod config;
mod engine;
mod error;
mod history;

pub use config::{MachineConfig, StateDef};
pub use engine::StateMachine;
pub use error::MachineError;
pub use history::History;
