//! Common state machine error types
//!
//! Shared across domain crates that implement state machines.

use thiserror::Error;

/// Errors that can occur during state transitions
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Invalid transition: cannot apply '{event}' in state '{state}'")]
    InvalidTransition { state: String, event: String },
}
