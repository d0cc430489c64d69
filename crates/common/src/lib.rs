//! Shared error handling for Matchday
//!
//! This crate provides the pieces every other Matchday crate depends on:
//! - The application-wide error taxonomy and `Result` alias
//! - State-machine error types shared by controller state machines

pub mod error;
pub mod state;

pub use error::{AuthError, Error, Result};
pub use state::StateError;
