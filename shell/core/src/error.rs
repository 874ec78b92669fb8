//! Error Types
//!
//! The shell has exactly two ways to fail. Both are contract violations by
//! whoever wires the shell up, never conditions a user can trigger through a
//! correctly built surface, so neither is recovered locally.

use thiserror::Error;

use crate::events::ShellEvent;
use crate::view::ViewMode;

/// Errors surfaced by the shell core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShellError {
    /// A theme id was referenced that the catalog does not know
    #[error("unknown theme id: {id:?}")]
    UnknownTheme {
        /// The id as it was received
        id: String,
    },

    /// An event arrived in a mode that does not permit it
    #[error("invalid transition: {event} is not allowed in {state} mode")]
    InvalidTransition {
        /// The event that was attempted
        event: ShellEvent,
        /// The mode the state machine was in
        state: ViewMode,
    },
}

impl ShellError {
    /// Whether this error is a configuration defect (as opposed to a bad transition)
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::UnknownTheme { .. })
    }
}
