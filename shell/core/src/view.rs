//! View State Machine
//!
//! Two modes and two events:
//!
//! ```text
//!              select(theme)
//!   Overview ────────────────▶ Detail
//!       ▲                        │
//!       └──────── back() ────────┘
//! ```
//!
//! Any other combination is a wiring bug in the surface and is reported as
//! [`ShellError::InvalidTransition`]. Every transition also retargets the
//! zoom spring so the scale follows the mode.
//!
//! Whether `back()` forgets the selected theme is a setting
//! ([`ViewStateMachine::with_clear_on_back`]). By default the selection is
//! kept after returning to the overview.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::animation::ZoomSpringController;
use crate::error::ShellError;
use crate::events::ShellEvent;
use crate::theme::ThemeId;

/// Which of the two views is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Three floating spheres
    #[default]
    Overview,
    /// One theme's content pane
    Detail,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overview => f.write_str("overview"),
            Self::Detail => f.write_str("detail"),
        }
    }
}

/// Holds the current mode and selection
#[derive(Clone, Debug, Default)]
pub struct ViewStateMachine {
    mode: ViewMode,
    selection: Option<ThemeId>,
    clear_on_back: bool,
}

impl ViewStateMachine {
    /// Start in the overview with nothing selected
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose whether `back()` clears the selection
    #[must_use]
    pub fn with_clear_on_back(mut self, clear: bool) -> Self {
        self.clear_on_back = clear;
        self
    }

    /// Open the detail view for `theme`
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::InvalidTransition`] unless in the overview.
    pub fn select(
        &mut self,
        theme: ThemeId,
        spring: &mut ZoomSpringController,
    ) -> Result<(), ShellError> {
        self.apply(ShellEvent::Select(theme), spring)
    }

    /// Return to the overview
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::InvalidTransition`] unless in the detail view.
    pub fn back(&mut self, spring: &mut ZoomSpringController) -> Result<(), ShellError> {
        self.apply(ShellEvent::Back, spring)
    }

    /// Apply an event
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::InvalidTransition`] if the event is not legal in
    /// the current mode. State is left untouched in that case.
    pub fn apply(
        &mut self,
        event: ShellEvent,
        spring: &mut ZoomSpringController,
    ) -> Result<(), ShellError> {
        match (self.mode, event) {
            (ViewMode::Overview, ShellEvent::Select(theme)) => {
                self.selection = Some(theme);
                self.mode = ViewMode::Detail;
            }
            (ViewMode::Detail, ShellEvent::Back) => {
                if self.clear_on_back {
                    self.selection = None;
                }
                self.mode = ViewMode::Overview;
            }
            (state, event) => {
                tracing::warn!(%event, %state, "Rejected view transition");
                return Err(ShellError::InvalidTransition { event, state });
            }
        }

        spring.target_mode(self.mode);
        tracing::debug!(
            %event,
            mode = %self.mode,
            selection = ?self.selection,
            target = spring.target(),
            "View transition"
        );
        Ok(())
    }

    /// Current mode
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Selected theme, if any
    #[must_use]
    pub fn selection(&self) -> Option<ThemeId> {
        self.selection
    }

    /// Whether `back()` clears the selection
    #[must_use]
    pub fn clears_on_back(&self) -> bool {
        self.clear_on_back
    }
}
