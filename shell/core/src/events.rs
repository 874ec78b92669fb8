//! Shell Events
//!
//! Input that flows from a surface into the shell. Surfaces translate their
//! native input (keys, clicks, touches) into these; the shell never sees
//! anything device-specific.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::physics::BodyId;
use crate::theme::ThemeId;

/// A view transition request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "theme", rename_all = "snake_case")]
pub enum ShellEvent {
    /// Open the detail view for a theme (overview only)
    Select(ThemeId),
    /// Return to the overview (detail only)
    Back,
}

impl fmt::Display for ShellEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(id) => write!(f, "select({id})"),
            Self::Back => f.write_str("back()"),
        }
    }
}

/// Pointer state over the spheres, used for hover/press feedback
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Pointer is over this sphere, or over none
    Hover(Option<BodyId>),
    /// Button went down on this sphere
    Press(BodyId),
    /// Button went up anywhere
    Release,
}
