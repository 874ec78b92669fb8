//! Theme Catalog
//!
//! The three selectable themes and their display attributes. The palette
//! values are the sphere gradient stops and shadow tints the shell is drawn
//! with:
//!
//! - Organization: emerald
//! - Systems: ruby
//! - Terminology: amber

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShellError;

// ============================================================================
// Colors
// ============================================================================

/// Opaque RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Build a color from its channels
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS-style hex notation (`#rrggbb`)
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// RGB color with alpha, used for shadows
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Color channels
    pub rgb: Rgb,
    /// Opacity in 0.0..=1.0
    pub alpha: f32,
}

impl Rgba {
    /// Build a translucent color
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            rgb: Rgb::new(r, g, b),
            alpha,
        }
    }
}

// ============================================================================
// Theme Ids
// ============================================================================

/// Identifier of a selectable theme
///
/// The set is closed: every lookup by `ThemeId` is an exhaustive match and
/// cannot miss. Ids arriving as free-form strings go through [`FromStr`],
/// which is where an unknown id is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeId {
    /// Emerald sphere
    Organization,
    /// Ruby sphere
    Systems,
    /// Amber sphere
    Terminology,
}

impl ThemeId {
    /// All themes, in sphere slot order
    pub const ALL: [ThemeId; 3] = [Self::Organization, Self::Systems, Self::Terminology];

    /// The id as text
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::Systems => "Systems",
            Self::Terminology => "Terminology",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ShellError::UnknownTheme { id: s.to_string() })
    }
}

// ============================================================================
// Definitions
// ============================================================================

/// Colors a sphere and its label are drawn with
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Outer gradient stop of the sphere body
    pub background: Rgb,
    /// Middle gradient stop, just off the white highlight
    pub highlight: Rgb,
    /// Glow cast beneath the sphere
    pub shadow: Rgba,
    /// Label color
    pub text: Rgb,
}

/// Static display record for one theme
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ThemeDefinition {
    /// Theme id
    pub id: ThemeId,
    /// Title shown on the sphere and in the detail pane
    pub title: &'static str,
    /// Name of the color family
    pub color_name: &'static str,
    /// Colors
    pub palette: Palette,
}

static ORGANIZATION: ThemeDefinition = ThemeDefinition {
    id: ThemeId::Organization,
    title: "Organization",
    color_name: "emerald",
    palette: Palette {
        background: Rgb::new(167, 243, 208),
        highlight: Rgb::new(236, 253, 245),
        shadow: Rgba::new(16, 185, 129, 0.4),
        text: Rgb::new(2, 44, 34),
    },
};

static SYSTEMS: ThemeDefinition = ThemeDefinition {
    id: ThemeId::Systems,
    title: "Systems",
    color_name: "ruby",
    palette: Palette {
        background: Rgb::new(254, 205, 211),
        highlight: Rgb::new(255, 241, 242),
        shadow: Rgba::new(225, 29, 72, 0.4),
        text: Rgb::new(76, 5, 25),
    },
};

static TERMINOLOGY: ThemeDefinition = ThemeDefinition {
    id: ThemeId::Terminology,
    title: "Terminology",
    color_name: "amber",
    palette: Palette {
        background: Rgb::new(253, 230, 138),
        highlight: Rgb::new(255, 251, 235),
        shadow: Rgba::new(245, 158, 11, 0.4),
        text: Rgb::new(69, 26, 3),
    },
};

// ============================================================================
// Catalog
// ============================================================================

/// Read-only mapping from theme id to its definition
#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeCatalog;

impl ThemeCatalog {
    /// Definition for a known id
    #[must_use]
    pub fn get(id: ThemeId) -> &'static ThemeDefinition {
        match id {
            ThemeId::Organization => &ORGANIZATION,
            ThemeId::Systems => &SYSTEMS,
            ThemeId::Terminology => &TERMINOLOGY,
        }
    }

    /// Definition for an id received as text
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::UnknownTheme`] if no theme has this id. There is
    /// no fallback definition.
    pub fn lookup(id: &str) -> Result<&'static ThemeDefinition, ShellError> {
        let id: ThemeId = id.parse()?;
        Ok(Self::get(id))
    }

    /// All definitions in sphere slot order
    pub fn iter() -> impl Iterator<Item = &'static ThemeDefinition> {
        ThemeId::ALL.into_iter().map(Self::get)
    }
}
