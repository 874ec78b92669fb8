//! Theme and Colors
//!
//! Terminal colors for the shell. Sphere and pane colors come from the theme
//! catalog; this module turns them into ratatui colors and fakes layer
//! opacity by blending toward the backdrop, since terminals have no alpha.

use omnipository_core::Rgb;
use ratatui::style::Color;

// ============================================================================
// Backdrop
// ============================================================================

/// Backdrop behind both layers, an off-white
pub const BACKDROP: Rgb = Rgb::new(252, 253, 254);

/// Backdrop as a terminal color
pub const BACKDROP_COLOR: Color = Color::Rgb(252, 253, 254);

/// Default ink on the backdrop (deep sky)
pub const INK: Rgb = Rgb::new(8, 47, 73);

// ============================================================================
// Chrome
// ============================================================================

/// Key hints in the status bar
pub const HINT_COLOR: Color = Color::Rgb(120, 120, 135);

/// Key names in the status bar
pub const HINT_KEY_COLOR: Color = Color::Rgb(8, 47, 73);

/// Rail markers on the detail pane
pub const MARKER: Rgb = INK;

// ============================================================================
// Conversion
// ============================================================================

/// Catalog color to terminal color
#[must_use]
pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Blend `rgb` toward the backdrop; `opacity` 1.0 keeps it unchanged
#[must_use]
pub fn faded(rgb: Rgb, opacity: f64) -> Color {
    color(mix(BACKDROP, rgb, opacity))
}

/// Linear mix from `from` (t = 0) to `to` (t = 1)
#[must_use]
pub fn mix(from: Rgb, to: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| {
        let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
        // Clamped to 0..=255 above
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = v.round() as u8;
        v
    };
    Rgb::new(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion() {
        assert_eq!(color(Rgb::new(1, 2, 3)), Color::Rgb(1, 2, 3));
        assert_eq!(color(BACKDROP), BACKDROP_COLOR);
        assert_eq!(color(INK), HINT_KEY_COLOR);
    }

    #[test]
    fn test_faded_endpoints() {
        let ruby = Rgb::new(225, 29, 72);
        assert_eq!(faded(ruby, 1.0), Color::Rgb(225, 29, 72));
        assert_eq!(faded(ruby, 0.0), BACKDROP_COLOR);
        assert_eq!(faded(ruby, 7.0), Color::Rgb(225, 29, 72));
    }

    #[test]
    fn test_mix_midpoint() {
        let mid = mix(Rgb::new(0, 0, 0), Rgb::new(200, 100, 50), 0.5);
        assert_eq!(mid, Rgb::new(100, 50, 25));
    }
}
