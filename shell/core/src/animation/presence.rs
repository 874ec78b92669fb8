//! Layer Presence
//!
//! Tracks whether a layer is entering, shown, exiting or gone, and how far
//! along it is. A layer that is exiting is still drawn until its exit has
//! finished. Reversing mid-way (hide while entering, show while exiting)
//! continues from the current level instead of jumping.

use serde::{Deserialize, Serialize};

use super::timing::EasingFunction;

/// Where a layer is in its enter/exit lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresencePhase {
    /// Fading in
    Entering,
    /// Fully present
    Shown,
    /// Fading out, still drawn
    Exiting,
    /// Not drawn
    Hidden,
}

/// Time-based enter/exit transition for one layer
#[derive(Clone, Debug)]
pub struct LayerPresence {
    phase: PresencePhase,
    /// Linear presence level, 0.0 = gone, 1.0 = fully present
    level: f64,
    /// Seconds for a full enter or exit
    duration: f64,
    easing: EasingFunction,
}

impl LayerPresence {
    /// A layer starting its entrance from nothing
    #[must_use]
    pub fn entering(duration: f64, easing: EasingFunction) -> Self {
        let mut presence = Self::hidden(duration, easing);
        presence.show();
        presence
    }

    /// A layer that is not drawn
    #[must_use]
    pub fn hidden(duration: f64, easing: EasingFunction) -> Self {
        Self {
            phase: PresencePhase::Hidden,
            level: 0.0,
            duration: duration.max(0.0),
            easing,
        }
    }

    /// Start (or resume) entering
    pub fn show(&mut self) {
        if matches!(self.phase, PresencePhase::Hidden | PresencePhase::Exiting) {
            self.phase = PresencePhase::Entering;
            self.settle_if_instant();
        }
    }

    /// Start (or resume) exiting
    pub fn hide(&mut self) {
        if matches!(self.phase, PresencePhase::Shown | PresencePhase::Entering) {
            self.phase = PresencePhase::Exiting;
            self.settle_if_instant();
        }
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f64) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }
        if self.duration <= 0.0 {
            self.settle_if_instant();
            return;
        }

        let step = dt / self.duration;
        match self.phase {
            PresencePhase::Entering => {
                self.level = (self.level + step).min(1.0);
                if self.level >= 1.0 {
                    self.phase = PresencePhase::Shown;
                }
            }
            PresencePhase::Exiting => {
                self.level = (self.level - step).max(0.0);
                if self.level <= 0.0 {
                    self.phase = PresencePhase::Hidden;
                }
            }
            PresencePhase::Shown | PresencePhase::Hidden => {}
        }
    }

    fn settle_if_instant(&mut self) {
        if self.duration > 0.0 {
            return;
        }
        match self.phase {
            PresencePhase::Entering => {
                self.level = 1.0;
                self.phase = PresencePhase::Shown;
            }
            PresencePhase::Exiting => {
                self.level = 0.0;
                self.phase = PresencePhase::Hidden;
            }
            PresencePhase::Shown | PresencePhase::Hidden => {}
        }
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> PresencePhase {
        self.phase
    }

    /// Whether the layer should be drawn at all
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != PresencePhase::Hidden
    }

    /// Eased presence amount, 0.0 = gone, 1.0 = fully present
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.easing.apply(self.level)
    }
}
