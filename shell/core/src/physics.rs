//! Sphere Repulsion
//!
//! Three bodies float in the overview and push each other apart whenever two
//! of them are closer than one sphere diameter. The rule is intentionally
//! lopsided: only the x coordinate is corrected, y is left alone.
//!
//! Pairs are visited in a fixed order and each correction is written back
//! before the next pair is measured, so a single tick is one sweep of an
//! iterative relaxation rather than an exact solve. Separation is reached
//! over several ticks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::ViewMode;

/// Number of simulated bodies
pub const BODY_COUNT: usize = 3;

/// Default separation distance, equal to the sphere diameter
pub const DEFAULT_THRESHOLD: f64 = 240.0;

/// Default fraction of the overlap corrected per tick
pub const DEFAULT_PUSH_FACTOR: f64 = 0.05;

/// Starting offsets from the overview center, in slot order
pub const INITIAL_POSITIONS: [Position; BODY_COUNT] = [
    Position::new(-150.0, -100.0),
    Position::new(180.0, 20.0),
    Position::new(-20.0, 150.0),
];

/// 2D point, relative to the overview center (y grows downwards)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset
    pub x: f64,
    /// Vertical offset
    pub y: f64,
}

impl Position {
    /// Build a position
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position
    #[must_use]
    pub fn distance(self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Whether both coordinates are finite
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Stable slot index of a body (0, 1 or 2)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize")]
pub struct BodyId(usize);

/// A slot index with no body behind it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no body in slot {0}")]
pub struct InvalidBodySlot(pub usize);

impl TryFrom<usize> for BodyId {
    type Error = InvalidBodySlot;

    fn try_from(slot: usize) -> Result<Self, Self::Error> {
        Self::new(slot).ok_or(InvalidBodySlot(slot))
    }
}

impl BodyId {
    /// All ids in slot order
    pub const ALL: [BodyId; BODY_COUNT] = [BodyId(0), BodyId(1), BodyId(2)];

    /// Id for a slot, if the slot exists
    #[must_use]
    pub fn new(slot: usize) -> Option<Self> {
        (slot < BODY_COUNT).then_some(Self(slot))
    }

    /// Slot index
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One floating sphere
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Slot id
    pub id: BodyId,
    /// Current center
    pub position: Position,
}

/// Per-tick repulsion over a fixed set of three bodies
#[derive(Clone, Debug)]
pub struct PositionIntegrator {
    bodies: [Body; BODY_COUNT],
    threshold: f64,
    push_factor: f64,
}

impl PositionIntegrator {
    /// Create an integrator with bodies at their starting positions
    #[must_use]
    pub fn new(threshold: f64, push_factor: f64) -> Self {
        Self::with_positions(INITIAL_POSITIONS, threshold, push_factor)
    }

    /// Create an integrator with bodies at the given positions
    #[must_use]
    pub fn with_positions(
        positions: [Position; BODY_COUNT],
        threshold: f64,
        push_factor: f64,
    ) -> Self {
        let bodies = [0, 1, 2].map(|i| Body {
            id: BodyId(i),
            position: positions[i],
        });
        Self {
            bodies,
            threshold,
            push_factor,
        }
    }

    /// Advance one frame
    ///
    /// Called every frame regardless of mode; outside the overview it returns
    /// immediately and positions stay where the last overview frame left them.
    pub fn tick(&mut self, mode: ViewMode) {
        if mode != ViewMode::Overview {
            return;
        }
        self.step();
    }

    /// One relaxation sweep over all pairs, ignoring the view mode
    pub fn step(&mut self) {
        for i in 0..BODY_COUNT {
            for j in (i + 1)..BODY_COUNT {
                self.separate(i, j);
            }
        }
    }

    fn separate(&mut self, i: usize, j: usize) {
        let a = self.bodies[i].position;
        let b = self.bodies[j].position;
        let dx = a.x - b.x;
        let d = a.distance(b);

        // Coincident bodies have no direction to push along
        if d <= 0.0 || d >= self.threshold {
            return;
        }

        let overlap = (self.threshold - d) * self.push_factor;
        let shift = (dx / d) * overlap;
        self.bodies[i].position.x += shift;
        self.bodies[j].position.x -= shift;
    }

    /// All bodies in slot order
    #[must_use]
    pub fn bodies(&self) -> &[Body; BODY_COUNT] {
        &self.bodies
    }

    /// Position of one body
    #[must_use]
    pub fn position(&self, id: BodyId) -> Position {
        self.bodies[id.index()].position
    }

    /// Separation distance
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Distance between two bodies
    #[must_use]
    pub fn distance(&self, a: BodyId, b: BodyId) -> f64 {
        self.position(a).distance(self.position(b))
    }

    /// Smallest distance over all pairs
    #[must_use]
    pub fn min_pair_distance(&self) -> f64 {
        let mut min = f64::INFINITY;
        for i in 0..BODY_COUNT {
            for j in (i + 1)..BODY_COUNT {
                min = min.min(self.bodies[i].position.distance(self.bodies[j].position));
            }
        }
        min
    }
}

impl Default for PositionIntegrator {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, DEFAULT_PUSH_FACTOR)
    }
}
