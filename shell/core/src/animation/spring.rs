//! Zoom Spring
//!
//! A damped mass-spring pulling the zoom scale toward one of two targets.
//! Each tick solves the spring equation in closed form over `dt`, so the
//! result does not depend on the frame rate and large frame gaps cannot make
//! the integration blow up.

use serde::{Deserialize, Serialize};

use crate::view::ViewMode;

/// Damping ratios this close to 1 use the critically damped solution
const CRITICAL_TOLERANCE: f64 = 1e-6;

/// Physical parameters of the spring and the two targets it moves between
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    /// Restoring force per unit displacement
    pub stiffness: f64,
    /// Opposing force per unit velocity
    pub damping: f64,
    /// Moving mass
    pub mass: f64,
    /// Target while in the overview
    pub overview_scale: f64,
    /// Target while in the detail view
    pub detail_scale: f64,
}

impl SpringConfig {
    /// Target scale for a view mode
    #[must_use]
    pub fn target_for(&self, mode: ViewMode) -> f64 {
        match mode {
            ViewMode::Overview => self.overview_scale,
            ViewMode::Detail => self.detail_scale,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 50.0,
            damping: 25.0,
            mass: 1.0,
            overview_scale: 0.6,
            detail_scale: 1.2,
        }
    }
}

/// Spring-damped scalar owned by the shell and read by renderers
#[derive(Clone, Debug)]
pub struct ZoomSpringController {
    value: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl ZoomSpringController {
    /// Create a controller resting at the target for `mode`
    #[must_use]
    pub fn new(config: SpringConfig, mode: ViewMode) -> Self {
        let target = config.target_for(mode);
        Self {
            value: target,
            velocity: 0.0,
            target,
            config,
        }
    }

    /// Change the target, keeping the current value and velocity
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Point the spring at the target for `mode`
    pub fn target_mode(&mut self, mode: ViewMode) {
        self.set_target(self.config.target_for(mode));
    }

    /// Jump to `value` and stop
    pub fn set_immediate(&mut self, value: f64) {
        self.value = value;
        self.velocity = 0.0;
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f64) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }

        let (x, v) = self.solve(self.value - self.target, self.velocity, dt);
        self.value = self.target + x;
        self.velocity = v;
    }

    /// Displacement and velocity after `t` seconds, from `x0`/`v0`
    fn solve(&self, x0: f64, v0: f64, t: f64) -> (f64, f64) {
        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;

        let omega = (stiffness / mass).sqrt();
        let zeta = damping / (2.0 * (stiffness * mass).sqrt());

        if (zeta - 1.0).abs() < CRITICAL_TOLERANCE {
            // Critically damped
            let decay = (-omega * t).exp();
            let c = v0 + omega * x0;
            let x = (x0 + c * t) * decay;
            let v = (c - omega * (x0 + c * t)) * decay;
            (x, v)
        } else if zeta > 1.0 {
            // Overdamped: two real decay rates
            let root = omega * (zeta * zeta - 1.0).sqrt();
            let r1 = -zeta * omega + root;
            let r2 = -zeta * omega - root;
            let b = (v0 - r1 * x0) / (r2 - r1);
            let a = x0 - b;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (a * e1 + b * e2, a * r1 * e1 + b * r2 * e2)
        } else {
            // Underdamped: decaying oscillation
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            let b = (v0 + zeta * omega * x0) / omega_d;
            let x = decay * (x0 * cos + b * sin);
            let v = decay
                * ((b * omega_d - zeta * omega * x0) * cos - (x0 * omega_d + zeta * omega * b) * sin);
            (x, v)
        }
    }

    /// Current scale
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current rate of change
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Value the spring is pulling toward
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Spring parameters
    #[must_use]
    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Damping ratio (1.0 = critical, above = overdamped)
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.config.damping / (2.0 * (self.config.stiffness * self.config.mass).sqrt())
    }
}

impl Default for ZoomSpringController {
    fn default() -> Self {
        Self::new(SpringConfig::default(), ViewMode::Overview)
    }
}
