//! Animation - Time-Driven Values
//!
//! Everything in the shell that changes smoothly over time rather than
//! jumping on an event:
//!
//! - [`ZoomSpringController`]: physical spring for the overview zoom scale
//! - [`LayerPresence`]: eased enter/exit transitions for the two layers
//! - [`EasingFunction`]: the curves those transitions follow
//!
//! All of them advance only through an explicit `tick(dt)` and are
//! frame-rate independent: the same total time gives the same value however
//! it is split into frames.

mod presence;
mod spring;
mod timing;

pub use presence::{LayerPresence, PresencePhase};
pub use spring::{SpringConfig, ZoomSpringController};
pub use timing::EasingFunction;
