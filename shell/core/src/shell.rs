//! The Shell Aggregate
//!
//! [`Shell`] owns every stateful component and is the only thing a frame
//! driver talks to. One call to [`Shell::frame`] is one animation frame:
//!
//! 1. the integrator runs (a no-op unless in the overview)
//! 2. the zoom spring and layer transitions advance by `dt`
//! 3. queued input events are applied in arrival order
//!
//! Steps 1 and 2 see the mode as it was when the frame began; an event
//! queued during frame N first affects the physics of frame N+1.

use std::collections::VecDeque;

use crate::animation::{LayerPresence, ZoomSpringController};
use crate::config::{ConfigError, ShellConfig};
use crate::error::ShellError;
use crate::events::{PointerEvent, ShellEvent};
use crate::physics::{BodyId, Position, PositionIntegrator, BODY_COUNT};
use crate::render::{render, ViewModel};
use crate::theme::ThemeId;
use crate::view::{ViewMode, ViewStateMachine};

/// Headless shell state
#[derive(Clone, Debug)]
pub struct Shell {
    integrator: PositionIntegrator,
    spring: ZoomSpringController,
    view: ViewStateMachine,
    overview: LayerPresence,
    detail: LayerPresence,
    /// Theme the detail layer shows, kept while it exits
    shown_theme: Option<ThemeId>,
    hovered: Option<BodyId>,
    pressed: Option<BodyId>,
    queue: VecDeque<ShellEvent>,
    frames: u64,
}

impl Shell {
    /// Build a shell in the overview, with the overview layer fading in
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if `config` fails
    /// [`ShellConfig::validate`].
    pub fn new(config: ShellConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(&config))
    }

    fn from_valid(config: &ShellConfig) -> Self {
        let duration = config.transition.duration.as_secs_f64();
        let easing = config.transition.easing;

        tracing::debug!(
            threshold = config.physics.threshold,
            push_factor = config.physics.push_factor,
            stiffness = config.spring.stiffness,
            damping = config.spring.damping,
            clear_selection_on_back = config.clear_selection_on_back,
            source = %config.source(),
            "Creating shell"
        );

        Self {
            integrator: PositionIntegrator::new(
                config.physics.threshold,
                config.physics.push_factor,
            ),
            spring: ZoomSpringController::new(config.spring, ViewMode::Overview),
            view: ViewStateMachine::new().with_clear_on_back(config.clear_selection_on_back),
            overview: LayerPresence::entering(duration, easing),
            detail: LayerPresence::hidden(duration, easing),
            shown_theme: None,
            hovered: None,
            pressed: None,
            queue: VecDeque::new(),
            frames: 0,
        }
    }

    /// Replace the integrator, e.g. to start from other positions
    #[must_use]
    pub fn with_integrator(mut self, integrator: PositionIntegrator) -> Self {
        self.integrator = integrator;
        self
    }

    /// Queue an event for the end of the next frame
    pub fn enqueue(&mut self, event: ShellEvent) {
        tracing::trace!(%event, pending = self.queue.len(), "Queued event");
        self.queue.push_back(event);
    }

    /// Number of events waiting for the next frame
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Advance one frame of `dt` seconds, then apply queued events
    ///
    /// # Errors
    ///
    /// Returns the first [`ShellError`] raised by a queued event. Events
    /// queued after it are discarded.
    pub fn frame(&mut self, dt: f64) -> Result<(), ShellError> {
        let mode = self.view.mode();
        self.integrator.tick(mode);
        self.spring.tick(dt);
        self.overview.tick(dt);
        self.detail.tick(dt);
        self.frames += 1;

        tracing::trace!(
            frame = self.frames,
            %mode,
            scale = self.spring.value(),
            "Frame"
        );

        while let Some(event) = self.queue.pop_front() {
            if let Err(e) = self.dispatch(event) {
                let discarded = self.queue.len();
                self.queue.clear();
                tracing::error!(error = %e, discarded, "Dropping queued events");
                return Err(e);
            }
        }
        Ok(())
    }

    /// Apply an event now, outside the frame cycle
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::InvalidTransition`] if the event is not legal in
    /// the current mode.
    pub fn dispatch(&mut self, event: ShellEvent) -> Result<(), ShellError> {
        self.view.apply(event, &mut self.spring)?;

        match event {
            ShellEvent::Select(theme) => {
                self.shown_theme = Some(theme);
                self.hovered = None;
                self.pressed = None;
                self.overview.hide();
                self.detail.show();
            }
            ShellEvent::Back => {
                self.detail.hide();
                self.overview.show();
            }
        }
        Ok(())
    }

    /// Open the detail view for `theme` now
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::InvalidTransition`] unless in the overview.
    pub fn select(&mut self, theme: ThemeId) -> Result<(), ShellError> {
        self.dispatch(ShellEvent::Select(theme))
    }

    /// Return to the overview now
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::InvalidTransition`] unless in the detail view.
    pub fn back(&mut self) -> Result<(), ShellError> {
        self.dispatch(ShellEvent::Back)
    }

    /// Update hover/press feedback
    ///
    /// Ignored outside the overview.
    pub fn pointer(&mut self, event: PointerEvent) {
        if self.view.mode() != ViewMode::Overview {
            return;
        }
        match event {
            PointerEvent::Hover(id) => self.hovered = id,
            PointerEvent::Press(id) => self.pressed = Some(id),
            PointerEvent::Release => self.pressed = None,
        }
    }

    /// Sphere under a point given relative to the overview center
    ///
    /// The point is in screen units, so it is divided by the current zoom
    /// scale before comparing with body positions. Later bodies are drawn on
    /// top and win overlaps.
    #[must_use]
    pub fn pick(&self, x: f64, y: f64) -> Option<BodyId> {
        if self.view.mode() != ViewMode::Overview || !self.overview.is_visible() {
            return None;
        }
        let scale = self.spring.value();
        if scale <= 0.0 {
            return None;
        }

        let point = Position::new(x / scale, y / scale);
        let radius = self.integrator.threshold() / 2.0;
        BodyId::ALL
            .into_iter()
            .rev()
            .find(|&id| self.integrator.position(id).distance(point) <= radius)
    }

    /// Current mode
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.view.mode()
    }

    /// Selected theme, if any
    #[must_use]
    pub fn selection(&self) -> Option<ThemeId> {
        self.view.selection()
    }

    /// Current zoom scale
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.spring.value()
    }

    /// Body centers, in body order
    #[must_use]
    pub fn positions(&self) -> [Position; BODY_COUNT] {
        BodyId::ALL.map(|id| self.integrator.position(id))
    }

    /// Frames advanced so far
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The repulsion simulation
    #[must_use]
    pub fn integrator(&self) -> &PositionIntegrator {
        &self.integrator
    }

    /// The zoom spring
    #[must_use]
    pub fn spring(&self) -> &ZoomSpringController {
        &self.spring
    }

    /// Overview layer transition
    #[must_use]
    pub fn overview_presence(&self) -> &LayerPresence {
        &self.overview
    }

    /// Detail layer transition
    #[must_use]
    pub fn detail_presence(&self) -> &LayerPresence {
        &self.detail
    }

    /// Theme the detail layer is showing or last showed
    #[must_use]
    pub fn shown_theme(&self) -> Option<ThemeId> {
        self.shown_theme
    }

    /// Hovered sphere
    #[must_use]
    pub fn hovered(&self) -> Option<BodyId> {
        self.hovered
    }

    /// Pressed sphere
    #[must_use]
    pub fn pressed(&self) -> Option<BodyId> {
        self.pressed
    }

    /// Render the current state
    #[must_use]
    pub fn view_model(&self) -> ViewModel {
        render(self)
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::from_valid(&ShellConfig::default())
    }
}
