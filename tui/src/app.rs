//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin frame driver:
//! - Event loop (keyboard, mouse, resize)
//! - Ticks the [`Shell`] once per frame
//! - Renders the shell's [`ViewModel`]
//!
//! The app only offers events that are legal in the current mode, and only
//! while nothing is queued, so the shell never sees a wiring error from a
//! correct keypress. If it reports one anyway, the app stops with it.

use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use omnipository_core::{
    BodyId, ConfigError, PointerEvent, Shell, ShellConfig, ShellError, ShellEvent, ThemeId,
    ViewMode, ViewModel,
};
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{Frame, Terminal};
use tokio::time::MissedTickBehavior;

use crate::theme::{BACKDROP_COLOR, HINT_COLOR, HINT_KEY_COLOR};
use crate::viewport::Viewport;
use crate::widgets::{DetailWidget, OverviewWidget};

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// The headless shell
    shell: Shell,
    /// Time per frame
    frame_duration: Duration,
    /// When the last frame ran
    last_frame: Instant,
    /// Mapping for the overview area, updated every draw
    viewport: Viewport,
    /// Sphere the left button went down on
    press_target: Option<BodyId>,
}

impl App {
    /// Create the app around a fresh shell
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not validate.
    pub fn new(config: ShellConfig) -> Result<Self, ConfigError> {
        let frame_duration = config.frame_duration();
        Ok(Self {
            running: true,
            shell: Shell::new(config)?,
            frame_duration,
            last_frame: Instant::now(),
            viewport: Viewport::new(Rect::new(0, 0, 80, 23)),
            press_target: None,
        })
    }

    /// Is the app still running?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The shell being driven
    #[must_use]
    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Main event loop
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails or the shell rejects an event.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();
        let mut ticker = tokio::time::interval(self.frame_duration);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // Render initial frame immediately
        self.draw(terminal)?;
        self.last_frame = Instant::now();

        while self.running {
            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(&event),
                    Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                    None => self.running = false,
                },

                // Frame tick
                _ = ticker.tick() => {
                    self.update()?;
                    self.draw(terminal)?;
                }
            }
        }

        tracing::info!(frames = self.shell.frames(), "Event loop finished");
        Ok(())
    }

    /// Route a terminal event
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            // Only handle Press events (not Release or Repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "Terminal resized");
            }
            _ => {}
        }
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            // Quit
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }

            // Pick a theme
            KeyCode::Char(c @ '1'..='3') => {
                let slot = c as usize - '1' as usize;
                self.offer(ShellEvent::Select(ThemeId::ALL[slot]));
            }

            // Back to the overview
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                self.offer(ShellEvent::Back);
            }

            _ => {}
        }
    }

    /// Handle mouse input
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let target = self
            .viewport
            .cell_to_point(mouse.column, mouse.row)
            .and_then(|(x, y)| self.shell.pick(x, y));

        match mouse.kind {
            MouseEventKind::Moved => self.shell.pointer(PointerEvent::Hover(target)),
            MouseEventKind::Down(MouseButton::Left) => {
                self.press_target = target;
                if let Some(id) = target {
                    self.shell.pointer(PointerEvent::Press(id));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.shell.pointer(PointerEvent::Release);
                // A click is a press and release on the same sphere
                if let (Some(pressed), Some(released)) = (self.press_target.take(), target) {
                    if pressed == released {
                        self.offer(ShellEvent::Select(ThemeId::ALL[pressed.index()]));
                    }
                }
            }
            _ => {}
        }
    }

    /// Queue `event` if it is legal once the queue drains
    fn offer(&mut self, event: ShellEvent) {
        if self.shell.pending() > 0 {
            return;
        }
        let legal = matches!(
            (self.shell.mode(), event),
            (ViewMode::Overview, ShellEvent::Select(_)) | (ViewMode::Detail, ShellEvent::Back)
        );
        if legal {
            self.shell.enqueue(event);
        } else {
            tracing::trace!(%event, mode = %self.shell.mode(), "Ignoring input");
        }
    }

    /// Advance the shell by the wall-clock time since the last frame
    fn update(&mut self) -> Result<(), ShellError> {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;
        self.step(dt)
    }

    /// Advance the shell by `dt` seconds
    ///
    /// # Errors
    ///
    /// Returns the shell's error if a queued event was rejected.
    pub fn step(&mut self, dt: f64) -> Result<(), ShellError> {
        self.shell.frame(dt)
    }

    /// Render the UI
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be drawn to.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let view = self.shell.view_model();
        terminal
            .draw(|frame| self.render(frame, &view))
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame<'_>, view: &ViewModel) {
        let [main, status] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
        self.viewport = Viewport::new(main);

        frame.render_widget(Block::default().style(Style::default().bg(BACKDROP_COLOR)), main);

        if let Some(overview) = &view.overview {
            frame.render_widget(OverviewWidget::new(overview, self.viewport), main);
        }

        if let Some(detail) = &view.detail {
            let pane = pane_area(main);
            let drop = self.viewport.rows_for(detail.style.offset_y);
            let pane = Rect {
                y: pane.y + drop.min(pane.height),
                height: pane.height.saturating_sub(drop),
                ..pane
            };
            frame.render_widget(DetailWidget::new(detail), pane);
        }

        frame.render_widget(
            Paragraph::new(status_line(view.mode)).style(Style::default().bg(BACKDROP_COLOR)),
            status,
        );
    }
}

/// Centered area for the detail pane
fn pane_area(area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage(5),
        Constraint::Percentage(90),
        Constraint::Percentage(5),
    ])
    .areas(area);
    let [_, pane, _] = Layout::horizontal([
        Constraint::Percentage(5),
        Constraint::Percentage(90),
        Constraint::Percentage(5),
    ])
    .areas(middle);
    pane
}

fn status_line(mode: ViewMode) -> Line<'static> {
    let hints: &[(&str, &str)] = match mode {
        ViewMode::Overview => &[("1-3", "open theme"), ("click", "open sphere"), ("q", "quit")],
        ViewMode::Detail => &[("esc/b", "back"), ("q", "quit")],
    };
    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(format!(" {key} "), Style::default().fg(HINT_KEY_COLOR)));
        spans.push(Span::styled(format!("{action} "), Style::default().fg(HINT_COLOR)));
    }
    Line::from(spans)
}
