//! Omnipository Core - Headless Engine for the Omnipository Shell
//!
//! This crate holds every piece of the shell that has behavior: the sphere
//! repulsion simulation, the zoom spring, the overview/detail state machine
//! and the projection that turns all of it into something a renderer can
//! draw. It has no idea what a terminal, a window or a browser is.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Frame Drivers / Renderers                 │
//! │   ┌───────────────┐   ┌────────────────┐   ┌──────────────┐  │
//! │   │      TUI      │   │ Headless runner│   │    Tests     │  │
//! │   │   (ratatui)   │   │     (JSON)     │   │              │  │
//! │   └───────┬───────┘   └───────┬────────┘   └──────┬───────┘  │
//! │           └──────── ShellEvent (up) ──────────────┘          │
//! │                     ViewModel (down)                          │
//! └───────────────────────────┬──────────────────────────────────┘
//!                             │
//! ┌───────────────────────────┼──────────────────────────────────┐
//! │                         Shell                                 │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────┐ ┌──────────┐ │
//! │  │  Position    │ │  ZoomSpring  │ │   View   │ │  Theme   │ │
//! │  │  Integrator  │ │  Controller  │ │  State   │ │ Catalog  │ │
//! │  └──────────────┘ └──────────────┘ └──────────┘ └──────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Shell`]: owns every component and exposes the per-frame entry point
//! - [`PositionIntegrator`]: pairwise repulsion over the three bodies
//! - [`ZoomSpringController`]: damped spring driving the zoom scale
//! - [`ViewStateMachine`]: overview/detail modes and the selected theme
//! - [`ThemeCatalog`]: titles and palettes for the three themes
//! - [`ViewModel`]: what a renderer reads after each frame
//!
//! # Quick Start
//!
//! ```
//! use omnipository_core::{Shell, ShellConfig, ShellEvent, ThemeId, ViewMode};
//!
//! let mut shell = Shell::new(ShellConfig::default()).unwrap();
//! shell.enqueue(ShellEvent::Select(ThemeId::Systems));
//! shell.frame(1.0 / 60.0).unwrap();
//! assert_eq!(shell.mode(), ViewMode::Detail);
//! ```
//!
//! # No UI Dependencies
//!
//! This crate never depends on ratatui, crossterm or any other UI framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod animation;
pub mod config;
pub mod error;
pub mod events;
pub mod physics;
pub mod render;
pub mod shell;
pub mod theme;
pub mod view;

pub use animation::{EasingFunction, LayerPresence, PresencePhase, ZoomSpringController};
pub use config::{load_config, load_config_from_path, ConfigError, ConfigOverrides, ShellConfig};
pub use error::ShellError;
pub use events::{PointerEvent, ShellEvent};
pub use physics::{Body, BodyId, InvalidBodySlot, Position, PositionIntegrator, BODY_COUNT};
pub use render::{render, DetailModel, LayerStyle, OverviewModel, SphereModel, ViewModel};
pub use shell::Shell;
pub use theme::{Palette, Rgb, Rgba, ThemeCatalog, ThemeDefinition, ThemeId};
pub use view::{ViewMode, ViewStateMachine};
