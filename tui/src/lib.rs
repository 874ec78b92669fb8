//! Omnipository TUI - Terminal surface for the omnipository shell
//!
//! Draws the shell's view model in a terminal and feeds keyboard and mouse
//! input back to it.
//!
//! # Architecture
//!
//! - **App**: frame driver and input mapping around the headless `Shell`
//! - **Widgets**: one per layer (overview canvas, detail pane)
//! - **Viewport**: terminal cells to and from shell screen space
//! - **Theme**: catalog colors as terminal colors

pub mod app;
pub mod theme;
pub mod viewport;
pub mod widgets;

pub use app::App;
