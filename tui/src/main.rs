//! Omnipository TUI Entry Point
//!
//! Launches the terminal surface for the omnipository shell.
//!
//! Usage:
//!   omnipository-tui [OPTIONS]
//!
//! Options:
//!   --config <FILE>       Configuration file (default: ~/.config/omnipository/shell.toml)
//!   --fps <N>             Frame rate override
//!   --log-level <LEVEL>   Log level for the log file (default: info)
//!
//! Logs go to `~/.cache/omnipository/tui.log` so they never draw over the UI.

use std::fs;
use std::io::{self, IsTerminal};
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use omnipository_core::{load_config, load_config_from_path, ConfigOverrides, ShellConfig};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use omnipository_tui::App;

/// Omnipository TUI - the shell in a terminal
#[derive(Parser, Debug)]
#[command(name = "omnipository-tui")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long, env = "OMNIPOSITORY_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Frame rate override
    #[arg(long)]
    fps: Option<u32>,

    /// Forget the selected theme when returning to the overview
    #[arg(long)]
    clear_selection_on_back: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "OMNIPOSITORY_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

/// Log file location
fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("omnipository").join("tui.log"))
}

/// Initialize logging to a file; without a cache directory nothing is logged
fn init_logging(level: &str) -> Result<Option<PathBuf>> {
    let Some(path) = default_log_path() else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {parent:?}"))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {path:?}"))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "omnipository_tui={level},omnipository_core={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();

    Ok(Some(path))
}

fn resolve_config(args: &Args) -> Result<ShellConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_from_path(Some(path.clone()))
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => load_config().context("Failed to load config")?,
    };

    let mut overrides = ConfigOverrides::new();
    overrides.fps = args.fps;
    if args.clear_selection_on_back {
        overrides.clear_selection_on_back = Some(true);
    }
    overrides.apply(&mut config);
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Check if we have a TTY before attempting initialization
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: omnipository-tui requires a terminal (TTY)");
        eprintln!();
        eprintln!("For headless use, run omnipository-runner instead.");
        std::process::exit(1);
    }

    let log_path = init_logging(&args.log_level)?;
    let config = resolve_config(&args)?;

    tracing::info!("Omnipository TUI starting");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!(log = ?log_path, source = %config.source(), fps = config.fps, "Configured");

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let mut app = App::new(config)?;
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "TUI stopped with an error");
    }

    // Propagate any errors
    result
}
