//! Omnipository Runner - Headless Frame Driver
//!
//! Runs the shell for a fixed number of frames with a fixed time step and
//! prints the resulting view model as JSON. Events can be scripted at given
//! frames, which makes the runner handy for inspecting the simulation and
//! for driving the shell from other tools.
//!
//! # Usage
//!
//! ```bash
//! # Let the spheres settle and print the final view
//! omnipository-runner --ticks 200
//!
//! # Open Systems at frame 10, go back at frame 200, print every frame
//! omnipository-runner --ticks 400 --script "10:select:Systems,200:back" --every-frame
//!
//! # With config file
//! omnipository-runner --config ./shell.toml
//!
//! # Verbose logging (stderr)
//! RUST_LOG=debug omnipository-runner
//! ```

mod script;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use omnipository_core::{
    load_config, load_config_from_path, ConfigOverrides, Shell, ShellConfig, ViewModel,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use script::Script;

/// Omnipository Runner - drive the shell headlessly and print JSON
#[derive(Parser, Debug)]
#[command(name = "omnipository-runner")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of frames to run
    #[arg(short = 'n', long, default_value_t = 200)]
    ticks: u64,

    /// Seconds per frame (defaults to 1/fps from the configuration)
    #[arg(long, value_name = "SECONDS")]
    dt: Option<f64>,

    /// Scheduled events, e.g. "10:select:Systems,200:back"
    #[arg(short = 's', long, value_name = "SCRIPT")]
    script: Option<Script>,

    /// Print one JSON line per frame instead of only the final view
    #[arg(long)]
    every_frame: bool,

    /// Configuration file path
    #[arg(short = 'c', long, env = "OMNIPOSITORY_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Separation threshold override
    #[arg(long, value_name = "UNITS")]
    threshold: Option<f64>,

    /// Spring stiffness override
    #[arg(long)]
    stiffness: Option<f64>,

    /// Spring damping override
    #[arg(long)]
    damping: Option<f64>,

    /// Forget the selected theme when returning to the overview
    #[arg(long)]
    clear_selection_on_back: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "OMNIPOSITORY_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides::new();
        overrides.threshold = self.threshold;
        overrides.stiffness = self.stiffness;
        overrides.damping = self.damping;
        if self.clear_selection_on_back {
            overrides.clear_selection_on_back = Some(true);
        }
        overrides
    }
}

/// One line of `--every-frame` output
#[derive(Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    #[serde(flatten)]
    view: &'a ViewModel,
}

/// Initialize logging to stderr, leaving stdout for JSON
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "omnipository_runner={level},omnipository_core={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    Ok(())
}

fn resolve_config(args: &Args) -> Result<ShellConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_from_path(Some(path.clone()))
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => load_config().context("Failed to load config")?,
    };

    args.overrides().apply(&mut config);
    config.validate().context("Invalid configuration")?;

    info!(source = %config.source(), "Configuration resolved");
    Ok(config)
}

/// Run `ticks` frames, queueing scripted events before their frame
///
/// Writes a JSON line per frame when `every_frame` is set and returns the
/// final view model.
fn run(
    shell: &mut Shell,
    script: &Script,
    ticks: u64,
    dt: f64,
    every_frame: bool,
    out: &mut impl Write,
) -> Result<ViewModel> {
    if let Some(last) = script.last_tick() {
        if last >= ticks {
            warn!(last, ticks, "Script has events past the last frame");
        }
    }

    for tick in 0..ticks {
        for event in script.events_at(tick) {
            debug!(tick, %event, "Scripted event");
            shell.enqueue(event);
        }

        shell
            .frame(dt)
            .with_context(|| format!("Shell rejected an event at frame {tick}"))?;

        if every_frame {
            let view = shell.view_model();
            let record = FrameRecord { frame: tick, view: &view };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        }
    }

    Ok(shell.view_model())
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level)?;

    info!("Omnipository runner starting");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = resolve_config(&args)?;
    let dt = args.dt.unwrap_or_else(|| config.frame_duration().as_secs_f64());
    anyhow::ensure!(dt.is_finite() && dt > 0.0, "--dt must be positive, got {dt}");

    let script = args.script.clone().unwrap_or_default();
    info!(ticks = args.ticks, dt, events = script.len(), "Running");

    let mut shell = Shell::new(config).context("Invalid configuration")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let view = run(&mut shell, &script, args.ticks, dt, args.every_frame, &mut out)?;

    if !args.every_frame {
        serde_json::to_writer_pretty(&mut out, &view)?;
        writeln!(out)?;
    }

    info!(frames = shell.frames(), mode = %shell.mode(), "Finished");
    Ok(())
}
