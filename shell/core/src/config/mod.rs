//! TOML Configuration File Support
//!
//! Tunables for the shell, loaded from `~/.config/omnipository/shell.toml`.
//! Every value has a default, and the defaults reproduce the stock shell
//! exactly, so the file is optional.
//!
//! # Configuration Priority
//!
//! Configuration values are loaded with the following priority (highest first):
//! 1. CLI arguments (applied by the caller through [`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [physics]
//! threshold = 240.0
//! push_factor = 0.05
//!
//! [spring]
//! stiffness = 50.0
//! damping = 25.0
//! mass = 1.0
//! overview_scale = 0.6
//! detail_scale = 1.2
//!
//! [transition]
//! duration_ms = 300
//! easing = "ease-out"
//!
//! [view]
//! clear_selection_on_back = false
//!
//! [frame]
//! fps = 60
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animation::{EasingFunction, SpringConfig};
use crate::physics::{DEFAULT_PUSH_FACTOR, DEFAULT_THRESHOLD};

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Physics section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsToml {
    /// Separation distance between sphere centers
    pub threshold: Option<f64>,

    /// Fraction of the overlap corrected per tick
    pub push_factor: Option<f64>,
}

/// Spring section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringToml {
    /// Spring stiffness
    pub stiffness: Option<f64>,

    /// Spring damping
    pub damping: Option<f64>,

    /// Moving mass
    pub mass: Option<f64>,

    /// Zoom target in the overview
    pub overview_scale: Option<f64>,

    /// Zoom target in the detail view
    pub detail_scale: Option<f64>,
}

/// Layer transition section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionToml {
    /// Enter/exit duration in milliseconds
    pub duration_ms: Option<u64>,

    /// Easing curve name (e.g. "ease-out")
    pub easing: Option<EasingFunction>,
}

/// View section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewToml {
    /// Whether returning to the overview forgets the selected theme
    pub clear_selection_on_back: Option<bool>,
}

/// Frame driver section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameToml {
    /// Target frames per second
    pub fps: Option<u32>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellToml {
    /// Physics configuration section
    pub physics: PhysicsToml,

    /// Spring configuration section
    pub spring: SpringToml,

    /// Transition configuration section
    pub transition: TransitionToml,

    /// View configuration section
    pub view: ViewToml,

    /// Frame configuration section
    pub frame: FrameToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Repulsion parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsConfig {
    /// Separation distance between sphere centers
    pub threshold: f64,
    /// Fraction of the overlap corrected per tick
    pub push_factor: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            push_factor: DEFAULT_PUSH_FACTOR,
        }
    }
}

/// Layer enter/exit transition parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionConfig {
    /// Time for a full enter or exit
    pub duration: Duration,
    /// Curve applied to transition progress
    pub easing: EasingFunction,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: EasingFunction::EaseOut,
        }
    }
}

/// Centralized configuration for the shell
///
/// Use [`load_config`] to load configuration with proper priority handling.
#[derive(Clone, Debug)]
pub struct ShellConfig {
    /// Repulsion parameters
    pub physics: PhysicsConfig,

    /// Zoom spring parameters
    pub spring: SpringConfig,

    /// Layer transitions
    pub transition: TransitionConfig,

    /// Whether `back()` clears the selected theme
    pub clear_selection_on_back: bool,

    /// Target frame rate for frame drivers
    pub fps: u32,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            spring: SpringConfig::default(),
            transition: TransitionConfig::default(),
            clear_selection_on_back: false,
            fps: 60,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl ShellConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Set the configuration source
    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = source;
    }

    /// Duration of one frame at the configured rate
    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }

    /// Check that every value is usable
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::ValidationError(format!(
                    "{name} must be a positive number, got {value}"
                )))
            }
        }

        positive("physics.threshold", self.physics.threshold)?;
        positive("physics.push_factor", self.physics.push_factor)?;
        if self.physics.push_factor > 0.5 {
            return Err(ConfigError::ValidationError(format!(
                "physics.push_factor must be at most 0.5, got {}",
                self.physics.push_factor
            )));
        }

        positive("spring.stiffness", self.spring.stiffness)?;
        positive("spring.mass", self.spring.mass)?;
        positive("spring.overview_scale", self.spring.overview_scale)?;
        positive("spring.detail_scale", self.spring.detail_scale)?;
        if !(self.spring.damping.is_finite() && self.spring.damping >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "spring.damping must be zero or positive, got {}",
                self.spring.damping
            )));
        }

        if !(1..=240).contains(&self.fps) {
            return Err(ConfigError::ValidationError(format!(
                "frame.fps must be between 1 and 240, got {}",
                self.fps
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/omnipository/shell.toml` or
/// `~/.config/omnipository/shell.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("omnipository").join("shell.toml"))
}

/// Load configuration from all sources with proper priority
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or if
/// the resulting values fail validation. A missing config file is not an
/// error (defaults are used).
pub fn load_config() -> Result<ShellConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path
///
/// # Arguments
///
/// * `path` - Optional path to the configuration file. If `None`, only defaults
///   and environment variables are used.
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed,
/// or if the resulting values fail validation.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<ShellConfig, ConfigError> {
    // Start with defaults
    let mut config = ShellConfig::default();

    // Try to load from file
    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: ShellToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    // Apply environment variables (overrides file values)
    apply_env_config(&mut config, |key| std::env::var(key).ok());

    config.validate()?;
    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut ShellConfig, toml: &ShellToml) {
    // Physics
    if let Some(threshold) = toml.physics.threshold {
        config.physics.threshold = threshold;
    }
    if let Some(push) = toml.physics.push_factor {
        config.physics.push_factor = push;
    }

    // Spring
    if let Some(stiffness) = toml.spring.stiffness {
        config.spring.stiffness = stiffness;
    }
    if let Some(damping) = toml.spring.damping {
        config.spring.damping = damping;
    }
    if let Some(mass) = toml.spring.mass {
        config.spring.mass = mass;
    }
    if let Some(scale) = toml.spring.overview_scale {
        config.spring.overview_scale = scale;
    }
    if let Some(scale) = toml.spring.detail_scale {
        config.spring.detail_scale = scale;
    }

    // Transitions
    if let Some(ms) = toml.transition.duration_ms {
        config.transition.duration = Duration::from_millis(ms);
    }
    if let Some(easing) = toml.transition.easing {
        config.transition.easing = easing;
    }

    // View
    if let Some(clear) = toml.view.clear_selection_on_back {
        config.clear_selection_on_back = clear;
    }

    // Frame
    if let Some(fps) = toml.frame.fps {
        config.fps = fps;
    }
}

/// Apply environment variable overrides to the config
///
/// `lookup` resolves a variable name to its value; production code passes
/// the process environment.
fn apply_env_config(config: &mut ShellConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(threshold) = lookup("OMNIPOSITORY_THRESHOLD") {
        if let Ok(v) = threshold.parse::<f64>() {
            config.physics.threshold = v;
            config.source = ConfigSource::Env;
        }
    }
    if let Some(push) = lookup("OMNIPOSITORY_PUSH_FACTOR") {
        if let Ok(v) = push.parse::<f64>() {
            config.physics.push_factor = v;
            config.source = ConfigSource::Env;
        }
    }
    if let Some(stiffness) = lookup("OMNIPOSITORY_STIFFNESS") {
        if let Ok(v) = stiffness.parse::<f64>() {
            config.spring.stiffness = v;
            config.source = ConfigSource::Env;
        }
    }
    if let Some(damping) = lookup("OMNIPOSITORY_DAMPING") {
        if let Ok(v) = damping.parse::<f64>() {
            config.spring.damping = v;
            config.source = ConfigSource::Env;
        }
    }
    if let Some(fps) = lookup("OMNIPOSITORY_FPS") {
        if let Ok(v) = fps.parse::<u32>() {
            config.fps = v;
            config.source = ConfigSource::Env;
        }
    }
    if let Some(clear) = lookup("OMNIPOSITORY_CLEAR_SELECTION_ON_BACK") {
        config.clear_selection_on_back = clear != "0" && clear.to_lowercase() != "false";
        config.source = ConfigSource::Env;
    }
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// Builder for applying CLI overrides to configuration
///
/// Use this after [`load_config`] to apply command-line argument overrides,
/// then call [`ShellConfig::validate`] again.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Separation threshold override
    pub threshold: Option<f64>,

    /// Spring stiffness override
    pub stiffness: Option<f64>,

    /// Spring damping override
    pub damping: Option<f64>,

    /// Frame rate override
    pub fps: Option<u32>,

    /// Clear-selection-on-back override
    pub clear_selection_on_back: Option<bool>,

    /// Transition duration override (milliseconds)
    pub transition_ms: Option<u64>,
}

impl ConfigOverrides {
    /// Create a new empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set threshold override
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Set stiffness override
    #[must_use]
    pub fn with_stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = Some(stiffness);
        self
    }

    /// Set damping override
    #[must_use]
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = Some(damping);
        self
    }

    /// Set frame rate override
    #[must_use]
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = Some(fps);
        self
    }

    /// Set clear-selection-on-back override
    #[must_use]
    pub fn with_clear_selection_on_back(mut self, clear: bool) -> Self {
        self.clear_selection_on_back = Some(clear);
        self
    }

    /// Set transition duration override
    #[must_use]
    pub fn with_transition_ms(mut self, ms: u64) -> Self {
        self.transition_ms = Some(ms);
        self
    }

    /// Whether any override is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.threshold.is_none()
            && self.stiffness.is_none()
            && self.damping.is_none()
            && self.fps.is_none()
            && self.clear_selection_on_back.is_none()
            && self.transition_ms.is_none()
    }

    /// Apply overrides to a configuration
    pub fn apply(&self, config: &mut ShellConfig) {
        if !self.is_empty() {
            config.source = ConfigSource::Cli;
        }

        if let Some(threshold) = self.threshold {
            config.physics.threshold = threshold;
        }
        if let Some(stiffness) = self.stiffness {
            config.spring.stiffness = stiffness;
        }
        if let Some(damping) = self.damping {
            config.spring.damping = damping;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(clear) = self.clear_selection_on_back {
            config.clear_selection_on_back = clear;
        }
        if let Some(ms) = self.transition_ms {
            config.transition.duration = Duration::from_millis(ms);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    // =========================================================================
    // Default Configuration Tests
    // =========================================================================

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();

        assert!((config.physics.threshold - 240.0).abs() < f64::EPSILON);
        assert!((config.physics.push_factor - 0.05).abs() < f64::EPSILON);
        assert!((config.spring.stiffness - 50.0).abs() < f64::EPSILON);
        assert!((config.spring.damping - 25.0).abs() < f64::EPSILON);
        assert!((config.spring.overview_scale - 0.6).abs() < f64::EPSILON);
        assert!((config.spring.detail_scale - 1.2).abs() < f64::EPSILON);
        assert_eq!(config.transition.duration, Duration::from_millis(300));
        assert_eq!(config.transition.easing, EasingFunction::EaseOut);
        assert!(!config.clear_selection_on_back);
        assert_eq!(config.fps, 60);
        assert_eq!(config.source(), ConfigSource::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_path() {
        if let Some(p) = default_config_path() {
            assert!(p.to_string_lossy().contains("omnipository"));
            assert!(p.to_string_lossy().ends_with("shell.toml"));
        }
    }

    #[test]
    fn test_frame_duration() {
        let config = ShellConfig {
            fps: 50,
            ..ShellConfig::default()
        };
        assert_eq!(config.frame_duration(), Duration::from_millis(20));
    }

    // =========================================================================
    // TOML Parsing Tests
    // =========================================================================

    #[test]
    fn test_parse_valid_toml() {
        let toml_content = r#"
[physics]
threshold = 200.0
push_factor = 0.1

[spring]
stiffness = 80.0
damping = 10.0
detail_scale = 1.5

[transition]
duration_ms = 500
easing = "ease-in-out"

[view]
clear_selection_on_back = true

[frame]
fps = 30
"#;
        let file = write_config(toml_content);
        let mut config = ShellConfig::default();
        let parsed: ShellToml = toml::from_str(toml_content).unwrap();
        apply_toml_config(&mut config, &parsed);

        assert!((config.physics.threshold - 200.0).abs() < f64::EPSILON);
        assert!((config.physics.push_factor - 0.1).abs() < f64::EPSILON);
        assert!((config.spring.stiffness - 80.0).abs() < f64::EPSILON);
        assert!((config.spring.damping - 10.0).abs() < f64::EPSILON);
        assert!((config.spring.detail_scale - 1.5).abs() < f64::EPSILON);
        // Untouched
        assert!((config.spring.overview_scale - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.transition.duration, Duration::from_millis(500));
        assert_eq!(config.transition.easing, EasingFunction::EaseInOut);
        assert!(config.clear_selection_on_back);
        assert_eq!(config.fps, 30);

        // Through the loader, the file is recorded as the source
        let loaded = load_config_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(loaded.config_file_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_parse_partial_toml() {
        let parsed: ShellToml = toml::from_str("[spring]\nstiffness = 120.0\n").unwrap();
        let mut config = ShellConfig::default();
        apply_toml_config(&mut config, &parsed);

        assert!((config.spring.stiffness - 120.0).abs() < f64::EPSILON);
        assert!((config.spring.damping - 25.0).abs() < f64::EPSILON);
        assert!((config.physics.threshold - 240.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_empty_toml() {
        let file = write_config("");
        let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();
        assert!(config.validate().is_ok());
    }

    // =========================================================================
    // Missing / Malformed File Tests
    // =========================================================================

    #[test]
    fn test_missing_file_graceful() {
        let path = PathBuf::from("/nonexistent/path/shell.toml");
        let config = load_config_from_path(Some(path)).unwrap();
        assert!(config.config_file_path.is_none());
        assert!(
            config.source() == ConfigSource::Default || config.source() == ConfigSource::Env,
            "Expected Default or Env source, got: {:?}",
            config.source()
        );
    }

    #[test]
    fn test_malformed_toml_error() {
        let file = write_config("[physics\nthreshold = \"wide\"\n");
        let result = load_config_from_path(Some(file.path().to_path_buf()));
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_unknown_easing_is_parse_error() {
        let file = write_config("[transition]\neasing = \"wobbly\"\n");
        let result = load_config_from_path(Some(file.path().to_path_buf()));
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_invalid_value_rejected_on_load() {
        let file = write_config("[physics]\nthreshold = -1.0\n");
        let result = load_config_from_path(Some(file.path().to_path_buf()));
        match result.unwrap_err() {
            ConfigError::ValidationError(msg) => assert!(msg.contains("physics.threshold")),
            other => panic!("unexpected error: {other}"),
        }
    }

    // =========================================================================
    // Validation Tests
    // =========================================================================

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ShellConfig::default();
        config.physics.push_factor = 0.9;
        assert!(config.validate().is_err());

        let mut config = ShellConfig::default();
        config.spring.damping = -1.0;
        assert!(config.validate().is_err());

        let mut config = ShellConfig::default();
        config.spring.mass = 0.0;
        assert!(config.validate().is_err());

        let mut config = ShellConfig::default();
        config.fps = 0;
        assert!(config.validate().is_err());

        let mut config = ShellConfig::default();
        config.spring.detail_scale = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_damping_allowed() {
        let mut config = ShellConfig::default();
        config.spring.damping = 0.0;
        assert!(config.validate().is_ok());
    }

    // =========================================================================
    // Priority Ordering Tests
    // =========================================================================

    #[test]
    fn test_env_overrides_file() {
        let parsed: ShellToml = toml::from_str("[spring]\nstiffness = 80.0\n").unwrap();
        let mut config = ShellConfig::default();
        apply_toml_config(&mut config, &parsed);
        config.set_source(ConfigSource::File);

        apply_env_config(
            &mut config,
            env(&[
                ("OMNIPOSITORY_STIFFNESS", "90"),
                ("OMNIPOSITORY_FPS", "30"),
                ("OMNIPOSITORY_CLEAR_SELECTION_ON_BACK", "true"),
            ]),
        );

        assert!((config.spring.stiffness - 90.0).abs() < f64::EPSILON);
        assert_eq!(config.fps, 30);
        assert!(config.clear_selection_on_back);
        assert_eq!(config.source(), ConfigSource::Env);
    }

    #[test]
    fn test_env_unparseable_value_ignored() {
        let mut config = ShellConfig::default();
        apply_env_config(&mut config, env(&[("OMNIPOSITORY_THRESHOLD", "wide")]));
        assert!((config.physics.threshold - 240.0).abs() < f64::EPSILON);
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_env_clear_selection_false_values() {
        for value in ["0", "false", "FALSE"] {
            let mut config = ShellConfig::default();
            config.clear_selection_on_back = true;
            apply_env_config(
                &mut config,
                env(&[("OMNIPOSITORY_CLEAR_SELECTION_ON_BACK", value)]),
            );
            assert!(!config.clear_selection_on_back, "{value}");
        }
    }

    #[test]
    fn test_cli_overrides_env() {
        let mut config = ShellConfig::default();
        apply_env_config(&mut config, env(&[("OMNIPOSITORY_DAMPING", "12")]));

        let overrides = ConfigOverrides::new().with_damping(30.0);
        overrides.apply(&mut config);

        assert!((config.spring.damping - 30.0).abs() < f64::EPSILON);
        assert_eq!(config.source(), ConfigSource::Cli);
    }

    // =========================================================================
    // ConfigOverrides Tests
    // =========================================================================

    #[test]
    fn test_config_overrides_apply() {
        let mut config = ShellConfig::default();
        ConfigOverrides::new()
            .with_threshold(180.0)
            .with_stiffness(70.0)
            .with_fps(120)
            .with_clear_selection_on_back(true)
            .with_transition_ms(0)
            .apply(&mut config);

        assert!((config.physics.threshold - 180.0).abs() < f64::EPSILON);
        assert!((config.spring.stiffness - 70.0).abs() < f64::EPSILON);
        assert_eq!(config.fps, 120);
        assert!(config.clear_selection_on_back);
        assert_eq!(config.transition.duration, Duration::ZERO);
        assert_eq!(config.source(), ConfigSource::Cli);
    }

    #[test]
    fn test_config_overrides_empty_no_change() {
        let mut config = ShellConfig::default();
        let overrides = ConfigOverrides::new();
        assert!(overrides.is_empty());
        overrides.apply(&mut config);
        assert_eq!(config.source(), ConfigSource::Default);
    }

    // =========================================================================
    // Display / Serialization Tests
    // =========================================================================

    #[test]
    fn test_config_source_display() {
        assert_eq!(format!("{}", ConfigSource::Cli), "CLI");
        assert_eq!(format!("{}", ConfigSource::Env), "environment");
        assert_eq!(format!("{}", ConfigSource::File), "config file");
        assert_eq!(format!("{}", ConfigSource::Default), "default");
    }

    #[test]
    fn test_config_error_display() {
        let read_err = ConfigError::ReadError {
            path: PathBuf::from("/test/path"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = format!("{read_err}");
        assert!(msg.contains("/test/path"));
        assert!(msg.contains("Failed to read"));

        let validation_err = ConfigError::ValidationError("invalid value".to_string());
        assert!(format!("{validation_err}").contains("invalid value"));
    }

    #[test]
    fn test_toml_serializes_easing_in_kebab_case() {
        let toml = ShellToml {
            transition: TransitionToml {
                duration_ms: Some(250),
                easing: Some(EasingFunction::EaseOutCubic),
            },
            ..Default::default()
        };
        let text = toml::to_string(&toml).unwrap();
        assert!(text.contains("easing = \"ease-out-cubic\""), "{text}");
    }
}
