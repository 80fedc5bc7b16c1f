//! TOML configuration for the gesture-keys binary.
//!
//! Read from the platform-appropriate config file unless a path is given:
//! - Windows:  `%APPDATA%\GestureKeys\config.toml`
//! - Linux:    `$XDG_CONFIG_HOME/gesture-keys/config.toml` (or `~/.config/…`)
//! - macOS:    `~/Library/Application Support/GestureKeys/config.toml`
//!
//! ```toml
//! [queue]
//! capacity = 128
//!
//! [dispatch]
//! backend = "auto"        # auto | native | posting-queue | noop
//!
//! [gestures]
//! turn_cooldown_secs = 0.6
//! tap_hold_ms = 50
//! max_steer_hold_ms = 2000
//!
//! [logging]
//! log_level = "info"
//! ```
//!
//! Every field and every section is optional; missing values take the
//! defaults shown above, and a missing file yields `KeysConfig::default()`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dispatch::BackendKind;
use super::event_queue::DEFAULT_CAPACITY;
use crate::application::gesture_policy::GestureSettings;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The TOML parsed but a value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ── Config schema types ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KeysConfig {
    #[serde(default)]
    pub queue: QueueConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub gestures: GestureConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueueConfig {
    /// Maximum number of pending key events.  Must be at least 1.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DispatchConfig {
    #[serde(default)]
    pub backend: BackendKind,
}

/// Timings used by the gesture policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Steering hold per unit of wrist slope, in seconds.
    #[serde(default = "default_turn_cooldown_secs")]
    pub turn_cooldown_secs: f64,
    /// How long a tap keeps the key down.
    #[serde(default = "default_tap_hold_ms")]
    pub tap_hold_ms: u64,
    /// Upper bound for a single steering hold.
    #[serde(default = "default_max_steer_hold_ms")]
    pub max_steer_hold_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` level filter; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}
fn default_turn_cooldown_secs() -> f64 {
    0.6
}
fn default_tap_hold_ms() -> u64 {
    50
}
fn default_max_steer_hold_ms() -> u64 {
    2000
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            turn_cooldown_secs: default_turn_cooldown_secs(),
            tap_hold_ms: default_tap_hold_ms(),
            max_steer_hold_ms: default_max_steer_hold_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl GestureConfig {
    /// Converts the on-disk timings into policy settings.
    pub fn settings(&self) -> GestureSettings {
        GestureSettings {
            tap_hold: Duration::from_millis(self.tap_hold_ms),
            turn_cooldown_secs: self.turn_cooldown_secs,
            max_steer_hold: Duration::from_millis(self.max_steer_hold_ms),
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the base directory
/// cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads the config from `path`, or from [`config_file_path`] when `None`.
///
/// A missing file is not an error; it yields `KeysConfig::default()`.
///
/// # Errors
///
/// [`ConfigError::Io`] for file-system errors other than "not found",
/// [`ConfigError::Parse`] for malformed TOML, and [`ConfigError::Invalid`]
/// for out-of-range values.
pub fn load_config(path: Option<&Path>) -> Result<KeysConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_file_path()?,
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(KeysConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Parses and validates TOML text.
pub fn parse_config(content: &str) -> Result<KeysConfig, ConfigError> {
    let cfg: KeysConfig = toml::from_str(content)?;
    validate(&cfg)?;
    Ok(cfg)
}

fn validate(cfg: &KeysConfig) -> Result<(), ConfigError> {
    if cfg.queue.capacity == 0 {
        return Err(ConfigError::Invalid("queue.capacity must be at least 1".into()));
    }
    let cooldown = cfg.gestures.turn_cooldown_secs;
    if !cooldown.is_finite() || cooldown < 0.0 {
        return Err(ConfigError::Invalid(format!(
            "gestures.turn_cooldown_secs must be a non-negative number, got {cooldown}"
        )));
    }
    Ok(())
}

fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("GestureKeys"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("gesture-keys"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("GestureKeys")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
