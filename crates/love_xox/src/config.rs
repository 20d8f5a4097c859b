//! Runtime configuration for the stage.

use crate::search::DEFAULT_MISTAKE_PROBABILITY;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Delay before a win is reported to the host.
pub const DEFAULT_WIN_NOTIFY_DELAY_MS: u64 = 800;

/// Delay before a lost or drawn board is cleared.
pub const DEFAULT_RESTART_DELAY_MS: u64 = 1500;

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Chance the opponent plays a random cell instead of searching.
    mistake_probability: f64,

    /// Milliseconds between a player win and the completion notification.
    win_notify_delay_ms: u64,

    /// Milliseconds between a draw or loss and the automatic reset.
    restart_delay_ms: u64,

    /// Fixed RNG seed. Without one the opponent seeds from OS entropy.
    seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mistake_probability: DEFAULT_MISTAKE_PROBABILITY,
            win_notify_delay_ms: DEFAULT_WIN_NOTIFY_DELAY_MS,
            restart_delay_ms: DEFAULT_RESTART_DELAY_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the game cannot run with.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.mistake_probability) {
            warn!(
                mistake_probability = self.mistake_probability,
                "Rejected mistake probability"
            );
            return Err(ConfigError::new(format!(
                "mistake_probability must be within 0.0..=1.0, got {}",
                self.mistake_probability
            )));
        }
        Ok(())
    }

    /// Overrides the mistake probability.
    pub fn with_mistake_probability(mut self, mistake_probability: f64) -> Self {
        self.mistake_probability = mistake_probability;
        self
    }

    /// Fixes the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides both display delays.
    pub fn with_delays(mut self, win_notify_delay_ms: u64, restart_delay_ms: u64) -> Self {
        self.win_notify_delay_ms = win_notify_delay_ms;
        self.restart_delay_ms = restart_delay_ms;
        self
    }

    /// The display delays as durations.
    pub fn delays(&self) -> Delays {
        Delays {
            win_notify: Duration::from_millis(self.win_notify_delay_ms),
            restart: Duration::from_millis(self.restart_delay_ms),
        }
    }
}

/// Display delays applied after terminal outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    /// Wait before notifying the host of a player win.
    pub win_notify: Duration,
    /// Wait before clearing a lost or drawn board.
    pub restart: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        GameConfig::default().delays()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
