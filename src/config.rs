use std::path::PathBuf;
use std::time::Duration;

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::constants::{ANIMATION_DELAY, ENV_PREFIX, GHOST_MOVE_DELAY};
use crate::error::ConfigError;

/// Runtime configuration, read from `PACMAN_`-prefixed environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Map file to play; the built-in board when unset
    pub map: Option<PathBuf>,
    /// Milliseconds between two random ghost moves
    #[serde(default = "default_ghost_delay_ms")]
    pub ghost_delay_ms: u64,
    /// Milliseconds between two animation frames
    #[serde(default = "default_animation_delay_ms")]
    pub animation_delay_ms: u64,
    /// Seed for the ghost randomizer; seeded from the OS when unset
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map: None,
            ghost_delay_ms: default_ghost_delay_ms(),
            animation_delay_ms: default_animation_delay_ms(),
            seed: None,
        }
    }
}

impl Config {
    pub fn ghost_delay(&self) -> Duration {
        Duration::from_millis(self.ghost_delay_ms)
    }

    pub fn animation_delay(&self) -> Duration {
        Duration::from_millis(self.animation_delay_ms)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.ghost_delay_ms == 0 {
            return Err(ConfigError::Invalid("ghost_delay_ms must be positive".into()));
        }
        if self.animation_delay_ms == 0 {
            return Err(ConfigError::Invalid("animation_delay_ms must be positive".into()));
        }
        Ok(self)
    }
}

fn default_ghost_delay_ms() -> u64 {
    GHOST_MOVE_DELAY.as_millis() as u64
}

fn default_animation_delay_ms() -> u64 {
    ANIMATION_DELAY.as_millis() as u64
}

/// Loads the configuration from the environment on top of the defaults.
pub fn load_config() -> Result<Config, ConfigError> {
    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()?;
    config.validate()
}
