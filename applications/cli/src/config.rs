/// Player configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable prefix (`VIBE_PLAYER__VOLUME=40`)
pub const ENV_PREFIX: &str = "VIBE";

/// Config file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "vibe.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerSettings {
    #[serde(default = "default_player")]
    pub player: PlaybackSettings,

    #[serde(default = "default_embed")]
    pub embed: EmbedSettings,

    #[serde(default = "default_simulation")]
    pub simulation: SimulationSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_volume")]
    pub volume: u8,

    #[serde(default)]
    pub repeat: bool,

    #[serde(default)]
    pub shuffle: bool,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmbedSettings {
    #[serde(default)]
    pub width: u32,

    #[serde(default)]
    pub height: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationSettings {
    /// Length every simulated video reports
    #[serde(default = "default_track_secs")]
    pub track_secs: u64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            player: default_player(),
            embed: default_embed(),
            simulation: default_simulation(),
        }
    }
}

impl PlaybackSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl SimulationSettings {
    pub fn track_duration(&self) -> Duration {
        Duration::from_secs(self.track_secs)
    }
}

impl PlayerSettings {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `vibe.toml` is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    /// Load with a custom environment prefix
    pub fn load_with_prefix(path: Option<&Path>, prefix: &str) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (PREFIX_SECTION__KEY)
        settings = settings.add_source(
            config::Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.player.volume > 100 {
            return Err(CliError::Config(format!(
                "Volume must be 0-100, got {}",
                self.player.volume
            )));
        }

        if self.player.poll_interval_ms == 0 {
            return Err(CliError::Config(
                "Poll interval must be greater than zero".to_string(),
            ));
        }

        if self.simulation.track_secs == 0 {
            return Err(CliError::Config(
                "Simulated track length must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_player() -> PlaybackSettings {
    PlaybackSettings {
        volume: default_volume(),
        repeat: false,
        shuffle: false,
        poll_interval_ms: default_poll_interval_ms(),
    }
}

fn default_volume() -> u8 {
    vibe_embed::DEFAULT_VOLUME
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_embed() -> EmbedSettings {
    EmbedSettings {
        width: 0,
        height: 0,
    }
}

fn default_simulation() -> SimulationSettings {
    SimulationSettings {
        track_secs: default_track_secs(),
    }
}

fn default_track_secs() -> u64 {
    30
}
