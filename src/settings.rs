use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{
    DEFAULT_FOOD_REWARD, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICKS_PER_SECOND,
    GridSize, MAX_TICKS_PER_SECOND, MIN_GRID_CELLS,
};
use crate::game::Rules;

const APP_DIR_NAME: &str = "classic-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Failures while loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("grid {width}x{height} is too small; it needs at least {} cells", MIN_GRID_CELLS)]
    GridTooSmall { width: u16, height: u16 },
    #[error("tick rate must be between 1 and {} per second, got {0}", MAX_TICKS_PER_SECOND)]
    TickRate(u32),
    #[error("food reward must be positive")]
    ZeroReward,
}

/// User-tunable game settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub grid_width: u16,
    pub grid_height: u16,
    pub ticks_per_second: u32,
    pub food_reward: u32,
    pub sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            food_reward: DEFAULT_FOOD_REWARD,
            sound: true,
        }
    }
}

/// Command-line values that take precedence over the settings file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub grid_width: Option<u16>,
    pub grid_height: Option<u16>,
    pub ticks_per_second: Option<u32>,
    pub food_reward: Option<u32>,
    pub mute: bool,
}

impl Settings {
    /// Loads settings from `explicit`, or from the per-user file when `None`.
    ///
    /// A missing per-user file yields defaults; a missing explicit file is an
    /// error since the user asked for it by name.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        match explicit {
            Some(path) => load_from_path(path, false),
            None => match settings_path() {
                Some(path) => load_from_path(&path, true),
                None => Ok(Self::default()),
            },
        }
    }

    /// Applies command-line overrides on top of loaded values.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(width) = overrides.grid_width {
            self.grid_width = width;
        }
        if let Some(height) = overrides.grid_height {
            self.grid_height = height;
        }
        if let Some(rate) = overrides.ticks_per_second {
            self.ticks_per_second = rate;
        }
        if let Some(reward) = overrides.food_reward {
            self.food_reward = reward;
        }
        if overrides.mute {
            self.sound = false;
        }
        self
    }

    /// Checks that the settings describe a playable game.
    pub fn validate(self) -> Result<Self, SettingsError> {
        let grid = self.grid();
        if grid.width == 0 || grid.height == 0 || grid.total_cells() < MIN_GRID_CELLS {
            return Err(SettingsError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        if !(1..=MAX_TICKS_PER_SECOND).contains(&self.ticks_per_second) {
            return Err(SettingsError::TickRate(self.ticks_per_second));
        }

        if self.food_reward == 0 {
            return Err(SettingsError::ZeroReward);
        }

        Ok(self)
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        GridSize {
            width: self.grid_width,
            height: self.grid_height,
        }
    }

    #[must_use]
    pub fn rules(&self) -> Rules {
        Rules {
            food_reward: self.food_reward,
        }
    }

    /// Wall-clock time between two simulation ticks.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}

/// Returns the platform-correct per-user settings path.
#[must_use]
pub fn settings_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    Some(base)
}

fn load_from_path(path: &Path, missing_is_default: bool) -> Result<Settings, SettingsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if missing_is_default && e.kind() == io::ErrorKind::NotFound => {
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str::<Settings>(&raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
