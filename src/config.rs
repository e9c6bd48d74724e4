use std::{fs::read_to_string, path::Path};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::{errors::ConfigError, maze::Maze};

pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;

/// Parameters for one maze: everything needed to rebuild it exactly.
/// This is what the game client fetches before starting a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeConfig {
    pub seed: f64,
    pub width: usize,
    pub height: usize,
}

impl MazeConfig {
    /// A fresh default-sized config with a random seed.
    pub fn random() -> MazeConfig {
        MazeConfig {
            seed: rand::random(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    pub fn from_json(src: &str) -> Result<MazeConfig, ConfigError> {
        let config: MazeConfig = serde_json::from_str(src)?;
        config.validate()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<MazeConfig, ConfigError> {
        let path = path.as_ref();
        let src = read_to_string(path)
            .map_err(|e| ConfigError::IoError(path.display().to_string(), e.kind()))?;
        MazeConfig::from_json(&src)
    }

    /// Loads a config, falling back to [MazeConfig::random] on any failure.
    /// A missing or broken config should never stop a round from starting.
    pub fn load_or_random<P: AsRef<Path>>(path: P) -> MazeConfig {
        MazeConfig::load(&path).unwrap_or_else(|e| {
            warn!("Couldn't load maze config from '{}', using a random one: {}", path.as_ref().display(), e);
            MazeConfig::random()
        })
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn generate(&self) -> Maze {
        Maze::generate(self.width, self.height, Some(self.seed))
    }

    fn validate(self) -> Result<MazeConfig, ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions(self.width, self.height));
        }
        if !self.seed.is_finite() {
            return Err(ConfigError::ParseError(format!("seed {} is not finite", self.seed)));
        }
        Ok(self)
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig::random()
    }
}
