//! # Game Configuration
//!
//! Tunable parameters for a game session, loadable from a JSON file.

use crate::{MazewalkError, MazewalkResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Edge length of a square maze tile, in pixels
    pub tile_size: f32,
    /// Player speed in pixels per tick
    pub player_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_size: crate::config::DEFAULT_TILE_SIZE,
            player_speed: crate::config::DEFAULT_PLAYER_SPEED,
        }
    }
}

impl GameConfig {
    /// Loads and validates a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> MazewalkResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// The player starts half a tile in from a tile's left edge (the start
    /// anchor centers x within its tile), so the speed must divide half a
    /// tile evenly or the player would never reach exact tile alignment and
    /// could never turn.
    pub fn validate(&self) -> MazewalkResult<()> {
        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(MazewalkError::InvalidConfig(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        if !self.player_speed.is_finite() || self.player_speed <= 0.0 {
            return Err(MazewalkError::InvalidConfig(format!(
                "player_speed must be positive, got {}",
                self.player_speed
            )));
        }
        if (self.tile_size / 2.0) % self.player_speed != 0.0 {
            return Err(MazewalkError::InvalidConfig(format!(
                "player_speed {} must evenly divide half a tile ({})",
                self.player_speed,
                self.tile_size / 2.0
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.tile_size, 40.0);
        assert_eq!(config.player_speed, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_speed_must_divide_half_a_tile() {
        let config = GameConfig {
            tile_size: 40.0,
            player_speed: 3.0,
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            tile_size: 40.0,
            player_speed: 20.0,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_positive_values_are_rejected() {
        let zero_speed = GameConfig {
            tile_size: 40.0,
            player_speed: 0.0,
        };
        assert!(zero_speed.validate().is_err());

        let negative_tile = GameConfig {
            tile_size: -8.0,
            player_speed: 2.0,
        };
        assert!(negative_tile.validate().is_err());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = GameConfig {
            tile_size: 32.0,
            player_speed: 4.0,
        };
        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
