//! Playfield configuration.
//!
//! Every tunable the game loop reads lives here and is handed to
//! [`GameState`](crate::core::game_state::GameState) at construction, so tests
//! can run the same logic on smaller boards or faster timers.

use super::constants::*;
use crate::utils::persistence::DataDir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: i32,
    pub board_height: i32,
    pub bird_width: i32,
    pub bird_height: i32,
    pub pipe_width: i32,
    pub pipe_height: i32,
    /// Vertical opening between a top pipe and its bottom partner.
    pub pipe_gap: i32,
    /// Added to the bird's vertical velocity every tick (positive = down).
    pub gravity: i32,
    /// Velocity the bird is set to on a jump (negative = up).
    pub jump_velocity: i32,
    /// Horizontal pipe movement per tick (negative = left).
    pub pipe_velocity: i32,
    pub tick_interval_ms: u64,
    pub pipe_spawn_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            pipe_gap: PIPE_GAP,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            pipe_velocity: PIPE_VELOCITY,
            tick_interval_ms: TICK_INTERVAL_MS,
            pipe_spawn_interval_ms: PIPE_SPAWN_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Fixed horizontal position of the bird.
    pub fn bird_x(&self) -> i32 {
        self.board_width / 8
    }

    /// Vertical position the bird starts each round at.
    pub fn bird_start_y(&self) -> i32 {
        self.board_height / 2
    }

    /// Check that the values describe a playable board.
    pub fn validate(&self) -> Result<(), String> {
        let sizes = [
            ("board_width", self.board_width),
            ("board_height", self.board_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("pipe_gap", self.pipe_gap),
        ];
        for (name, value) in sizes {
            if value <= 0 {
                return Err(format!("{} must be positive (got {})", name, value));
            }
            if value > MAX_DIMENSION {
                return Err(format!(
                    "{} must be at most {} (got {})",
                    name, MAX_DIMENSION, value
                ));
            }
        }
        let speeds = [
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("pipe_velocity", self.pipe_velocity),
        ];
        for (name, value) in speeds {
            if value.unsigned_abs() > MAX_DIMENSION.unsigned_abs() {
                return Err(format!(
                    "{} must be within -{max}..={max} (got {})",
                    name,
                    value,
                    max = MAX_DIMENSION
                ));
            }
        }
        if self.pipe_gap >= self.board_height {
            return Err(format!(
                "pipe_gap ({}) must be smaller than board_height ({})",
                self.pipe_gap, self.board_height
            ));
        }
        // Pipes that never move left would never be removed.
        if self.pipe_velocity >= 0 {
            return Err(format!(
                "pipe_velocity must be negative (got {})",
                self.pipe_velocity
            ));
        }
        if self.tick_interval_ms == 0 || self.pipe_spawn_interval_ms == 0 {
            return Err("timer intervals must be at least 1 ms".to_string());
        }
        Ok(())
    }

    /// This config if it validates, otherwise the defaults (with a warning).
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("Ignoring invalid {}: {}", CONFIG_FILE, e);
                GameConfig::default()
            }
        }
    }

    /// Load `config.json` from the data directory. Missing, unreadable or
    /// invalid files fall back to the defaults.
    pub fn load_or_default(dir: &DataDir) -> Self {
        match dir.read_json::<GameConfig>(CONFIG_FILE) {
            Ok(Some(config)) => config.validated_or_default(),
            Ok(None) => GameConfig::default(),
            Err(e) => {
                log::warn!("Could not read {}: {}", dir.file(CONFIG_FILE).display(), e);
                GameConfig::default()
            }
        }
    }

    /// Load from an explicit path. Unlike the default location, every
    /// problem is reported to the caller.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config
            .validate()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }
}
