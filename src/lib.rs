//! Flappy - Flappy Bird in the terminal
//!
//! The game logic lives in [`core`] and has no terminal dependency; [`ui`]
//! draws it with ratatui and [`utils`] holds the file-backed services.

pub mod core;
pub mod input;
pub mod ui;
pub mod utils;

pub use crate::core::config::GameConfig;
pub use crate::core::constants::*;
pub use crate::core::game_state::{ActionOutcome, GameState, TickResult};
pub use crate::core::session::Session;
pub use crate::core::types::RoundStatus;
pub use crate::utils::score_store::{FileScoreStore, MemoryScoreStore, ScoreStore};
