//! Platform services: files under ~/.flappy/, the high score store and logging.

pub mod logging;
pub mod persistence;
pub mod score_store;

pub use score_store::{FileScoreStore, MemoryScoreStore, ScoreStore};
