//! High score persistence.
//!
//! The high score is a single decimal integer in a plain text file. Reading
//! never fails: anything that is not a valid score reads as 0.

use super::persistence::DataDir;
use crate::core::constants::HIGH_SCORE_FILE;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Somewhere the high score can be loaded from and saved to.
pub trait ScoreStore {
    /// Stored high score, or 0 if there is none or it cannot be read.
    fn load(&self) -> u32;

    /// Replace the stored high score.
    fn save(&mut self, high_score: u32) -> io::Result<()>;
}

/// High score kept in a text file.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `flappy_high_score.txt` inside the data directory.
    pub fn in_dir(dir: &DataDir) -> Self {
        Self::new(dir.file(HIGH_SCORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse the first line of a high score file, tolerating surrounding
/// whitespace.
pub fn parse_high_score(contents: &str) -> Option<u32> {
    contents.lines().next()?.trim().parse().ok()
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|contents| parse_high_score(&contents))
            .unwrap_or(0)
    }

    fn save(&mut self, high_score: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, high_score.to_string())
    }
}

/// In-memory store, for tests and for running without a writable home
/// directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub high_score: u32,
    /// Number of successful saves.
    pub saves: u32,
    /// Make every save fail with this error kind.
    pub fail_saves: Option<io::ErrorKind>,
}

impl MemoryScoreStore {
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            high_score,
            ..Self::default()
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.high_score
    }

    fn save(&mut self, high_score: u32) -> io::Result<()> {
        if let Some(kind) = self.fail_saves {
            return Err(io::Error::new(kind, "save disabled"));
        }
        self.high_score = high_score;
        self.saves += 1;
        Ok(())
    }
}
