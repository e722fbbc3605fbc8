//! The directory holding config, high score and log (normally ~/.flappy/).

use crate::core::constants::DATA_DIR_NAME;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// ~/.flappy/, created if missing.
    pub fn home() -> io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no home directory")
        })?;
        Self::at(home.join(DATA_DIR_NAME))
    }

    /// Use `root` as the data directory, creating it if missing.
    pub fn at(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Read `name` as JSON. `None` when the file is absent; a file that exists
    /// but cannot be read or parsed is an error.
    pub fn read_json<T: DeserializeOwned>(&self, name: &str) -> io::Result<Option<T>> {
        let json = match fs::read_to_string(self.file(name)) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write `value` as pretty-printed JSON and return the file's path.
    pub fn write_json<T: Serialize>(&self, name: &str, value: &T) -> io::Result<PathBuf> {
        let path = self.file(name);
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&path, json)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;

    fn scratch_dir(name: &str) -> DataDir {
        let root = std::env::temp_dir().join(format!(
            "flappy_data_{}_{}",
            name,
            std::process::id()
        ));
        fs::remove_dir_all(&root).ok();
        DataDir::at(root).expect("temp dir should be creatable")
    }

    #[test]
    fn test_at_creates_nested_directory() {
        let root = std::env::temp_dir()
            .join(format!("flappy_data_nested_{}", std::process::id()))
            .join("a/b");
        let dir = DataDir::at(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(dir.file("x.json"), root.join("x.json"));
        fs::remove_dir_all(root.parent().unwrap().parent().unwrap()).ok();
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = scratch_dir("missing");
        let config: Option<GameConfig> = dir.read_json("config.json").unwrap();
        assert!(config.is_none());
        fs::remove_dir_all(dir.root()).ok();
    }

    #[test]
    fn test_garbage_file_is_invalid_data() {
        let dir = scratch_dir("garbage");
        fs::write(dir.file("config.json"), "{ not json").unwrap();
        let err = dir.read_json::<GameConfig>("config.json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        fs::remove_dir_all(dir.root()).ok();
    }

    #[test]
    fn test_written_config_reads_back() {
        let dir = scratch_dir("write");
        let config = GameConfig {
            gravity: 2,
            pipe_spawn_interval_ms: 900,
            ..GameConfig::default()
        };
        let path = dir.write_json("config.json", &config).unwrap();
        assert_eq!(path, dir.file("config.json"));
        assert_eq!(dir.read_json("config.json").unwrap(), Some(config));
        fs::remove_dir_all(dir.root()).ok();
    }
}
