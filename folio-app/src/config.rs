//! Persisted application preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Optional JSON file to load portfolio content from.
    pub content_path: Option<PathBuf>,
    /// Skip the reveal animations and render every section settled.
    pub reduce_motion: bool,
}

impl Config {
    /// Load preferences from the user config directory, falling back to
    /// defaults when the file is absent or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        Self::load_from(&path)
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(path) = Self::path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.json"))
    }

    fn load_from(path: &Path) -> Self {
        if path.exists()
            && let Ok(content) = std::fs::read_to_string(path)
            && let Ok(config) = serde_json::from_str::<Config>(&content)
        {
            config
        } else {
            Self::default()
        }
    }

    fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            content_path: Some(PathBuf::from("/tmp/portfolio.json")),
            reduce_motion: true,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path);
        assert_eq!(loaded.content_path, config.content_path);
        assert!(loaded.reduce_motion);
    }

    #[test]
    fn missing_or_malformed_files_yield_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let loaded = Config::load_from(&path);
        assert!(loaded.content_path.is_none());

        std::fs::write(&path, "{ not json").unwrap();
        let loaded = Config::load_from(&path);
        assert!(!loaded.reduce_motion);
    }
}
