// SPDX-License-Identifier: MIT
// Copyright (c) 2026 aerodist contributors

use crate::dataset::{DatasetError, LoadOptions};
use crate::search::DEFAULT_RESULT_COUNT;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dataset_path: Option<PathBuf>,
    pub delimiter: char,
    pub result_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: None,
            delimiter: '|',
            result_count: DEFAULT_RESULT_COUNT,
        }
    }
}

impl Config {
    /// Platform config location, e.g. `~/.config/aerodist/config.json` on Linux.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("org", "aerodist", "aerodist")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    pub fn load() -> Self {
        Self::load_from(Self::default_path())
    }

    /// Reads a config file, falling back to defaults when it is missing or unreadable.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file, using defaults — path={}", path.display());
            return Self::default();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!("Failed to read config — path={} error={}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<Config>(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring malformed config — path={} error={}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
    }

    pub fn load_options(&self) -> Result<LoadOptions, DatasetError> {
        LoadOptions::with_delimiter(self.delimiter)
    }

    pub fn require_dataset_path(&self) -> Result<&Path, DatasetError> {
        self.dataset_path
            .as_deref()
            .ok_or(DatasetError::NoPathConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(dir.path().join("absent.json"));
        assert_eq!(config, Config::default());
        assert_eq!(config.result_count, 5);
        assert_eq!(config.delimiter, '|');
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "result_count": 10 }"#).unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.result_count, 10);
        assert_eq!(config.delimiter, '|');
        assert!(config.dataset_path.is_none());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            dataset_path: Some(PathBuf::from("/data/airports.csv")),
            delimiter: ';',
            result_count: 3,
        };
        config.save(&path).unwrap();
        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn test_require_dataset_path() {
        let config = Config::default();
        assert!(matches!(
            config.require_dataset_path(),
            Err(DatasetError::NoPathConfigured)
        ));
    }
}
