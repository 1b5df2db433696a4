//! User configuration from `~/.cadarena/config.json`

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::types::{ArenaError, Result};

/// Color scheme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Detect from terminal background
    #[default]
    Auto,
    Dark,
    Light,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArenaConfig {
    /// Seed for reproducible synthetic activity
    pub seed: Option<u64>,
    pub theme: Option<ThemeChoice>,
    /// Recorded activity file used instead of generation
    pub data_file: Option<PathBuf>,
}

impl ArenaConfig {
    /// Default location: `~/.cadarena/config.json`
    pub fn default_path() -> Result<PathBuf> {
        let base_dirs = BaseDirs::new()
            .ok_or_else(|| ArenaError::Config("Cannot determine home directory".into()))?;
        Ok(base_dirs.home_dir().join(".cadarena").join("config.json"))
    }

    /// Load from the default location. Missing file yields defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            ArenaError::Config(format!("{}: {}", path.display(), e))
        })
    }

    /// Flag values take precedence over file values
    pub fn merged(
        self,
        seed: Option<u64>,
        theme: Option<ThemeChoice>,
        data_file: Option<PathBuf>,
    ) -> Self {
        Self {
            seed: seed.or(self.seed),
            theme: theme.or(self.theme),
            data_file: data_file.or(self.data_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = ArenaConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, ArenaConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"seed": 42, "theme": "light", "data_file": "/tmp/activity.json"}"#,
        )
        .unwrap();

        let config = ArenaConfig::load_from(&path).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.theme, Some(ThemeChoice::Light));
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/activity.json")));
    }

    #[test]
    fn test_load_partial_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

        let config = ArenaConfig::load_from(&path).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.theme, Some(ThemeChoice::Dark));
    }

    #[test]
    fn test_load_rejects_unknown_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"colour": "dark"}"#).unwrap();

        let err = ArenaConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ArenaError::Config(_)));
    }

    #[test]
    fn test_merged_prefers_flags() {
        let file = ArenaConfig {
            seed: Some(1),
            theme: Some(ThemeChoice::Light),
            data_file: None,
        };
        let merged = file.merged(Some(9), None, Some(PathBuf::from("days.json")));
        assert_eq!(merged.seed, Some(9));
        assert_eq!(merged.theme, Some(ThemeChoice::Light));
        assert_eq!(merged.data_file, Some(PathBuf::from("days.json")));
    }
}
