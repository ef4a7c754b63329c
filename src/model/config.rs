//! Application configuration structures

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
}

/// Where translation files live and how they are written
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the translation files
    pub dir: String,
    /// File name prefix before the language code
    pub prefix: String,
    /// File name suffix after the language code
    pub suffix: String,
    /// Spaces per indentation level when writing
    pub indent: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            dir: "res/common/lang/translations".into(),
            prefix: "stf.".into(),
            suffix: ".json".into(),
            indent: 2,
        }
    }
}

impl Config {
    /// Get the stf-lang configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("stf-lang")
    }

    /// Get the default configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from `path`, or return default if the file doesn't exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
