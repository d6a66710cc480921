//! FILENAME: app/src/config.rs
// PURPOSE: Application configuration loaded from a JSON file.
// CONTEXT: Every key is optional; missing keys take their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid log level: {0}")]
    InvalidLevel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Unified log file. `None` logs to stderr only.
    pub log_path: Option<PathBuf>,
    /// One of off, error, warn, info, debug, trace.
    pub log_level: String,
    /// Number of sample records seeded into a new session.
    pub seed_rows: usize,
    /// Directory for XLSX exports.
    pub export_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_path: None,
            log_level: "info".to_string(),
            seed_rows: 50,
            export_dir: PathBuf::from("exports"),
        }
    }
}

impl AppConfig {
    /// Loads the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        log::LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLevel(self.log_level.clone()))
    }
}
