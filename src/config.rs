// SPDX-License-Identifier: GPL-3.0-only

//! User configuration handling

use crate::constants::{APP_DIR, DEFAULT_BACKGROUND_COLOR, DEFAULT_TEXT_COLOR};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Persisted user settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Background color applied to newly created cards
    pub default_background_color: String,
    /// Text color applied to newly created cards
    pub default_text_color: String,
    /// Card store location override; None means the default data dir
    pub store_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            default_text_color: DEFAULT_TEXT_COLOR.to_string(),
            store_path: None,
        }
    }
}

impl Config {
    /// Config file location under the user config directory
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.json")
    }

    /// Load the config, falling back to defaults when the file is
    /// missing or unreadable
    pub fn load() -> Self {
        Self::load_from(Self::path())
    }

    /// Load from an explicit path (used by tests)
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match std::fs::read(&path) {
            Ok(data) => serde_json::from_slice(&data).unwrap_or_else(|e| {
                warn!(path = ?path, error = %e, "Invalid config file, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Write the config to its default location
    pub fn save(&self) -> AppResult<()> {
        self.save_to(Self::path())
    }

    /// Write the config to an explicit path
    pub fn save_to(&self, path: impl Into<PathBuf>) -> AppResult<()> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::Config(e.to_string()))?;
        }
        let data = serde_json::to_vec_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(&path, data).map_err(|e| AppError::Config(e.to_string()))?;
        Ok(())
    }
}
