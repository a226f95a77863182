//! Settings
//!
//! Non-gameplay knobs loaded from an optional `settings.ron` in the
//! platform config directory: RNG seed override and audio volumes.
//! A missing file yields defaults; a malformed file warns and yields
//! defaults.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// User-tunable settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed world seed; None uses ambient entropy
    pub seed: Option<u64>,
    pub audio: AudioSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub enabled: bool,
    pub master_volume: f64,
    pub sfx_volume: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            audio: AudioSettings::default(),
        }
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            master_volume: 1.0,
            sfx_volume: 0.7,
        }
    }
}

impl Settings {
    /// Path of the settings file, if a config directory exists
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "shardfall").map(|dirs| dirs.config_dir().join("settings.ron"))
    }

    /// Parse settings from RON text
    pub fn from_str(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// malformed
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path).map_err(ConfigError::from).and_then(|text| Self::from_str(&text)) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
