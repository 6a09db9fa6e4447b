//! Controller settings
//!
//! Tunables for the player controller, loadable from RON or JSON files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::ClipCatalog;

/// Player controller tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    /// Horizontal speed while running, in pixels per second
    pub run_speed: f32,
    /// Upward impulse applied when a jump starts on the ground
    pub jump_impulse: f32,
    /// Animation clips of the character sheet
    pub clips: ClipCatalog,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            run_speed: 200.0,
            jump_impulse: 330.0,
            clips: ClipCatalog::bladekeeper(),
        }
    }
}

impl ControllerSettings {
    /// Set run speed
    #[must_use]
    pub fn with_run_speed(mut self, speed: f32) -> Self {
        self.run_speed = speed;
        self
    }

    /// Set jump impulse
    #[must_use]
    pub fn with_jump_impulse(mut self, impulse: f32) -> Self {
        self.jump_impulse = impulse;
        self
    }

    /// Replace the clip catalog
    #[must_use]
    pub fn with_clips(mut self, clips: ClipCatalog) -> Self {
        self.clips = clips;
        self
    }

    /// Parse settings from a RON string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid settings RON
    pub fn from_ron_str(content: &str) -> Result<Self, SettingsError> {
        ron::from_str(content).map_err(|e| SettingsError::DeserializeError(e.to_string()))
    }

    /// Save the settings to a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_ron(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let ron_string = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| SettingsError::SerializeError(e.to_string()))?;
        fs::write(path, ron_string).map_err(|e| SettingsError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Load settings from a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let content =
            fs::read_to_string(path).map_err(|e| SettingsError::IoError(e.to_string()))?;
        Self::from_ron_str(&content)
    }

    /// Save the settings to a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json_string = serde_json::to_string_pretty(self)
            .map_err(|e| SettingsError::SerializeError(e.to_string()))?;
        fs::write(path, json_string).map_err(|e| SettingsError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Load settings from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let content =
            fs::read_to_string(path).map_err(|e| SettingsError::IoError(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::DeserializeError(e.to_string()))
    }

    /// Load settings, picking the format from the file extension
    ///
    /// `.json` files are read as JSON, anything else as RON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::load_json(path),
            _ => Self::load_ron(path),
        }
    }
}

/// Errors that can occur while loading or saving settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    /// IO error
    IoError(String),
    /// Serialization error
    SerializeError(String),
    /// Deserialization error
    DeserializeError(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::SerializeError(e) => write!(f, "Serialization error: {e}"),
            Self::DeserializeError(e) => write!(f, "Deserialization error: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {}
