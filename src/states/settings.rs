//! Typography Settings
//!
//! Persisted user preferences that affect text rendering: a text scale and
//! whether bundled fonts are used at all.

use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

const SETTINGS_FILE: &str = "typekit.toml";

/// Text scale options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextScale {
    Small,
    #[default]
    Medium,
    Large,
}

impl TextScale {
    /// Multiplier applied to every style's size and line height
    pub fn factor(self) -> f32 {
        match self {
            TextScale::Small => 0.875,
            TextScale::Medium => 1.0,
            TextScale::Large => 1.125,
        }
    }
}

/// Persisted typography settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypographySettings {
    text_scale: Option<TextScale>,
    bundled_fonts: Option<bool>,
}

fn get_settings_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(SETTINGS_FILE))
}

impl TypographySettings {
    /// Create new default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from the config directory
    pub fn try_load() -> Result<Self> {
        let path = get_settings_path()?;
        Self::load_from(&path)
    }

    /// Load from the config directory, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load settings, using defaults");
            Self::new()
        })
    }

    /// Load settings from a file. A missing or empty file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading settings file");
        if !path.exists() {
            return Ok(Self::new());
        }

        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::new());
        }

        let settings: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
            e
        })?;
        Ok(settings)
    }

    /// Save settings to the config directory
    pub fn save(&self) -> Result<()> {
        let path = get_settings_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        info!(path = ?path, "Settings saved");
        Ok(())
    }

    // ==================== Getters ====================

    pub fn text_scale(&self) -> TextScale {
        self.text_scale.unwrap_or_default()
    }

    pub fn bundled_fonts(&self) -> bool {
        self.bundled_fonts.unwrap_or(true)
    }

    // ==================== Setters ====================

    pub fn set_text_scale(&mut self, text_scale: Option<TextScale>) {
        self.text_scale = text_scale;
    }

    pub fn set_bundled_fonts(&mut self, enabled: Option<bool>) {
        self.bundled_fonts = enabled;
    }
}
