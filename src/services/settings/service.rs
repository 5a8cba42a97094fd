use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::PickerSettings;

const SETTINGS_FILE: &str = "picker.toml";

/// Loads and stores [`PickerSettings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to `picker.toml` in the platform config directory.
    pub fn with_default_path() -> Option<Self> {
        ProjectDirs::from("com", "Ken24T", "CalendarPicker")
            .map(|dirs| Self::new(dirs.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings file. A missing file yields the defaults.
    pub fn load(&self) -> Result<PickerSettings> {
        if !self.path.exists() {
            log::info!("No settings file at {}, using defaults", self.path.display());
            return Ok(PickerSettings::default());
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: PickerSettings = toml::from_str(&text)
            .with_context(|| format!("failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        log::info!("Loaded picker settings from {}", self.path.display());
        Ok(settings)
    }

    /// Like [`load`](Self::load), falling back to defaults on any error.
    pub fn load_or_default(&self) -> PickerSettings {
        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{:#}; falling back to default settings", e);
                PickerSettings::default()
            }
        }
    }

    /// Write the settings file, creating parent directories as needed.
    pub fn save(&self, settings: &PickerSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let text = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, text)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        log::info!("Saved picker settings to {}", self.path.display());
        Ok(())
    }
}
