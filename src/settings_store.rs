//! Persistence boundary for the plugin settings blob (the saved timeline
//! views). The pipeline and the pure view operations never touch disk;
//! this store owns loading and applying updated values.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::models::view::PluginSettings;

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved views. A missing file means the plugin was never
    /// configured: fall back to the default single view, which the
    /// caller will detect as "settings incomplete".
    pub fn load(&self) -> AppResult<PluginSettings> {
        if !self.path.exists() {
            return Ok(PluginSettings::default());
        }
        let content = fs::read_to_string(&self.path)?;
        let settings: PluginSettings = serde_yaml::from_str(&content)
            .map_err(|e| AppError::SavedViews(e.to_string()))?;
        if settings.views.is_empty() {
            return Ok(PluginSettings::default());
        }
        Ok(settings)
    }

    pub fn save(&self, settings: &PluginSettings) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml =
            serde_yaml::to_string(settings).map_err(|e| AppError::SavedViews(e.to_string()))?;
        fs::write(&self.path, yaml)?;
        Ok(())
    }
}
