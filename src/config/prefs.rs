//! Local, per-machine preferences kept outside the plugin settings
//! blob: which saved view is selected and the grid zoom level, keyed by
//! hosting table instance. Read on start, written on user selection.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

/// Zoom level of the chart grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GridZoom {
    Year,
    Quarter,
    Month,
    Week,
    Day,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalPrefs {
    /// Instance id -> selected saved-view id.
    #[serde(default)]
    pub selected_views: HashMap<String, String>,
    /// "{instance_id}-{view_id}" -> zoom level.
    #[serde(default)]
    pub zoom_levels: HashMap<String, GridZoom>,
}

fn zoom_key(instance_id: &str, view_id: &str) -> String {
    format!("{}-{}", instance_id, view_id)
}

impl LocalPrefs {
    /// Load preferences; a missing or unreadable file yields defaults.
    pub fn load(path: &Path) -> LocalPrefs {
        fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn selected_view(&self, instance_id: &str) -> Option<&str> {
        self.selected_views.get(instance_id).map(|s| s.as_str())
    }

    pub fn set_selected_view(&mut self, instance_id: &str, view_id: &str) {
        self.selected_views
            .insert(instance_id.to_string(), view_id.to_string());
    }

    pub fn zoom(&self, instance_id: &str, view_id: &str) -> Option<GridZoom> {
        self.zoom_levels.get(&zoom_key(instance_id, view_id)).copied()
    }

    pub fn set_zoom(&mut self, instance_id: &str, view_id: &str, zoom: GridZoom) {
        self.zoom_levels.insert(zoom_key(instance_id, view_id), zoom);
    }
}
