use serde::{Deserialize, Serialize};

use super::settings::ViewSettings;

/// A saved timeline view inside the plugin settings blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedView {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub settings: ViewSettings,
}

impl SavedView {
    /// False on a freshly created view whose settings were never touched.
    /// The consuming UI uses this to force the settings dialog instead of
    /// rendering a broken chart.
    pub fn has_settings(&self) -> bool {
        self.settings != ViewSettings::default()
    }
}

/// The persisted per-plugin settings blob: the list of saved views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginSettings {
    pub views: Vec<SavedView>,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            views: vec![SavedView {
                id: "0000".to_string(),
                name: "Default View".to_string(),
                settings: ViewSettings::default(),
            }],
        }
    }
}

/// Where to drop a moved view relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativePosition {
    Before,
    After,
}

impl PluginSettings {
    pub fn view_index(&self, view_id: &str) -> Option<usize> {
        self.views.iter().position(|v| v.id == view_id)
    }

    /// A 4-character id not used by any existing view.
    pub fn generate_view_id(&self) -> String {
        let mut n = self.views.len();
        loop {
            let id = format!("{:04x}", n);
            if self.views.iter().all(|v| v.id != id) {
                return id;
            }
            n += 1;
        }
    }
}

// Saved-view updates are pure: each returns a new PluginSettings (plus
// the new selected index where selection is affected) and leaves the
// input untouched. The settings store owns applying and saving them.

pub fn add_view(settings: &PluginSettings, name: &str) -> (PluginSettings, usize) {
    let mut updated = settings.clone();
    let selected = updated.views.len();
    updated.views.push(SavedView {
        id: settings.generate_view_id(),
        name: name.to_string(),
        settings: ViewSettings::default(),
    });
    (updated, selected)
}

pub fn rename_view(settings: &PluginSettings, view_id: &str, name: &str) -> Option<PluginSettings> {
    let idx = settings.view_index(view_id)?;
    let mut updated = settings.clone();
    updated.views[idx].name = name.to_string();
    Some(updated)
}

/// Remove a view. When the removed view was the last entry the selection
/// backs up one slot, otherwise the numeric selection is kept.
pub fn delete_view(
    settings: &PluginSettings,
    view_id: &str,
    selected_idx: usize,
) -> Option<(PluginSettings, usize)> {
    let idx = settings.view_index(view_id)?;
    let mut updated = settings.clone();
    let selected = if idx + 1 == updated.views.len() {
        idx.saturating_sub(1)
    } else {
        selected_idx
    };
    updated.views.remove(idx);
    Some((updated, selected))
}

/// Replace the settings of one saved view.
pub fn update_view_settings(
    settings: &PluginSettings,
    view_id: &str,
    view_settings: ViewSettings,
) -> Option<PluginSettings> {
    let idx = settings.view_index(view_id)?;
    let mut updated = settings.clone();
    updated.views[idx].settings = view_settings;
    Some(updated)
}

/// Move `view_id` next to `anchor_id`. Returns the new settings and the
/// new index of the view that was selected before the move.
pub fn move_view(
    settings: &PluginSettings,
    view_id: &str,
    anchor_id: &str,
    position: RelativePosition,
    selected_idx: usize,
) -> Option<(PluginSettings, usize)> {
    let selected_id = settings.views.get(selected_idx)?.id.clone();
    let from = settings.view_index(view_id)?;
    let anchor = settings.view_index(anchor_id)?;
    let mut views = settings.views.clone();
    let moved = views.remove(from);
    let mut to = match position {
        RelativePosition::Before => anchor,
        RelativePosition::After => anchor + 1,
    };
    if from < to {
        to -= 1;
    }
    if to > views.len() {
        to = views.len();
    }
    views.insert(to, moved);
    let updated = PluginSettings { views };
    let selected = updated.view_index(&selected_id)?;
    Some((updated, selected))
}
