pub mod check;
pub mod export;
pub mod init;
pub mod render;
pub mod views;

use crate::config::prefs::LocalPrefs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::view::{PluginSettings, SavedView};
use crate::settings_store::SettingsStore;
use crate::store::{SnapshotStore, TableStore};
use std::path::{Path, PathBuf};

/// Everything a command needs: the table store, the saved views and the
/// local preferences, loaded from the configured paths.
pub(crate) struct CommandEnv {
    pub store: SnapshotStore,
    pub settings_store: SettingsStore,
    pub plugin_settings: PluginSettings,
    pub prefs: LocalPrefs,
    pub prefs_path: PathBuf,
}

pub(crate) fn load_env(cfg: &Config) -> AppResult<CommandEnv> {
    let store = SnapshotStore::load(Path::new(&cfg.snapshot))?;
    let settings_store = SettingsStore::new(&cfg.saved_views);
    let plugin_settings = settings_store.load()?;
    let prefs_path = PathBuf::from(&cfg.prefs);
    let prefs = LocalPrefs::load(&prefs_path);
    Ok(CommandEnv {
        store,
        settings_store,
        plugin_settings,
        prefs,
        prefs_path,
    })
}

impl CommandEnv {
    /// The saved view a command operates on: the one named on the
    /// command line (by id or name), else the remembered selection for
    /// this table instance, else the first view.
    pub fn resolve_saved_view(&self, arg: Option<&str>) -> AppResult<(usize, &SavedView)> {
        if let Some(wanted) = arg {
            let idx = self
                .plugin_settings
                .views
                .iter()
                .position(|v| v.id == wanted || v.name == wanted)
                .ok_or_else(|| AppError::UnknownSavedView(wanted.to_string()))?;
            return Ok((idx, &self.plugin_settings.views[idx]));
        }
        let remembered = self
            .prefs
            .selected_view(self.store.instance_id())
            .and_then(|id| self.plugin_settings.view_index(id))
            .unwrap_or(0);
        let idx = if remembered > 0 { remembered } else { 0 };
        Ok((idx, &self.plugin_settings.views[idx]))
    }
}
