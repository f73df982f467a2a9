use crate::cli::parser::{Commands, MovePosition, ViewsAction};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::view::{
    add_view, delete_view, move_view, rename_view, PluginSettings, RelativePosition,
};
use crate::store::TableStore;
use crate::ui::messages::success;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Views { action } = cmd {
        let mut env = super::load_env(cfg)?;
        match action {
            ViewsAction::List => {
                let selected = env.resolve_saved_view(None)?.0;
                let mut table = Table::new(&["", "ID", "Name", "Configured"]);
                for (idx, view) in env.plugin_settings.views.iter().enumerate() {
                    table.add_row(vec![
                        if idx == selected { "*" } else { "" }.to_string(),
                        view.id.clone(),
                        view.name.clone(),
                        if view.has_settings() { "yes" } else { "no" }.to_string(),
                    ]);
                }
                print!("{}", table.render());
            }
            ViewsAction::Add { name } => {
                let (updated, idx) = add_view(&env.plugin_settings, name);
                env.settings_store.save(&updated)?;
                let instance_id = env.store.instance_id().to_string();
                env.prefs.set_selected_view(&instance_id, &updated.views[idx].id);
                env.prefs.save(&env.prefs_path)?;
                success(format!("Added view '{}' ({})", name, updated.views[idx].id));
            }
            ViewsAction::Rename { view, name } => {
                let id = resolve_id(&env.plugin_settings, view)?;
                let updated = rename_view(&env.plugin_settings, &id, name)
                    .ok_or_else(|| AppError::UnknownSavedView(view.clone()))?;
                env.settings_store.save(&updated)?;
                success(format!("Renamed view {} to '{}'", id, name));
            }
            ViewsAction::Del { view } => {
                let id = resolve_id(&env.plugin_settings, view)?;
                let selected = env.resolve_saved_view(None)?.0;
                let (updated, new_selected) = delete_view(&env.plugin_settings, &id, selected)
                    .ok_or_else(|| AppError::UnknownSavedView(view.clone()))?;
                if updated.views.is_empty() {
                    return Err(AppError::SavedViews(
                        "cannot delete the last saved view".to_string(),
                    ));
                }
                env.settings_store.save(&updated)?;
                let instance_id = env.store.instance_id().to_string();
                env.prefs
                    .set_selected_view(&instance_id, &updated.views[new_selected].id);
                env.prefs.save(&env.prefs_path)?;
                success(format!("Deleted view {}", id));
            }
            ViewsAction::Move {
                view,
                anchor,
                position,
            } => {
                let id = resolve_id(&env.plugin_settings, view)?;
                let anchor_id = resolve_id(&env.plugin_settings, anchor)?;
                let selected = env.resolve_saved_view(None)?.0;
                let position = match position {
                    MovePosition::Before => RelativePosition::Before,
                    MovePosition::After => RelativePosition::After,
                };
                let (updated, new_selected) =
                    move_view(&env.plugin_settings, &id, &anchor_id, position, selected)
                        .ok_or_else(|| AppError::UnknownSavedView(view.clone()))?;
                env.settings_store.save(&updated)?;
                let instance_id = env.store.instance_id().to_string();
                env.prefs
                    .set_selected_view(&instance_id, &updated.views[new_selected].id);
                env.prefs.save(&env.prefs_path)?;
                success(format!("Moved view {}", id));
            }
            ViewsAction::Select { view } => {
                let id = resolve_id(&env.plugin_settings, view)?;
                let instance_id = env.store.instance_id().to_string();
                env.prefs.set_selected_view(&instance_id, &id);
                env.prefs.save(&env.prefs_path)?;
                success(format!("Selected view {}", id));
            }
        }
    }
    Ok(())
}

fn resolve_id(settings: &PluginSettings, wanted: &str) -> AppResult<String> {
    settings
        .views
        .iter()
        .find(|v| v.id == wanted || v.name == wanted)
        .map(|v| v.id.clone())
        .ok_or_else(|| AppError::UnknownSavedView(wanted.to_string()))
}
