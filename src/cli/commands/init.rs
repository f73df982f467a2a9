use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::view::PluginSettings;
use crate::settings_store::SettingsStore;
use crate::ui::messages::success;

pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.test)?;

    let cfg = Config::load();
    let saved_views = cli.views_file.clone().unwrap_or(cfg.saved_views);
    let store = SettingsStore::new(&saved_views);
    if !store.path().exists() {
        store.save(&PluginSettings::default())?;
    }
    success("tablelane initialized");
    Ok(())
}
