use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::assemble::roles_for_selection;
use crate::core::classify::FieldOption;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { view } = cmd {
        let env = super::load_env(cfg)?;
        let (_, saved) = env.resolve_saved_view(view.as_deref())?;

        if saved.has_settings() && saved.settings.is_complete() {
            success(format!("Saved view '{}' settings are complete", saved.name));
            return Ok(());
        }

        if !saved.has_settings() {
            warning(format!("Saved view '{}' was never configured", saved.name));
        } else {
            warning(format!(
                "Saved view '{}' is missing a start column or an end/duration column",
                saved.name
            ));
        }

        // Show what the current table/view selection has to offer.
        let (_, roles) = roles_for_selection(&env.store, &saved.settings)?;
        print_candidates("start/end columns", &roles.date_fields);
        print_candidates("duration columns", &roles.number_fields);
        print_candidates("label columns", &roles.label_fields);
        print_candidates("color columns", &roles.color_fields);
        std::process::exit(1);
    }
    Ok(())
}

fn print_candidates(what: &str, fields: &[FieldOption]) {
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    if names.is_empty() {
        println!("  {}: (none available)", what);
    } else {
        println!("  {}: {}", what, names.join(", "));
    }
}
