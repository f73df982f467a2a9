use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::assemble::{assemble, TimelineOutput, TimelineResult};
use crate::errors::AppResult;
use crate::models::timeline_row::TimelineRow;
use crate::store::TableStore;
use crate::ui::messages::{info, warning};
use crate::utils::colors::{swatch, BOLD, GREY, RESET};
use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render { view, zoom } = cmd {
        let mut env = super::load_env(cfg)?;
        let (_, saved) = env.resolve_saved_view(view.as_deref())?;
        let saved_id = saved.id.clone();
        let saved_name = saved.name.clone();
        let settings = saved.settings.clone();

        if let Some(zoom) = zoom {
            let instance_id = env.store.instance_id().to_string();
            env.prefs.set_zoom(&instance_id, &saved_id, *zoom);
            env.prefs.save(&env.prefs_path)?;
        }

        match assemble(&env.store, &settings)? {
            TimelineResult::SettingsIncomplete => {
                warning(format!(
                    "Saved view '{}' has incomplete settings: pick a start column and an end or duration column",
                    saved_name
                ));
            }
            TimelineResult::Ready(output) => print_timeline(&saved_name, &output),
        }
    }
    Ok(())
}

fn print_timeline(saved_name: &str, output: &TimelineOutput) {
    let mode = match (output.is_group_view, output.settings.display_as_swimlane) {
        (true, true) => "grouped, swimlane",
        (true, false) => "grouped",
        (false, _) => "flat",
    };
    info(format!(
        "{} / {} — saved view '{}' ({})",
        output.table_name, output.view_name, saved_name, mode
    ));

    if output.is_group_view {
        if output.groups.is_empty() {
            println!("No groups with valid events.");
            return;
        }
        for group in &output.groups {
            println!(
                "\n{}{}{}  {}[{} → {}]{}",
                BOLD, group.cell_value, RESET, GREY, group.min_date, group.max_date, RESET
            );
            print_rows(&group.rows);
        }
    } else {
        if output.rows.is_empty() {
            println!("No valid events.");
            return;
        }
        println!();
        print_rows(&output.rows);
    }
}

fn print_rows(rows: &[TimelineRow]) {
    let label_width = rows
        .iter()
        .flat_map(|r| r.events.iter())
        .map(|e| UnicodeWidthStr::width(e.label.as_deref().unwrap_or("-")))
        .max()
        .unwrap_or(1);
    for (lane, row) in rows.iter().enumerate() {
        for event in &row.events {
            let label = event.label.as_deref().unwrap_or("-");
            println!(
                "  {:>3}  {} {}  {} → {}",
                lane,
                swatch(&event.bg_color),
                pad_right(label, label_width),
                event.start.date,
                event.end.date
            );
        }
    }
}
