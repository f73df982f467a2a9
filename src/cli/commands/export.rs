use std::collections::HashMap;
use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::assemble::{assemble, TimelineOutput, TimelineResult};
use crate::errors::{AppError, AppResult};
use crate::export::{ensure_writable, export_timeline, flatten};
use crate::models::row::RowId;
use crate::models::settings::ViewSettings;
use crate::store::{SnapshotStore, TableStore};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        view,
    } = cmd
    {
        let env = super::load_env(cfg)?;
        let (_, saved) = env.resolve_saved_view(view.as_deref())?;

        let output = match assemble(&env.store, &saved.settings)? {
            TimelineResult::SettingsIncomplete => {
                return Err(AppError::Export(format!(
                    "saved view '{}' has incomplete settings",
                    saved.name
                )));
            }
            TimelineResult::Ready(output) => output,
        };

        let path = Path::new(file);
        ensure_writable(path, *force)?;
        let links = link_map(&env.store, &output);
        let records = flatten(&output, &links);
        export_timeline(format, path, &output, &records)?;
    }
    Ok(())
}

/// Row id -> linked row ids for the view's configured link column.
/// Empty when no link column is selected.
fn link_map(store: &SnapshotStore, output: &TimelineOutput) -> HashMap<RowId, Vec<RowId>> {
    let Some(link_name) = ViewSettings::column(&output.settings.link_cell_column_name) else {
        return HashMap::new();
    };
    let Some(table) = store.table_by_name(&output.table_name) else {
        return HashMap::new();
    };
    let Some(column) = table.column_by_name(link_name) else {
        return HashMap::new();
    };
    store
        .link_rows(table)
        .into_iter()
        .map(|(row_id, mut per_column)| {
            (row_id, per_column.remove(&column.key).unwrap_or_default())
        })
        .collect()
}
