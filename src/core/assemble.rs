//! Timeline Assembly: the pipeline root. Resolves the selected table,
//! view and columns, seeds defaults into the view settings, then runs
//! classifier -> event builder -> packer -> aggregator and exposes the
//! final row/group list. Re-run from scratch on every change
//! notification; nothing is cached across passes.

use std::collections::HashMap;

use serde::Serialize;

use crate::errors::{AppError, AppResult};
use crate::models::cell::CellValue;
use crate::models::column::{column_by_name, Column};
use crate::models::event::Event;
use crate::models::group::Group;
use crate::models::settings::ViewSettings;
use crate::models::timeline_row::TimelineRow;
use crate::store::{Table, TableStore, TableView};

use super::classify::{classify, ColumnRoles};
use super::events::{build_events, ColorSource, EventContext};
use super::groups::build_groups;

/// The assembled chart model handed to the rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineOutput {
    pub table_name: String,
    pub view_name: String,
    /// Effective settings for this pass, defaults seeded.
    pub settings: ViewSettings,
    pub column_roles: ColumnRoles,
    pub is_group_view: bool,
    /// Flat views: one row per event, input order, never packed.
    pub rows: Vec<TimelineRow>,
    /// Group views: packed rows under each first-level group.
    pub groups: Vec<Group>,
}

impl TimelineOutput {
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        let flat = self.rows.iter().flat_map(|r| r.events.iter());
        let grouped = self
            .groups
            .iter()
            .flat_map(|g| g.rows.iter())
            .flat_map(|r| r.events.iter());
        flat.chain(grouped)
    }
}

/// Outcome of one pipeline pass. Incomplete settings are a reported
/// condition, not an error: the consuming UI forces the settings dialog
/// instead of rendering a broken chart.
#[derive(Debug, Clone, Serialize)]
pub enum TimelineResult {
    SettingsIncomplete,
    Ready(TimelineOutput),
}

fn selected_table<'a, S: TableStore>(
    store: &'a S,
    settings: &ViewSettings,
) -> AppResult<&'a Table> {
    ViewSettings::column(&settings.table_name)
        .and_then(|name| store.table_by_name(name))
        .or_else(|| store.active_table())
        .ok_or(AppError::NoTables)
}

fn selected_view<'a>(table: &'a Table, settings: &ViewSettings) -> AppResult<&'a TableView> {
    ViewSettings::column(&settings.view_name)
        .and_then(|name| table.view_by_name(name))
        .or_else(|| table.non_archive_views().into_iter().next())
        .ok_or_else(|| AppError::NoViews(table.name.clone()))
}

/// Run the full transformation against the store's current state.
pub fn assemble<S: TableStore>(store: &S, settings: &ViewSettings) -> AppResult<TimelineResult> {
    let table = selected_table(store, settings)?;
    let view = selected_view(table, settings)?;
    let columns = table.shown_columns(view);
    let settings = settings.seed_defaults(&columns);
    if !settings.is_complete() {
        return Ok(TimelineResult::SettingsIncomplete);
    }

    let column_roles = classify(&columns);
    let is_group_view = view.is_group_view(&columns);
    let directory = store.collaborator_directory();
    let palette = store.option_colors_map();
    let label_column =
        ViewSettings::column(&settings.label_column_name).and_then(|n| column_by_name(&columns, n));
    let color_source = if settings.colored_by_row_color {
        ColorSource::RowColors(store.view_rows_color(view))
    } else {
        ColorSource::SingleSelect {
            column: ViewSettings::column(&settings.single_select_column_name)
                .and_then(|n| column_by_name(&columns, n)),
        }
    };
    let ctx = EventContext {
        columns: &columns,
        label_column,
        color_source,
        collaborators: &directory,
        palette: &palette,
        settings: &settings,
    };

    let (rows, groups) = if is_group_view {
        (Vec::new(), build_groups(table, view, &ctx))
    } else {
        let view_rows = table.view_rows(view);
        let events = build_events(&ctx, &view_rows);
        (
            events.into_iter().map(TimelineRow::for_event).collect(),
            Vec::new(),
        )
    };

    Ok(TimelineResult::Ready(TimelineOutput {
        table_name: table.name.clone(),
        view_name: view.name.clone(),
        settings,
        column_roles,
        is_group_view,
        rows,
        groups,
    }))
}

/// Which endpoint of an event an inline edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventEdge {
    Start,
    End,
}

/// Write path for inline edits: push a new value into the column backing
/// one endpoint of an event. Refused when the endpoint's column is not
/// of the directly editable type.
pub fn modify_event_date<S: TableStore>(
    store: &mut S,
    table_name: &str,
    event: &Event,
    edge: EventEdge,
    value: CellValue,
) -> AppResult<()> {
    let endpoint = match edge {
        EventEdge::Start => &event.start,
        EventEdge::End => &event.end,
    };
    let column_key = match (&endpoint.column_key, endpoint.can_change) {
        (Some(key), true) => key.clone(),
        (Some(key), false) => return Err(AppError::NotEditable(key.clone())),
        (None, _) => return Err(AppError::NotEditable("(unset)".to_string())),
    };
    let update = HashMap::from([(column_key, value)]);
    store.modify_row(table_name, event.row_id(), update)
}

/// Convenience used by the CLI and tests: which columns could serve each
/// selector for this table/view selection.
pub fn roles_for_selection<S: TableStore>(
    store: &S,
    settings: &ViewSettings,
) -> AppResult<(Vec<Column>, ColumnRoles)> {
    let table = selected_table(store, settings)?;
    let view = selected_view(table, settings)?;
    let columns = table.shown_columns(view);
    let roles = classify(&columns);
    Ok((columns, roles))
}
