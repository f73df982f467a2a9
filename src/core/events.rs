//! Event Builder: one row in, one typed timeline event out — or none,
//! when the row has no usable date interval.

use std::collections::HashMap;

use crate::models::cell::CellValue;
use crate::models::column::{
    column_by_name, ArrayElementType, Column, ColumnKind, FormulaResultType,
};
use crate::models::event::{Event, EventDate};
use crate::models::row::{RowId, TableRow};
use crate::models::settings::{RecordEndType, ViewSettings};
use crate::utils::colors::{DEFAULT_BG_COLOR, DEFAULT_TEXT_COLOR};
use crate::utils::date;
use crate::utils::formatting::collaborators_display_string;

/// Where event colors come from: the view's per-row colors, or the
/// options of a single-select column.
pub enum ColorSource<'a> {
    RowColors(HashMap<RowId, String>),
    SingleSelect { column: Option<&'a Column> },
}

/// Everything the builder needs besides the row itself. Assembled once
/// per pipeline pass.
pub struct EventContext<'a> {
    pub columns: &'a [Column],
    pub label_column: Option<&'a Column>,
    pub color_source: ColorSource<'a>,
    /// Collaborator key -> display name.
    pub collaborators: &'a HashMap<String, String>,
    /// Background color -> text color, for row-color mode.
    pub palette: &'a HashMap<String, String>,
    pub settings: &'a ViewSettings,
}

/// Build events for a run of converted rows, dropping rows that produce
/// no valid event.
pub fn build_events(ctx: &EventContext, rows: &[TableRow]) -> Vec<Event> {
    rows.iter().filter_map(|row| build_event(ctx, row)).collect()
}

/// Build one event. Returns `None` when the start or end date is absent
/// or unparseable, or when the end lands strictly before the start —
/// such rows are dropped, not repaired.
pub fn build_event(ctx: &EventContext, row: &TableRow) -> Option<Event> {
    let label = resolve_label(ctx, row);
    let (bg_color, text_color) = resolve_colors(ctx, row);

    let start_name = ViewSettings::column(&ctx.settings.start_time_column_name)?;
    let start_column = column_by_name(ctx.columns, start_name);
    let start_date = row.cell(start_name).as_date_str()?.to_string();
    let can_change_start = start_column.is_some_and(|c| c.kind.is_date());

    let (end_date, end_column, can_change_end) = match ctx.settings.record_end_type {
        RecordEndType::RecordDuration => {
            let duration_name = ViewSettings::column(&ctx.settings.record_duration_column_name);
            let duration_column =
                duration_name.and_then(|name| column_by_name(ctx.columns, name));
            let can_change = duration_column.is_some_and(|c| c.kind.is_number());
            let duration = duration_name.and_then(|name| row.cell(name).as_number());
            // A missing duration cell (or an explicit zero) collapses
            // the event to its start date.
            let end = match duration {
                Some(days) if days != 0.0 => {
                    let with_hour = start_column.is_some_and(|c| c.format_has_hour());
                    date::add_days(&start_date, days.round() as i64, with_hour)?
                }
                _ => start_date.clone(),
            };
            (end, duration_column, can_change)
        }
        RecordEndType::EndTime => {
            let end_name = ViewSettings::column(&ctx.settings.end_time_column_name)?;
            let end_column = column_by_name(ctx.columns, end_name);
            let end = row.cell(end_name).as_date_str()?.to_string();
            (end, end_column, end_column.is_some_and(|c| c.kind.is_date()))
        }
    };

    if date::is_before(&end_date, &start_date) {
        return None;
    }

    Some(Event {
        label,
        bg_color,
        text_color,
        start: EventDate {
            date: start_date,
            can_change: can_change_start,
            column_key: start_column.map(|c| c.key.clone()),
        },
        end: EventDate {
            date: end_date,
            can_change: can_change_end,
            column_key: end_column.map(|c| c.key.clone()),
        },
        row: row.clone(),
    })
}

/// Label resolution, dispatched on the label column's kind.
fn resolve_label(ctx: &EventContext, row: &TableRow) -> Option<String> {
    let column = ctx.label_column?;
    let cell = row.cell(&column.name);
    let label = match &column.kind {
        ColumnKind::Text | ColumnKind::SingleSelect { .. } => cell.display(),
        ColumnKind::Collaborator => {
            collaborators_display_string(cell.as_collaborator_keys()?, ctx.collaborators)
        }
        ColumnKind::Formula { result } | ColumnKind::LinkFormula { result } => {
            let result = result.as_ref()?;
            if result.result_type == FormulaResultType::Array
                && result.array_type == Some(ArrayElementType::Collaborator)
            {
                collaborators_display_string(cell.as_collaborator_keys()?, ctx.collaborators)
            } else {
                cell.display()
            }
        }
        ColumnKind::LongText
        | ColumnKind::Date { .. }
        | ColumnKind::Number
        | ColumnKind::Link
        | ColumnKind::Unsupported => cell.display(),
    };
    if label.is_empty() { None } else { Some(label) }
}

/// Color resolution: per-row view colors with a palette text lookup, or
/// the matching single-select option; fixed defaults when unresolved.
fn resolve_colors(ctx: &EventContext, row: &TableRow) -> (String, String) {
    let (bg, text) = match &ctx.color_source {
        ColorSource::RowColors(rows_color) => {
            let bg = rows_color.get(&row.id).cloned();
            let text = bg.as_ref().and_then(|b| ctx.palette.get(b)).cloned();
            (bg, text)
        }
        ColorSource::SingleSelect { column } => {
            let option = column.and_then(|c| match row.original_cell(&c.key) {
                CellValue::SingleSelect(option_id) => {
                    c.select_options().iter().find(|o| &o.id == option_id)
                }
                _ => None,
            });
            (
                option.map(|o| o.color.clone()),
                option.map(|o| o.text_color.clone()),
            )
        }
    };
    (
        bg.unwrap_or_else(|| DEFAULT_BG_COLOR.to_string()),
        text.unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string()),
    )
}
