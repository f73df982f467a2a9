//! Group Aggregator: buckets the view's rows by its first grouping
//! level, builds and packs each bucket's events, and derives the
//! covering date interval per group.

use crate::models::group::{Group, EMPTY_LABEL};
use crate::models::row::TableRow;
use crate::models::timeline_row::TimelineRow;
use crate::store::{Table, TableView};
use crate::utils::date;

use super::events::{build_events, EventContext};
use super::packer::pack;

pub fn build_groups(table: &Table, view: &TableView, ctx: &EventContext) -> Vec<Group> {
    let buckets = table.group_rows(&view.first_level_grouping());
    let mut groups = Vec::new();
    for bucket in buckets {
        let member_rows: Vec<TableRow> = bucket
            .row_ids
            .iter()
            .filter_map(|id| table.resolve_row(id))
            .collect();
        let events = build_events(ctx, &member_rows);
        let rows = pack(events, ctx.settings.display_as_swimlane);
        // Groups left with no valid event are not rendered at all.
        let Some((min_date, max_date)) = boundary_dates(&rows) else {
            continue;
        };
        let cell_value = if bucket.cell_value.is_empty() {
            EMPTY_LABEL.to_string()
        } else {
            bucket.cell_value.display()
        };
        groups.push(Group {
            key: bucket.cell_value.key(),
            cell_value,
            column_name: bucket.column_name,
            column_key: bucket.column_key,
            subgroups: None,
            min_date,
            max_date,
            rows,
        });
    }
    groups
}

/// Minimum start and maximum end across the packed rows. `None` for an
/// empty row list.
pub fn boundary_dates(rows: &[TimelineRow]) -> Option<(String, String)> {
    let mut min: Option<&str> = None;
    let mut max: Option<&str> = None;
    for row in rows {
        if min.is_none_or(|m| date::is_before(&row.min_date, m)) {
            min = Some(&row.min_date);
        }
        if max.is_none_or(|m| date::is_after(&row.max_date, m)) {
            max = Some(&row.max_date);
        }
    }
    Some((min?.to_string(), max?.to_string()))
}
