use std::collections::HashMap;

use serde::Serialize;

use crate::core::assemble::TimelineOutput;
use crate::models::row::RowId;

/// Flat per-event export record.
#[derive(Serialize, Clone, Debug)]
pub struct EventRecord {
    /// Group key; empty for flat (ungrouped) views.
    pub group: String,
    /// Visual line index within the group (or within the flat output).
    pub lane: usize,
    pub label: String,
    pub start: String,
    pub end: String,
    pub bg_color: String,
    pub text_color: String,
    pub row_id: String,
    /// Linked row ids from the configured link column, ";"-joined.
    pub links: String,
}

/// Flatten the assembled timeline into per-event records. `links` maps
/// row ids to the linked row ids of the configured link column.
pub fn flatten(
    output: &TimelineOutput,
    links: &HashMap<RowId, Vec<RowId>>,
) -> Vec<EventRecord> {
    let mut records = Vec::new();
    let mut push_rows = |group_key: &str, rows: &[crate::models::timeline_row::TimelineRow]| {
        for (lane, row) in rows.iter().enumerate() {
            for event in &row.events {
                records.push(EventRecord {
                    group: group_key.to_string(),
                    lane,
                    label: event.label.clone().unwrap_or_default(),
                    start: event.start.date.clone(),
                    end: event.end.date.clone(),
                    bg_color: event.bg_color.clone(),
                    text_color: event.text_color.clone(),
                    row_id: event.row.id.clone(),
                    links: links
                        .get(&event.row.id)
                        .map(|ids| ids.join(";"))
                        .unwrap_or_default(),
                });
            }
        }
    };
    push_rows("", &output.rows);
    for group in &output.groups {
        push_rows(&group.key, &group.rows);
    }
    records
}
