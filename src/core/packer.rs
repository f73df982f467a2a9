//! Row Packer: lays events out on visual lines. In swimlane mode a line
//! is reused greedily by the next event that starts after the line's
//! current end (first fit — O(events x lines), not min-line optimal).

use crate::models::event::Event;
use crate::models::timeline_row::TimelineRow;
use crate::utils::date;

pub fn pack(mut events: Vec<Event>, display_as_swimlane: bool) -> Vec<TimelineRow> {
    if display_as_swimlane {
        // Stable: events with equal starts keep their input order.
        events.sort_by(|a, b| date::cmp_dates(&a.start.date, &b.start.date));
    }
    let mut rows: Vec<TimelineRow> = Vec::new();
    for event in events {
        if display_as_swimlane {
            // First line already ended strictly before this event starts.
            let slot = rows
                .iter_mut()
                .find(|row| date::is_after(&event.start.date, &row.max_date));
            if let Some(row) = slot {
                row.max_date = event.end.date.clone();
                row.events.push(event);
                continue;
            }
        }
        rows.push(TimelineRow::for_event(event));
    }
    rows
}
