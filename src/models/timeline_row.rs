use serde::{Deserialize, Serialize};

use super::event::Event;

/// One visual line of the chart: in swimlane mode a maximal run of
/// non-overlapping events, otherwise a single event. `min_date` and
/// `max_date` cover every event in the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineRow {
    pub min_date: String,
    pub max_date: String,
    pub events: Vec<Event>,
}

impl TimelineRow {
    /// A fresh row holding exactly one event, bounds equal to the
    /// event's own.
    pub fn for_event(event: Event) -> Self {
        Self {
            min_date: event.start.date.clone(),
            max_date: event.end.date.clone(),
            events: vec![event],
        }
    }
}
