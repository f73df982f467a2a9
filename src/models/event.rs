use serde::{Deserialize, Serialize};

use super::row::TableRow;

/// One endpoint of an event bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDate {
    /// Raw host date string ("YYYY-MM-DD", optionally with "HH:mm").
    pub date: String,
    /// True when the backing column is of the directly editable type
    /// (DATE for start/end, NUMBER for a duration end).
    pub can_change: bool,
    /// Storage key of the backing column, for the inline-edit write path.
    pub column_key: Option<String>,
}

/// A typed timeline event derived from one row. Immutable once built;
/// rebuilt from scratch on every data or settings change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub label: Option<String>,
    pub bg_color: String,
    pub text_color: String,
    pub start: EventDate,
    pub end: EventDate,
    /// Source row, carrying both the converted and the original cells.
    pub row: TableRow,
}

impl Event {
    pub fn row_id(&self) -> &str {
        &self.row.id
    }
}
