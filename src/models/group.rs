use serde::{Deserialize, Serialize};

use super::timeline_row::TimelineRow;

/// Shown in place of an empty grouping cell value.
pub const EMPTY_LABEL: &str = "(Empty)";

/// Rows grouped under one distinct grouping-cell value, with the packed
/// timeline rows and the covering date interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Stringified raw grouping value, computed before the empty-label
    /// substitution.
    pub key: String,
    /// Display form of the grouping value; `(Empty)` for empty cells.
    pub cell_value: String,
    pub column_name: String,
    pub column_key: String,
    /// Nested subgrouping is not supported; always `None`.
    pub subgroups: Option<Vec<Group>>,
    pub min_date: String,
    pub max_date: String,
    pub rows: Vec<TimelineRow>,
}
