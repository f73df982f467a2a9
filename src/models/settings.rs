use serde::{Deserialize, Serialize};

use super::column::{Column, ColumnKind};

/// How the end of an event is recorded: either a dedicated end-date
/// column, or a numeric duration in days added to the start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordEndType {
    #[default]
    EndTime,
    RecordDuration,
}

/// Per-saved-view column mapping, persisted in the plugin settings blob.
/// Field names follow the stored setting keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub table_name: Option<String>,
    pub view_name: Option<String>,
    pub start_time_column_name: Option<String>,
    pub end_time_column_name: Option<String>,
    pub record_duration_column_name: Option<String>,
    pub label_column_name: Option<String>,
    pub link_cell_column_name: Option<String>,
    pub single_select_column_name: Option<String>,
    pub colored_by_row_color: bool,
    pub record_end_type: RecordEndType,
    pub display_as_swimlane: bool,
}

impl ViewSettings {
    /// A column selection, treating the "not used" empty string the same
    /// as an unset key.
    pub fn column<'a>(value: &'a Option<String>) -> Option<&'a str> {
        value.as_deref().filter(|s| !s.is_empty())
    }

    /// Complete enough to render: a start column plus either an end
    /// column or a duration column.
    pub fn is_complete(&self) -> bool {
        Self::column(&self.start_time_column_name).is_some()
            && (Self::column(&self.end_time_column_name).is_some()
                || Self::column(&self.record_duration_column_name).is_some())
    }

    /// Seed the label/color selections from the first single-select
    /// column shown in the view, when the user has not picked any.
    /// Returns a new value; the stored settings are never mutated here.
    pub fn seed_defaults(&self, columns: &[Column]) -> ViewSettings {
        let mut seeded = self.clone();
        let single_select = columns
            .iter()
            .find(|c| matches!(c.kind, ColumnKind::SingleSelect { .. }));
        if let Some(column) = single_select {
            if !seeded.colored_by_row_color && seeded.single_select_column_name.is_none() {
                seeded.single_select_column_name = Some(column.name.clone());
            }
            if seeded.label_column_name.is_none() {
                seeded.label_column_name = Some(column.name.clone());
            }
        }
        seeded
    }
}
