//! Host table data, deserialized from a snapshot file. This stands in
//! for the table product's in-browser store: tables, columns, views,
//! rows, the collaborator directory and the option-color palette.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::models::cell::CellValue;
use crate::models::column::{Column, ColumnKind};
use crate::models::row::{RowId, TableRow};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaborator {
    /// Stable user key (email) referenced by collaborator cells.
    pub key: String,
    pub name: String,
}

/// One entry of the host's option-color palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionColor {
    pub color: String,
    pub text_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupBy {
    pub column_key: String,
}

/// A host view over a table: row filter/order, grouping levels, shown
/// columns and per-row colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableView {
    pub name: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub groupbys: Vec<GroupBy>,
    /// When present, restricts and orders the visible columns.
    #[serde(default)]
    pub shown_column_keys: Option<Vec<String>>,
    /// When present, restricts and orders the visible rows.
    #[serde(default)]
    pub row_ids: Option<Vec<RowId>>,
    #[serde(default)]
    pub row_colors: HashMap<RowId, String>,
}

impl TableView {
    /// A view is a group view when its first grouping level points at a
    /// column present in the given column set.
    pub fn is_group_view(&self, columns: &[Column]) -> bool {
        self.groupbys
            .first()
            .is_some_and(|g| columns.iter().any(|c| c.key == g.column_key))
    }

    /// The same view truncated to its first grouping level. Deeper
    /// levels the host may define are not rendered.
    pub fn first_level_grouping(&self) -> TableView {
        let mut view = self.clone();
        view.groupbys.truncate(1);
        view
    }
}

/// A stored row: cells keyed by column storage key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRow {
    pub id: RowId,
    #[serde(default)]
    pub cells: HashMap<String, CellValue>,
}

/// One bucket of a grouped view: the distinct grouping-cell value and
/// the member row ids, in view order.
#[derive(Debug, Clone)]
pub struct GroupBucket {
    pub cell_value: CellValue,
    pub column_name: String,
    pub column_key: String,
    pub row_ids: Vec<RowId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<SnapshotRow>,
    pub views: Vec<TableView>,
    /// Computed formula outputs, row id -> column key -> value. The host
    /// evaluates formulas; a snapshot carries the results.
    #[serde(default)]
    pub formula_values: HashMap<RowId, HashMap<String, CellValue>>,
}

impl Table {
    pub fn non_archive_views(&self) -> Vec<&TableView> {
        self.views.iter().filter(|v| !v.archived).collect()
    }

    pub fn view_by_name(&self, name: &str) -> Option<&TableView> {
        self.views.iter().find(|v| v.name == name)
    }

    pub fn column_by_key(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Columns shown by a view, in view order.
    pub fn shown_columns(&self, view: &TableView) -> Vec<Column> {
        match &view.shown_column_keys {
            Some(keys) => keys
                .iter()
                .filter_map(|k| self.column_by_key(k))
                .cloned()
                .collect(),
            None => self.columns.clone(),
        }
    }

    fn view_row_ids(&self, view: &TableView) -> Vec<RowId> {
        match &view.row_ids {
            Some(ids) => ids.clone(),
            None => self.rows.iter().map(|r| r.id.clone()).collect(),
        }
    }

    pub fn snapshot_row(&self, row_id: &str) -> Option<&SnapshotRow> {
        self.rows.iter().find(|r| r.id == row_id)
    }

    /// Both representations of one row: original cells straight from
    /// storage, converted cells keyed by display name with select-option
    /// ids resolved to names and formula outputs merged in.
    pub fn resolve_row(&self, row_id: &str) -> Option<TableRow> {
        let stored = self.snapshot_row(row_id)?;
        let formula = self.formula_values.get(row_id);
        let mut converted = HashMap::new();
        for column in &self.columns {
            let value = match &column.kind {
                ColumnKind::SingleSelect { options } => {
                    match stored.cells.get(&column.key) {
                        Some(CellValue::SingleSelect(id)) => options
                            .iter()
                            .find(|o| &o.id == id)
                            .map(|o| CellValue::SingleSelect(o.name.clone()))
                            .unwrap_or(CellValue::Empty),
                        Some(other) => other.clone(),
                        None => CellValue::Empty,
                    }
                }
                ColumnKind::Formula { .. } | ColumnKind::LinkFormula { .. } => formula
                    .and_then(|f| f.get(&column.key))
                    .cloned()
                    .unwrap_or(CellValue::Empty),
                _ => stored
                    .cells
                    .get(&column.key)
                    .cloned()
                    .unwrap_or(CellValue::Empty),
            };
            converted.insert(column.name.clone(), value);
        }
        Some(TableRow {
            id: stored.id.clone(),
            converted,
            original: stored.cells.clone(),
        })
    }

    /// Converted rows of a view, in view order.
    pub fn view_rows(&self, view: &TableView) -> Vec<TableRow> {
        self.view_row_ids(view)
            .iter()
            .filter_map(|id| self.resolve_row(id))
            .collect()
    }

    /// Bucket the view's rows by its first grouping level, preserving
    /// first-seen order of the distinct grouping values.
    pub fn group_rows(&self, view: &TableView) -> Vec<GroupBucket> {
        let Some(groupby) = view.groupbys.first() else {
            return Vec::new();
        };
        let Some(column) = self.column_by_key(&groupby.column_key) else {
            return Vec::new();
        };
        let mut buckets: Vec<GroupBucket> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for row in self.view_rows(view) {
            let value = row.cell(&column.name).clone();
            let key = value.key();
            match index.get(&key) {
                Some(&i) => buckets[i].row_ids.push(row.id),
                None => {
                    index.insert(key, buckets.len());
                    buckets.push(GroupBucket {
                        cell_value: value,
                        column_name: column.name.clone(),
                        column_key: column.key.clone(),
                        row_ids: vec![row.id],
                    });
                }
            }
        }
        buckets
    }

    /// Linked row ids per row, per link column.
    pub fn link_rows(&self) -> HashMap<RowId, HashMap<String, Vec<RowId>>> {
        let link_keys: Vec<&str> = self
            .columns
            .iter()
            .filter(|c| matches!(c.kind, ColumnKind::Link))
            .map(|c| c.key.as_str())
            .collect();
        let mut out = HashMap::new();
        for row in &self.rows {
            let mut per_column = HashMap::new();
            for key in &link_keys {
                if let Some(ids) = row.cells.get(*key).and_then(|c| c.as_link_ids()) {
                    per_column.insert(key.to_string(), ids.to_vec());
                }
            }
            out.insert(row.id.clone(), per_column);
        }
        out
    }
}

/// A full host-state snapshot, read fresh on every pipeline pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Identifies the hosting table instance; local preferences are
    /// keyed per instance.
    pub instance_id: String,
    #[serde(default)]
    pub active_table: Option<String>,
    pub tables: Vec<Table>,
    #[serde(default)]
    pub collaborators: Vec<Collaborator>,
    #[serde(default)]
    pub option_colors: Vec<OptionColor>,
}

impl Snapshot {
    pub fn load(path: &Path) -> AppResult<Snapshot> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
