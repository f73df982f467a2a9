//! The table-store capability. The pipeline never reaches for ambient
//! host state: everything it reads or writes goes through this trait,
//! which tests satisfy with in-memory snapshots.

pub mod snapshot;

use std::collections::HashMap;
use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::models::cell::CellValue;
use crate::models::row::{RowId, RowUpdate};

pub use snapshot::{
    Collaborator, GroupBucket, GroupBy, OptionColor, Snapshot, SnapshotRow, Table, TableView,
};

pub trait TableStore {
    fn instance_id(&self) -> &str;

    fn tables(&self) -> &[Table];

    fn active_table(&self) -> Option<&Table>;

    fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables().iter().find(|t| t.name == name)
    }

    fn option_colors(&self) -> &[OptionColor];

    fn related_users(&self) -> &[Collaborator];

    /// Collaborator key -> display name.
    fn collaborator_directory(&self) -> HashMap<String, String> {
        self.related_users()
            .iter()
            .map(|c| (c.key.clone(), c.name.clone()))
            .collect()
    }

    /// Background color -> text color, from the host palette.
    fn option_colors_map(&self) -> HashMap<String, String> {
        self.option_colors()
            .iter()
            .map(|o| (o.color.clone(), o.text_color.clone()))
            .collect()
    }

    /// Per-row background colors of a view.
    fn view_rows_color(&self, view: &TableView) -> HashMap<RowId, String> {
        view.row_colors.clone()
    }

    /// Linked row ids per row, per link column.
    fn link_rows(&self, table: &Table) -> HashMap<RowId, HashMap<String, Vec<RowId>>> {
        table.link_rows()
    }

    /// Write path: apply a cell update to a stored row.
    fn modify_row(&mut self, table_name: &str, row_id: &str, update: RowUpdate) -> AppResult<()>;
}

/// `TableStore` over a deserialized snapshot. Writes mutate the
/// in-memory snapshot only; persisting it back is the caller's concern.
pub struct SnapshotStore {
    snapshot: Snapshot,
}

impl SnapshotStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        Ok(Self::new(Snapshot::load(path)?))
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl TableStore for SnapshotStore {
    fn instance_id(&self) -> &str {
        &self.snapshot.instance_id
    }

    fn tables(&self) -> &[Table] {
        &self.snapshot.tables
    }

    fn active_table(&self) -> Option<&Table> {
        match &self.snapshot.active_table {
            Some(name) => self.snapshot.tables.iter().find(|t| &t.name == name),
            None => self.snapshot.tables.first(),
        }
    }

    fn option_colors(&self) -> &[OptionColor] {
        &self.snapshot.option_colors
    }

    fn related_users(&self) -> &[Collaborator] {
        &self.snapshot.collaborators
    }

    fn modify_row(&mut self, table_name: &str, row_id: &str, update: RowUpdate) -> AppResult<()> {
        let table = self
            .snapshot
            .tables
            .iter_mut()
            .find(|t| t.name == table_name)
            .ok_or_else(|| AppError::UnknownTable(table_name.to_string()))?;
        let row = table
            .rows
            .iter_mut()
            .find(|r| r.id == row_id)
            .ok_or_else(|| AppError::UnknownRow(row_id.to_string()))?;
        for (column_key, value) in update {
            match value {
                CellValue::Empty => row.cells.remove(&column_key),
                value => row.cells.insert(column_key, value),
            };
        }
        Ok(())
    }
}
