use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::cell::CellValue;

pub type RowId = String;

/// One table row in both of its host representations: `converted` is
/// keyed by column display name (read path), `original` by column
/// storage key (write path). The store resolves both for any row id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub id: RowId,
    pub converted: HashMap<String, CellValue>,
    pub original: HashMap<String, CellValue>,
}

impl TableRow {
    /// Read a cell by column display name. Missing cells read as empty.
    pub fn cell(&self, column_name: &str) -> &CellValue {
        self.converted.get(column_name).unwrap_or(&CellValue::Empty)
    }

    /// Read a cell by column storage key (original representation).
    pub fn original_cell(&self, column_key: &str) -> &CellValue {
        self.original.get(column_key).unwrap_or(&CellValue::Empty)
    }
}

/// A pending cell update for the write path, keyed by column storage key.
pub type RowUpdate = HashMap<String, CellValue>;
