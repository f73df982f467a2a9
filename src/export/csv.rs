use std::path::Path;

use csv::Writer;

use super::model::EventRecord;
use crate::errors::AppResult;

/// Write the flat event records as CSV, header row included.
pub fn write_csv(path: &Path, records: &[EventRecord]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
