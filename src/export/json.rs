use std::fs;
use std::path::Path;

use crate::core::assemble::TimelineOutput;
use crate::errors::AppResult;

/// Write the structured timeline output as pretty JSON.
pub fn write_json(path: &Path, output: &TimelineOutput) -> AppResult<()> {
    let json = serde_json::to_string_pretty(output)?;
    fs::write(path, json)?;
    Ok(())
}
