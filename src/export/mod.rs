mod csv;
mod fs_utils;
mod json;
mod model;

pub use fs_utils::ensure_writable;
pub use model::{flatten, EventRecord};

use std::path::Path;

use clap::ValueEnum;

use crate::core::assemble::TimelineOutput;
use crate::errors::AppResult;
use crate::ui::messages::success;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the computed timeline to `path`: CSV as flat per-event records,
/// JSON as the structured output model.
pub fn export_timeline(
    format: &ExportFormat,
    path: &Path,
    output: &TimelineOutput,
    records: &[EventRecord],
) -> AppResult<()> {
    match format {
        ExportFormat::Csv => csv::write_csv(path, records)?,
        ExportFormat::Json => json::write_json(path, output)?,
    }
    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        path.display()
    ));
    Ok(())
}
