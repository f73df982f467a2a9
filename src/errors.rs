//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Snapshot / store
    // ---------------------------
    #[error("Snapshot parse error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("No tables in snapshot")]
    NoTables,

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Table '{0}' has no views")]
    NoViews(String),

    #[error("Unknown row: {0}")]
    UnknownRow(String),

    // ---------------------------
    // Saved views
    // ---------------------------
    #[error("Unknown saved view: {0}")]
    UnknownSavedView(String),

    #[error("Saved views file error: {0}")]
    SavedViews(String),

    // ---------------------------
    // Edit errors
    // ---------------------------
    #[error("Column '{0}' is not editable for this event")]
    NotEditable(String),

    // ---------------------------
    // Rendering / export
    // ---------------------------
    #[error("Invalid color value: {0}")]
    InvalidColor(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
