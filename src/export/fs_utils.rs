use std::path::Path;

use crate::errors::{AppError, AppResult};

/// Refuse relative output paths, and existing files unless forced.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "Output file path must be absolute: {}",
            path.display()
        )));
    }
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "Output file already exists (use --force to overwrite): {}",
            path.display()
        )));
    }
    Ok(())
}
