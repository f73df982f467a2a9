//! Display formatting helpers for labels and CLI output.

use std::collections::HashMap;

use unicode_width::UnicodeWidthStr;

/// Resolve collaborator keys to display names and join them. Keys with
/// no directory entry fall back to the key itself.
pub fn collaborators_display_string(
    keys: &[String],
    directory: &HashMap<String, String>,
) -> String {
    keys.iter()
        .map(|key| directory.get(key).cloned().unwrap_or_else(|| key.clone()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Pad to `width` display columns, wide characters accounted for.
pub fn pad_right(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    if used >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - used))
    }
}
