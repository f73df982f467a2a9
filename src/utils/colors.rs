//! Event color defaults and ANSI helpers for terminal rendering.

use crate::errors::{AppError, AppResult};

/// Applied when no color source resolves for an event.
pub const DEFAULT_BG_COLOR: &str = "#DCDCDC";
pub const DEFAULT_TEXT_COLOR: &str = "#212529";

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const GREY: &str = "\x1b[90m";

/// Parse "#RRGGBB" into its components.
pub fn parse_hex(color: &str) -> AppResult<(u8, u8, u8)> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 {
        return Err(AppError::InvalidColor(color.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| AppError::InvalidColor(color.to_string()))
    };
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// A two-cell truecolor block showing an event's background color.
/// Falls back to a plain marker when the color does not parse.
pub fn swatch(color: &str) -> String {
    match parse_hex(color) {
        Ok((r, g, b)) => format!("\x1b[48;2;{};{};{}m  {}", r, g, b, RESET),
        Err(_) => "  ".to_string(),
    }
}
