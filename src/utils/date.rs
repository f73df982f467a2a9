//! Cell-date utilities: parsing the raw host date strings, calendar-aware
//! comparison, and day arithmetic for duration-based event ends.

use std::cmp::Ordering;
use std::sync::OnceLock;

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

fn date_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap())
}

/// Whether a text cell carries a date-shaped value. Date-typed formula
/// results come back from the host as plain strings.
pub fn looks_like_date(s: &str) -> bool {
    date_prefix().is_match(s.trim())
}

/// Parse a raw host date string. Date-only strings parse to midnight.
pub fn parse_cell_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Calendar-aware strict "before". False when either side does not parse.
pub fn is_before(a: &str, b: &str) -> bool {
    match (parse_cell_date(a), parse_cell_date(b)) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    }
}

/// Calendar-aware strict "after". False when either side does not parse.
pub fn is_after(a: &str, b: &str) -> bool {
    match (parse_cell_date(a), parse_cell_date(b)) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}

/// Ascending ordering for event sorting; unparseable dates sort first.
pub fn cmp_dates(a: &str, b: &str) -> Ordering {
    parse_cell_date(a).cmp(&parse_cell_date(b))
}

/// Add whole days to a start date and format the result. The output
/// keeps an "HH:mm" segment only when the start column's display format
/// carries one.
pub fn add_days(start: &str, days: i64, with_hour: bool) -> Option<String> {
    let start = parse_cell_date(start)?;
    let shifted = if days >= 0 {
        start.checked_add_days(Days::new(days as u64))?
    } else {
        start.checked_sub_days(Days::new(days.unsigned_abs()))?
    };
    let formatted = if with_hour {
        shifted.format("%Y-%m-%d %H:%M")
    } else {
        shifted.format("%Y-%m-%d")
    };
    Some(formatted.to_string())
}
