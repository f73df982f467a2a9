use serde::{Deserialize, Serialize};

use crate::utils::date;

/// A single cell payload. Closed union over every value shape the host
/// table can hand us; anything the host would store as `null`/missing
/// collapses into `Empty`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    /// Raw host date string, "YYYY-MM-DD" with an optional "HH:mm" part.
    Date(String),
    /// Option id in original rows, option name in converted rows.
    SingleSelect(String),
    /// Collaborator keys (emails) to be resolved via the user directory.
    Collaborators(Vec<String>),
    /// Linked row ids.
    Links(Vec<String>),
    /// Array-typed formula output (element strings or collaborator keys).
    TextList(Vec<String>),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) | CellValue::Date(s) | CellValue::SingleSelect(s) => s.is_empty(),
            CellValue::Collaborators(v) | CellValue::Links(v) | CellValue::TextList(v) => {
                v.is_empty()
            }
            // A stored 0 is a real value, not an empty cell.
            CellValue::Number(_) => false,
        }
    }

    /// Grouping key: the stringified raw value, before any display
    /// substitution. Empty cells all share the "" key.
    pub fn key(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) | CellValue::Date(s) | CellValue::SingleSelect(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Collaborators(v) | CellValue::Links(v) | CellValue::TextList(v) => {
                v.join(",")
            }
        }
    }

    /// Human-readable form used for labels and group headers.
    pub fn display(&self) -> String {
        match self {
            CellValue::Collaborators(v) | CellValue::TextList(v) => v.join(", "),
            other => other.key(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The raw date string, if this cell can carry one. Text cells are
    /// accepted when they look like a date, which is how date-typed
    /// formula results come back from the host.
    pub fn as_date_str(&self) -> Option<&str> {
        match self {
            CellValue::Date(s) if !s.is_empty() => Some(s),
            CellValue::Text(s) if date::looks_like_date(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_collaborator_keys(&self) -> Option<&[String]> {
        match self {
            CellValue::Collaborators(v) | CellValue::TextList(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_link_ids(&self) -> Option<&[String]> {
        match self {
            CellValue::Links(v) => Some(v),
            _ => None,
        }
    }
}

/// Stringify a number the way the host's display layer does: integral
/// values drop the fractional part.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
