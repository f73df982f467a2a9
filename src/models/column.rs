use serde::{Deserialize, Serialize};

/// One option of a single-select column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub name: String,
    pub color: String,
    pub text_color: String,
}

/// Result metadata of a computed (formula / link-formula) column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaResult {
    pub result_type: FormulaResultType,
    #[serde(default)]
    pub array_type: Option<ArrayElementType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaResultType {
    String,
    Number,
    Date,
    Bool,
    Array,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayElementType {
    Text,
    Date,
    Collaborator,
    #[serde(other)]
    Other,
}

/// Declared column type plus the per-type metadata that rides along with
/// it. Closed set: column types the plugin does not understand land on
/// `Unsupported` and contribute to no selector list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnKind {
    Text,
    LongText,
    Date {
        /// Host display format, e.g. "YYYY-MM-DD" or "YYYY-MM-DD HH:mm".
        #[serde(default)]
        format: Option<String>,
    },
    Number,
    SingleSelect {
        #[serde(default)]
        options: Vec<SelectOption>,
    },
    Collaborator,
    Formula {
        #[serde(default)]
        result: Option<FormulaResult>,
    },
    LinkFormula {
        #[serde(default)]
        result: Option<FormulaResult>,
    },
    Link,
    #[serde(other)]
    Unsupported,
}

impl ColumnKind {
    pub fn is_date(&self) -> bool {
        matches!(self, ColumnKind::Date { .. })
    }

    pub fn is_number(&self) -> bool {
        matches!(self, ColumnKind::Number)
    }

    /// Selector icon for this column type, mirroring the host's icon
    /// config table.
    pub fn icon_class(&self) -> &'static str {
        match self {
            ColumnKind::Text => "dtable-font dtable-icon-single-line-text",
            ColumnKind::LongText => "dtable-font dtable-icon-long-text",
            ColumnKind::Date { .. } => "dtable-font dtable-icon-calendar-alt",
            ColumnKind::Number => "dtable-font dtable-icon-number",
            ColumnKind::SingleSelect { .. } => "dtable-font dtable-icon-single-election",
            ColumnKind::Collaborator => "dtable-font dtable-icon-collaborator",
            ColumnKind::Formula { .. } => "dtable-font dtable-icon-formula",
            ColumnKind::LinkFormula { .. } => "dtable-font dtable-icon-link-formulas",
            ColumnKind::Link => "dtable-font dtable-icon-link-other-record",
            ColumnKind::Unsupported => "",
        }
    }
}

/// A table column. Immutable for the duration of one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Storage key, used by original rows and row updates.
    pub key: String,
    /// Display name, used by converted rows and the settings dialog.
    pub name: String,
    #[serde(flatten)]
    pub kind: ColumnKind,
}

impl Column {
    /// Single-select options, empty for every other kind.
    pub fn select_options(&self) -> &[SelectOption] {
        match &self.kind {
            ColumnKind::SingleSelect { options } => options,
            _ => &[],
        }
    }

    /// Whether a date computed from this start column should carry an
    /// "HH:mm" segment.
    pub fn format_has_hour(&self) -> bool {
        match &self.kind {
            ColumnKind::Date { format } => {
                format.as_deref().is_some_and(|f| f.contains("HH:mm"))
            }
            _ => false,
        }
    }
}

pub fn column_by_name<'a>(columns: &'a [Column], name: &str) -> Option<&'a Column> {
    if name.is_empty() {
        return None;
    }
    columns.iter().find(|c| c.name == name)
}
