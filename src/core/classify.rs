//! Column Classifier: assigns each shown column to the selector lists it
//! can serve as (start/end date, duration, label, color, link).

use serde::Serialize;

use crate::models::column::{
    ArrayElementType, Column, ColumnKind, FormulaResult, FormulaResultType,
};

/// One selectable column, as offered by the settings dialog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldOption {
    pub name: String,
    pub value: String,
    pub icon_class: String,
}

impl FieldOption {
    fn for_column(column: &Column) -> Self {
        Self {
            name: column.name.clone(),
            value: column.name.clone(),
            icon_class: column.kind.icon_class().to_string(),
        }
    }
}

/// The role lists produced by classification. A column may appear in
/// more than one list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColumnRoles {
    pub date_fields: Vec<FieldOption>,
    pub number_fields: Vec<FieldOption>,
    pub color_fields: Vec<FieldOption>,
    pub label_fields: Vec<FieldOption>,
    pub link_fields: Vec<FieldOption>,
}

/// Whether a computed column's result is date-valued. A link formula
/// also qualifies through an array of dates.
fn formula_yields_date(result: Option<&FormulaResult>, allow_date_array: bool) -> bool {
    match result {
        Some(r) => {
            r.result_type == FormulaResultType::Date
                || (allow_date_array
                    && r.result_type == FormulaResultType::Array
                    && r.array_type == Some(ArrayElementType::Date))
        }
        None => false,
    }
}

/// Pure function of the column list; classification is idempotent and
/// per-column, so the output order follows the input order.
pub fn classify(columns: &[Column]) -> ColumnRoles {
    let mut roles = ColumnRoles::default();
    for column in columns {
        let option = FieldOption::for_column(column);
        match &column.kind {
            ColumnKind::Text | ColumnKind::Collaborator => {
                roles.label_fields.push(option);
            }
            ColumnKind::Date { .. } => {
                roles.date_fields.push(option);
            }
            ColumnKind::Number => {
                roles.number_fields.push(option);
            }
            ColumnKind::SingleSelect { .. } => {
                roles.label_fields.push(option.clone());
                roles.color_fields.push(option);
            }
            ColumnKind::Link => {
                roles.link_fields.push(option);
            }
            ColumnKind::Formula { result } => {
                if formula_yields_date(result.as_ref(), false) {
                    roles.date_fields.push(option.clone());
                }
                roles.label_fields.push(option);
            }
            ColumnKind::LinkFormula { result } => {
                if formula_yields_date(result.as_ref(), true) {
                    roles.date_fields.push(option.clone());
                }
                roles.label_fields.push(option);
            }
            // Kinds with no selector role. Listed explicitly so a new
            // ColumnKind variant fails to compile until classified.
            ColumnKind::LongText | ColumnKind::Unsupported => {}
        }
    }
    roles
}
