mod common;

use common::*;
use tablelane::core::classify::{classify, ColumnRoles};
use tablelane::models::column::{ArrayElementType, FormulaResult, FormulaResultType};

fn names(fields: &[tablelane::core::classify::FieldOption]) -> Vec<&str> {
    fields.iter().map(|f| f.name.as_str()).collect()
}

#[test]
fn test_roles_per_column_kind() {
    let roles = classify(&project_table().columns);

    assert_eq!(
        names(&roles.label_fields),
        vec!["Name", "Phase", "Owner", "Due", "Owners"]
    );
    // Owners is an array of collaborators, not of dates: label only.
    assert_eq!(
        names(&roles.date_fields),
        vec!["Start", "StartAt", "Finish", "Due"]
    );
    assert_eq!(names(&roles.number_fields), vec!["Days"]);
    assert_eq!(names(&roles.color_fields), vec!["Phase"]);
    assert_eq!(names(&roles.link_fields), vec!["Deps"]);
}

#[test]
fn test_field_option_shape() {
    let roles = classify(&[text_column("0000", "Name")]);
    let option = &roles.label_fields[0];
    assert_eq!(option.name, "Name");
    assert_eq!(option.value, option.name);
    assert!(option.icon_class.contains("dtable-icon"));
}

#[test]
fn test_formula_date_result_joins_date_fields() {
    let date_formula = formula_column(
        "f1",
        "Deadline",
        Some(FormulaResult {
            result_type: FormulaResultType::Date,
            array_type: None,
        }),
    );
    let number_formula = formula_column(
        "f2",
        "Score",
        Some(FormulaResult {
            result_type: FormulaResultType::Number,
            array_type: None,
        }),
    );
    let roles = classify(&[date_formula, number_formula]);
    assert_eq!(names(&roles.date_fields), vec!["Deadline"]);
    // Both formulas can still label events.
    assert_eq!(names(&roles.label_fields), vec!["Deadline", "Score"]);
}

#[test]
fn test_link_formula_array_of_dates_is_a_date_field() {
    let column = link_formula_column(
        "f3",
        "Milestones",
        Some(FormulaResult {
            result_type: FormulaResultType::Array,
            array_type: Some(ArrayElementType::Date),
        }),
    );
    let roles = classify(&[column]);
    assert_eq!(names(&roles.date_fields), vec!["Milestones"]);
}

#[test]
fn test_plain_formula_ignores_array_of_dates() {
    // Only a link formula reaches dates through an array result.
    let column = formula_column(
        "f4",
        "Milestones",
        Some(FormulaResult {
            result_type: FormulaResultType::Array,
            array_type: Some(ArrayElementType::Date),
        }),
    );
    let roles = classify(&[column]);
    assert!(roles.date_fields.is_empty());
    assert_eq!(names(&roles.label_fields), vec!["Milestones"]);
}

#[test]
fn test_unhandled_kinds_contribute_nothing() {
    let columns = project_table().columns;
    let roles = classify(&columns);
    for fields in [
        &roles.date_fields,
        &roles.number_fields,
        &roles.color_fields,
        &roles.label_fields,
        &roles.link_fields,
    ] {
        assert!(fields.iter().all(|f| f.name != "Notes"));
    }
}

#[test]
fn test_classification_is_idempotent() {
    let columns = project_table().columns;
    assert_eq!(classify(&columns), classify(&columns));
}

#[test]
fn test_classification_is_order_independent() {
    let mut columns = project_table().columns;
    let forward: ColumnRoles = classify(&columns);
    columns.reverse();
    let backward = classify(&columns);

    let sorted = |fields: &[tablelane::core::classify::FieldOption]| {
        let mut v: Vec<String> = fields.iter().map(|f| f.name.clone()).collect();
        v.sort();
        v
    };
    assert_eq!(sorted(&forward.date_fields), sorted(&backward.date_fields));
    assert_eq!(
        sorted(&forward.number_fields),
        sorted(&backward.number_fields)
    );
    assert_eq!(sorted(&forward.color_fields), sorted(&backward.color_fields));
    assert_eq!(sorted(&forward.label_fields), sorted(&backward.label_fields));
    assert_eq!(sorted(&forward.link_fields), sorted(&backward.link_fields));
}
