mod common;

use common::*;
use tablelane::models::cell::CellValue;
use tablelane::models::column::{Column, ColumnKind};
use tablelane::store::{SnapshotStore, Table, TableStore};

#[test]
fn test_resolve_row_has_both_representations() {
    let table = project_table();
    let row = table.resolve_row("r1").expect("row");

    // Converted cells are keyed by display name, with the select option
    // id resolved to its name.
    assert_eq!(
        row.cell("Phase"),
        &CellValue::SingleSelect("Design".to_string())
    );
    assert_eq!(row.cell("Name"), &CellValue::Text("Website".to_string()));
    // Original cells keep the storage key and the option id.
    assert_eq!(
        row.original_cell("pHse"),
        &CellValue::SingleSelect("opt-d".to_string())
    );
    // Missing cells read as empty from either side.
    assert_eq!(row.cell("Notes"), &CellValue::Empty);
    assert_eq!(row.original_cell("nOte"), &CellValue::Empty);
}

#[test]
fn test_resolve_row_merges_formula_values() {
    let table = project_table();
    let row = table.resolve_row("r1").expect("row");
    assert_eq!(row.cell("Due"), &CellValue::Text("2024-02-01".to_string()));

    // Rows without computed output read the formula column as empty.
    let row = table.resolve_row("r2").expect("row");
    assert_eq!(row.cell("Due"), &CellValue::Empty);
}

#[test]
fn test_view_row_ids_filter_and_order() {
    let mut table = project_table();
    table.views[0].row_ids = Some(vec!["r3".to_string(), "r1".to_string()]);
    let rows = table.view_rows(&table.views[0]);
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r3", "r1"]);
}

#[test]
fn test_shown_columns_follow_view_selection() {
    let mut table = project_table();
    table.views[0].shown_column_keys =
        Some(vec!["4LPw".to_string(), "0000".to_string()]);
    let columns = table.shown_columns(&table.views[0]);
    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Finish", "Name"]);
}

#[test]
fn test_link_rows_derivation() {
    let table = project_table();
    let links = table.link_rows();
    assert_eq!(
        links.get("r1").and_then(|per| per.get("s5S1")),
        Some(&vec!["r2".to_string()])
    );
    assert!(links.get("r2").map(|per| per.is_empty()).unwrap_or(false));
}

#[test]
fn test_store_surface() {
    let store = store();
    assert_eq!(store.instance_id(), "inst-1");
    assert_eq!(store.tables().len(), 1);
    assert_eq!(store.active_table().map(|t| t.name.as_str()), Some("Projects"));
    assert!(store.table_by_name("Nope").is_none());

    let directory = store.collaborator_directory();
    assert_eq!(
        directory.get("alice@example.com").map(|s| s.as_str()),
        Some("Alice Chen")
    );
    let palette = store.option_colors_map();
    assert_eq!(
        palette.get("#FF8000").map(|s| s.as_str()),
        Some("#FFFFFF")
    );
}

#[test]
fn test_column_kind_serde_format() {
    let json = r##"{
        "key": "pHse",
        "name": "Phase",
        "type": "single_select",
        "options": [
            { "id": "opt-d", "name": "Design", "color": "#FF8000", "text_color": "#FFFFFF" }
        ]
    }"##;
    let column: Column = serde_json::from_str(json).expect("parse column");
    assert!(matches!(&column.kind, ColumnKind::SingleSelect { options } if options.len() == 1));

    // Unknown column types land on Unsupported instead of failing.
    let json = r#"{ "key": "x1", "name": "Button", "type": "button" }"#;
    let column: Column = serde_json::from_str(json).expect("parse column");
    assert!(matches!(column.kind, ColumnKind::Unsupported));
}

#[test]
fn test_cell_value_serde_format() {
    let cell: CellValue =
        serde_json::from_str(r#"{ "type": "date", "value": "2024-01-01" }"#).expect("parse");
    assert_eq!(cell, CellValue::Date("2024-01-01".to_string()));

    let cell: CellValue = serde_json::from_str(r#"{ "type": "empty" }"#).expect("parse");
    assert_eq!(cell, CellValue::Empty);
}

#[test]
fn test_snapshot_round_trip() {
    let json = serde_json::to_string(&snapshot()).expect("serialize");
    let parsed: tablelane::store::Snapshot = serde_json::from_str(&json).expect("parse");
    let store = SnapshotStore::new(parsed);
    let table: &Table = store.table_by_name("Projects").expect("table");
    assert_eq!(table.rows.len(), 5);
    assert_eq!(table.views.len(), 2);
}
