#![allow(dead_code)]
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use assert_cmd::{cargo_bin_cmd, Command};

use tablelane::models::cell::CellValue;
use tablelane::models::column::{
    ArrayElementType, Column, ColumnKind, FormulaResult, FormulaResultType, SelectOption,
};
use tablelane::models::event::{Event, EventDate};
use tablelane::models::row::TableRow;
use tablelane::models::settings::{RecordEndType, ViewSettings};
use tablelane::store::{
    Collaborator, GroupBy, OptionColor, Snapshot, SnapshotRow, SnapshotStore, Table, TableView,
};

pub fn tl() -> Command {
    cargo_bin_cmd!("tablelane")
}

/// Create a unique temp file path and remove any leftover from earlier runs
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_tablelane.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

// ---------------------------------------------------------------
// Column constructors
// ---------------------------------------------------------------

pub fn text_column(key: &str, name: &str) -> Column {
    Column {
        key: key.to_string(),
        name: name.to_string(),
        kind: ColumnKind::Text,
    }
}

pub fn date_column(key: &str, name: &str, format: &str) -> Column {
    Column {
        key: key.to_string(),
        name: name.to_string(),
        kind: ColumnKind::Date {
            format: Some(format.to_string()),
        },
    }
}

pub fn number_column(key: &str, name: &str) -> Column {
    Column {
        key: key.to_string(),
        name: name.to_string(),
        kind: ColumnKind::Number,
    }
}

pub fn single_select_column(key: &str, name: &str, options: Vec<SelectOption>) -> Column {
    Column {
        key: key.to_string(),
        name: name.to_string(),
        kind: ColumnKind::SingleSelect { options },
    }
}

pub fn collaborator_column(key: &str, name: &str) -> Column {
    Column {
        key: key.to_string(),
        name: name.to_string(),
        kind: ColumnKind::Collaborator,
    }
}

pub fn formula_column(key: &str, name: &str, result: Option<FormulaResult>) -> Column {
    Column {
        key: key.to_string(),
        name: name.to_string(),
        kind: ColumnKind::Formula { result },
    }
}

pub fn link_formula_column(key: &str, name: &str, result: Option<FormulaResult>) -> Column {
    Column {
        key: key.to_string(),
        name: name.to_string(),
        kind: ColumnKind::LinkFormula { result },
    }
}

pub fn link_column(key: &str, name: &str) -> Column {
    Column {
        key: key.to_string(),
        name: name.to_string(),
        kind: ColumnKind::Link,
    }
}

pub fn select_option(id: &str, name: &str, color: &str, text_color: &str) -> SelectOption {
    SelectOption {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        text_color: text_color.to_string(),
    }
}

// ---------------------------------------------------------------
// The project-tracker fixture used across the suite
// ---------------------------------------------------------------

pub fn phase_options() -> Vec<SelectOption> {
    vec![
        select_option("opt-d", "Design", "#FF8000", "#FFFFFF"),
        select_option("opt-b", "Build", "#89D2EA", "#212529"),
    ]
}

fn row(id: &str, cells: Vec<(&str, CellValue)>) -> SnapshotRow {
    SnapshotRow {
        id: id.to_string(),
        cells: cells
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    }
}

pub fn project_table() -> Table {
    let columns = vec![
        text_column("0000", "Name"),
        date_column("5T13", "Start", "YYYY-MM-DD"),
        date_column("sAt1", "StartAt", "YYYY-MM-DD HH:mm"),
        date_column("4LPw", "Finish", "YYYY-MM-DD"),
        number_column("nDay", "Days"),
        single_select_column("pHse", "Phase", phase_options()),
        collaborator_column("oWnr", "Owner"),
        formula_column(
            "fDue",
            "Due",
            Some(FormulaResult {
                result_type: FormulaResultType::Date,
                array_type: None,
            }),
        ),
        link_formula_column(
            "fOwn",
            "Owners",
            Some(FormulaResult {
                result_type: FormulaResultType::Array,
                array_type: Some(ArrayElementType::Collaborator),
            }),
        ),
        link_column("s5S1", "Deps"),
        Column {
            key: "nOte".to_string(),
            name: "Notes".to_string(),
            kind: ColumnKind::LongText,
        },
    ];

    let rows = vec![
        row(
            "r1",
            vec![
                ("0000", CellValue::Text("Website".to_string())),
                ("5T13", CellValue::Date("2024-01-01".to_string())),
                ("sAt1", CellValue::Date("2024-03-01 09:30".to_string())),
                ("4LPw", CellValue::Date("2024-01-05".to_string())),
                ("nDay", CellValue::Number(4.0)),
                ("pHse", CellValue::SingleSelect("opt-d".to_string())),
                (
                    "oWnr",
                    CellValue::Collaborators(vec![
                        "alice@example.com".to_string(),
                        "bob@example.com".to_string(),
                    ]),
                ),
                ("s5S1", CellValue::Links(vec!["r2".to_string()])),
            ],
        ),
        row(
            "r2",
            vec![
                ("0000", CellValue::Text("Backend".to_string())),
                ("5T13", CellValue::Date("2024-01-03".to_string())),
                ("4LPw", CellValue::Date("2024-01-08".to_string())),
                ("pHse", CellValue::SingleSelect("opt-b".to_string())),
            ],
        ),
        row(
            "r3",
            vec![
                ("0000", CellValue::Text("Launch".to_string())),
                ("5T13", CellValue::Date("2024-01-06".to_string())),
                ("4LPw", CellValue::Date("2024-01-09".to_string())),
                ("pHse", CellValue::SingleSelect("opt-d".to_string())),
            ],
        ),
        // End strictly before start: never becomes an event.
        row(
            "r4",
            vec![
                ("0000", CellValue::Text("Bad".to_string())),
                ("5T13", CellValue::Date("2024-01-10".to_string())),
                ("4LPw", CellValue::Date("2024-01-05".to_string())),
                ("pHse", CellValue::SingleSelect("opt-d".to_string())),
            ],
        ),
        // No phase: lands under the "(Empty)" group.
        row(
            "r5",
            vec![
                ("0000", CellValue::Text("NoPhase".to_string())),
                ("5T13", CellValue::Date("2024-01-10".to_string())),
                ("4LPw", CellValue::Date("2024-01-20".to_string())),
            ],
        ),
    ];

    let mut formula_values = HashMap::new();
    formula_values.insert(
        "r1".to_string(),
        HashMap::from([
            ("fDue".to_string(), CellValue::Text("2024-02-01".to_string())),
            (
                "fOwn".to_string(),
                CellValue::TextList(vec!["alice@example.com".to_string()]),
            ),
        ]),
    );

    let views = vec![
        TableView {
            name: "All Records".to_string(),
            archived: false,
            groupbys: vec![],
            shown_column_keys: None,
            row_ids: None,
            row_colors: HashMap::from([
                ("r1".to_string(), "#FF8000".to_string()),
                ("r2".to_string(), "#CDF5D4".to_string()),
            ]),
        },
        TableView {
            name: "By Phase".to_string(),
            archived: false,
            groupbys: vec![GroupBy {
                column_key: "pHse".to_string(),
            }],
            shown_column_keys: None,
            row_ids: None,
            row_colors: HashMap::new(),
        },
    ];

    Table {
        id: "tbl1".to_string(),
        name: "Projects".to_string(),
        columns,
        rows,
        views,
        formula_values,
    }
}

pub fn snapshot() -> Snapshot {
    Snapshot {
        instance_id: "inst-1".to_string(),
        active_table: None,
        tables: vec![project_table()],
        collaborators: vec![
            Collaborator {
                key: "alice@example.com".to_string(),
                name: "Alice Chen".to_string(),
            },
            Collaborator {
                key: "bob@example.com".to_string(),
                name: "Bob Diaz".to_string(),
            },
        ],
        option_colors: vec![
            OptionColor {
                color: "#FF8000".to_string(),
                text_color: "#FFFFFF".to_string(),
            },
            OptionColor {
                color: "#89D2EA".to_string(),
                text_color: "#212529".to_string(),
            },
            OptionColor {
                color: "#CDF5D4".to_string(),
                text_color: "#212529".to_string(),
            },
        ],
    }
}

pub fn store() -> SnapshotStore {
    SnapshotStore::new(snapshot())
}

/// Flat view over the fixture: start/end dates, labelled by Name.
pub fn flat_settings() -> ViewSettings {
    ViewSettings {
        table_name: Some("Projects".to_string()),
        view_name: Some("All Records".to_string()),
        start_time_column_name: Some("Start".to_string()),
        end_time_column_name: Some("Finish".to_string()),
        label_column_name: Some("Name".to_string()),
        ..ViewSettings::default()
    }
}

/// Grouped view over the fixture, same column mapping.
pub fn group_settings() -> ViewSettings {
    ViewSettings {
        view_name: Some("By Phase".to_string()),
        ..flat_settings()
    }
}

/// Duration-based end resolution against the Days column.
pub fn duration_settings() -> ViewSettings {
    ViewSettings {
        end_time_column_name: None,
        record_duration_column_name: Some("Days".to_string()),
        record_end_type: RecordEndType::RecordDuration,
        ..flat_settings()
    }
}

// ---------------------------------------------------------------
// Hand-built events for packer-level tests
// ---------------------------------------------------------------

pub fn bare_event(label: &str, start: &str, end: &str) -> Event {
    Event {
        label: Some(label.to_string()),
        bg_color: "#DCDCDC".to_string(),
        text_color: "#212529".to_string(),
        start: EventDate {
            date: start.to_string(),
            can_change: true,
            column_key: Some("5T13".to_string()),
        },
        end: EventDate {
            date: end.to_string(),
            can_change: true,
            column_key: Some("4LPw".to_string()),
        },
        row: TableRow {
            id: label.to_string(),
            converted: HashMap::new(),
            original: HashMap::new(),
        },
    }
}
