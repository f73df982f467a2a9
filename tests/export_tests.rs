mod common;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use common::*;
use tablelane::core::assemble::{assemble, TimelineOutput, TimelineResult};
use tablelane::export::{ensure_writable, flatten};
use tablelane::models::settings::ViewSettings;

fn ready(result: TimelineResult) -> TimelineOutput {
    match result {
        TimelineResult::Ready(output) => output,
        TimelineResult::SettingsIncomplete => panic!("settings should be complete"),
    }
}

#[test]
fn test_flatten_flat_view_gives_one_record_per_lane() {
    let store = store();
    let output = ready(assemble(&store, &flat_settings()).expect("assemble"));
    let records = flatten(&output, &HashMap::new());

    assert_eq!(records.len(), 4);
    let lanes: Vec<usize> = records.iter().map(|r| r.lane).collect();
    assert_eq!(lanes, vec![0, 1, 2, 3]);
    assert!(records.iter().all(|r| r.group.is_empty()));

    let website = &records[0];
    assert_eq!(website.label, "Website");
    assert_eq!(website.start, "2024-01-01");
    assert_eq!(website.end, "2024-01-05");
    assert_eq!(website.row_id, "r1");
}

#[test]
fn test_flatten_grouped_view_carries_group_keys_and_links() {
    let store = store();
    let settings = ViewSettings {
        link_cell_column_name: Some("Deps".to_string()),
        ..group_settings()
    };
    let output = ready(assemble(&store, &settings).expect("assemble"));

    let links = HashMap::from([("r1".to_string(), vec!["r2".to_string()])]);
    let records = flatten(&output, &links);

    let website = records.iter().find(|r| r.row_id == "r1").unwrap();
    assert_eq!(website.group, "Design");
    assert_eq!(website.links, "r2");

    let nophase = records.iter().find(|r| r.row_id == "r5").unwrap();
    assert_eq!(nophase.group, "");
    assert_eq!(nophase.links, "");
}

#[test]
fn test_ensure_writable_rules() {
    assert!(ensure_writable(Path::new("relative.csv"), false).is_err());

    let path = temp_path("ensure_writable", "csv");
    assert!(ensure_writable(&path, false).is_ok());

    fs::write(&path, "x").expect("write");
    assert!(ensure_writable(&path, false).is_err());
    assert!(ensure_writable(&path, true).is_ok());
    fs::remove_file(&path).ok();
}
