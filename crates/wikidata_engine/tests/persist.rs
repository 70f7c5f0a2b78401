use std::fs;

use tempfile::TempDir;
use wikidata_core::ItemRecord;
use wikidata_engine::{ensure_output_dir, replace_file_atomically, write_combined_data};

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("data");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn replaces_previous_dataset() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("combined_data.json");

    let first = replace_file_atomically(&target, "[]").unwrap();
    assert_eq!(first, target);
    assert_eq!(fs::read_to_string(&target).unwrap(), "[]");

    replace_file_atomically(&target, "[1]").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "[1]");

    let leftovers: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(leftovers.len(), 1);
}

#[test]
fn failed_replace_keeps_existing_target() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("combined_data.json");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("previous.json"), "[0]").unwrap();

    assert!(replace_file_atomically(&target, "[1]").is_err());
    assert_eq!(
        fs::read_to_string(target.join("previous.json")).unwrap(),
        "[0]"
    );
    let leftovers: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(leftovers.len(), 1, "temp file must not be left behind");
}

#[test]
fn parent_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let not_a_dir = temp.path().join("not_a_dir");
    fs::write(&not_a_dir, "x").unwrap();

    assert!(replace_file_atomically(&not_a_dir.join("combined_data.json"), "[]").is_err());
    assert_eq!(fs::read_to_string(&not_a_dir).unwrap(), "x");
}

#[test]
fn combined_data_creates_parent_directory() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("data").join("combined_data.json");
    let items = vec![ItemRecord::new("Ferro", None, None, Some(1)).unwrap()];

    let written = write_combined_data(&items, &target).unwrap();
    assert_eq!(written, target);
    let text = fs::read_to_string(&target).unwrap();
    assert!(text.contains("\"name\": \"Ferro\""));
}
