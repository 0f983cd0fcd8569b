//! Tests for Manager
//!
//! These tests verify:
//! - Opening loads (or creates) the data file
//! - Add / search / delete / sort on the in-memory collection
//! - Inspection reads the disk, not memory
//! - Save persists the collection

use std::fs;
use std::path::PathBuf;

use roster::{Config, Manager, Record, RosterError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("students.txt");
    (temp_dir, path)
}

fn open_empty() -> (TempDir, Manager) {
    let (temp, path) = setup_temp_path();
    let (manager, error) = Manager::open_path(&path);
    assert!(error.is_none());
    (temp, manager)
}

fn record(roll_no: i32, name: &str, marks: f64) -> Record {
    Record::new(roll_no, name, format!("{}@x.com", name.to_lowercase()), "CS", marks)
}

// =============================================================================
// Open Tests
// =============================================================================

#[test]
fn test_open_missing_file() {
    let (_temp, path) = setup_temp_path();

    let (manager, error) = Manager::open_path(&path);

    assert!(error.is_none());
    assert!(manager.is_empty());
    assert!(path.exists());
}

#[test]
fn test_open_with_config() {
    let (_temp, path) = setup_temp_path();
    fs::write(&path, "1|Alice|a@x.com|CS|88.5\n").unwrap();
    let config = Config::builder().data_file(&path).build().unwrap();

    let (manager, error) = Manager::open(config);

    assert!(error.is_none());
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.data_file(), path.as_path());
}

#[test]
fn test_open_reports_partial_load() {
    let (_temp, path) = setup_temp_path();
    fs::write(&path, "1|Alice|a@x.com|CS|88.5\nbroken\n").unwrap();

    let (manager, error) = Manager::open_path(&path);

    assert_eq!(manager.len(), 1);
    assert!(matches!(
        error,
        Some(RosterError::MalformedLine { line: 2, .. })
    ));
}

// =============================================================================
// Add Tests
// =============================================================================

#[test]
fn test_add_appends_in_order() {
    let (_temp, mut manager) = open_empty();

    manager.add(record(2, "Bob", 72.0));
    manager.add(record(1, "Alice", 88.5));

    let names: Vec<&str> = manager.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Bob", "Alice"]);
}

#[test]
fn test_add_allows_duplicates() {
    let (_temp, mut manager) = open_empty();

    manager.add(record(1, "Alice", 88.5));
    manager.add(record(1, "Alice", 88.5));

    assert_eq!(manager.len(), 2);
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_search_is_case_insensitive() {
    let (_temp, mut manager) = open_empty();
    manager.add(record(1, "Alice", 88.5));
    manager.add(record(2, "Bob", 72.0));

    let found = manager.search_by_name("aLiCe");

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].roll_no, 1);
}

#[test]
fn test_search_is_exact() {
    let (_temp, mut manager) = open_empty();
    manager.add(record(1, "Alice", 88.5));

    assert!(manager.search_by_name("Ali").is_empty());
}

#[test]
fn test_search_returns_all_matches() {
    let (_temp, mut manager) = open_empty();
    manager.add(record(1, "Alice", 88.5));
    manager.add(record(2, "Bob", 72.0));
    manager.add(record(3, "ALICE", 60.0));

    let rolls: Vec<i32> = manager
        .search_by_name("alice")
        .iter()
        .map(|r| r.roll_no)
        .collect();

    assert_eq!(rolls, [1, 3]);
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_removes_all_matches() {
    let (_temp, mut manager) = open_empty();
    manager.add(record(1, "Alice", 88.5));
    manager.add(record(2, "ALICE", 60.0));
    manager.add(record(3, "bob", 72.0));

    let removed = manager.delete_by_name("alice");

    assert_eq!(removed, 2);
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.records()[0].name, "bob");
}

#[test]
fn test_delete_no_match() {
    let (_temp, mut manager) = open_empty();
    manager.add(record(1, "Alice", 88.5));

    assert_eq!(manager.delete_by_name("Al"), 0);
    assert_eq!(manager.len(), 1);
}

// =============================================================================
// Sort Tests
// =============================================================================

#[test]
fn test_sort_by_marks_ascending() {
    let (_temp, mut manager) = open_empty();
    let inputs = [
        record(1, "A", 88.5),
        record(2, "B", 72.0),
        record(3, "C", 100.0),
        record(4, "D", -5.0),
        record(5, "E", 72.0),
        record(6, "F", 9.75),
    ];
    for r in inputs.iter().cloned() {
        manager.add(r);
    }

    manager.sort_by_marks();

    let marks: Vec<f64> = manager.records().iter().map(|r| r.marks).collect();
    assert!(marks.windows(2).all(|w| w[0] <= w[1]));

    // Every record survives intact
    assert_eq!(manager.len(), inputs.len());
    for r in &inputs {
        assert!(manager.records().contains(r));
    }
}

#[test]
fn test_sort_is_stable_for_ties() {
    let (_temp, mut manager) = open_empty();
    manager.add(record(1, "First", 50.0));
    manager.add(record(2, "Low", 10.0));
    manager.add(record(3, "Second", 50.0));

    manager.sort_by_marks();

    let rolls: Vec<i32> = manager.records().iter().map(|r| r.roll_no).collect();
    assert_eq!(rolls, [2, 1, 3]);
}

#[test]
fn test_sort_is_numeric_not_lexical() {
    let (_temp, mut manager) = open_empty();
    manager.add(record(1, "Nine", 9.0));
    manager.add(record(2, "Eighty", 80.0));
    manager.add(record(3, "Hundred", 100.0));

    manager.sort_by_marks();

    let rolls: Vec<i32> = manager.records().iter().map(|r| r.roll_no).collect();
    assert_eq!(rolls, [1, 2, 3]);
}

#[test]
fn test_sort_puts_nan_last() {
    let (_temp, mut manager) = open_empty();
    manager.add(record(1, "Nan", f64::NAN));
    manager.add(record(2, "Five", 5.0));
    manager.add(record(3, "Minus", -1.0));

    manager.sort_by_marks();

    let sorted = manager.records();
    assert_eq!(sorted[0], record(3, "Minus", -1.0));
    assert_eq!(sorted[1], record(2, "Five", 5.0));
    assert!(sorted[2].marks.is_nan());
    assert_eq!(sorted[2].roll_no, 1);
    assert_eq!(sorted[2].name, "Nan");
    assert_eq!(sorted[2].email, "nan@x.com");
    assert_eq!(sorted[2].course, "CS");
}

// =============================================================================
// Inspection Tests
// =============================================================================

#[test]
fn test_file_attributes_reflect_disk() {
    let (_temp, mut manager) = open_empty();
    manager.add(record(1, "Alice", 88.5));

    assert_eq!(manager.file_attributes().size, 0);

    manager.save().unwrap();

    let attrs = manager.file_attributes();
    assert_eq!(attrs.name, "students.txt");
    assert!(attrs.size > 0);
}

#[test]
fn test_read_first_line_shows_saved_state() {
    let (_temp, mut manager) = open_empty();
    manager.add(record(1, "Alice", 88.5));

    assert_eq!(manager.read_first_line().unwrap(), None);

    manager.save().unwrap();
    manager.add(record(0, "Zero", 1.0));
    manager.sort_by_marks();

    assert_eq!(
        manager.read_first_line().unwrap().as_deref(),
        Some("1|Alice|alice@x.com|CS|88.5")
    );
}

// =============================================================================
// Save Tests
// =============================================================================

#[test]
fn test_save_and_reopen() {
    let (_temp, path) = setup_temp_path();
    let (mut manager, _) = Manager::open_path(&path);
    manager.add(record(1, "Alice", 88.5));
    manager.add(record(2, "Bob", 72.0));
    manager.save().unwrap();

    let (reopened, error) = Manager::open_path(&path);

    assert!(error.is_none());
    assert_eq!(reopened.records(), manager.records());
}

#[test]
fn test_unsaved_changes_are_not_persisted() {
    let (_temp, path) = setup_temp_path();
    {
        let (mut manager, _) = Manager::open_path(&path);
        manager.add(record(1, "Alice", 88.5));
    }

    let (reopened, _) = Manager::open_path(&path);

    assert!(reopened.is_empty());
}

#[test]
fn test_with_records_does_not_touch_disk() {
    let (_temp, path) = setup_temp_path();
    let config = Config::builder().data_file(&path).build().unwrap();

    let manager = Manager::with_records(config, vec![record(1, "Alice", 88.5)]);

    assert_eq!(manager.len(), 1);
    assert!(!path.exists());
}
