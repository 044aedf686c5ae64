//! CLI command tests
//!
//! Exercises the command functions directly against temp-dir ledgers.

use std::fs;

use tally_core::Storage;
use tempfile::tempdir;

use crate::commands::{self, truncate};

// ========== Add Command Tests ==========

#[test]
fn test_cmd_add_creates_and_saves_ledger() {
    let dir = tempdir().unwrap();
    let ledger = dir.path().join("expenses.json");

    commands::cmd_add(&ledger, 12.50, "Food", "Lunch").unwrap();

    let loaded = Storage::new(&ledger).load();
    assert!(loaded.warning.is_none());
    assert_eq!(loaded.store.len(), 1);
    assert_eq!(loaded.store.all()[0].description, "Lunch");
    assert_eq!(loaded.store.snapshot().next_id, 2);
}

#[test]
fn test_cmd_add_appends_across_invocations() {
    let dir = tempdir().unwrap();
    let ledger = dir.path().join("expenses.json");

    commands::cmd_add(&ledger, 45.50, "Food", "Groceries").unwrap();
    commands::cmd_add(&ledger, 25.00, "Transport", "Bus pass").unwrap();

    let loaded = Storage::new(&ledger).load();
    assert_eq!(loaded.store.len(), 2);
    assert_eq!(loaded.store.total(), 70.50);
    assert_eq!(loaded.store.all()[1].id, 2);
}

#[test]
fn test_cmd_add_rejects_negative_amount() {
    let dir = tempdir().unwrap();
    let ledger = dir.path().join("expenses.json");

    let result = commands::cmd_add(&ledger, -5.0, "Food", "oops");
    assert!(result.is_err());
    // Nothing was persisted
    assert!(!ledger.exists());
}

// ========== List/Report Command Tests ==========

#[test]
fn test_cmd_list_handles_missing_ledger() {
    let dir = tempdir().unwrap();
    let ledger = dir.path().join("expenses.json");

    assert!(commands::cmd_list(&ledger, None).is_ok());
    assert!(commands::cmd_list(&ledger, Some("food")).is_ok());
}

#[test]
fn test_cmd_list_survives_corrupt_ledger() {
    let dir = tempdir().unwrap();
    let ledger = dir.path().join("expenses.json");
    fs::write(&ledger, "{ not json").unwrap();

    assert!(commands::cmd_list(&ledger, None).is_ok());
}

#[test]
fn test_report_commands_on_populated_ledger() {
    let dir = tempdir().unwrap();
    let ledger = dir.path().join("expenses.json");

    commands::cmd_add(&ledger, 45.50, "Food", "Groceries").unwrap();
    commands::cmd_add(&ledger, 25.00, "Transport", "Bus pass").unwrap();

    assert!(commands::cmd_summary(&ledger).is_ok());
    assert!(commands::cmd_chart(&ledger).is_ok());
    assert!(commands::cmd_list(&ledger, Some("FOOD")).is_ok());
}

// ========== Export Command Tests ==========

#[test]
fn test_cmd_export_csv_to_file() {
    let dir = tempdir().unwrap();
    let ledger = dir.path().join("expenses.json");
    let out = dir.path().join("expenses.csv");

    commands::cmd_add(&ledger, 45.50, "Food", "Groceries").unwrap();
    commands::cmd_add(&ledger, 25.00, "Transport", "Bus pass").unwrap();

    commands::cmd_export(&ledger, "csv", Some(&out)).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "id,amount,category,description,date");
}

#[test]
fn test_cmd_export_json_to_file() {
    let dir = tempdir().unwrap();
    let ledger = dir.path().join("expenses.json");
    let out = dir.path().join("export.json");

    commands::cmd_add(&ledger, 3.75, "Food", "Coffee").unwrap();
    commands::cmd_export(&ledger, "json", Some(&out)).unwrap();

    let parsed: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0]["category"], "Food");
}

#[test]
fn test_cmd_export_unknown_format_errors() {
    let dir = tempdir().unwrap();
    let ledger = dir.path().join("expenses.json");

    let result = commands::cmd_export(&ledger, "xml", None);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Unknown export format"));
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a much longer string", 10), "a much ...");
    assert_eq!(truncate("exactly10!", 10), "exactly10!");
}
