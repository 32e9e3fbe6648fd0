//! Tests for the CSV store
//!
//! These tests verify:
//! - Save/load round trips preserve order and values
//! - A missing file loads as an empty catalog
//! - The header row is always written, even for an empty table
//! - Overwrite-on-save (no appending, no stale rows)
//! - Quoting and non-ASCII text survive the trip
//! - Malformed files are reported as errors

use std::fs;

use shelfdb::record::Record;
use shelfdb::store::{CsvStore, STORE_HEADER};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, CsvStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = CsvStore::new(temp_dir.path().join("books.csv"));
    (temp_dir, store)
}

fn sample_records() -> Vec<Record> {
    vec![
        Record::new("1984", "George Orwell", 1949, "SciFi", 3),
        Record::new("Animal Farm", "George Orwell", 1945, "SciFi", 2),
        Record::new("The Trial", "Franz Kafka", 1925, "Drama", 1),
    ]
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_store_round_trip_preserves_order_and_values() {
    let (_temp, store) = setup_temp_store();
    let records = sample_records();

    store.save(&records).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, records);
}

#[test]
fn test_store_round_trip_quoted_cells() {
    let (_temp, store) = setup_temp_store();
    let records = vec![Record::new(
        "Me, Myself and \"I\"",
        "A. Author",
        2001,
        "Comedy,Drama",
        1,
    )];

    store.save(&records).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, records);
}

#[test]
fn test_store_round_trip_non_ascii_text() {
    let (_temp, store) = setup_temp_store();
    let records = vec![Record::new(
        "Кобзар",
        "Тарас Шевченко",
        1840,
        "Поезія",
        5,
    )];

    store.save(&records).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, records);
}

#[test]
fn test_store_round_trip_negative_copy_count() {
    // Nothing validates counts; a negative value must survive untouched
    let (_temp, store) = setup_temp_store();
    let records = vec![Record::new("Oddity", "N. Obody", 2000, "Misc", -2)];

    store.save(&records).unwrap();

    assert_eq!(store.load().unwrap(), records);
}

#[test]
fn test_store_round_trip_extreme_integers() {
    let (_temp, store) = setup_temp_store();
    let records = vec![Record::new("Limits", "E. Dge", i64::MAX, "Misc", i64::MIN)];

    store.save(&records).unwrap();

    assert_eq!(store.load().unwrap(), records);
}

// =============================================================================
// Missing / Empty File Tests
// =============================================================================

#[test]
fn test_load_missing_file_is_empty_catalog() {
    let (_temp, store) = setup_temp_store();

    let loaded = store.load().unwrap();

    assert!(loaded.is_empty());
    // A bare load must not create the file
    assert!(!store.path().exists());
}

#[test]
fn test_load_zero_byte_file_is_empty_catalog() {
    let (_temp, store) = setup_temp_store();
    fs::write(store.path(), "").unwrap();

    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_save_empty_table_writes_header_only() {
    let (_temp, store) = setup_temp_store();

    store.save(&[]).unwrap();

    let contents = fs::read_to_string(store.path()).unwrap();
    assert_eq!(contents, format!("{}\n", STORE_HEADER.join(",")));
}

#[test]
fn test_save_then_load_empty_table() {
    let (_temp, store) = setup_temp_store();

    store.save(&[]).unwrap();

    assert!(store.load().unwrap().is_empty());
}

// =============================================================================
// Overwrite Tests
// =============================================================================

#[test]
fn test_save_overwrites_previous_contents() {
    let (_temp, store) = setup_temp_store();

    store.save(&sample_records()).unwrap();
    let shorter = vec![Record::new("Dune", "Frank Herbert", 1965, "SciFi", 4)];
    store.save(&shorter).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, shorter);

    // Exactly one header and one row; no stale lines from the longer save
    let contents = fs::read_to_string(store.path()).unwrap();
    assert_eq!(contents.lines().count(), 2);
}

// =============================================================================
// Malformed File Tests
// =============================================================================

#[test]
fn test_load_rejects_non_numeric_year_cell() {
    let (_temp, store) = setup_temp_store();
    fs::write(
        store.path(),
        "title,author,year,genre,copy_count\n1984,George Orwell,nineteen,SciFi,3\n",
    )
    .unwrap();

    assert!(store.load().is_err());
}

#[test]
fn test_load_rejects_missing_column() {
    let (_temp, store) = setup_temp_store();
    fs::write(
        store.path(),
        "title,author,year,genre\n1984,George Orwell,1949,SciFi\n",
    )
    .unwrap();

    assert!(store.load().is_err());
}

// =============================================================================
// Retarget Tests
// =============================================================================

#[test]
fn test_retarget_moves_subsequent_io() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.csv");
    let second = temp_dir.path().join("second.csv");

    let mut store = CsvStore::new(&first);
    store.save(&sample_records()).unwrap();

    store.retarget(&second);
    assert_eq!(store.path(), second.as_path());

    store.save(&[]).unwrap();

    // The first file keeps its rows; the second holds the new (empty) table
    assert_eq!(CsvStore::new(&first).load().unwrap(), sample_records());
    assert!(store.load().unwrap().is_empty());
}
