//! CSV adapter round-trip tests.

use std::fs;

use remap_ingest::{TableFormat, mapping_entries, read_rows, write_rows};
use remap_model::{MappingEntry, MappingIndex};

#[test]
fn reads_ragged_rows_and_maps_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mapping.csv");
    fs::write(&path, "id,name\n101,Sword\n202,Shield\n303\n").unwrap();

    let rows = read_rows(TableFormat::Csv, &path).unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3], vec!["303".to_string()]);

    let entries = mapping_entries(&rows, 0, 1, true);
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[2], MappingEntry::new("303", ""));

    // An id without a name stays unmapped once indexed.
    let index = MappingIndex::build(entries);
    assert!(index.resolve("101").matched());
    assert!(!index.resolve("303").matched());
}

#[test]
fn written_rows_read_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let rows = vec![
        vec!["物品=Sword-Shield$1&303$2".to_string(), "x".to_string()],
        vec!["7075|80072".to_string()],
    ];

    write_rows(TableFormat::Csv, &path, &rows).unwrap();
    let read_back = read_rows(TableFormat::Csv, &path).unwrap();
    assert_eq!(read_back, rows);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");
    assert!(read_rows(TableFormat::Csv, &path).is_err());
}
