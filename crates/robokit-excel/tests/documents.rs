//! Integration tests for the workbook manager: document lifecycle on disk,
//! read/write round-trips, and the save-with-rebind behavior.

use robokit_excel::{CellValue, Error, WorkbookManager};

fn path_in(dir: &tempfile::TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

#[test]
fn create_persists_and_becomes_current() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(&dir, "fresh.xlsx");

    let mut manager = WorkbookManager::new();
    let id = manager.create_workbook(&path).unwrap();

    assert_eq!(id, path);
    assert_eq!(manager.cache().current_id(), Some(path.as_str()));
    assert!(std::path::Path::new(&path).exists(), "file persisted on create");
}

#[test]
fn create_into_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(&dir, "nested/deeper/out.xlsx");

    let mut manager = WorkbookManager::new();
    manager.create_workbook(&path).unwrap();
    assert!(std::path::Path::new(&path).exists());
}

#[test]
fn create_duplicate_identifier_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(&dir, "dup.xlsx");

    let mut manager = WorkbookManager::new();
    manager.create_workbook(&path).unwrap();
    let err = manager.create_workbook(&path).unwrap_err();
    assert!(matches!(err, Error::DuplicateDocumentId(id) if id == path));
}

#[test]
fn open_defaults_identifier_to_filename() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(&dir, "named.xlsx");

    let mut manager = WorkbookManager::new();
    manager.create_workbook(&path).unwrap();
    manager.close_all_workbooks();

    let id = manager.open_workbook(&path, None).unwrap();
    assert_eq!(id, path);
    manager.close_all_workbooks();

    let id = manager.open_workbook(&path, Some("alias")).unwrap();
    assert_eq!(id, "alias");
    assert_eq!(manager.cache().current_id(), Some("alias"));
}

#[test]
fn cell_write_read_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(&dir, "cells.xlsx");

    let mut manager = WorkbookManager::new();
    manager.create_workbook(&path).unwrap();

    manager.write_cell(2, 3, "hello", None).unwrap();
    manager.write_cell(3, 3, 99.5, None).unwrap();
    manager.write_cell(4, 3, true, None).unwrap();

    assert_eq!(manager.read_cell(2, 3, None).unwrap(), CellValue::text("hello"));
    assert_eq!(manager.read_cell(3, 3, None).unwrap(), CellValue::Number(99.5));
    assert_eq!(manager.read_cell(4, 3, None).unwrap(), CellValue::Bool(true));
    assert_eq!(manager.read_cell(9, 9, None).unwrap(), CellValue::Empty);
}

#[test]
fn row_write_read_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(&dir, "rows.xlsx");

    let mut manager = WorkbookManager::new();
    manager.create_workbook(&path).unwrap();

    let values = vec![
        CellValue::text("a"),
        CellValue::text("b"),
        CellValue::text("c"),
    ];
    manager.write_row(5, &values, 0, None).unwrap();
    assert_eq!(manager.read_row(5, 0, 3, None).unwrap(), values);

    // Offset writes land after the offset column.
    manager.write_row(6, &values, 2, None).unwrap();
    assert_eq!(manager.read_cell(6, 3, None).unwrap(), CellValue::text("a"));
    assert_eq!(manager.read_row(6, 2, 3, None).unwrap(), values);
}

#[test]
fn rows_and_column_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(&dir, "grid.xlsx");

    let mut manager = WorkbookManager::new();
    manager.create_workbook(&path).unwrap();

    let rows = vec![
        vec![CellValue::Number(1.0), CellValue::Number(2.0)],
        vec![CellValue::Number(3.0), CellValue::Number(4.0)],
    ];
    manager.write_rows(&rows, 0, 0, None).unwrap();
    assert_eq!(manager.read_row(1, 0, 2, None).unwrap(), rows[0]);
    assert_eq!(manager.read_row(2, 0, 2, None).unwrap(), rows[1]);

    let column = vec![CellValue::text("x"), CellValue::text("y")];
    manager.write_column(4, &column, 1, None).unwrap();
    assert_eq!(manager.read_column(4, 1, 2, None).unwrap(), column);
    assert_eq!(manager.read_cell(2, 4, None).unwrap(), CellValue::text("x"));
}

#[test]
fn close_current_promotes_remaining_entry() {
    let dir = tempfile::tempdir().unwrap();
    let first = path_in(&dir, "a.xlsx");
    let second = path_in(&dir, "b.xlsx");

    let mut manager = WorkbookManager::new();
    manager.create_workbook(&first).unwrap();
    manager.create_workbook(&second).unwrap();

    let promoted = manager.close_current_workbook();
    assert_eq!(promoted.as_deref(), Some(first.as_str()));
    assert_eq!(manager.cache().current_id(), Some(first.as_str()));
    assert_eq!(manager.cache().len(), 1);

    assert_eq!(manager.close_current_workbook(), None);
    assert!(manager.cache().is_empty());
    assert_eq!(manager.cache().current_id(), None);
}

#[test]
fn switch_returns_previous_and_rejects_unknown() {
    let dir = tempfile::tempdir().unwrap();
    let first = path_in(&dir, "a.xlsx");
    let second = path_in(&dir, "b.xlsx");

    let mut manager = WorkbookManager::new();
    manager.create_workbook(&first).unwrap();
    manager.create_workbook(&second).unwrap();

    let previous = manager.switch_workbook(&first).unwrap();
    assert_eq!(previous.as_deref(), Some(second.as_str()));

    let err = manager.switch_workbook("never-opened").unwrap_err();
    assert!(matches!(err, Error::UnknownDocumentId(_)));
    assert_eq!(manager.cache().current_id(), Some(first.as_str()));
}

#[test]
fn save_to_new_path_rekeys_entry() {
    let dir = tempfile::tempdir().unwrap();
    let original = path_in(&dir, "original.xlsx");
    let renamed = path_in(&dir, "renamed.xlsx");

    let mut manager = WorkbookManager::new();
    manager.create_workbook(&original).unwrap();
    manager.write_cell(1, 1, "payload", None).unwrap();

    manager.save_workbook(Some(&renamed)).unwrap();

    assert!(!manager.cache().contains(&original));
    assert_eq!(manager.cache().current_id(), Some(renamed.as_str()));
    assert!(std::path::Path::new(&renamed).exists());

    // The handle content is unchanged across the re-key.
    assert_eq!(
        manager.read_cell(1, 1, None).unwrap(),
        CellValue::text("payload")
    );

    // An argument-less save now targets the new identifier.
    manager.write_cell(1, 2, 5.0, None).unwrap();
    manager.save_workbook(None).unwrap();

    manager.close_all_workbooks();
    manager.open_workbook(&renamed, None).unwrap();
    assert_eq!(
        manager.read_cell(1, 1, None).unwrap(),
        CellValue::text("payload")
    );
    assert_eq!(manager.read_cell(1, 2, None).unwrap(), CellValue::Number(5.0));
}

#[test]
fn saved_file_survives_reopen_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(&dir, "roundtrip.xlsx");

    let mut manager = WorkbookManager::new();
    manager.create_workbook(&path).unwrap();
    manager.write_cell(1, 1, "persisted", None).unwrap();
    manager.write_cell(2, 1, 3.25, None).unwrap();
    manager.save_workbook(None).unwrap();
    manager.close_all_workbooks();

    // Reopen from disk under an alias.
    manager.open_workbook(&path, Some("reopened")).unwrap();
    assert_eq!(
        manager.read_cell(1, 1, None).unwrap(),
        CellValue::text("persisted")
    );
    assert_eq!(manager.read_cell(2, 1, None).unwrap(), CellValue::Number(3.25));

    // And again from its raw bytes.
    let bytes = std::fs::read(&path).unwrap();
    manager.open_workbook_from_bytes(&bytes, "from-bytes").unwrap();
    assert_eq!(
        manager.read_cell(1, 1, None).unwrap(),
        CellValue::text("persisted")
    );
}

#[test]
fn sheet_names_lists_current_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_in(&dir, "sheets.xlsx");

    let mut manager = WorkbookManager::new();
    manager.create_workbook(&path).unwrap();
    assert_eq!(manager.sheet_names().unwrap(), vec!["Sheet1".to_string()]);

    manager.close_all_workbooks();
    assert!(matches!(manager.sheet_names(), Err(Error::NoOpenDocuments)));
}
