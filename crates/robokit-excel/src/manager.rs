//! Workbook manager - document lifecycle and cell accessors

use std::fs;
use std::io::Cursor;
use std::path::Path;

use umya_spreadsheet::{reader, writer, Worksheet};

use crate::cache::DocumentCache;
use crate::error::{Error, Result};
use crate::value::CellValue;

/// Service owning the document cache and exposing the keyword surface
///
/// Identifiers double as file paths (compatibility mode): `create_workbook`
/// and argument-less `save_workbook` both infer their destination from the
/// identifier of the entry they touch.
///
/// All coordinates are 1-based (row, column), matching the keyword contract.
#[derive(Debug, Default)]
pub struct WorkbookManager {
    cache: DocumentCache,
}

impl WorkbookManager {
    /// Create a manager with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the document cache
    pub fn cache(&self) -> &DocumentCache {
        &self.cache
    }

    // ==================== Document lifecycle ====================

    /// Create a new blank workbook at `path` and make it current
    ///
    /// The file is persisted immediately so later steps that expect it on
    /// disk do not break. `path` is also the cache identifier.
    pub fn create_workbook(&mut self, path: &str) -> Result<String> {
        if self.cache.contains(path) {
            return Err(Error::DuplicateDocumentId(path.to_string()));
        }
        ensure_parent_dir(path)?;

        let workbook = umya_spreadsheet::new_file();
        writer::xlsx::write(&workbook, path)?;

        self.cache.insert(path, workbook)?;
        Ok(path.to_string())
    }

    /// Open an xlsx file, registering it under `doc_id` (default: `filename`)
    pub fn open_workbook(&mut self, filename: &str, doc_id: Option<&str>) -> Result<String> {
        let id = doc_id.unwrap_or(filename);
        if self.cache.contains(id) {
            return Err(Error::DuplicateDocumentId(id.to_string()));
        }
        let workbook = reader::xlsx::read(filename)?;
        self.cache.insert(id, workbook)?;
        Ok(id.to_string())
    }

    /// Open an xlsx document from an in-memory buffer
    pub fn open_workbook_from_bytes(&mut self, bytes: &[u8], doc_id: &str) -> Result<String> {
        if self.cache.contains(doc_id) {
            return Err(Error::DuplicateDocumentId(doc_id.to_string()));
        }
        let workbook = reader::xlsx::read_reader(Cursor::new(bytes), true)?;
        self.cache.insert(doc_id, workbook)?;
        Ok(doc_id.to_string())
    }

    /// Make `doc_id` the current document, returning the previous current id
    pub fn switch_workbook(&mut self, doc_id: &str) -> Result<Option<String>> {
        self.cache.switch(doc_id)
    }

    /// Close the current document, promoting a remaining one if any
    ///
    /// Promotion picks the first identifier in the cache's lexicographic
    /// iteration order. Returns the new current identifier; no-op when
    /// nothing is current.
    pub fn close_current_workbook(&mut self) -> Option<String> {
        self.cache.remove_current()
    }

    /// Close every open document
    pub fn close_all_workbooks(&mut self) {
        self.cache.clear();
    }

    /// Persist the current document
    ///
    /// With `filename`, saves there and re-keys the cache entry (and current
    /// pointer) to the new path, dropping the old identifier. Without,
    /// saves to the current identifier's path.
    pub fn save_workbook(&mut self, filename: Option<&str>) -> Result<()> {
        let current_id = self
            .cache
            .current_id()
            .ok_or(Error::NoOpenDocuments)?
            .to_string();
        let target = filename.unwrap_or(&current_id).to_string();

        ensure_parent_dir(&target)?;
        writer::xlsx::write(self.cache.current()?, &target)?;

        if filename.is_some() && target != current_id {
            self.cache.rekey_current(&target)?;
        }
        Ok(())
    }

    // ==================== Sheet access ====================

    /// Ordered sheet names of the current document
    pub fn sheet_names(&self) -> Result<Vec<String>> {
        let workbook = self.cache.current()?;
        Ok(workbook
            .get_sheet_collection()
            .iter()
            .map(|ws| ws.get_name().to_string())
            .collect())
    }

    /// The active sheet, or the named sheet, of the current document
    pub fn sheet(&self, sheet_name: Option<&str>) -> Result<&Worksheet> {
        let workbook = self.cache.current()?;
        match sheet_name {
            None => Ok(workbook.get_active_sheet()),
            Some(name) => workbook
                .get_sheet_by_name(name)
                .ok_or_else(|| Error::SheetNotFound(name.to_string())),
        }
    }

    /// Mutable counterpart of [`sheet`](Self::sheet)
    pub fn sheet_mut(&mut self, sheet_name: Option<&str>) -> Result<&mut Worksheet> {
        let workbook = self.cache.current_mut()?;
        match sheet_name {
            None => Ok(workbook.get_active_sheet_mut()),
            Some(name) => workbook
                .get_sheet_by_name_mut(name)
                .ok_or_else(|| Error::SheetNotFound(name.to_string())),
        }
    }

    // ==================== Read operations ====================

    /// Content of a single cell; absent cells read as [`CellValue::Empty`]
    pub fn read_cell(&self, row: u32, col: u32, sheet_name: Option<&str>) -> Result<CellValue> {
        let sheet = self.sheet(sheet_name)?;
        Ok(cell_value_at(sheet, col, row))
    }

    /// Content of a row, starting after `col_offset`
    ///
    /// `limit == 0` reads to the sheet's last populated column minus the
    /// offset.
    pub fn read_row(
        &self,
        row: u32,
        col_offset: u32,
        limit: u32,
        sheet_name: Option<&str>,
    ) -> Result<Vec<CellValue>> {
        let sheet = self.sheet(sheet_name)?;
        let count = if limit == 0 {
            let (_, max_col) = sheet_bounds(sheet);
            max_col.saturating_sub(col_offset)
        } else {
            limit
        };
        Ok((1..=count)
            .map(|i| cell_value_at(sheet, col_offset + i, row))
            .collect())
    }

    /// Content of a column, starting after `row_offset`
    ///
    /// `limit == 0` reads to the sheet's last populated row minus the offset.
    pub fn read_column(
        &self,
        col: u32,
        row_offset: u32,
        limit: u32,
        sheet_name: Option<&str>,
    ) -> Result<Vec<CellValue>> {
        let sheet = self.sheet(sheet_name)?;
        let count = if limit == 0 {
            let (max_row, _) = sheet_bounds(sheet);
            max_row.saturating_sub(row_offset)
        } else {
            limit
        };
        Ok((1..=count)
            .map(|i| cell_value_at(sheet, col, row_offset + i))
            .collect())
    }

    /// The whole sheet as rows of values, up to the last populated cell
    pub fn read_sheet(&self, sheet_name: Option<&str>) -> Result<Vec<Vec<CellValue>>> {
        let sheet = self.sheet(sheet_name)?;
        let (max_row, max_col) = sheet_bounds(sheet);
        Ok((1..=max_row)
            .map(|row| {
                (1..=max_col)
                    .map(|col| cell_value_at(sheet, col, row))
                    .collect()
            })
            .collect())
    }

    // ==================== Write operations ====================

    /// Set a cell's value, creating the cell if absent
    pub fn write_cell(
        &mut self,
        row: u32,
        col: u32,
        value: impl Into<CellValue>,
        sheet_name: Option<&str>,
    ) -> Result<()> {
        let value = value.into();
        let sheet = self.sheet_mut(sheet_name)?;
        value.apply_to(sheet.get_cell_mut((col, row)));
        Ok(())
    }

    /// Write `values` across `row`, starting after `col_offset`
    pub fn write_row(
        &mut self,
        row: u32,
        values: &[CellValue],
        col_offset: u32,
        sheet_name: Option<&str>,
    ) -> Result<()> {
        let sheet = self.sheet_mut(sheet_name)?;
        for (i, value) in values.iter().enumerate() {
            value.apply_to(sheet.get_cell_mut((col_offset + 1 + i as u32, row)));
        }
        Ok(())
    }

    /// Write rows sequentially, starting after `row_offset`
    pub fn write_rows(
        &mut self,
        rows: &[Vec<CellValue>],
        row_offset: u32,
        col_offset: u32,
        sheet_name: Option<&str>,
    ) -> Result<()> {
        for (i, row) in rows.iter().enumerate() {
            self.write_row(row_offset + 1 + i as u32, row, col_offset, sheet_name)?;
        }
        Ok(())
    }

    /// Write `values` down `col`, starting after `row_offset`
    pub fn write_column(
        &mut self,
        col: u32,
        values: &[CellValue],
        row_offset: u32,
        sheet_name: Option<&str>,
    ) -> Result<()> {
        let sheet = self.sheet_mut(sheet_name)?;
        for (i, value) in values.iter().enumerate() {
            value.apply_to(sheet.get_cell_mut((col, row_offset + 1 + i as u32)));
        }
        Ok(())
    }
}

/// Last populated (row, column) of a sheet, (0, 0) when empty
pub fn sheet_bounds(sheet: &Worksheet) -> (u32, u32) {
    let mut max_row = 0;
    let mut max_col = 0;
    for cell in sheet.get_cell_collection() {
        let coordinate = cell.get_coordinate();
        max_row = max_row.max(*coordinate.get_row_num());
        max_col = max_col.max(*coordinate.get_col_num());
    }
    (max_row, max_col)
}

fn cell_value_at(sheet: &Worksheet, col: u32, row: u32) -> CellValue {
    sheet
        .get_cell((col, row))
        .map(|cell| CellValue::from(cell.get_cell_value()))
        .unwrap_or_default()
}

fn ensure_parent_dir(path: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
