//! # robokit-excel
//!
//! Excel workbook cache and cell accessors for test-automation suites.
//!
//! The crate revolves around [`WorkbookManager`], a service owning a cache of
//! open workbooks keyed by a string identifier plus a "current" pointer. Test
//! suites create, open, switch, save, and close workbooks through it, and
//! read/write cells, rows, and columns on the currently selected document.
//!
//! XLSX parsing and serialization are delegated to `umya-spreadsheet`; this
//! crate owns only identifier lifecycle bookkeeping and coordinate
//! translation.
//!
//! ## Example
//!
//! ```no_run
//! use robokit_excel::{CellValue, WorkbookManager};
//!
//! let mut manager = WorkbookManager::new();
//! manager.create_workbook("report.xlsx").unwrap();
//!
//! manager.write_cell(1, 1, "Name", None).unwrap();
//! manager.write_row(2, &[CellValue::text("Ada"), CellValue::Number(42.0)], 0, None).unwrap();
//! manager.save_workbook(None).unwrap();
//!
//! assert_eq!(manager.read_cell(1, 1, None).unwrap(), CellValue::text("Name"));
//! ```

pub mod cache;
pub mod error;
pub mod manager;
pub mod value;

// Re-exports for convenience
pub use cache::DocumentCache;
pub use error::{Error, Result};
pub use manager::{sheet_bounds, WorkbookManager};
pub use value::CellValue;

// The backing handle types, for callers that need direct sheet access.
pub use umya_spreadsheet::{Spreadsheet, Worksheet};
