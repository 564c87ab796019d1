//! # robokit
//!
//! Support library for test-automation suites: an Excel workbook cache with
//! cell/row/column accessors, and Chrome session configuration for a
//! Salesforce-style application under test.
//!
//! ## Features
//!
//! - Workbook cache keyed by identifier with a "current document" pointer
//! - Cell, row, column, and whole-sheet reads and writes (1-based coordinates)
//! - Save-with-rebind: saving under a new path re-keys the cache entry
//! - Chrome capability assembly (flags, download preferences, platform
//!   sandbox flag) and managed chromedriver sessions (`browser` feature)
//!
//! ## Example
//!
//! ```no_run
//! use robokit::prelude::*;
//!
//! let mut manager = WorkbookManager::new();
//! manager.create_workbook("export.xlsx").unwrap();
//!
//! manager.write_row(
//!     1,
//!     &[CellValue::text("id"), CellValue::text("amount")],
//!     0,
//!     None,
//! ).unwrap();
//! manager.write_row(2, &[CellValue::Number(1.0), CellValue::Number(19.5)], 0, None).unwrap();
//! manager.save_workbook(None).unwrap();
//!
//! let header = manager.read_row(1, 0, 0, None).unwrap();
//! assert_eq!(header[0], CellValue::text("id"));
//! ```

pub mod prelude;

// Re-export Excel types
pub use robokit_excel::{
    sheet_bounds, CellValue, DocumentCache, Error, Result, Spreadsheet, WorkbookManager, Worksheet,
};

// Re-export browser types
#[cfg(feature = "browser")]
pub use robokit_browser::{
    append_platform_args, chrome_args, chrome_capabilities, download_prefs, open_chrome,
    BrowserError, ChromeConfig, ChromeDriver, ChromeSession,
};
