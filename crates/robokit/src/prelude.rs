//! Prelude module - common imports for robokit users
//!
//! ```rust
//! use robokit::prelude::*;
//! ```

pub use crate::{CellValue, DocumentCache, Error, Result, WorkbookManager};

#[cfg(feature = "browser")]
pub use crate::{open_chrome, BrowserError, ChromeConfig, ChromeSession};
