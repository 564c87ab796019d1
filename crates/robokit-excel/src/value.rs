//! Cell value types

use std::fmt;

use umya_spreadsheet::{Cell, CellRawValue};

/// Represents the value read from or written to a cell
///
/// This is the open variant surfaced to test suites: plain text, numbers,
/// booleans, or nothing. Formula cells read back as their cached text; richer
/// representations stay inside the XLSX backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Empty,

    /// Boolean value (TRUE/FALSE)
    Bool(bool),

    /// Numeric value (all numbers stored as f64)
    Number(f64),

    /// String value
    Text(String),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Bool(true) => Some(1.0),
            CellValue::Bool(false) => Some(0.0),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            CellValue::Number(n) => Some(*n != 0.0),
            _ => None,
        }
    }

    /// Try to get the value as a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Write this value into a backend cell, replacing whatever was there
    pub(crate) fn apply_to(&self, cell: &mut Cell) {
        match self {
            CellValue::Empty => {
                cell.set_blank();
            }
            CellValue::Bool(b) => {
                cell.set_value_bool(*b);
            }
            CellValue::Number(n) => {
                cell.set_value_number(*n);
            }
            CellValue::Text(s) => {
                cell.set_value_string(s.clone());
            }
        }
    }
}

impl From<&umya_spreadsheet::CellValue> for CellValue {
    fn from(cv: &umya_spreadsheet::CellValue) -> Self {
        match cv.get_raw_value() {
            CellRawValue::Numeric(n) => CellValue::Number(*n),
            CellRawValue::Bool(b) => CellValue::Bool(*b),
            CellRawValue::String(s) => CellValue::Text(s.to_string()),
            CellRawValue::RichText(rt) => CellValue::Text(rt.get_text().to_string()),
            // Lazy values have not been type-detected by the backend yet
            CellRawValue::Lazy(s) => {
                let txt = s.as_ref();
                if let Ok(n) = txt.parse::<f64>() {
                    CellValue::Number(n)
                } else if txt.eq_ignore_ascii_case("TRUE") {
                    CellValue::Bool(true)
                } else if txt.eq_ignore_ascii_case("FALSE") {
                    CellValue::Bool(false)
                } else {
                    CellValue::Text(txt.to_string())
                }
            }
            CellRawValue::Error(_) => CellValue::Text(cv.get_value().to_string()),
            CellRawValue::Empty => CellValue::Empty,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(true) => write!(f, "TRUE"),
            CellValue::Bool(false) => write!(f, "FALSE"),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}
