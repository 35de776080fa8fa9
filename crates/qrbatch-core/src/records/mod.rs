//! Record sets read from CSV input.
//!
//! Cells are typed per column the way common tabular readers type them: missing-value tokens
//! become [`Value::Missing`], all-integer columns become integers (promoted to floats when a
//! cell is missing), all-numeric columns become floats, everything else stays text. Integers
//! above `i64::MAX` stay exact: they are never promoted to float, and text beyond 64 bits
//! keeps the column as text.

mod error;
mod parse;
mod value;

pub use error::ParseError;
pub use parse::{parse_csv, NA_TOKENS};
pub use value::Value;

/// One data row. Cells are positional and match the record set's header.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    cells: Vec<Value>,
}

impl Row {
    pub fn new(cells: Vec<Value>) -> Self {
        Self { cells }
    }

    /// Cell at column `index`; out-of-range columns read as missing.
    pub fn get(&self, index: usize) -> &Value {
        self.cells.get(index).unwrap_or(&Value::Missing)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Header plus ordered rows, all sharing the header's column set.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    header: Vec<String>,
    rows: Vec<Row>,
}

impl RecordSet {
    pub fn new(header: Vec<String>, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
