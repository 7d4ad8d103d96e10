// src/dataset/mod.rs

pub mod loader;

pub use loader::load_dataset;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Placeholder returned for out-of-range cell lookups.
pub static EMPTY_CELL: Cell = Cell::Empty;

/// A single spreadsheet cell, already classified by the loader.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Render the cell the way it should appear in a re-exported sheet.
    /// Integral floats drop the trailing `.0` Excel never showed.
    pub fn display(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Cell::Bool(b) => b.to_string(),
            Cell::Date(d) => d.format("%Y-%m-%d").to_string(),
            Cell::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            Cell::Time(t) => t.format("%H:%M:%S").to_string(),
        }
    }
}

/// In-memory tabular dataset: header names plus row-major cells.
/// Rows are rectangular, one cell per header column.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Exact, case-sensitive column lookup. A missing column is not an error.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}
