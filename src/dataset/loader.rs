// src/dataset/loader.rs

use crate::dataset::{Cell, Dataset};
use crate::errors::{AppError, AppResult};
use calamine::{Data, ExcelDateTime, Reader, Xlsx, open_workbook};
use chrono::{Datelike, NaiveTime};
use std::path::Path;

/// Load the first worksheet of an .xlsx file into a [`Dataset`].
///
/// The first row becomes the header; every cell below it is classified into
/// a [`Cell`]. Cells that cannot be interpreted degrade to `Cell::Empty`
/// rather than failing the load.
pub fn load_dataset(path: &Path) -> AppResult<Dataset> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let names = workbook.sheet_names().to_vec();
    let sheet = names
        .first()
        .ok_or_else(|| AppError::Source("workbook contains no worksheets".to_string()))?;

    let range = workbook.worksheet_range(sheet)?;

    let mut rows_iter = range.rows();

    let columns: Vec<String> = match rows_iter.next() {
        Some(header) => header.iter().map(header_name).collect(),
        None => Vec::new(),
    };

    let rows: Vec<Vec<Cell>> = rows_iter
        .map(|row| row.iter().map(classify).collect())
        .collect();

    Ok(Dataset { columns, rows })
}

fn header_name(data: &Data) -> String {
    match data {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn classify(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(serial) => classify_serial(serial),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(_) => Cell::Empty,
    }
}

/// Excel stores dates, times and datetimes as one serial number; split them
/// back apart. Serials below day 1 (year 1899) carry no date part at all.
fn classify_serial(serial: &ExcelDateTime) -> Cell {
    match serial.as_datetime() {
        Some(dt) => {
            if dt.date().year() < 1900 {
                Cell::Time(dt.time())
            } else if dt.time() == NaiveTime::MIN {
                Cell::Date(dt.date())
            } else {
                Cell::DateTime(dt)
            }
        }
        None => Cell::Empty,
    }
}
