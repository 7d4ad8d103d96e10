// src/core/duration.rs

//! Duration normalizer: every source row funnels into one integer number of
//! elapsed seconds, whatever shape the export stored the duration in.

use crate::dataset::{Cell, Dataset};
use crate::utils::time::parse_hms;
use chrono::{NaiveTime, Timelike};

/// Column holding the duration as "HH:MM:SS" text (or a time-of-day cell).
pub const DURATION_TEXT_COLUMN: &str = "Duration (h)";

/// Column holding the duration as fractional hours.
pub const DURATION_DECIMAL_COLUMN: &str = "Duration (decimal)";

/// The authoritative duration source picked for one row.
#[derive(Clone, Debug, PartialEq)]
pub enum DurationSource {
    Decimal(f64),
    Text(String),
    TimeOfDay(NaiveTime),
    Missing,
}

/// Pre-resolved duration column indices for a dataset.
#[derive(Clone, Copy, Debug)]
pub struct DurationColumns {
    pub decimal: Option<usize>,
    pub text: Option<usize>,
}

impl DurationColumns {
    pub fn locate(dataset: &Dataset) -> Self {
        Self {
            decimal: dataset.column(DURATION_DECIMAL_COLUMN),
            text: dataset.column(DURATION_TEXT_COLUMN),
        }
    }

    /// Whether the dataset carries any duration column at all.
    pub fn present(&self) -> bool {
        self.decimal.is_some() || self.text.is_some()
    }
}

/// Pick the duration source for one row: a numeric decimal-hours cell wins,
/// then the text/time-of-day cell, then nothing.
pub fn source_for_row(row: &[Cell], cols: &DurationColumns) -> DurationSource {
    if let Some(idx) = cols.decimal {
        if let Some(Cell::Number(n)) = row.get(idx) {
            return DurationSource::Decimal(*n);
        }
    }
    if let Some(idx) = cols.text {
        match row.get(idx) {
            Some(Cell::Text(s)) => return DurationSource::Text(s.clone()),
            Some(Cell::Time(t)) => return DurationSource::TimeOfDay(*t),
            _ => {}
        }
    }
    DurationSource::Missing
}

/// Resolve a source to integer seconds.
///
/// Decimal hours truncate toward zero; malformed "HH:MM:SS" text contributes
/// zero seconds instead of failing the export.
pub fn seconds_from_source(source: &DurationSource) -> i64 {
    let secs = match source {
        DurationSource::Decimal(hours) => (hours * 3600.0) as i64,
        DurationSource::Text(s) => parse_hms(s).unwrap_or(0),
        DurationSource::TimeOfDay(t) => {
            i64::from(t.hour()) * 3600 + i64::from(t.minute()) * 60 + i64::from(t.second())
        }
        DurationSource::Missing => 0,
    };
    secs.max(0)
}

/// Normalized duration of one row, in seconds.
pub fn row_seconds(row: &[Cell], cols: &DurationColumns) -> i64 {
    seconds_from_source(&source_for_row(row, cols))
}
