// src/report/mod.rs

mod fs_utils;
pub mod hr;
pub mod projects;
mod sheet;

pub use fs_utils::ensure_writable;
pub use hr::export_hr;
pub use projects::export_projects;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Which derived workbook to produce.
#[derive(Clone, Debug, ValueEnum)]
pub enum ReportKind {
    Projects,
    Hr,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Projects => "projects",
            ReportKind::Hr => "hr",
        }
    }
}

/// Outcome of one export call: what was written, for the caller's summary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExportSummary {
    pub sheets: usize,
    pub rows: usize,
}

/// Advisory percentage-complete callback; never blocks the export.
pub type ProgressFn<'a> = dyn Fn(u8) + 'a;

pub(crate) fn report_progress(progress: Option<&ProgressFn>, pct: u8) {
    if let Some(cb) = progress {
        cb(pct);
    }
}

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path, summary: &ExportSummary) {
    success(format!(
        "{label} report completed: {} ({} sheets, {} rows)",
        path.display(),
        summary.sheets,
        summary.rows
    ));
}
