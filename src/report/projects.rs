// src/report/projects.rs

//! Projects workbook: every source row reshaped onto a fixed schema, one
//! sheet per distinct project (first-appearance order), subtotal rows per
//! sheet. Duplicate rows are preserved verbatim.

use crate::core::duration::{self, DurationColumns};
use crate::dataset::{Cell, Dataset, EMPTY_CELL};
use crate::errors::AppResult;
use crate::report::sheet::{sheet_name, write_sheet};
use crate::report::{ExportSummary, ProgressFn, notify_export_success, report_progress};
use crate::ui::messages::info;
use crate::utils::date::format_date;
use crate::utils::time::format_seconds;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Fixed column layout of the projects workbook.
pub const PROJECT_COLUMNS: [&str; 9] = [
    "Project",
    "Description",
    "User",
    "Email",
    "Start Date",
    "Start Time",
    "End Date",
    "End Time",
    "Duration (h)",
];

/// Sheet holding every source row, ahead of the per-project sheets.
const GLOBAL_SHEET: &str = "All Projects";

pub fn export_projects(
    dataset: &Dataset,
    path: &Path,
    progress: Option<&ProgressFn>,
) -> AppResult<ExportSummary> {
    info(format!("Exporting projects report: {}", path.display()));
    report_progress(progress, 10);

    let duration_cols = DurationColumns::locate(dataset);
    let source_cols: Vec<Option<usize>> = PROJECT_COLUMNS
        .iter()
        .map(|name| dataset.column(name))
        .collect();

    // ---------------------------
    // Global sheet
    // ---------------------------
    let mut global_rows: Vec<Vec<String>> = Vec::with_capacity(dataset.rows.len() + 2);
    let mut total_seconds: i64 = 0;

    for row in &dataset.rows {
        total_seconds += duration::row_seconds(row, &duration_cols);
        global_rows.push(map_row(row, &source_cols, &duration_cols));
    }

    append_total_rows(&mut global_rows, total_seconds);
    report_progress(progress, 30);

    let mut workbook = Workbook::new();
    write_sheet(&mut workbook, GLOBAL_SHEET, &PROJECT_COLUMNS, &global_rows)?;

    let mut sheets = 1usize;
    let mut rows_written = global_rows.len();
    report_progress(progress, 50);

    // ---------------------------
    // One sheet per project
    // ---------------------------
    let project_col = dataset.column("Project");
    let projects = distinct_projects(dataset, project_col);
    let project_count = projects.len();

    if let Some(idx) = project_col {
        for (i, project) in projects.iter().enumerate() {
            let mut rows: Vec<Vec<String>> = Vec::new();
            let mut subtotal: i64 = 0;

            for row in &dataset.rows {
                let is_match = row
                    .get(idx)
                    .is_some_and(|c| !c.is_empty() && c.display() == *project);
                if is_match {
                    subtotal += duration::row_seconds(row, &duration_cols);
                    rows.push(map_row(row, &source_cols, &duration_cols));
                }
            }

            append_total_rows(&mut rows, subtotal);
            write_sheet(&mut workbook, &sheet_name(project), &PROJECT_COLUMNS, &rows)?;

            sheets += 1;
            rows_written += rows.len();
            report_progress(progress, (50 + (i + 1) * 40 / project_count) as u8);
        }
    }

    report_progress(progress, 95);
    workbook.save(path)?;
    report_progress(progress, 100);

    let summary = ExportSummary {
        sheets,
        rows: rows_written,
    };
    notify_export_success("Projects", path, &summary);
    Ok(summary)
}

/// Distinct project values in first-appearance order; empty cells excluded.
fn distinct_projects(dataset: &Dataset, project_col: Option<usize>) -> Vec<String> {
    let mut projects: Vec<String> = Vec::new();
    if let Some(idx) = project_col {
        for row in &dataset.rows {
            if let Some(cell) = row.get(idx) {
                if !cell.is_empty() {
                    let key = cell.display();
                    if !projects.contains(&key) {
                        projects.push(key);
                    }
                }
            }
        }
    }
    projects
}

/// Reshape one source row onto the fixed schema. Absent columns stay blank;
/// the duration field is re-rendered from the normalized seconds.
fn map_row(row: &[Cell], source_cols: &[Option<usize>], duration_cols: &DurationColumns) -> Vec<String> {
    let mut out = Vec::with_capacity(PROJECT_COLUMNS.len());

    for (target, source) in PROJECT_COLUMNS.iter().zip(source_cols) {
        if *target == "Duration (h)" {
            if duration_cols.present() {
                out.push(format_seconds(duration::row_seconds(row, duration_cols)));
            } else {
                // No duration source anywhere in the file: the column is
                // still filled, with a zero duration per row.
                out.push("00:00:00".to_string());
            }
            continue;
        }

        let cell = source.and_then(|i| row.get(i)).unwrap_or(&EMPTY_CELL);
        out.push(render_cell(target, cell));
    }

    out
}

/// Date-typed cells in the date columns are reformatted; everything else
/// passes through as stored.
fn render_cell(target: &str, cell: &Cell) -> String {
    match (target, cell) {
        ("Start Date" | "End Date", Cell::Date(d)) => format_date(*d),
        ("Start Date" | "End Date", Cell::DateTime(dt)) => format_date(dt.date()),
        _ => cell.display(),
    }
}

/// Blank separator row, then `Total:` with the summed duration.
fn append_total_rows(rows: &mut Vec<Vec<String>>, total_seconds: i64) {
    rows.push(vec![String::new(); PROJECT_COLUMNS.len()]);

    let mut total_row = vec![String::new(); PROJECT_COLUMNS.len()];
    total_row[0] = "Total:".to_string();
    total_row[PROJECT_COLUMNS.len() - 1] = format_seconds(total_seconds);
    rows.push(total_row);
}
