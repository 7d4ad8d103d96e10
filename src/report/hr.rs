// src/report/hr.rs

//! HR workbook: time summed per project, then per description inside each
//! project, once over the whole dataset and once per user. Total rows carry
//! the date range of the source data.

use crate::core::duration::{self, DurationColumns};
use crate::dataset::Dataset;
use crate::errors::AppResult;
use crate::report::sheet::{sheet_name, write_sheet};
use crate::report::{ExportSummary, ProgressFn, notify_export_success, report_progress};
use crate::ui::messages::info;
use crate::utils::date::{cell_date, format_date};
use crate::utils::time::format_seconds;
use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Column layout of the HR workbook.
pub const HR_COLUMNS: [&str; 3] = ["Project", "Description", "Time (h)"];

/// Sheet summarizing the whole dataset, ahead of the per-user sheets.
const GLOBAL_SHEET: &str = "All Entries";

pub fn export_hr(
    dataset: &Dataset,
    path: &Path,
    progress: Option<&ProgressFn>,
) -> AppResult<ExportSummary> {
    info(format!("Exporting HR report: {}", path.display()));
    report_progress(progress, 10);

    let duration_cols = DurationColumns::locate(dataset);
    let project_col = dataset.column("Project");
    let description_col = dataset.column("Description");
    let user_col = dataset.column("User");

    // The date range is taken from the whole dataset once and reused on
    // every sheet, the per-user ones included.
    let label = total_label(dataset);

    // ---------------------------
    // Global sheet
    // ---------------------------
    let all_rows: Vec<usize> = (0..dataset.rows.len()).collect();
    let (mut global_rows, grand_total) = summarize(
        dataset,
        &all_rows,
        project_col,
        description_col,
        &duration_cols,
    );
    append_total_rows(&mut global_rows, &label, grand_total);
    report_progress(progress, 40);

    let mut workbook = Workbook::new();
    write_sheet(&mut workbook, GLOBAL_SHEET, &HR_COLUMNS, &global_rows)?;

    let mut sheets = 1usize;
    let mut rows_written = global_rows.len();
    report_progress(progress, 50);

    // ---------------------------
    // One sheet per user
    // ---------------------------
    if let Some(ucol) = user_col {
        let mut users: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (r, row) in dataset.rows.iter().enumerate() {
            if let Some(cell) = row.get(ucol) {
                if !cell.is_empty() {
                    users.entry(cell.display()).or_default().push(r);
                }
            }
        }

        let user_count = users.len();
        for (i, (user, members)) in users.iter().enumerate() {
            let (mut rows, user_total) = summarize(
                dataset,
                members,
                project_col,
                description_col,
                &duration_cols,
            );

            // Nothing aggregated for this user: no sheet.
            if rows.is_empty() {
                continue;
            }

            append_total_rows(&mut rows, &label, user_total);
            write_sheet(&mut workbook, &sheet_name(user), &HR_COLUMNS, &rows)?;

            sheets += 1;
            rows_written += rows.len();
            report_progress(progress, (50 + (i + 1) * 40 / user_count) as u8);
        }
    }

    report_progress(progress, 95);
    workbook.save(path)?;
    report_progress(progress, 100);

    let summary = ExportSummary {
        sheets,
        rows: rows_written,
    };
    notify_export_success("HR", path, &summary);
    Ok(summary)
}

/// One aggregation pass over a set of rows: group by project (keys iterate
/// in sorted order), sub-group by description (first-appearance order).
/// Returns the emitted rows and the grand total (sum of project subtotals).
fn summarize(
    dataset: &Dataset,
    row_ids: &[usize],
    project_col: Option<usize>,
    description_col: Option<usize>,
    duration_cols: &DurationColumns,
) -> (Vec<Vec<String>>, i64) {
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    if let Some(pcol) = project_col {
        for &r in row_ids {
            if let Some(cell) = dataset.rows[r].get(pcol) {
                if !cell.is_empty() {
                    groups.entry(cell.display()).or_default().push(r);
                }
            }
        }
    }

    let mut out: Vec<Vec<String>> = Vec::new();
    let mut grand_total: i64 = 0;

    for (project, members) in &groups {
        let mut subtotal: i64 = 0;
        let mut desc_order: Vec<String> = Vec::new();
        let mut desc_totals: HashMap<String, i64> = HashMap::new();

        for &r in members {
            let row = &dataset.rows[r];
            let secs = duration::row_seconds(row, duration_cols);
            subtotal += secs;

            // Rows without a description still count toward the project
            // subtotal; they just get no row of their own.
            if let Some(dcol) = description_col {
                if let Some(cell) = row.get(dcol) {
                    if !cell.is_empty() {
                        let key = cell.display();
                        match desc_totals.get_mut(&key) {
                            Some(total) => *total += secs,
                            None => {
                                desc_totals.insert(key.clone(), secs);
                                desc_order.push(key);
                            }
                        }
                    }
                }
            }
        }

        grand_total += subtotal;

        out.push(vec![
            project.clone(),
            String::new(),
            format_seconds(subtotal),
        ]);
        for desc in &desc_order {
            out.push(vec![
                String::new(),
                desc.clone(),
                format_seconds(desc_totals[desc]),
            ]);
        }
    }

    (out, grand_total)
}

/// `Total (<earliest start> - <latest end>)`, or plain `Total` when either
/// bound cannot be established.
fn total_label(dataset: &Dataset) -> String {
    let start = date_bound(dataset, "Start Date", false);
    let end = date_bound(dataset, "End Date", true);

    match (start, end) {
        (Some(s), Some(e)) => format!("Total ({} - {})", format_date(s), format_date(e)),
        _ => "Total".to_string(),
    }
}

fn date_bound(dataset: &Dataset, column: &str, latest: bool) -> Option<NaiveDate> {
    let idx = dataset.column(column)?;
    let mut bound: Option<NaiveDate> = None;

    for row in &dataset.rows {
        if let Some(d) = row.get(idx).and_then(cell_date) {
            bound = Some(match bound {
                Some(b) if latest => b.max(d),
                Some(b) => b.min(d),
                None => d,
            });
        }
    }

    bound
}

/// Blank separator row, then the date-ranged total row with the two-line
/// `Total:` time cell.
fn append_total_rows(rows: &mut Vec<Vec<String>>, label: &str, total_seconds: i64) {
    rows.push(vec![String::new(); HR_COLUMNS.len()]);
    rows.push(vec![
        label.to_string(),
        String::new(),
        format!("Total:\n{}", format_seconds(total_seconds)),
    ]);
}
