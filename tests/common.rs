#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use calamine::{Data, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn clk() -> Command {
    cargo_bin_cmd!("clockify-report")
}

/// Unique temp path for a workbook, removing any leftover from past runs
pub fn temp_xlsx(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_clockify_report.xlsx", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Cell value for building test source workbooks.
pub enum Val {
    Str(&'static str),
    Num(f64),
    Date(&'static str),
    Time(&'static str),
    Blank,
}

/// Write a small Clockify-like export at `path`.
pub fn write_source(path: &str, headers: &[&str], rows: &[Vec<Val>]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (c, header) in headers.iter().enumerate() {
        sheet.write(0, c as u16, *header).unwrap();
    }

    // Built-in date and time number formats, so the cells read back typed.
    let date_fmt = Format::new().set_num_format_index(14);
    let time_fmt = Format::new().set_num_format_index(21);

    for (r, row) in rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (c, value) in row.iter().enumerate() {
            let c = c as u16;
            match value {
                Val::Str(s) => {
                    sheet.write(r, c, *s).unwrap();
                }
                Val::Num(n) => {
                    sheet.write(r, c, *n).unwrap();
                }
                Val::Date(d) => {
                    let dt = ExcelDateTime::parse_from_str(d).unwrap();
                    sheet.write_with_format(r, c, &dt, &date_fmt).unwrap();
                }
                Val::Time(t) => {
                    let dt = ExcelDateTime::parse_from_str(t).unwrap();
                    sheet.write_with_format(r, c, &dt, &time_fmt).unwrap();
                }
                Val::Blank => {}
            }
        }
    }

    workbook.save(path).unwrap();
}

/// Read one sheet of an output workbook back as displayed strings
/// (empty string for blank cells).
pub fn read_sheet(path: &str, sheet: &str) -> Vec<Vec<String>> {
    let mut wb: Xlsx<_> = open_workbook(path).expect("open output workbook");
    let range = wb.worksheet_range(sheet).expect("sheet present");
    range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect()
}

pub fn sheet_names(path: &str) -> Vec<String> {
    let wb: Xlsx<_> = open_workbook(path).expect("open output workbook");
    wb.sheet_names().to_vec()
}

fn cell_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
