// src/report/sheet.rs

use crate::errors::AppResult;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook};
use unicode_width::UnicodeWidthStr;

/// Maximum sheet name length allowed by the xlsx format.
const SHEET_NAME_MAX: usize = 31;

/// Make a grouping key safe to use as a worksheet name: truncate to the
/// xlsx limit and substitute the characters the format forbids.
pub(crate) fn sheet_name(raw: &str) -> String {
    raw.chars()
        .take(SHEET_NAME_MAX)
        .map(|c| match c {
            '/' | '\\' | '?' | '*' | '[' | ']' | ':' => '_',
            other => other,
        })
        .collect()
}

/// Write one sheet: styled header row, banded string rows, auto column
/// widths. Blank cells are left unwritten so separator rows stay empty.
pub(crate) fn write_sheet(
    workbook: &mut Workbook,
    name: &str,
    headers: &[&str],
    rows: &[Vec<String>],
) -> AppResult<()> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(name)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, row) in rows.iter().enumerate() {
        let r = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }

            let mut fmt = Format::new()
                .set_background_color(band_color)
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin);
            if value.contains('\n') {
                fmt = fmt.set_text_wrap();
            }

            worksheet.write_with_format(r, col as u16, value.as_str(), &fmt)?;

            let widest = value
                .lines()
                .map(UnicodeWidthStr::width)
                .max()
                .unwrap_or(0);
            if col < col_widths.len() {
                col_widths[col] = col_widths[col].max(widest);
            }
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    Ok(())
}
