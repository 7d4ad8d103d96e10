//! Plain-text table rendering for the preview command.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        let widths = headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();
        Self {
            headers,
            rows: Vec::new(),
            widths,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, value) in row.iter().enumerate() {
            if i < self.widths.len() {
                self.widths[i] = self.widths[i].max(UnicodeWidthStr::width(value.as_str()));
            }
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        push_row(&mut out, &self.widths, &self.headers);
        for row in &self.rows {
            push_row(&mut out, &self.widths, row);
        }
        out
    }
}

fn push_row(out: &mut String, widths: &[usize], row: &[String]) {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        let value = row.get(i).map(String::as_str).unwrap_or("");
        let pad = width.saturating_sub(UnicodeWidthStr::width(value));
        line.push_str(value);
        line.push_str(&" ".repeat(pad + 1));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
