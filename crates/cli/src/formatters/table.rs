//! Aligned plain-text table formatter.

use anyhow::Result;
use serde_json::Value;

use super::Formatter;
use super::common::tabulate;

/// Column separator.
const GAP: &str = "  ";

/// Title line followed by space-aligned columns.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format(&self, title: &str, value: &Value) -> Result<String> {
        let table = tabulate(value);
        if table.is_empty() {
            return Ok(format!("No {} found.\n", title.to_lowercase()));
        }

        let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
        for row in &table.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut output = format!("{title}\n");
        push_line(&mut output, &table.headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut output, &rule, &widths);
        for row in &table.rows {
            push_line(&mut output, row, &widths);
        }
        Ok(output)
    }
}

fn push_line(output: &mut String, cells: &[String], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let flat = cell.replace('\n', " ");
        if i == last {
            output.push_str(&flat);
        } else {
            let pad = width.saturating_sub(flat.chars().count());
            output.push_str(&flat);
            output.push_str(&" ".repeat(pad));
            output.push_str(GAP);
        }
    }
    output.push('\n');
}
