//! Markdown formatter implementation.

use anyhow::Result;
use serde_json::Value;

use super::Formatter;
use super::common::tabulate;

/// `### Title` heading followed by a pipe table.
pub struct MarkdownFormatter;

fn escape_markdown(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}

impl Formatter for MarkdownFormatter {
    fn format(&self, title: &str, value: &Value) -> Result<String> {
        let table = tabulate(value);
        let mut output = format!("### {title}\n");
        if table.is_empty() {
            output.push_str("**No entries.**\n");
            return Ok(output);
        }

        output.push('|');
        for header in &table.headers {
            output.push_str(&format!(" {} |", escape_markdown(header)));
        }
        output.push_str("\n|");
        for _ in &table.headers {
            output.push_str(" --- |");
        }
        output.push('\n');

        for row in &table.rows {
            output.push('|');
            for cell in row {
                output.push_str(&format!(" {} |", escape_markdown(cell)));
            }
            output.push('\n');
        }
        Ok(output)
    }
}
