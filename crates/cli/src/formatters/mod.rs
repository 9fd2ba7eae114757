//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Render command results as JSON, an aligned text table, or a Markdown table.
//! - Write rendered output to stdout or atomically to a file.
//!
//! Does NOT handle:
//! - Fetching or shaping data (commands pass finished `serde_json::Value`s).
//!
//! Invariants:
//! - Table and Markdown headers are the object keys split into title-cased words
//!   (`newStateDate` becomes `New State Date`).
//! - Columns whose value is null in every row are left out of tables.
//! - JSON output is the value unchanged, pretty-printed.
//!
//! ## Empty-State Handling
//!
//! | Format   | Empty result            |
//! |----------|-------------------------|
//! | JSON     | `[]` or `null`          |
//! | Table    | `No <title> found.`     |
//! | Markdown | title plus `**No entries.**` |

use anyhow::Result;
use clap::ValueEnum;
use serde_json::Value;

mod common;
mod json;
mod markdown;
mod table;

pub use common::output_result;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    #[value(alias = "md")]
    Markdown,
}

/// Renders a command result.
pub trait Formatter {
    /// Render `value` under a human-readable `title` such as `Alerts`.
    fn format(&self, title: &str, value: &Value) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    }
}

#[cfg(test)]
mod tests;
