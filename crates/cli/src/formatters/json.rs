//! JSON formatter implementation.

use anyhow::Result;
use serde_json::Value;

use super::Formatter;

/// Pretty-printed JSON; the title is not part of the output.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, _title: &str, value: &Value) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
    }
}
