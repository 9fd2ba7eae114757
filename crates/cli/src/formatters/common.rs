//! Shared helpers for the table-shaped formatters and file output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use super::OutputFormat;

/// Rows and title-cased headers extracted from a JSON value.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Tabular {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Tabular {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.headers.is_empty()
    }
}

/// Flatten a result into rows.
///
/// An array of objects gives one row per object; a single object gives one
/// row; scalars land in a `Value` column. Column order follows first
/// appearance, and all-null columns are dropped.
pub(crate) fn tabulate(value: &Value) -> Tabular {
    let objects = to_objects(value);

    let mut keys: Vec<&str> = Vec::new();
    for object in &objects {
        for (key, field) in object {
            if !field.is_null() && !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
    }

    Tabular {
        headers: keys.iter().map(|k| header_title(k)).collect(),
        rows: objects
            .iter()
            .map(|object| keys.iter().map(|k| cell(object.get(*k))).collect())
            .collect(),
    }
}

fn to_objects(value: &Value) -> Vec<Map<String, Value>> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(as_object).collect(),
        other => vec![as_object(other)],
    }
}

fn as_object(value: &Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map.clone(),
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other.clone());
            map
        }
    }
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Split a camelCase, PascalCase or snake_case key into title-cased words.
///
/// `newStateDate` -> `New State Date`, `rawJSON` -> `Raw JSON`,
/// `dashboardUId` -> `Dashboard U Id`.
pub(crate) fn header_title(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if matches!(c, '_' | '-' | ' ') {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Print `output` to stdout, or write it to `output_file` and note that on stderr.
pub fn output_result(
    output: &str,
    format: OutputFormat,
    output_file: Option<&PathBuf>,
) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!(
            "Results written to {} ({:?} format)",
            path.display(),
            format
        );
    } else {
        print!("{}", output);
    }
    Ok(())
}

/// Write formatted output atomically (temp file + rename), creating parent directories.
pub(crate) fn write_to_file(content: &str, path: &Path) -> Result<()> {
    use std::io::Write;

    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent_dir)
        .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;

    let mut temp_file = tempfile::NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write output")?;
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to move output into place at {}", path.display()))?;

    Ok(())
}
