//! Response shaping shared by the endpoint functions.
//!
//! Grafana returns some fields in shapes that do not line up across
//! endpoints (relative URLs, `alertId` instead of `id`, capitalized keys).
//! These helpers normalize them.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ClientError, Result};
use crate::models::Acknowledgement;

/// Replace relative `url` fields in a list of objects with absolute ones.
pub(crate) fn absolutize_urls(base_url: &str, mut items: Value) -> Value {
    if let Value::Array(entries) = &mut items {
        for entry in entries.iter_mut() {
            if let Some(Value::String(url)) = entry.get_mut("url") {
                *url = absolutize(base_url, url);
            }
        }
    }
    items
}

/// Resolve `url` against the server root; absolute URLs pass through.
pub(crate) fn absolutize(base_url: &str, url: &str) -> String {
    match url::Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
        .and_then(|base| base.join(url))
    {
        Ok(joined) => joined.to_string(),
        Err(_) => url.to_string(),
    }
}

/// Rename `from` to `to` in an object, if present.
pub(crate) fn rename_key(mut value: Value, from: &str, to: &str) -> Value {
    if let Value::Object(map) = &mut value
        && let Some(v) = map.remove(from)
    {
        map.insert(to.to_string(), v);
    }
    value
}

/// Drop `key` from an object, if present.
pub(crate) fn remove_key(mut value: Value, key: &str) -> Value {
    if let Value::Object(map) = &mut value {
        map.remove(key);
    }
    value
}

/// Lower-case the first character of every top-level key.
pub(crate) fn lower_first_letters(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (decapitalize(&k), v))
                .collect::<Map<_, _>>(),
        ),
        other => other,
    }
}

fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `{"id": id, <field>: items}`
pub(crate) fn wrap_with_id(id: &str, field: &str, items: Value) -> Value {
    let mut map = Map::new();
    map.insert("id".to_string(), Value::String(id.to_string()));
    map.insert(field.to_string(), items);
    Value::Object(map)
}

/// The `message` field of a mutation acknowledgement.
pub(crate) fn message(value: &Value) -> Result<String> {
    Acknowledgement::deserialize(value)
        .map(|ack| ack.message)
        .map_err(|_| ClientError::InvalidResponse(format!("missing message in {value}")))
}
