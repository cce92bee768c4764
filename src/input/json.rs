//! Nested JSON object flattening.

use serde_json::Value;

use crate::types::{
    Triple,
    join_key,
};

/// Flattens a nested JSON object into triples for one locale.
///
/// String leaves become entries keyed by their dot-joined path below
/// `prefix`. Numbers, booleans, nulls and arrays are skipped, as is a
/// non-object `json`.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use i18n_store::input::json::flatten_json;
///
/// let triples = flatten_json(&json!({"a": {"b": "access"}}), "en_US", "");
/// assert_eq!(triples[0].key, "a.b");
/// assert_eq!(triples[0].text, "access");
/// ```
#[must_use]
pub fn flatten_json(json: &Value, locale: &str, prefix: &str) -> Vec<Triple> {
    let mut result = Vec::new();
    flatten_json_value(json, locale, prefix, &mut result);
    result
}

fn flatten_json_value(json: &Value, locale: &str, prefix: &str, result: &mut Vec<Triple>) {
    let Value::Object(map) = json else {
        return;
    };

    for (key, value) in map {
        let full_key = join_key(prefix, key);
        match value {
            Value::String(text) => result.push(Triple::new(locale, full_key, text.clone())),
            Value::Object(_) => flatten_json_value(value, locale, &full_key, result),
            _ => tracing::trace!(key = %full_key, "Skipping non-string JSON value"),
        }
    }
}

/// Flattens a `{ locale: { nested object } }` document.
///
/// Each top-level entry is flattened independently with its key as the
/// locale; entries whose value is not an object are skipped.
#[must_use]
pub fn flatten_json_by_locale(json: &Value) -> Vec<Triple> {
    let Value::Object(locales) = json else {
        return Vec::new();
    };

    locales
        .iter()
        .flat_map(|(locale, dictionary)| flatten_json(dictionary, locale, ""))
        .collect()
}
