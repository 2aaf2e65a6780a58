//! Dynamic property values and the coercion helpers every validator uses.
//!
//! Properties travel as [`serde_json::Value`]. The helpers here turn an
//! arbitrary value into a typed one, falling back to a caller-supplied default
//! when the input is missing, empty, or cannot be converted. None of them fail.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::Value;

/// Property name to value mapping. Keys iterate in sorted order.
pub type PropertyMap = serde_json::Map<String, Value>;

/// String to string mapping used for inline styles and response headers.
pub type StringMap = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

fn is_integer(value: &serde_json::Number) -> bool {
    value.is_i64() || value.is_u64()
}

/// Convert to a string. An empty string, `null`, or a non-scalar yields `default`.
///
/// Floats are written in their shortest decimal form (`1.5`, `3`), never with
/// an exponent.
pub fn to_string(value: &Value, default: &str) -> String {
    match value {
        Value::String(s) if s.is_empty() => default.to_owned(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) if is_integer(n) => n.to_string(),
        Value::Number(n) => n.as_f64().map_or_else(|| default.to_owned(), |f| f.to_string()),
        _ => default.to_owned(),
    }
}

/// Convert to a boolean. Numbers equal to `1` are `true`; strings are parsed.
pub fn to_boolean(value: &Value, default: bool) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) if n.as_f64() == Some(1.0) => true,
        Value::String(s) => match s.as_str() {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => true,
            "0" | "f" | "F" | "false" | "FALSE" | "False" => false,
            _ => default,
        },
        _ => default,
    }
}

/// Convert to an integer.
///
/// An integer zero yields `default`. Floats are truncated, `true` is `1`,
/// and strings are parsed as base-10 integers.
pub fn to_integer(value: &Value, default: i64) -> i64 {
    match value {
        Value::Number(n) if is_integer(n) => match n.as_i64() {
            Some(0) | None => default,
            Some(i) => i,
        },
        Value::Number(n) => n.as_f64().map_or(default, |f| f as i64),
        Value::Bool(true) => 1,
        Value::String(s) => s.trim().parse::<i64>().unwrap_or(default),
        _ => default,
    }
}

/// Convert to a float.
///
/// A float zero yields `default`. Integers convert exactly, `true` is `1.0`,
/// and strings are parsed.
pub fn to_float(value: &Value, default: f64) -> f64 {
    match value {
        Value::Number(n) if is_integer(n) => n.as_f64().unwrap_or(default),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => default,
            Some(f) => f,
            None => default,
        },
        Value::Bool(true) => 1.0,
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(default),
        _ => default,
    }
}

/// Wrap a float so integral values serialize as integers (`3` rather than `3.0`).
pub fn float_value(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

/// Keep at most `length` characters of `value`.
pub fn truncate(value: &str, length: usize) -> String {
    value.chars().take(length).collect()
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// Convert an object into a string map. Non-string members go through [`to_string`].
pub fn to_string_map(value: &Value) -> Option<StringMap> {
    value.as_object().map(|object| {
        object
            .iter()
            .map(|(key, value)| (key.clone(), to_string(value, "")))
            .collect()
    })
}

/// The members of an object, or an empty map for anything else.
pub fn to_value_map(value: &Value) -> PropertyMap {
    value.as_object().cloned().unwrap_or_default()
}

/// Overlay `overlay` onto a copy of `base`.
pub fn merge_string_map(base: &StringMap, overlay: &StringMap) -> StringMap {
    let mut merged = base.clone();
    merged.extend(overlay.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Overlay `overlay` onto a copy of `base`.
pub fn merge_value_map(base: &PropertyMap, overlay: &PropertyMap) -> PropertyMap {
    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Convert a string map into a JSON object.
pub fn string_map_value(map: &StringMap) -> Value {
    Value::Object(
        map.iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect(),
    )
}

/// Convert a list or a space-separated string into a list of strings.
pub fn to_string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| to_string(item, ""))
            .filter(|item| !item.is_empty())
            .collect(),
        Value::String(s) => s.split_whitespace().map(str::to_owned).collect(),
        _ => Vec::new(),
    }
}

/// Convert a list of objects into property maps, skipping any other members.
pub fn to_map_list(value: &Value) -> Vec<PropertyMap> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_object().cloned())
            .collect(),
        _ => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Date and time
// ---------------------------------------------------------------------------

const NAIVE_DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a date, time or datetime string in any of the layouts the components emit.
///
/// Values without an offset are taken as UTC. A bare time (`15:04`) is placed
/// on 1970-01-01.
pub fn string_to_datetime(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(dt);
    }
    let utc = |naive: NaiveDateTime| Utc.from_utc_datetime(&naive).fixed_offset();
    for layout in NAIVE_DATETIME_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, layout) {
            return Some(utc(naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(utc);
    }
    NaiveTime::parse_from_str(value, "%H:%M")
        .ok()
        .and_then(|time| NaiveDate::from_ymd_opt(1970, 1, 1).map(|d| utc(d.and_time(time))))
}

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// A random alphanumeric string of `length` characters.
pub fn random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// A fresh component id: `ID` followed by 16 random alphanumerics.
pub fn component_id() -> String {
    format!("ID{}", random_string(16))
}

// ===========================================================================
// Tests
// ===========================================================================
