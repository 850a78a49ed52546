//! Tolerant field decoders for the onboarding API payloads.
//!
//! The upstream endpoints return partially populated JSON: blanks, `null`s,
//! numbers sent as strings, and the occasional non-finite value. None of those
//! are errors here; they all decode to "absent".

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(text_from_value))
}

pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

pub(crate) fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(integer_from_value))
}

/// Quarters outside 1..=4 (including the `0` "unassigned" marker) decode to `None`.
pub(crate) fn lenient_quarter<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(integer_from_value)
        .and_then(normalize_quarter))
}

/// Missing or unreadable status codes fall back to `0` (awaiting control).
pub(crate) fn lenient_status<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(integer_from_value).unwrap_or(0))
}

pub(crate) fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::String(text) => parse_datetime(&text),
        _ => None,
    }))
}

/// Lists of records. `null` or a non-array reads as empty and elements that do
/// not decode as `T` are dropped.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(list_elements(value)
        .into_iter()
        .filter_map(|element| T::deserialize(element).ok())
        .collect())
}

/// Lists of scalars. Numbers become text, blanks and non-scalar elements are
/// dropped, and a lone scalar reads as a one-element list.
pub(crate) fn lenient_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(list_elements(value)
        .into_iter()
        .filter_map(text_from_value)
        .filter(|text| !text.trim().is_empty())
        .collect())
}

fn list_elements(value: Option<Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(elements)) => elements,
        Some(Value::Null) | Some(Value::Object(_)) | None => Vec::new(),
        Some(scalar) => vec![scalar],
    }
}

fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

pub(crate) fn normalize_quarter(raw: i32) -> Option<u8> {
    match raw {
        1..=4 => Some(raw as u8),
        _ => None,
    }
}

pub(crate) fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

/// Calendar date as written. An offset-bearing timestamp keeps its own local
/// date instead of being shifted to UTC.
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value.trim()) {
        return Some(dt.date_naive());
    }

    parse_datetime(value).map(|dt| dt.date())
}

fn number_from_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    number.is_finite().then_some(number)
}

pub(crate) fn integer_from_value(value: &Value) -> Option<i32> {
    if let Some(integer) = value.as_i64() {
        return i32::try_from(integer).ok();
    }

    let number = number_from_value(value)?;
    if number.fract() != 0.0 || number < i32::MIN as f64 || number > i32::MAX as f64 {
        return None;
    }

    Some(number as i32)
}
