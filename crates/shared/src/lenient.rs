//! Field decoders for API payloads that are neither versioned nor validated.
//!
//! Every decoder accepts any JSON value. Absent, `null` or wrongly typed input
//! becomes `None` (or an empty list) instead of failing the surrounding payload.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal,
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_from_value(&value))
}

pub fn decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&value))
}

/// Like [`decimal`], but an empty value (`null`, `""`, `0`) counts as zero.
pub fn decimal_or_zero<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Null => Some(Decimal::ZERO),
        Value::String(raw) if raw.is_empty() => Some(Decimal::ZERO),
        other => decimal_from_value(other),
    })
}

pub fn zero() -> Option<Decimal> {
    Some(Decimal::ZERO)
}

pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer_from_value(&value))
}

pub fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(date_from_value(&value))
}

/// Decodes a list whose entries fall back to `T::default()` when malformed.
/// Anything that is not an array decodes to an empty list.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(entries) => entries.into_iter().map(entry_or_default).collect(),
        _ => Vec::new(),
    })
}

pub fn entry_or_default<T>(entry: Value) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_value(entry).unwrap_or_default()
}

pub fn text_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(raw) => Some(raw.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => Decimal::from_str(&number.to_string())
            .ok()
            .or_else(|| number.as_f64().and_then(Decimal::from_f64)),
        Value::String(raw) => parse_decimal_prefix(raw),
        _ => None,
    }
}

pub fn integer_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|raw| raw.is_finite())
                .and_then(|raw| raw.trunc().to_i64())
        }),
        Value::String(raw) => parse_decimal_prefix(raw).and_then(|parsed| parsed.trunc().to_i64()),
        _ => None,
    }
}

pub fn date_from_value(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(raw) => parse_date(raw),
        Value::Number(number) => number
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|timestamp| timestamp.date_naive()),
        _ => None,
    }
}

/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and offset-less
/// `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(timestamp.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parses the leading numeric part of `raw`, ignoring whatever follows it.
/// `"12.5 BRL"` yields 12.5, `"abc"` yields `None`.
pub fn parse_decimal_prefix(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();

    let mut pos = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_part = &trimmed[int_start..pos];

    let mut frac_part = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        frac_part = &trimmed[frac_start..frac_end];
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(int_part.len() + frac_part.len() + 3);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_part);
    }
    Decimal::from_str(&normalized).ok()
}
