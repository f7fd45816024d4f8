// ABOUTME: Serde deserialization helpers for loosely-typed spreadsheet values
// ABOUTME: Accepts numbers the sheet serializes either as JSON numbers or as strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

//! The spreadsheet backend is not strict about cell types: a numeric column
//! can come back as `42`, `"42"`, or (for nullable columns) `null` or `""`
//! depending on how the row was edited. These `deserialize_with` helpers
//! absorb that variance so the raw row structs stay declarative.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Deserialize an `f64` from a JSON number or a numeric string.
///
/// # Errors
///
/// Fails when the value is neither a number nor a string parseable as one.
pub fn flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Int(value) => Ok(value as f64),
        RawNumber::Float(value) => Ok(value),
        RawNumber::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid numeric string: `{text}`"))),
    }
}

/// Deserialize an `i64` from a JSON number or a numeric string.
///
/// # Errors
///
/// Fails when the value is neither an integer nor a string parseable as one.
pub fn flexible_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Int(value) => Ok(value),
        RawNumber::Float(value) => Err(D::Error::custom(format!(
            "expected integer, got float `{value}`"
        ))),
        RawNumber::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid integer string: `{text}`"))),
    }
}

/// Deserialize an optional `i64`, treating `null`, an absent value, and an
/// empty string as `None`.
///
/// # Errors
///
/// Fails when a present, non-empty value is not an integer.
pub fn flexible_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawNumber::Int(value)) => Ok(Some(value)),
        Some(RawNumber::Float(value)) => Err(D::Error::custom(format!(
            "expected integer, got float `{value}`"
        ))),
        Some(RawNumber::Text(text)) => {
            if text.trim().is_empty() {
                return Ok(None);
            }
            text.trim()
                .parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid integer string: `{text}`")))
        }
    }
}

/// Deserialize a `String` from a JSON string or a number.
///
/// Identifier columns usually hold text, but a row edited by hand can come
/// back as a bare number.
///
/// # Errors
///
/// Fails when the value is neither a string nor a number.
pub fn flexible_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Int(value) => Ok(value.to_string()),
        RawNumber::Float(value) => Ok(value.to_string()),
        RawNumber::Text(text) => Ok(text),
    }
}
