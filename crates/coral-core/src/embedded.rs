// ABOUTME: Parse-on-read helpers for sheet fields that hold JSON-encoded strings
// ABOUTME: Explicit fallback policy: absent is fine, malformed logs a warning and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

//! Several sheet columns store a second layer of JSON as a plain string
//! (weekly distances, measurement values, level objectives). These helpers
//! give that pattern one home: an absent or empty cell is ordinary and
//! yields the default silently, while a malformed cell logs a warning with
//! the field name and yields the default instead of failing the whole fetch.

use serde::de::DeserializeOwned;
use tracing::warn;

/// Parse a JSON-encoded list field, falling back to an empty list.
///
/// Returns `[]` for an absent or blank cell. A cell that fails to parse as
/// a JSON array of `T` logs one warning and also returns `[]`.
#[must_use]
pub fn parse_list<T: DeserializeOwned>(field: &'static str, raw: Option<&str>) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(error) => {
            warn!(field, %error, "embedded JSON list failed to parse, substituting empty list");
            Vec::new()
        }
    }
}

/// Parse a JSON-encoded object field, falling back to `None`.
///
/// Returns `None` for an absent or blank cell. A cell that fails to parse
/// as `T` logs one warning and also returns `None`.
#[must_use]
pub fn parse_value<T: DeserializeOwned>(field: &'static str, raw: Option<&str>) -> Option<T> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(field, %error, "embedded JSON value failed to parse, substituting none");
            None
        }
    }
}
