// ABOUTME: Integration tests for the file-backed local state store
// ABOUTME: Round-trip, overwrite, removal, and reopen behavior against a temp directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

mod common;

use chrono::{TimeZone, Utc};
use common::init_test_logging;
use coral_club::storage::{keys, LocalState};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tempfile::TempDir;

fn temp_state() -> (TempDir, LocalState) {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let state = LocalState::open(dir.path().join("state.json"));
    (dir, state)
}

#[test]
fn round_trip_is_structurally_equal_for_arbitrary_json() {
    let (_dir, state) = temp_state();

    let value = json!({
        "name": "Lucía",
        "laps": [3, 5, 8],
        "nested": {"medal": "oro", "graded": null}
    });
    state.set("arbitrary", &value).unwrap();

    let read: serde_json::Value = state.get("arbitrary").unwrap().unwrap();
    assert_eq!(read, value);
}

#[test]
fn absent_key_reads_as_none() {
    let (_dir, state) = temp_state();
    let read: Option<serde_json::Value> = state.get(keys::ATHLETE).unwrap();
    assert!(read.is_none());
}

#[test]
fn set_replaces_the_previous_value() {
    let (_dir, state) = temp_state();

    state.set(keys::TOKEN, "first-token").unwrap();
    state.set(keys::TOKEN, "second-token").unwrap();

    let read: String = state.get(keys::TOKEN).unwrap().unwrap();
    assert_eq!(read, "second-token");
}

#[test]
fn remove_deletes_the_key_and_leaves_others() {
    let (_dir, state) = temp_state();

    state.set(keys::TOKEN, "token").unwrap();
    state.set("other", &1).unwrap();
    state.remove(keys::TOKEN).unwrap();

    let token: Option<String> = state.get(keys::TOKEN).unwrap();
    assert!(token.is_none());
    let other: i64 = state.get("other").unwrap().unwrap();
    assert_eq!(other, 1);
}

#[test]
fn typed_values_round_trip() {
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Cached {
        id: String,
        remaining_days: i64,
    }

    let (_dir, state) = temp_state();
    let cached = Cached {
        id: "a-91".to_owned(),
        remaining_days: 178,
    };
    state.set(keys::ATHLETE, &cached).unwrap();

    let read: Cached = state.get(keys::ATHLETE).unwrap().unwrap();
    assert_eq!(read, cached);
}

#[test]
fn last_sync_round_trips_through_chrono() {
    let (_dir, state) = temp_state();

    assert!(state.last_sync().unwrap().is_none());

    let when = Utc.with_ymd_and_hms(2025, 6, 14, 18, 30, 0).unwrap();
    state.record_sync(when).unwrap();
    assert_eq!(state.last_sync().unwrap(), Some(when));
}

#[test]
fn state_survives_reopening_from_the_same_path() {
    let (dir, state) = temp_state();
    state.set(keys::TOKEN, "persisted").unwrap();

    let reopened = LocalState::open(dir.path().join("state.json"));
    let read: String = reopened.get(keys::TOKEN).unwrap().unwrap();
    assert_eq!(read, "persisted");
}

#[test]
fn snapshot_lists_every_entry() {
    let (_dir, state) = temp_state();
    state.set(keys::TOKEN, "token").unwrap();
    state.set(keys::ATHLETE, &json!({"id": "a-91"})).unwrap();

    let snapshot = state.snapshot().unwrap();
    assert_eq!(snapshot.len(), 2);
    assert!(snapshot.contains_key(keys::TOKEN));
    assert!(snapshot.contains_key(keys::ATHLETE));
}
