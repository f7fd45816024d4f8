// ABOUTME: File-backed local key/value state for reuse across sessions
// ABOUTME: One JSON file, values round-trip through serde_json, no expiry or versioning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

use crate::constants::env_config;
use crate::errors::{ClientError, ClientResult};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Well-known state keys, mirroring the mobile app's stores.
pub mod keys {
    /// Cached athlete profile from the last successful lookup
    pub const ATHLETE: &str = "ATHLETE";
    /// Bearer token to attach to sheet requests
    pub const TOKEN: &str = "TOKEN";
    /// Timestamp of the last successful sync
    pub const LAST_SYNC: &str = "LAST_SYNC";
    /// Most recent decoded measurement values
    pub const LAST_MEASUREMENT: &str = "LAST_MEASUREMENT";
}

/// File name of the state map inside the state directory
const STATE_FILE: &str = "state.json";

/// Persistent key/value store backed by one JSON file.
///
/// Values round-trip through JSON encoding; there is no expiry and no
/// schema versioning. Callers own the interpretation of what they stored.
#[derive(Debug, Clone)]
pub struct LocalState {
    path: PathBuf,
}

impl LocalState {
    /// Open a state store at an explicit file path.
    ///
    /// The file does not need to exist yet; it is created on first `set`.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the default per-user state store.
    ///
    /// `CORAL_STATE_DIR` overrides the location; otherwise the platform
    /// data directory is used.
    ///
    /// # Errors
    ///
    /// Returns `Storage` when no platform data directory can be resolved.
    pub fn open_default() -> ClientResult<Self> {
        let dir = match env_config::state_dir() {
            Some(dir) => dir,
            None => dirs::data_dir()
                .ok_or_else(|| {
                    ClientError::Storage(io::Error::new(
                        io::ErrorKind::NotFound,
                        "no platform data directory available",
                    ))
                })?
                .join("coral-club"),
        };
        Ok(Self::open(dir.join(STATE_FILE)))
    }

    /// Read a stored value, `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `Storage` on file i/o failure and `StoredValue` when the
    /// stored JSON cannot be decoded as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> ClientResult<Option<T>> {
        let mut map = self.read_map()?;
        match map.remove(key) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(ClientError::StoredValue),
        }
    }

    /// Store a value under a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoredValue` when the value cannot be encoded and
    /// `Storage` on file i/o failure.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> ClientResult<()> {
        let mut map = self.read_map()?;
        let encoded = serde_json::to_value(value).map_err(ClientError::StoredValue)?;
        map.insert(key.to_owned(), encoded);
        self.write_map(&map)
    }

    /// Remove a key, if present.
    pub fn remove(&self, key: &str) -> ClientResult<()> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }

    /// Snapshot of every stored entry, for diagnostics.
    pub fn snapshot(&self) -> ClientResult<Map<String, Value>> {
        self.read_map()
    }

    /// Timestamp of the last successful sync, if one was recorded.
    pub fn last_sync(&self) -> ClientResult<Option<DateTime<Utc>>> {
        self.get(keys::LAST_SYNC)
    }

    /// Record the time of a successful sync.
    pub fn record_sync(&self, when: DateTime<Utc>) -> ClientResult<()> {
        self.set(keys::LAST_SYNC, &when)
    }

    fn read_map(&self) -> ClientResult<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(error) => return Err(ClientError::Storage(error)),
        };
        serde_json::from_str(&contents).map_err(ClientError::StoredValue)
    }

    fn write_map(&self, map: &Map<String, Value>) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let encoded = serde_json::to_string_pretty(map).map_err(ClientError::StoredValue)?;
        fs::write(&self.path, encoded)?;
        Ok(())
    }
}
