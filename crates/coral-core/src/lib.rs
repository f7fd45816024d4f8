// ABOUTME: Core domain types and shared helpers for the Coral Swimmer club client
// ABOUTME: Entity models, error taxonomy, and parse helpers for loosely-typed sheet values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

//! Foundation types for the Coral Swimmer club client.
//!
//! This crate holds everything the fetch layer maps *into*: the typed domain
//! records, the error taxonomy shared across the workspace, and the parse
//! helpers for values the remote sheet stores loosely (JSON-encoded strings,
//! numbers serialized as text). Nothing in here performs I/O.

/// Deserialization helpers for loosely-typed sheet values
pub mod de;
/// Parse-on-read helpers for JSON-encoded string fields
pub mod embedded;
/// Error taxonomy and result alias
pub mod errors;
/// Typed domain records mapped from remote sheet rows
pub mod models;

pub use errors::{ClientError, ClientResult};
