// ABOUTME: Main library entry point for the Coral Swimmer club client
// ABOUTME: Typed fetch operations over the spreadsheet-backed membership API plus local state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

#![deny(unsafe_code)]

//! # Coral Club Client
//!
//! A typed client for the Coral Swimmer swim club's membership service. The
//! remote service is a spreadsheet-backed HTTP API: one base URL, a
//! `sheet=<name>` selector per collection, rows with Spanish field names.
//! This crate turns those rows into the typed records the club apps work
//! with, and persists a handful of named values locally between sessions.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use coral_club::ClubProvider;
//!
//! # async fn example() -> coral_club::ClientResult<()> {
//! let provider = ClubProvider::new();
//! let athlete = provider.get_athlete("12345678").await?;
//! println!("{} {} swims in tier {:?}", athlete.forename, athlete.surname, athlete.tier);
//! # Ok(())
//! # }
//! ```

/// Sheet names, query parameters, limits, and environment configuration
pub mod constants;
/// Error taxonomy re-exported from coral-core
pub mod errors;
/// Tracing subscriber initialization for binaries
pub mod logging;
/// Domain records re-exported from coral-core
pub mod models;
/// Sheets client and per-entity fetch operations
pub mod sheets;
/// File-backed local key/value state
pub mod storage;

pub use errors::{ClientError, ClientResult};
pub use sheets::{ClubProvider, SheetsClient, SheetsConfig};
pub use storage::LocalState;
