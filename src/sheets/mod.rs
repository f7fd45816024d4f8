// ABOUTME: Sheets fetch layer: provider struct and per-entity operations
// ABOUTME: Raw row structs carry the Spanish remote contract; models come from coral-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

//! Fetch operations over the club's sheets.
//!
//! [`SheetsClient`] is the transport: one GET per call against the base URL
//! with a `sheet=` selector. [`ClubProvider`] layers the per-entity
//! operations on top; each entity module owns its raw row structs (the serde
//! renames there are the remote field contract) and the mapping into the
//! typed records from `coral-core`.

/// Athlete lookup and plan-to-tier mapping
mod athlete;
/// Badge list fetch
mod badges;
/// Low-level GET client and its configuration
pub mod client;
/// Gamification level ladder and leaderboard
mod gamification;
/// Swim level lookup and skill-list parsing
mod level;
/// Measurement history and latest-values fetch
mod measurements;
/// Training distance summary
mod summary;

use crate::errors::{ClientError, ClientResult};

pub use client::{SheetsClient, SheetsConfig};

/// High-level fetch operations over the club's sheets.
///
/// One instance wraps one [`SheetsClient`]; operations are independent and
/// hold no state between calls.
pub struct ClubProvider {
    client: SheetsClient,
}

impl ClubProvider {
    /// Create a provider against the globally configured endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: SheetsClient::new(),
        }
    }

    /// Create a provider with an explicit configuration.
    #[must_use]
    pub fn with_config(config: SheetsConfig) -> Self {
        Self {
            client: SheetsClient::with_config(config),
        }
    }

    /// Attach a bearer token to every request this provider makes.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.client = self.client.with_bearer_token(token);
        self
    }
}

impl Default for ClubProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Take the first row of a required single-entity fetch.
///
/// An empty collection is the not-found condition, never a null record.
fn single_row<T>(rows: Vec<T>, resource: &'static str) -> ClientResult<T> {
    rows.into_iter()
        .next()
        .ok_or(ClientError::NotFound { resource })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_row_takes_the_first_of_many() {
        assert_eq!(single_row(vec![1, 2, 3], "deportistas").unwrap(), 1);
    }

    #[test]
    fn single_row_signals_not_found_on_empty() {
        let err = single_row(Vec::<i32>::new(), "deportistas").unwrap_err();
        assert!(err.is_not_found());
    }
}
