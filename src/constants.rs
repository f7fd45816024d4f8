// ABOUTME: Constants for the sheets API contract and environment configuration
// ABOUTME: Sheet names, query parameter names, fetch limits, and env-backed defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

//! Constants module
//!
//! The remote contract (sheet names and Spanish query parameter names) lives
//! here rather than inline at call sites, so the whole surface the client
//! depends on is auditable in one place.

use std::env;

/// Sheet names understood by the spreadsheet endpoint.
pub mod sheets {
    /// Membership rows, one per athlete
    pub const ATHLETES: &str = "deportistas";
    /// Swim levels; also carries the gamification ladder columns
    pub const LEVELS: &str = "niveles";
    /// Per-athlete distance totals and records
    pub const TRAINING: &str = "informacion";
    /// Achievement badges
    pub const BADGES: &str = "insignias";
    /// Measurement sessions
    pub const MEASUREMENTS: &str = "mediciones";
    /// Per-level leaderboard rows
    pub const LEADERBOARD: &str = "clasificacion";
}

/// Query parameter names understood by the spreadsheet endpoint.
pub mod params {
    /// Selector naming the target sheet
    pub const SHEET: &str = "sheet";
    /// Athlete identification number filter
    pub const IDENTIFICATION: &str = "documento";
    /// Row id filter
    pub const ID: &str = "id";
    /// Athlete id filter on measurement rows
    pub const ATHLETE: &str = "deportista";
    /// Level id filter on leaderboard rows
    pub const LEVEL_ID: &str = "id_nivel";
    /// Sort specification, `<column>:<asc|desc>`
    pub const SORT: &str = "sort";
    /// Page size
    pub const PER_PAGE: &str = "per_page";
    /// Zero-based page index
    pub const PAGE: &str = "page";
}

/// Fetch limits and orderings used by the measurement history screen.
pub mod limits {
    /// The app only ever shows the current and previous session
    pub const MEASUREMENT_HISTORY_PER_PAGE: u32 = 2;
    /// Newest session first
    pub const MEASUREMENT_SORT_NEWEST_FIRST: &str = "fecha:desc";
    /// First (and only) page the history screen requests
    pub const MEASUREMENT_FIRST_PAGE: u32 = 0;
}

/// Environment-based configuration
pub mod env_config {
    use super::env;
    use std::path::PathBuf;

    /// Production sheets endpoint
    const DEFAULT_BASE_URL: &str = "https://dov5.short.gy/coralswimmer";

    /// Get the sheets base URL from environment or default
    #[must_use]
    pub fn sheets_base_url() -> String {
        env::var("CORAL_SHEETS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
    }

    /// Get the request timeout in seconds from environment or default
    #[must_use]
    pub fn request_timeout_secs() -> u64 {
        env::var("CORAL_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30)
    }

    /// Get the connection timeout in seconds from environment or default
    #[must_use]
    pub fn connect_timeout_secs() -> u64 {
        env::var("CORAL_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10)
    }

    /// Get the log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
    }

    /// Get the local state directory override from environment, if set
    #[must_use]
    pub fn state_dir() -> Option<PathBuf> {
        env::var_os("CORAL_STATE_DIR").map(PathBuf::from)
    }
}
