// ABOUTME: Training summary model with distance totals and the monthly record
// ABOUTME: Weekly distances come from an embedded JSON cell, defaulting to empty on bad data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

use serde::{Deserialize, Serialize};

/// Accumulated training distances for one athlete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Row identifier, matching the athlete's id
    pub id: String,
    /// Lifetime distance in meters
    pub total_distance: f64,
    /// Distance per week, most recent weeks as stored by the sheet;
    /// empty when the embedded cell is absent or malformed
    pub weekly_distance: Vec<f64>,
    /// Best distance recorded in a single month
    pub monthly_record: f64,
    /// Date the monthly record was set, as served by the sheet
    pub monthly_record_date: String,
}
