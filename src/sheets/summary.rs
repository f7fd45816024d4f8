// ABOUTME: Training distance summary fetch against the information sheet
// ABOUTME: Weekly distances decode from an embedded JSON cell with an empty-list fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

use super::{single_row, ClubProvider};
use crate::constants::{params, sheets};
use crate::errors::ClientResult;
use crate::models::TrainingSummary;
use coral_core::embedded;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SummaryEnvelope {
    informacion: Vec<RawSummary>,
}

/// One information row as the sheet serves it.
#[derive(Debug, Deserialize)]
struct RawSummary {
    #[serde(deserialize_with = "coral_core::de::flexible_string")]
    id: String,
    #[serde(rename = "distancia_total", deserialize_with = "coral_core::de::flexible_f64")]
    total_distance: f64,
    #[serde(rename = "distancia_semanal_json", default)]
    weekly_distance_json: Option<String>,
    #[serde(rename = "record_mensual", deserialize_with = "coral_core::de::flexible_f64")]
    monthly_record: f64,
    #[serde(rename = "fecha_record_mensual")]
    monthly_record_date: String,
}

impl From<RawSummary> for TrainingSummary {
    fn from(raw: RawSummary) -> Self {
        let weekly_distance =
            embedded::parse_list("distancia_semanal_json", raw.weekly_distance_json.as_deref());
        Self {
            id: raw.id,
            total_distance: raw.total_distance,
            weekly_distance,
            monthly_record: raw.monthly_record,
            monthly_record_date: raw.monthly_record_date,
        }
    }
}

impl ClubProvider {
    /// Fetch the distance summary for one athlete.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the athlete has no information row;
    /// transport and decode failures propagate unchanged.
    pub async fn get_training_summary(&self, athlete_id: &str) -> ClientResult<TrainingSummary> {
        let envelope: SummaryEnvelope = self
            .client
            .get(sheets::TRAINING, &[(params::ID, athlete_id.to_owned())])
            .await?;

        single_row(envelope.informacion, sheets::TRAINING).map(TrainingSummary::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(weekly: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "id": "a-91",
            "distancia_total": "154200",
            "distancia_semanal_json": weekly,
            "record_mensual": 18600,
            "fecha_record_mensual": "03/2025"
        })
    }

    fn map_single(value: serde_json::Value) -> TrainingSummary {
        let envelope: SummaryEnvelope =
            serde_json::from_value(serde_json::json!({ "informacion": [value] })).unwrap();
        TrainingSummary::from(single_row(envelope.informacion, "informacion").unwrap())
    }

    #[test]
    fn weekly_distances_decode_from_embedded_json() {
        let summary = map_single(row(serde_json::json!("[1,2,3]")));
        assert_eq!(summary.weekly_distance, vec![1.0, 2.0, 3.0]);
        assert!((summary.total_distance - 154_200.0).abs() < f64::EPSILON);
        assert!((summary.monthly_record - 18_600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_weekly_cell_falls_back_to_empty() {
        let summary = map_single(row(serde_json::json!("[1,2,")));
        assert!(summary.weekly_distance.is_empty());
    }

    #[test]
    fn absent_weekly_cell_falls_back_to_empty() {
        let summary = map_single(serde_json::json!({
            "id": "a-91",
            "distancia_total": 0,
            "record_mensual": 0,
            "fecha_record_mensual": ""
        }));
        assert!(summary.weekly_distance.is_empty());
    }
}
