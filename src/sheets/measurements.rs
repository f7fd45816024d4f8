// ABOUTME: Measurement history and latest-values fetch against the measurements sheet
// ABOUTME: The `valores` cell is embedded JSON; a malformed cell degrades to no values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

use super::ClubProvider;
use crate::constants::{limits, params, sheets};
use crate::errors::ClientResult;
use crate::models::{Measurement, MeasurementValues};
use coral_core::embedded;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct MeasurementEnvelope {
    mediciones: Vec<RawMeasurement>,
}

/// One measurement session row as the sheet serves it.
#[derive(Debug, Deserialize)]
struct RawMeasurement {
    #[serde(deserialize_with = "coral_core::de::flexible_i64")]
    id: i64,
    #[serde(rename = "fecha")]
    date: String,
    #[serde(rename = "deportista_id", deserialize_with = "coral_core::de::flexible_string")]
    athlete_id: String,
    #[serde(rename = "valores", default)]
    values_json: Option<String>,
}

impl From<RawMeasurement> for Measurement {
    fn from(raw: RawMeasurement) -> Self {
        let values = embedded::parse_value("valores", raw.values_json.as_deref());
        Self {
            id: raw.id,
            date: raw.date,
            athlete_id: raw.athlete_id,
            values,
        }
    }
}

impl ClubProvider {
    /// Fetch the most recent measurement sessions for one athlete, newest
    /// first.
    ///
    /// The history screen only compares the current session against the
    /// previous one, so the request asks for two rows sorted by date.
    pub async fn get_measurements(&self, athlete_id: &str) -> ClientResult<Vec<Measurement>> {
        let query = [
            (params::ATHLETE, athlete_id.to_owned()),
            (
                params::SORT,
                limits::MEASUREMENT_SORT_NEWEST_FIRST.to_owned(),
            ),
            (
                params::PER_PAGE,
                limits::MEASUREMENT_HISTORY_PER_PAGE.to_string(),
            ),
            (params::PAGE, limits::MEASUREMENT_FIRST_PAGE.to_string()),
        ];

        let envelope: MeasurementEnvelope =
            self.client.get(sheets::MEASUREMENTS, &query).await?;

        Ok(envelope
            .mediciones
            .into_iter()
            .map(Measurement::from)
            .collect())
    }

    /// Decoded `valores` payload of the athlete's newest measurement.
    ///
    /// The unsorted fetch returns rows oldest first, so the last row is the
    /// newest. No rows, an absent cell, and a malformed cell all resolve
    /// to `Ok(None)`; absence of a graded measurement is ordinary.
    pub async fn get_latest_measurement_values(
        &self,
        athlete_id: &str,
    ) -> ClientResult<Option<MeasurementValues>> {
        let envelope: MeasurementEnvelope = self
            .client
            .get(
                sheets::MEASUREMENTS,
                &[(params::ATHLETE, athlete_id.to_owned())],
            )
            .await?;

        Ok(envelope
            .mediciones
            .last()
            .and_then(|raw| embedded::parse_value("valores", raw.values_json.as_deref())))
    }
}
