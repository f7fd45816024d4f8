// ABOUTME: Athlete lookup against the membership sheet
// ABOUTME: Raw row struct carries the Spanish field contract; tier derives from plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

use super::{single_row, ClubProvider};
use crate::constants::{params, sheets};
use crate::errors::ClientResult;
use crate::models::{Athlete, Tier};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct AthleteEnvelope {
    deportistas: Vec<RawAthlete>,
}

/// One membership row as the sheet serves it.
#[derive(Debug, Deserialize)]
struct RawAthlete {
    #[serde(deserialize_with = "coral_core::de::flexible_string")]
    id: String,
    #[serde(rename = "nombre")]
    forename: String,
    #[serde(rename = "apellido")]
    surname: String,
    #[serde(rename = "documento", deserialize_with = "coral_core::de::flexible_string")]
    identification: String,
    #[serde(rename = "telefono", default)]
    phone: Option<String>,
    #[serde(rename = "fecha_inicio")]
    start_date: String,
    #[serde(rename = "fecha_vencimiento")]
    expiration_date: String,
    #[serde(rename = "dias_restantes", deserialize_with = "coral_core::de::flexible_i64")]
    remaining_days: i64,
    #[serde(rename = "foto", default)]
    photo: Option<String>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    plan: Option<String>,
}

impl From<RawAthlete> for Athlete {
    fn from(raw: RawAthlete) -> Self {
        let tier = Tier::from_plan(raw.plan.as_deref());
        Self {
            id: raw.id,
            forename: raw.forename,
            surname: raw.surname,
            identification: raw.identification,
            phone: raw.phone,
            start_date: raw.start_date,
            expiration_date: raw.expiration_date,
            remaining_days: raw.remaining_days,
            photo: raw.photo,
            token: raw.token,
            plan: raw.plan,
            tier,
        }
    }
}

impl ClubProvider {
    /// Look a member up by identification number.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no membership row matches the identification
    /// number; transport and decode failures propagate unchanged.
    pub async fn get_athlete(&self, identification: &str) -> ClientResult<Athlete> {
        let envelope: AthleteEnvelope = self
            .client
            .get(
                sheets::ATHLETES,
                &[(params::IDENTIFICATION, identification.to_owned())],
            )
            .await?;

        single_row(envelope.deportistas, sheets::ATHLETES).map(Athlete::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tier;

    fn full_row() -> serde_json::Value {
        serde_json::json!({
            "id": "a-91",
            "nombre": "Lucía",
            "apellido": "Marín",
            "documento": "12345678",
            "telefono": "+57 300 000 0000",
            "fecha_inicio": "01/02/2025",
            "fecha_vencimiento": "01/02/2026",
            "dias_restantes": "178",
            "foto": "https://cdn.example/lucia.jpg",
            "token": "push-token-1",
            "plan": "Rendimiento"
        })
    }

    #[test]
    fn row_maps_field_by_field_with_derived_tier() {
        let envelope: AthleteEnvelope =
            serde_json::from_value(serde_json::json!({ "deportistas": [full_row()] })).unwrap();
        let athlete = Athlete::from(single_row(envelope.deportistas, "deportistas").unwrap());

        assert_eq!(athlete.id, "a-91");
        assert_eq!(athlete.forename, "Lucía");
        assert_eq!(athlete.surname, "Marín");
        assert_eq!(athlete.identification, "12345678");
        assert_eq!(athlete.remaining_days, 178);
        assert_eq!(athlete.plan.as_deref(), Some("Rendimiento"));
        assert_eq!(athlete.tier, Tier::Performance);
    }

    #[test]
    fn missing_optional_columns_map_to_none_and_standard_tier() {
        let envelope: AthleteEnvelope = serde_json::from_value(serde_json::json!({
            "deportistas": [{
                "id": 91,
                "nombre": "Marco",
                "apellido": "Díaz",
                "documento": 87654321,
                "fecha_inicio": "01/02/2025",
                "fecha_vencimiento": "01/02/2026",
                "dias_restantes": 10
            }]
        }))
        .unwrap();
        let athlete = Athlete::from(single_row(envelope.deportistas, "deportistas").unwrap());

        assert_eq!(athlete.id, "91");
        assert_eq!(athlete.identification, "87654321");
        assert!(athlete.phone.is_none());
        assert!(athlete.photo.is_none());
        assert!(athlete.token.is_none());
        assert!(athlete.plan.is_none());
        assert_eq!(athlete.tier, Tier::Standard);
    }

    #[test]
    fn empty_collection_is_the_not_found_condition() {
        let envelope: AthleteEnvelope =
            serde_json::from_value(serde_json::json!({ "deportistas": [] })).unwrap();
        let err = single_row(envelope.deportistas, "deportistas").unwrap_err();
        assert!(err.is_not_found());
    }
}
