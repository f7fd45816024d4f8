// ABOUTME: Gamification ladder and leaderboard fetches against the levels and ranking sheets
// ABOUTME: Levels filter client-side by plan; objectives decode from an embedded JSON cell
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

use super::ClubProvider;
use crate::constants::{params, sheets};
use crate::errors::ClientResult;
use crate::models::{GamificationLevel, Plan};
use coral_core::embedded;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct LadderEnvelope {
    #[serde(default)]
    niveles: Vec<RawLadderLevel>,
}

/// One level row, projected onto the gamification ladder columns.
#[derive(Debug, Deserialize)]
struct RawLadderLevel {
    #[serde(deserialize_with = "coral_core::de::flexible_i64")]
    id: i64,
    #[serde(rename = "nombre")]
    name: String,
    plan: String,
    #[serde(
        rename = "nivel_anterior",
        default,
        deserialize_with = "coral_core::de::flexible_opt_i64"
    )]
    previous_level: Option<i64>,
    #[serde(
        rename = "nivel_siguiente",
        default,
        deserialize_with = "coral_core::de::flexible_opt_i64"
    )]
    next_level: Option<i64>,
    #[serde(rename = "puntaje_base", deserialize_with = "coral_core::de::flexible_i64")]
    base_score: i64,
    #[serde(rename = "icono")]
    icon: String,
    color: String,
    #[serde(rename = "descripcion")]
    description: String,
    #[serde(rename = "objetivos", default)]
    objectives_json: Option<String>,
}

impl RawLadderLevel {
    fn into_level(self, plan: Plan) -> GamificationLevel {
        let objectives = embedded::parse_list("objetivos", self.objectives_json.as_deref());
        GamificationLevel {
            id: self.id,
            name: self.name,
            plan,
            previous_level: self.previous_level,
            next_level: self.next_level,
            base_score: self.base_score,
            icon: self.icon,
            color: self.color,
            description: self.description,
            objectives,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LeaderboardEnvelope {
    #[serde(rename = "clasificacion", default)]
    rows: Vec<serde_json::Value>,
}

impl ClubProvider {
    /// Fetch the level ladder for one plan, objectives decoded per level.
    ///
    /// Rows belonging to other plans are dropped before mapping; a missing
    /// collection maps to an empty ladder.
    pub async fn get_levels(&self, plan: Plan) -> ClientResult<Vec<GamificationLevel>> {
        let envelope: LadderEnvelope = self.client.get(sheets::LEVELS, &[]).await?;

        Ok(envelope
            .niveles
            .into_iter()
            .filter(|raw| raw.plan == plan.as_str())
            .map(|raw| raw.into_level(plan))
            .collect())
    }

    /// Fetch the leaderboard rows for one level.
    ///
    /// The ranking sheet already serves rows in display shape, so they are
    /// passed through untyped; a missing collection maps to an empty list.
    pub async fn get_leaderboard(&self, level_id: i64) -> ClientResult<Vec<serde_json::Value>> {
        let envelope: LeaderboardEnvelope = self
            .client
            .get(
                sheets::LEADERBOARD,
                &[(params::LEVEL_ID, level_id.to_string())],
            )
            .await?;

        Ok(envelope.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder_fixture() -> LadderEnvelope {
        serde_json::from_value(serde_json::json!({
            "niveles": [
                {
                    "id": 1,
                    "nombre": "Tortuga",
                    "plan": "kids",
                    "nivel_anterior": null,
                    "nivel_siguiente": 2,
                    "puntaje_base": 0,
                    "icono": "turtle.svg",
                    "color": "#43a047",
                    "descripcion": "Primer nivel",
                    "objetivos": r#"[{"id":"obj-1","nombre":"Burbujas","icono":"bubbles.svg","descripcion":"Exhalar bajo el agua","grados":{"bronce":{"criterio":"5s","puntos":5,"es_requisito":true},"plata":{"criterio":"10s","puntos":10,"es_requisito":false},"oro":{"criterio":"15s","puntos":15,"es_requisito":false}}}]"#
                },
                {
                    "id": "7",
                    "nombre": "Orca",
                    "plan": "adults",
                    "nivel_anterior": "6",
                    "nivel_siguiente": "",
                    "puntaje_base": "120",
                    "icono": "orca.svg",
                    "color": "#263238",
                    "descripcion": "Último nivel",
                    "objetivos": "[not json"
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn ladder_filters_by_plan_before_mapping() {
        let kids: Vec<GamificationLevel> = ladder_fixture()
            .niveles
            .into_iter()
            .filter(|raw| raw.plan == Plan::Kids.as_str())
            .map(|raw| raw.into_level(Plan::Kids))
            .collect();

        assert_eq!(kids.len(), 1);
        assert_eq!(kids[0].name, "Tortuga");
        assert_eq!(kids[0].previous_level, None);
        assert_eq!(kids[0].next_level, Some(2));
        assert_eq!(kids[0].objectives.len(), 1);
        assert!(kids[0].objectives[0].grades.bronze.required);
    }

    #[test]
    fn malformed_objectives_cell_degrades_to_empty_list() {
        let adults: Vec<GamificationLevel> = ladder_fixture()
            .niveles
            .into_iter()
            .filter(|raw| raw.plan == Plan::Adults.as_str())
            .map(|raw| raw.into_level(Plan::Adults))
            .collect();

        assert_eq!(adults.len(), 1);
        assert_eq!(adults[0].id, 7);
        assert_eq!(adults[0].previous_level, Some(6));
        assert_eq!(adults[0].next_level, None);
        assert_eq!(adults[0].base_score, 120);
        assert!(adults[0].objectives.is_empty());
    }

    #[test]
    fn missing_collections_decode_to_empty() {
        let ladder: LadderEnvelope = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(ladder.niveles.is_empty());

        let board: LeaderboardEnvelope = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(board.rows.is_empty());
    }
}
