// ABOUTME: Gamification level chain, objectives, and medal grade thresholds
// ABOUTME: Objectives decode from the JSON-encoded `objetivos` cell with Spanish keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Program a gamification level belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    /// Children's level ladder
    Kids,
    /// Adult level ladder
    Adults,
}

impl Plan {
    /// The plan name as stored in the levels sheet.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kids => "kids",
            Self::Adults => "adults",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kids" => Ok(Self::Kids),
            "adults" => Ok(Self::Adults),
            other => Err(format!("unknown plan `{other}`, expected kids or adults")),
        }
    }
}

/// Point thresholds for one medal grade of an objective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    /// What the coach grades (e.g. a drill or distance)
    #[serde(rename = "criterio")]
    pub criterion: String,
    /// Points awarded at this grade
    #[serde(rename = "puntos")]
    pub points: i64,
    /// Whether this grade is required to advance past the level
    #[serde(rename = "es_requisito")]
    pub required: bool,
}

/// The three medal grades of an objective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grades {
    /// `bronce` grade
    #[serde(rename = "bronce")]
    pub bronze: Grade,
    /// `plata` grade
    #[serde(rename = "plata")]
    pub silver: Grade,
    /// `oro` grade
    #[serde(rename = "oro")]
    pub gold: Grade,
}

/// A gamification milestone within a level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objective {
    /// Objective identifier, referenced by measurement progress maps
    pub id: String,
    /// Display name
    #[serde(rename = "nombre")]
    pub name: String,
    /// Icon asset reference
    #[serde(rename = "icono")]
    pub icon: String,
    /// Short description
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Bronze/silver/gold thresholds
    #[serde(rename = "grados")]
    pub grades: Grades,
}

/// One rung of a plan's level ladder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamificationLevel {
    /// Row identifier in the levels sheet
    pub id: i64,
    /// Display name
    pub name: String,
    /// Plan whose ladder this level belongs to
    pub plan: Plan,
    /// Id of the previous rung, `None` at the bottom of the ladder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_level: Option<i64>,
    /// Id of the next rung, `None` at the top of the ladder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_level: Option<i64>,
    /// Points granted for reaching this level
    pub base_score: i64,
    /// Icon asset reference
    pub icon: String,
    /// Accent color for the level card
    pub color: String,
    /// Short description
    pub description: String,
    /// Objectives to complete at this level; empty when the embedded cell
    /// is absent or malformed
    pub objectives: Vec<Objective>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objective_decodes_from_spanish_payload() {
        let objective: Objective = serde_json::from_value(serde_json::json!({
            "id": "obj-7",
            "nombre": "Patada de delfín",
            "icono": "dolphin.svg",
            "descripcion": "25m de patada submarina",
            "grados": {
                "bronce": {"criterio": "15m", "puntos": 5, "es_requisito": false},
                "plata": {"criterio": "20m", "puntos": 10, "es_requisito": false},
                "oro": {"criterio": "25m", "puntos": 20, "es_requisito": true}
            }
        }))
        .unwrap();

        assert_eq!(objective.name, "Patada de delfín");
        assert_eq!(objective.grades.gold.points, 20);
        assert!(objective.grades.gold.required);
        assert!(!objective.grades.bronze.required);
    }

    #[test]
    fn plan_parses_and_prints_its_sheet_spelling() {
        assert_eq!("kids".parse::<Plan>().unwrap(), Plan::Kids);
        assert_eq!(" Adults ".parse::<Plan>().unwrap(), Plan::Adults);
        assert!("senior".parse::<Plan>().is_err());
        assert_eq!(Plan::Kids.to_string(), "kids");
    }
}
