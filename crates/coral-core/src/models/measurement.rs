// ABOUTME: Body measurement models, including the embedded measurement-values payload
// ABOUTME: MeasurementValues doubles as the schema of the JSON-encoded `valores` cell
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Medal grade an athlete can reach on a gamification objective.
///
/// The remote payload spells these in Spanish; the serde renames keep that
/// contract in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Medal {
    /// `bronce`
    #[serde(rename = "bronce")]
    Bronze,
    /// `plata`
    #[serde(rename = "plata")]
    Silver,
    /// `oro`
    #[serde(rename = "oro")]
    Gold,
}

/// Fin equipment the athlete specializes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinTool {
    /// `Bialetas`, two separate fins
    #[serde(rename = "Bialetas")]
    Bifins,
    /// `Monoaleta`, a single monofin
    #[serde(rename = "Monoaleta")]
    Monofin,
}

/// Training emphasis the athlete specializes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwimMode {
    /// `Velocidad`, sprint distances
    #[serde(rename = "Velocidad")]
    Speed,
    /// `Fondo`, endurance distances
    #[serde(rename = "Fondo")]
    Endurance,
}

/// The athlete's declared specialty, when one has been recorded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Specialty {
    /// Fin equipment
    pub tool: FinTool,
    /// Training emphasis
    pub mode: SwimMode,
}

/// Waist/hip/visceral readings taken alongside a measurement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Biometrics {
    /// Waist circumference in centimeters
    pub waist: f64,
    /// Hip circumference in centimeters
    pub hip: f64,
    /// Visceral fat index
    pub visceral: f64,
}

/// Decoded contents of a measurement row's `valores` cell.
///
/// This is the one nested payload the coaches fill in by hand, so every
/// field beyond weight and height is optional. Per-objective progress maps
/// objective id to the medal reached, `None` meaning attempted but ungraded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementValues {
    /// Body weight in kilograms
    #[serde(deserialize_with = "crate::de::flexible_f64")]
    pub weight: f64,
    /// Height in centimeters
    #[serde(deserialize_with = "crate::de::flexible_f64")]
    pub height: f64,
    /// Body fat percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_percentage: Option<f64>,
    /// Muscle mass percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_percentage: Option<f64>,
    /// Circumference readings, when taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biometrics: Option<Biometrics>,
    /// Declared specialty, when recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<Specialty>,
    /// Gamification level the athlete sat at when measured
    #[serde(rename = "nivel_actual_id", deserialize_with = "crate::de::flexible_i64")]
    pub current_level_id: i64,
    /// Progress per objective id
    #[serde(rename = "progreso_objetivos", default)]
    pub objective_progress: HashMap<String, Option<Medal>>,
}

/// One measurement session row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    /// Row identifier in the measurements sheet
    pub id: i64,
    /// Session date as served by the sheet
    pub date: String,
    /// Id of the measured athlete
    pub athlete_id: String,
    /// Decoded `valores` payload; `None` when the cell was absent or
    /// malformed
    pub values: Option<MeasurementValues>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_decode_with_spanish_payload_keys() {
        let values: MeasurementValues = serde_json::from_value(serde_json::json!({
            "weight": 61.2,
            "height": 168.0,
            "fat_percentage": 18.4,
            "specialty": {"tool": "Monoaleta", "mode": "Fondo"},
            "nivel_actual_id": "4",
            "progreso_objetivos": {"obj-1": "oro", "obj-2": null}
        }))
        .unwrap();

        assert!((values.weight - 61.2).abs() < f64::EPSILON);
        assert_eq!(values.current_level_id, 4);
        let specialty = values.specialty.unwrap();
        assert_eq!(specialty.tool, FinTool::Monofin);
        assert_eq!(specialty.mode, SwimMode::Endurance);
        assert_eq!(values.objective_progress["obj-1"], Some(Medal::Gold));
        assert_eq!(values.objective_progress["obj-2"], None);
        assert!(values.biometrics.is_none());
        assert!(values.muscle_percentage.is_none());
    }

    #[test]
    fn minimal_payload_needs_only_weight_height_and_level() {
        let values: MeasurementValues = serde_json::from_value(serde_json::json!({
            "weight": 80,
            "height": 181,
            "nivel_actual_id": 1
        }))
        .unwrap();
        assert!(values.objective_progress.is_empty());
    }

    #[test]
    fn medal_round_trips_through_spanish_spelling() {
        let json = serde_json::to_string(&Medal::Silver).unwrap();
        assert_eq!(json, "\"plata\"");
        let medal: Medal = serde_json::from_str(&json).unwrap();
        assert_eq!(medal, Medal::Silver);
    }
}
