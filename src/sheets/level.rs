// ABOUTME: Swim level lookup against the levels sheet
// ABOUTME: The skills cell is one newline-delimited string, split and trimmed here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

use super::{single_row, ClubProvider};
use crate::constants::{params, sheets};
use crate::errors::ClientResult;
use crate::models::Level;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct LevelEnvelope {
    niveles: Vec<RawLevel>,
}

/// One level row, projected down to the columns the progress screen shows.
#[derive(Debug, Deserialize)]
struct RawLevel {
    #[serde(deserialize_with = "coral_core::de::flexible_i64")]
    id: i64,
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "icono")]
    icon: String,
    color: String,
    #[serde(rename = "habilidades")]
    skills_source: String,
}

/// Split the newline-delimited skills cell, trimming each line and
/// dropping blanks.
fn parse_skills(source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

impl From<RawLevel> for Level {
    fn from(raw: RawLevel) -> Self {
        let skills = parse_skills(&raw.skills_source);
        Self {
            id: raw.id,
            name: raw.name,
            icon: raw.icon,
            color: raw.color,
            skills,
        }
    }
}

impl ClubProvider {
    /// Look a swim level up by id.
    ///
    /// An absent id resolves to `Ok(None)` without touching the network,
    /// since athletes who have not been graded yet carry no level id. A
    /// present id that matches no row is `NotFound`.
    pub async fn get_level(&self, id: Option<i64>) -> ClientResult<Option<Level>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let envelope: LevelEnvelope = self
            .client
            .get(sheets::LEVELS, &[(params::ID, id.to_string())])
            .await?;

        single_row(envelope.niveles, sheets::LEVELS)
            .map(Level::from)
            .map(Some)
    }
}
