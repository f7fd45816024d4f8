// ABOUTME: Badge list fetch against the badges sheet
// ABOUTME: Rows map 1:1; an empty sheet is an empty list, not an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

use super::ClubProvider;
use crate::constants::sheets;
use crate::errors::ClientResult;
use crate::models::Badge;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct BadgeEnvelope {
    insignias: Vec<RawBadge>,
}

/// One badge row as the sheet serves it.
#[derive(Debug, Deserialize)]
struct RawBadge {
    #[serde(deserialize_with = "coral_core::de::flexible_string")]
    id: String,
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "icono")]
    icon: String,
    #[serde(rename = "descripcion")]
    description: String,
}

impl From<RawBadge> for Badge {
    fn from(raw: RawBadge) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            icon: raw.icon,
            description: raw.description,
        }
    }
}

impl ClubProvider {
    /// Fetch every achievement badge the club has defined.
    ///
    /// Zero rows is a legitimate answer and maps to an empty list.
    pub async fn get_badges(&self) -> ClientResult<Vec<Badge>> {
        let envelope: BadgeEnvelope = self.client.get(sheets::BADGES, &[]).await?;
        Ok(envelope.insignias.into_iter().map(Badge::from).collect())
    }
}
