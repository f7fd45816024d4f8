// ABOUTME: Athlete profile model and plan-to-tier classification
// ABOUTME: Tier is a coarse grouping derived from the subscription plan name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

use serde::{Deserialize, Serialize};

/// Coarse athlete classification derived from the subscription plan.
///
/// The lookup is case-insensitive over the plan names the club actually
/// sells; anything unrecognized (including `basico` and an absent plan)
/// lands on [`Tier::Standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Children's program (`niños`)
    Kids,
    /// Competitive performance program (`rendimiento`)
    Performance,
    /// Health and rehabilitation program (`salud`)
    Health,
    /// Everything else, including the base plan
    Standard,
}

impl Tier {
    /// Classify a subscription plan name into a tier.
    #[must_use]
    pub fn from_plan(plan: Option<&str>) -> Self {
        let Some(plan) = plan else {
            return Self::Standard;
        };
        match plan.trim().to_lowercase().as_str() {
            "niños" => Self::Kids,
            "rendimiento" => Self::Performance,
            "salud" => Self::Health,
            _ => Self::Standard,
        }
    }
}

/// A club member's profile as served by the membership sheet.
///
/// Date fields are passed through as the sheet serves them; the sheet does
/// not document a format, and callers only display these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Athlete {
    /// Row identifier in the membership sheet
    pub id: String,
    /// First name
    pub forename: String,
    /// Family name
    pub surname: String,
    /// National identification number used to look the athlete up
    pub identification: String,
    /// Contact phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Membership start date as served by the sheet
    pub start_date: String,
    /// Membership expiration date as served by the sheet
    pub expiration_date: String,
    /// Days left before the membership expires
    pub remaining_days: i64,
    /// Profile photo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Push token the app registered for this athlete, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Raw subscription plan name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Tier derived from `plan`
    pub tier: Tier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_plans_map_to_their_tier() {
        assert_eq!(Tier::from_plan(Some("niños")), Tier::Kids);
        assert_eq!(Tier::from_plan(Some("rendimiento")), Tier::Performance);
        assert_eq!(Tier::from_plan(Some("salud")), Tier::Health);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Tier::from_plan(Some("NIÑOS")), Tier::Kids);
        assert_eq!(Tier::from_plan(Some("Rendimiento")), Tier::Performance);
        assert_eq!(Tier::from_plan(Some("SaLuD")), Tier::Health);
    }

    #[test]
    fn unknown_or_absent_plans_default_to_standard() {
        assert_eq!(Tier::from_plan(Some("basico")), Tier::Standard);
        assert_eq!(Tier::from_plan(Some("adults")), Tier::Standard);
        assert_eq!(Tier::from_plan(Some("")), Tier::Standard);
        assert_eq!(Tier::from_plan(None), Tier::Standard);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(Tier::from_plan(Some("  salud  ")), Tier::Health);
    }
}
