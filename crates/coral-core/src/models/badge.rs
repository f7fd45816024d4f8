// ABOUTME: Achievement badge model
// ABOUTME: Badges map 1:1 from sheet rows with no classification logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

use serde::{Deserialize, Serialize};

/// An achievement badge an athlete can earn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    /// Row identifier in the badges sheet
    pub id: String,
    /// Display name
    pub name: String,
    /// Icon asset reference
    pub icon: String,
    /// Short description shown under the badge
    pub description: String,
}
