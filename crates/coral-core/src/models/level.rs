// ABOUTME: Swim level model with its skill checklist
// ABOUTME: Skills arrive as one newline-delimited sheet cell, split by the fetch layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

use serde::{Deserialize, Serialize};

/// A swim level as shown on the athlete's progress screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Row identifier in the levels sheet
    pub id: i64,
    /// Display name
    pub name: String,
    /// Icon asset reference
    pub icon: String,
    /// Accent color for the level card
    pub color: String,
    /// Skills required at this level, one entry per non-blank line of the
    /// source cell
    pub skills: Vec<String>,
}
