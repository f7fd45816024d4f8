// ABOUTME: Typed domain records for the Coral Swimmer club
// ABOUTME: Athlete, Level, TrainingSummary, Badge, Measurement, and gamification types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

//! Domain records produced by the fetch layer.
//!
//! Each type here is the normalized shape callers work with; the Spanish
//! remote field names stay behind in the raw row structs of the fetch layer.

/// Athlete profile and membership tier
pub mod athlete;
/// Achievement badges
pub mod badge;
/// Gamification levels, objectives, and grades
pub mod gamification;
/// Swim levels and their skill lists
pub mod level;
/// Body measurements and their embedded value payload
pub mod measurement;
/// Distance totals and records
pub mod summary;

pub use athlete::{Athlete, Tier};
pub use badge::Badge;
pub use gamification::{GamificationLevel, Grade, Grades, Objective, Plan};
pub use level::Level;
pub use measurement::{
    Biometrics, FinTool, Measurement, MeasurementValues, Medal, Specialty, SwimMode,
};
pub use summary::TrainingSummary;
