// ABOUTME: Core data models re-exported from coral-core
// ABOUTME: Re-exports Athlete, Level, Measurement and the other domain records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

pub use coral_core::models::*;
