// ABOUTME: Coral CLI - command-line access to the club's sheet-backed API
// ABOUTME: One subcommand per fetch operation, printing pretty JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club
//!
//! Usage:
//! ```bash
//! # Look a member up by identification number (also caches the profile)
//! coral-cli athlete 12345678
//!
//! # Distance summary and badges
//! coral-cli summary a-91
//! coral-cli badges
//!
//! # Gamification ladder and leaderboard
//! coral-cli levels kids
//! coral-cli leaderboard 3
//!
//! # Recent measurement sessions
//! coral-cli measurements a-91
//!
//! # Show what is cached locally
//! coral-cli state
//! ```

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use coral_club::models::Plan;
use coral_club::storage::keys;
use coral_club::{logging, ClubProvider, LocalState, SheetsConfig};
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "coral-cli",
    about = "Coral Swimmer club data CLI",
    long_about = "Command-line access to the Coral Swimmer club's spreadsheet-backed API: \
                  athlete lookup, training summaries, badges, measurements, and the \
                  gamification ladder."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Base URL override for the sheets endpoint
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Bearer token to attach to requests (defaults to the stored one)
    #[arg(long, global = true)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Look a member up by identification number and cache the profile
    Athlete {
        /// National identification number
        identification: String,
    },
    /// Show a swim level by id
    Level {
        /// Level row id
        id: i64,
    },
    /// Training distance summary for an athlete
    Summary {
        /// Athlete row id
        athlete_id: String,
    },
    /// List all achievement badges
    Badges,
    /// Recent measurement sessions for an athlete, newest first
    Measurements {
        /// Athlete row id
        athlete_id: String,
    },
    /// Decoded values of the athlete's newest measurement
    LatestMeasurement {
        /// Athlete row id
        athlete_id: String,
    },
    /// Gamification ladder for a plan
    Levels {
        /// Plan whose ladder to fetch (kids or adults)
        plan: Plan,
    },
    /// Leaderboard rows for a level
    Leaderboard {
        /// Level row id
        level_id: i64,
    },
    /// Show locally cached state
    State,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let mut config = SheetsConfig::global().clone();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let state = LocalState::open_default()?;
    let token = match cli.token {
        Some(token) => Some(token),
        None => state.get::<String>(keys::TOKEN)?,
    };

    let mut provider = ClubProvider::with_config(config);
    if let Some(token) = token {
        provider = provider.with_bearer_token(token);
    }

    match cli.command {
        Command::Athlete { identification } => {
            let athlete = provider.get_athlete(&identification).await?;
            state.set(keys::ATHLETE, &athlete)?;
            if let Some(token) = &athlete.token {
                state.set(keys::TOKEN, token)?;
            }
            state.record_sync(Utc::now())?;
            print_json(&athlete)?;
        }
        Command::Level { id } => {
            let level = provider.get_level(Some(id)).await?;
            print_json(&level)?;
        }
        Command::Summary { athlete_id } => {
            let summary = provider.get_training_summary(&athlete_id).await?;
            print_json(&summary)?;
        }
        Command::Badges => {
            let badges = provider.get_badges().await?;
            print_json(&badges)?;
        }
        Command::Measurements { athlete_id } => {
            let measurements = provider.get_measurements(&athlete_id).await?;
            print_json(&measurements)?;
        }
        Command::LatestMeasurement { athlete_id } => {
            let values = provider.get_latest_measurement_values(&athlete_id).await?;
            if let Some(values) = &values {
                state.set(keys::LAST_MEASUREMENT, values)?;
            }
            print_json(&values)?;
        }
        Command::Levels { plan } => {
            let ladder = provider.get_levels(plan).await?;
            print_json(&ladder)?;
        }
        Command::Leaderboard { level_id } => {
            let rows = provider.get_leaderboard(level_id).await?;
            print_json(&rows)?;
        }
        Command::State => {
            let snapshot = state.snapshot()?;
            print_json(&snapshot)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
