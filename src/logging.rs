// ABOUTME: Tracing subscriber initialization for the CLI and tests
// ABOUTME: EnvFilter honors RUST_LOG, falling back to the LOG_LEVEL default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

use crate::constants::env_config;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the `LOG_LEVEL` environment
/// variable (default `info`) sets the filter. Calling this more than once
/// is harmless: later calls leave the existing subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env_config::log_level()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
