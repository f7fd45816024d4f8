// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides quiet, once-per-process tracing initialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club
#![allow(dead_code)]

use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG raises the level when a test needs to be watched
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}
