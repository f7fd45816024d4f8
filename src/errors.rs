// ABOUTME: Error types for client operations re-exported from coral-core
// ABOUTME: ClientError covers not-found, transport, decode, and storage failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

pub use coral_core::errors::*;
