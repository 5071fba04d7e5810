// ABOUTME: Structured logging configuration for the tracker binary
// ABOUTME: Initializes the tracing subscriber with an environment-driven filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Developers

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber from `RUST_LOG`.
///
/// Falls back to `info` when `RUST_LOG` is unset or unparsable. Call once at
/// binary startup, before the first log statement.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init_from_env() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize tracing subscriber: {e}"))
}
