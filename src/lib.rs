// ABOUTME: Fitness tracker metrics engine for raw workout sensor packets
// ABOUTME: Computes distance, mean speed, and calories for running, walking, and swimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Developers

#![deny(unsafe_code)]

//! # Fittrack
//!
//! Metrics engine for a wearable fitness tracker. Raw sensor packets - a
//! workout code plus a list of numeric readings - are decoded into typed
//! workout records, which derive distance, mean speed, and calories burned
//! using per-discipline formulas, and render a fixed-template summary line.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `TrackerError` and `TrackerResult`
//! - **models**: Sensor packet input and workout summary output types
//! - **workout**: The `Workout` variants and their metric formulas
//! - **dispatch**: Workout-code to variant decoding with input validation
//! - **logging**: Tracing subscriber setup from the environment

/// Unified error types for packet decoding and metric computation
pub mod errors;

/// Sensor packet input and workout summary output models
pub mod models;

/// Workout variants with distance, speed, and calorie formulas
pub mod workout;

/// Sensor packet decoding into workout variants
pub mod dispatch;

/// Structured logging configuration
pub mod logging;

pub use dispatch::parse_packet;
pub use errors::{TrackerError, TrackerResult};
pub use models::{SensorPacket, WorkoutSummary};
pub use workout::Workout;
