// ABOUTME: Sensor packet decoding into typed workout variants
// ABOUTME: Maps workout codes to constructors with argument count and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Developers

//! # Packet Dispatch
//!
//! Decodes raw [`SensorPacket`] readings into [`Workout`] variants. The code
//! mapping is exhaustive over the known set (`SWM`, `RUN`, `WLK`); anything
//! else is rejected before any variant is constructed. Positional values map
//! onto the variant's fields in declared order:
//!
//! - `RUN`: `[action, duration, weight]`
//! - `WLK`: `[action, duration, weight, height]`
//! - `SWM`: `[action, duration, weight, pool_length, lap_count]`

use crate::errors::{TrackerError, TrackerResult};
use crate::models::SensorPacket;
use crate::workout::Workout;
use tracing::debug;

/// Workout code for swimming sessions
pub const CODE_SWIMMING: &str = "SWM";
/// Workout code for running sessions
pub const CODE_RUNNING: &str = "RUN";
/// Workout code for sports walking sessions
pub const CODE_WALKING: &str = "WLK";

const RUNNING_FIELDS: usize = 3;
const WALKING_FIELDS: usize = 4;
const SWIMMING_FIELDS: usize = 5;

/// Decode one sensor packet into its workout variant.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidWorkoutCode`] for a code outside the known
/// set, [`TrackerError::ArgumentCountMismatch`] when the packet's value count
/// does not match the variant's field count, and
/// [`TrackerError::InvalidInput`] for a non-positive duration or a count
/// field that is not a non-negative integer.
pub fn parse_packet(packet: &SensorPacket) -> TrackerResult<Workout> {
    let workout = match packet.code.as_str() {
        CODE_SWIMMING => {
            expect_values("Swimming", SWIMMING_FIELDS, &packet.values)?;
            Workout::Swimming {
                action: as_count(packet.values[0], "stroke count", "Swimming")?,
                duration_hours: positive_duration(packet.values[1], "Swimming")?,
                weight_kg: packet.values[2],
                pool_length_m: packet.values[3],
                lap_count: as_count(packet.values[4], "lap count", "Swimming")?,
            }
        }
        CODE_RUNNING => {
            expect_values("Running", RUNNING_FIELDS, &packet.values)?;
            Workout::Running {
                action: as_count(packet.values[0], "step count", "Running")?,
                duration_hours: positive_duration(packet.values[1], "Running")?,
                weight_kg: packet.values[2],
            }
        }
        CODE_WALKING => {
            expect_values("SportsWalking", WALKING_FIELDS, &packet.values)?;
            Workout::Walking {
                action: as_count(packet.values[0], "step count", "SportsWalking")?,
                duration_hours: positive_duration(packet.values[1], "SportsWalking")?,
                weight_kg: packet.values[2],
                height_cm: packet.values[3],
            }
        }
        other => return Err(TrackerError::invalid_code(other)),
    };

    debug!(
        code = %packet.code,
        workout = workout.name(),
        "decoded sensor packet"
    );
    Ok(workout)
}

/// Reject packets whose value count differs from the variant's field count
fn expect_values(workout: &'static str, expected: usize, values: &[f64]) -> TrackerResult<()> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(TrackerError::argument_count(
            workout,
            expected,
            values.len(),
        ))
    }
}

/// Validate and convert an action/lap reading into an integer count
fn as_count(value: f64, field: &str, workout: &'static str) -> TrackerResult<u32> {
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(TrackerError::invalid_input(format!(
            "{workout} {field} must be a non-negative integer, got {value}"
        )));
    }
    // Safe: range-checked above
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = value as u32;
    Ok(count)
}

/// Reject non-positive durations before they reach the speed divisions
fn positive_duration(value: f64, workout: &'static str) -> TrackerResult<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(TrackerError::invalid_input(format!(
            "{workout} duration must be positive hours, got {value}"
        )))
    }
}
