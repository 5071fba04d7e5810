// ABOUTME: Input and output models for the tracker metrics engine
// ABOUTME: Defines raw SensorPacket readings and the derived WorkoutSummary report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Developers

use serde::{Deserialize, Serialize};
use std::fmt;

/// One raw reading from the tracker: a workout code plus positional values.
///
/// The code selects the workout variant; the values map positionally onto the
/// variant's fields (see [`crate::dispatch::parse_packet`]). Packets arrive
/// untrusted and are validated during decoding, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPacket {
    /// Short workout code (`SWM`, `RUN`, `WLK`)
    pub code: String,
    /// Positional numeric readings for the selected variant
    pub values: Vec<f64>,
}

impl SensorPacket {
    /// Create a packet from a code and its positional values
    #[must_use]
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            values,
        }
    }
}

/// Derived metrics for one completed workout.
///
/// Constructed once per report by [`crate::workout::Workout::summary`] and
/// never mutated. The [`fmt::Display`] implementation renders the fixed
/// tracker template with three-decimal formatting on every float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WorkoutSummary {
    /// Human-readable workout label (`Running`, `SportsWalking`, `Swimming`)
    pub training_type: String,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Calories burned in kcal
    pub calories: f64,
}

impl WorkoutSummary {
    /// Render the summary as the tracker's fixed report line
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration_hours, self.distance_km, self.mean_speed_kmh, self.calories
        )
    }
}
