// ABOUTME: Workout variants with per-discipline distance, speed, and calorie formulas
// ABOUTME: Implements running, sports walking, and swimming metric computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Developers

use crate::models::WorkoutSummary;
use serde::{Deserialize, Serialize};

/// Meters per kilometer
const M_IN_KM: f64 = 1000.0;
/// Minutes per hour
const MIN_IN_HOUR: f64 = 60.0;

/// Step length for running and walking (meters per step)
const STEP_LENGTH_M: f64 = 0.65;
/// Stroke length for swimming (meters per stroke)
const STROKE_LENGTH_M: f64 = 1.38;

/// Running calorie coefficients: `(18 * speed - 20) * weight / 1000 * minutes`
const RUN_SPEED_FACTOR: f64 = 18.0;
const RUN_SPEED_OFFSET: f64 = 20.0;

/// Walking calorie coefficients:
/// `(0.035 * weight + floor(speed^2 / height) * 0.029 * weight) * minutes`
const WALK_WEIGHT_FACTOR: f64 = 0.035;
const WALK_SPEED_HEIGHT_FACTOR: f64 = 0.029;

/// Swimming calorie coefficients: `(speed + 1.1) * 2 * weight`
const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_FACTOR: f64 = 2.0;

/// One recorded workout with the raw sensor fields for its discipline.
///
/// Every variant carries the base triple (action count, duration, weight);
/// walking and swimming add their own sensor fields. Metric computation is
/// dispatched over the variant:
///
/// - `Running`: generic distance/speed, speed-weighted calorie model
/// - `Walking`: generic distance/speed, weight-and-height calorie model
/// - `Swimming`: pool-based speed override, flat per-weight calorie model
///
/// Records are immutable after construction; all derivations are pure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Workout {
    /// Running session
    Running {
        /// Step count from the accelerometer
        action: u32,
        /// Session duration in hours
        duration_hours: f64,
        /// Athlete weight in kg
        weight_kg: f64,
    },
    /// Sports walking session
    Walking {
        /// Step count from the accelerometer
        action: u32,
        /// Session duration in hours
        duration_hours: f64,
        /// Athlete weight in kg
        weight_kg: f64,
        /// Athlete height in cm
        height_cm: f64,
    },
    /// Swimming session
    Swimming {
        /// Stroke count from the accelerometer
        action: u32,
        /// Session duration in hours
        duration_hours: f64,
        /// Athlete weight in kg
        weight_kg: f64,
        /// Pool length in meters
        pool_length_m: f64,
        /// Number of completed pool laps
        lap_count: u32,
    },
}

impl Workout {
    /// Human-readable label for this workout kind
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Running { .. } => "Running",
            Self::Walking { .. } => "SportsWalking",
            Self::Swimming { .. } => "Swimming",
        }
    }

    /// Calorie formula for this workout kind, as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Running { .. } => "calories = (18 x speed - 20) x weight / 1000 x minutes",
            Self::Walking { .. } => {
                "calories = (0.035 x weight + floor(speed^2 / height) x 0.029 x weight) x minutes"
            }
            Self::Swimming { .. } => "calories = (speed + 1.1) x 2 x weight",
        }
    }

    /// Distance covered per action unit, in meters
    #[must_use]
    pub const fn step_length_m(&self) -> f64 {
        match self {
            Self::Running { .. } | Self::Walking { .. } => STEP_LENGTH_M,
            Self::Swimming { .. } => STROKE_LENGTH_M,
        }
    }

    /// Session duration in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        match self {
            Self::Running { duration_hours, .. }
            | Self::Walking { duration_hours, .. }
            | Self::Swimming { duration_hours, .. } => *duration_hours,
        }
    }

    /// Distance covered in kilometers: `action x step_length / 1000`
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        let action = match self {
            Self::Running { action, .. }
            | Self::Walking { action, .. }
            | Self::Swimming { action, .. } => *action,
        };
        f64::from(action) * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h.
    ///
    /// Running and walking derive it from the generic distance. Swimming
    /// overrides it with the pool-based formula
    /// `pool_length x lap_count / 1000 / duration`, which ignores the stroke
    /// count entirely; pool laps are the trusted odometer in the water.
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Running { .. } | Self::Walking { .. } => {
                self.distance_km() / self.duration_hours()
            }
            Self::Swimming {
                duration_hours,
                pool_length_m,
                lap_count,
                ..
            } => pool_length_m * f64::from(*lap_count) / M_IN_KM / duration_hours,
        }
    }

    /// Calories burned in kcal, per the variant's calorie model.
    ///
    /// The floor on walking's `speed^2 / height` term is intentional and
    /// kept bit-for-bit with the reference tracker firmware; removing it
    /// changes the walking outputs.
    #[must_use]
    pub fn calories(&self) -> f64 {
        match self {
            Self::Running {
                duration_hours,
                weight_kg,
                ..
            } => {
                (RUN_SPEED_FACTOR * self.mean_speed_kmh() - RUN_SPEED_OFFSET) * weight_kg / M_IN_KM
                    * (duration_hours * MIN_IN_HOUR)
            }
            Self::Walking {
                duration_hours,
                weight_kg,
                height_cm,
                ..
            } => {
                let speed = self.mean_speed_kmh();
                let height_term = (speed * speed / height_cm).floor();
                (WALK_WEIGHT_FACTOR * weight_kg
                    + height_term * WALK_SPEED_HEIGHT_FACTOR * weight_kg)
                    * (duration_hours * MIN_IN_HOUR)
            }
            Self::Swimming { weight_kg, .. } => {
                (self.mean_speed_kmh() + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_FACTOR * weight_kg
            }
        }
    }

    /// Build the per-session report with all derived metrics
    #[must_use]
    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            training_type: self.name().to_owned(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories: self.calories(),
        }
    }
}
