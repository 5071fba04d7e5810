// ABOUTME: Integration tests for workout metric formulas through the public API
// ABOUTME: Covers distance, mean speed, calorie models, and the report formatter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Developers

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::Workout;

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

// === Swimming ===

fn reference_swim() -> Workout {
    Workout::Swimming {
        action: 720,
        duration_hours: 1.0,
        weight_kg: 80.0,
        pool_length_m: 25.0,
        lap_count: 40,
    }
}

#[test]
fn swimming_distance_uses_stroke_length() {
    // 720 strokes x 1.38 m / 1000
    assert_close(reference_swim().distance_km(), 0.9936);
}

#[test]
fn swimming_speed_is_pool_based() {
    // 25 m x 40 laps / 1000 / 1 h
    assert_close(reference_swim().mean_speed_kmh(), 1.0);
}

#[test]
fn swimming_speed_ignores_stroke_count() {
    let lazy_stroker = Workout::Swimming {
        action: 1,
        duration_hours: 1.0,
        weight_kg: 80.0,
        pool_length_m: 25.0,
        lap_count: 40,
    };
    assert_close(
        lazy_stroker.mean_speed_kmh(),
        reference_swim().mean_speed_kmh(),
    );
    // Distance still follows the stroke count
    assert!(lazy_stroker.distance_km() < reference_swim().distance_km());
}

#[test]
fn swimming_calories_reference_vector() {
    // (1.0 + 1.1) x 2 x 80
    assert_close(reference_swim().calories(), 336.0);
}

// === Running ===

fn reference_run() -> Workout {
    Workout::Running {
        action: 15000,
        duration_hours: 1.0,
        weight_kg: 75.0,
    }
}

#[test]
fn running_distance_and_speed() {
    // 15000 steps x 0.65 m / 1000
    assert_close(reference_run().distance_km(), 9.75);
    assert_close(reference_run().mean_speed_kmh(), 9.75);
}

#[test]
fn running_calories_reference_vector() {
    // (18 x 9.75 - 20) x 75 / 1000 x 60
    assert_close(reference_run().calories(), 699.75);
}

#[test]
fn running_speed_scales_with_duration() {
    let slow_run = Workout::Running {
        action: 15000,
        duration_hours: 2.0,
        weight_kg: 75.0,
    };
    assert_close(slow_run.mean_speed_kmh(), 4.875);
}

// === Sports walking ===

fn reference_walk() -> Workout {
    Workout::Walking {
        action: 9000,
        duration_hours: 1.0,
        weight_kg: 75.0,
        height_cm: 180.0,
    }
}

#[test]
fn walking_distance_and_speed() {
    assert_close(reference_walk().distance_km(), 5.85);
    assert_close(reference_walk().mean_speed_kmh(), 5.85);
}

#[test]
fn walking_calories_floor_term_zero() {
    // speed^2 / height = 34.2225 / 180 floors to 0, leaving only the
    // weight term: 0.035 x 75 x 60
    assert_close(reference_walk().calories(), 157.5);
}

#[test]
fn walking_calories_floor_term_nonzero() {
    // speed = 23.4 km/h, speed^2 / height = 547.56 / 150 = 3.6504 -> 3
    let fast_walk = Workout::Walking {
        action: 9000,
        duration_hours: 0.25,
        weight_kg: 75.0,
        height_cm: 150.0,
    };
    // (0.035 x 75 + 3 x 0.029 x 75) x 0.25 x 60
    assert_close(fast_walk.calories(), 137.25);
}

// === Labels and formulas ===

#[test]
fn workout_names() {
    assert_eq!(reference_run().name(), "Running");
    assert_eq!(reference_walk().name(), "SportsWalking");
    assert_eq!(reference_swim().name(), "Swimming");
}

#[test]
fn step_length_per_variant() {
    assert_close(reference_run().step_length_m(), 0.65);
    assert_close(reference_walk().step_length_m(), 0.65);
    assert_close(reference_swim().step_length_m(), 1.38);
}

#[test]
fn formulas_name_their_coefficients() {
    assert!(reference_run().formula().contains("18"));
    assert!(reference_walk().formula().contains("floor"));
    assert!(reference_swim().formula().contains("1.1"));
}

// === Formatter ===

#[test]
fn summary_renders_fixed_template() {
    let message = reference_swim().summary().message();
    assert_eq!(
        message,
        "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
         Avg. speed: 1.000 km/h; Calories burned: 336.000."
    );
}

#[test]
fn summary_template_for_running() {
    let message = reference_run().summary().to_string();
    assert_eq!(
        message,
        "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
         Avg. speed: 9.750 km/h; Calories burned: 699.750."
    );
}

#[test]
fn summary_serializes_to_json() {
    let summary = fittrack::WorkoutSummary {
        training_type: "SportsWalking".to_owned(),
        duration_hours: 1.0,
        distance_km: 5.85,
        mean_speed_kmh: 5.85,
        calories: 157.5,
    };
    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"training_type\":\"SportsWalking\""));
    assert!(json.contains("\"calories\":157.5"));

    let back: fittrack::WorkoutSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
}
