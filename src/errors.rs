// ABOUTME: Unified error types for sensor packet decoding and metric computation
// ABOUTME: Provides TrackerError with structured variants and constructor helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Developers

//! # Tracker Error Types
//!
//! All failures in this crate come from decoding sensor packets; computation
//! on an already-constructed [`crate::workout::Workout`] is infallible. Errors
//! are fatal: callers report them and re-signal, they are never swallowed.

use thiserror::Error;

/// Result type used throughout the crate
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Errors raised while decoding a sensor packet.
///
/// Each variant carries enough context to produce an actionable message
/// without consulting the offending packet again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// The workout code is not in the known set
    #[error("unknown workout code '{code}' (expected one of SWM, RUN, WLK)")]
    InvalidWorkoutCode {
        /// The unrecognized code as received
        code: String,
    },

    /// The packet's value count does not match the variant's field count
    #[error("{workout} packet expects {expected} values, received {received}")]
    ArgumentCountMismatch {
        /// Name of the workout variant being constructed
        workout: &'static str,
        /// Number of values the variant declares
        expected: usize,
        /// Number of values the packet carried
        received: usize,
    },

    /// A sensor value is outside its physically meaningful range
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of the rejected value
        message: String,
    },
}

impl TrackerError {
    /// Create an "unknown workout code" error
    #[must_use]
    pub fn invalid_code(code: impl Into<String>) -> Self {
        Self::InvalidWorkoutCode { code: code.into() }
    }

    /// Create an "argument count mismatch" error
    #[must_use]
    pub const fn argument_count(workout: &'static str, expected: usize, received: usize) -> Self {
        Self::ArgumentCountMismatch {
            workout,
            expected,
            received,
        }
    }

    /// Create an "invalid input" error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
