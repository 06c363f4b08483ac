// ABOUTME: Typed error enums for exercise selection and session configuration
// ABOUTME: Defines EngineError, nested ConfigError, and the EngineResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepTrack Contributors

//! Error types returned by the repetition counting engine.
//!
//! Selection and configuration failures are fatal to the call that produced
//! them and never construct a session. Degenerate angle samples are *not*
//! errors - the session treats them as missing samples and logs the skip.

use thiserror::Error;

/// Result alias used across the engine crates
pub type EngineResult<T> = Result<T, EngineError>;

/// Session configuration validation failures
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `threshold_fraction` must lie in `(0, 1]`
    #[error("threshold fraction {0} outside (0, 1]")]
    ThresholdOutOfRange(f64),

    /// `start_angle == end_angle` defines no range of motion
    #[error("start and end reference angles are both {0} degrees; range of motion is empty")]
    EmptyRangeOfMotion(f64),

    /// Reference angles must be finite degrees
    #[error("reference angle {0} is not finite")]
    NonFiniteReferenceAngle(f64),

    /// An exercise must track at least one joint set
    #[error("exercise defines no joint sets")]
    NoJointSets,
}

/// Errors surfaced by the engine's public API
#[derive(Debug, Error)]
pub enum EngineError {
    /// Exercise id not present in the registry; recoverable by retrying
    /// with one of the listed ids
    #[error("unknown exercise '{}' (valid ids: {})", .id, .valid_ids.join(", "))]
    UnknownExercise {
        /// The id that failed to resolve
        id: String,
        /// Every id the registry knows, in registration order
        valid_ids: Vec<String>,
    },

    /// Session options or exercise definition failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}
