// ABOUTME: Validated per-session options - threshold fraction and policy override
// ABOUTME: Replaces the dynamic parameter dictionaries of earlier rep counters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepTrack Contributors

use crate::tracker::DEFAULT_THRESHOLD_FRACTION;
use reptrack_core::errors::ConfigError;
use reptrack_core::models::CountingPolicy;
use serde::{Deserialize, Serialize};

/// Caller-tunable session configuration.
///
/// Everything an analysis request may vary without defining a custom
/// exercise: the ROM threshold fraction and an optional counting-policy
/// override. Defaults come from [`Default`]; validation happens once at
/// session construction, never mid-stream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Fraction of full ROM required to credit a rep, in `(0, 1]`
    pub threshold_fraction: f64,
    /// Override of the exercise's default counting policy
    pub policy: Option<CountingPolicy>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            threshold_fraction: DEFAULT_THRESHOLD_FRACTION,
            policy: None,
        }
    }
}

impl SessionOptions {
    /// Options with an explicit threshold fraction
    #[must_use]
    pub const fn with_threshold_fraction(mut self, threshold_fraction: f64) -> Self {
        self.threshold_fraction = threshold_fraction;
        self
    }

    /// Options with an explicit counting policy
    #[must_use]
    pub const fn with_policy(mut self, policy: CountingPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Check the option invariants.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ThresholdOutOfRange`] when `threshold_fraction` is not
    /// in `(0, 1]` (NaN included).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threshold_fraction > 0.0 && self.threshold_fraction <= 1.0 {
            Ok(())
        } else {
            Err(ConfigError::ThresholdOutOfRange(self.threshold_fraction))
        }
    }
}
