// ABOUTME: Per-joint-set hysteresis state machine turning angle samples into rep events
// ABOUTME: Supports eager-attempt and depth-validated counting policies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepTrack Contributors

//! The repetition state machine.
//!
//! One [`JointTracker`] per joint set consumes angle samples in arrival
//! order and reports at most one transition per sample. The two reference
//! angles define the range of motion; the sign of `start_angle - end_angle`
//! defines the closing direction, so exercises that flex toward smaller
//! angles (curls, squats) and ones that open toward larger angles are both
//! handled by the same comparisons.

use reptrack_core::models::{CountingPolicy, RepEventKind};

/// Default fraction of full ROM required to credit a rep
pub const DEFAULT_THRESHOLD_FRACTION: f64 = 0.8;

/// Which side of the hysteresis boundary a joint set is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// At or near the open/extended reference
    Open,
    /// Past the threshold, inside the flexed zone
    Flexed,
}

/// Hysteresis state machine for one joint set.
///
/// Created when a session starts, fed one angle sample per frame, and
/// discarded with the session. All parameters are fixed at construction.
#[derive(Debug, Clone)]
pub struct JointTracker {
    start_angle: f64,
    end_angle: f64,
    threshold_angle: f64,
    required_depth: f64,
    policy: CountingPolicy,
    phase: Phase,
    attempts: u32,
    completions: u32,
    peak_excursion: Option<f64>,
}

impl JointTracker {
    /// Build a tracker for one joint set.
    ///
    /// `threshold_fraction` is assumed validated to `(0, 1]` and
    /// `start_angle != end_angle` by the session layer.
    #[must_use]
    pub fn new(
        start_angle: f64,
        end_angle: f64,
        threshold_fraction: f64,
        policy: CountingPolicy,
    ) -> Self {
        let threshold_angle = start_angle - threshold_fraction * (start_angle - end_angle);
        let required_depth = threshold_fraction * (start_angle - end_angle).abs();
        Self {
            start_angle,
            end_angle,
            threshold_angle,
            required_depth,
            policy,
            phase: Phase::Open,
            attempts: 0,
            completions: 0,
            peak_excursion: None,
        }
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Attempts credited so far
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Completions credited so far
    #[must_use]
    pub fn completions(&self) -> u32 {
        self.completions
    }

    /// Most extreme angle reached in the current flexed excursion
    #[must_use]
    pub fn peak_excursion(&self) -> Option<f64> {
        self.peak_excursion
    }

    /// Angle at which `Open -> Flexed` fires
    #[must_use]
    pub fn threshold_angle(&self) -> f64 {
        self.threshold_angle
    }

    /// Feed one angle sample in arrival order.
    ///
    /// Returns the event kind when a credited transition fired; no sample
    /// ever causes more than one transition.
    pub fn observe(&mut self, angle: f64) -> Option<RepEventKind> {
        match self.phase {
            Phase::Open if self.crossed_threshold(angle) => {
                self.phase = Phase::Flexed;
                self.peak_excursion = Some(angle);
                match self.policy {
                    CountingPolicy::EagerAttempt => {
                        self.attempts += 1;
                        Some(RepEventKind::Attempt)
                    }
                    // Depth-validated lineage counts no separate attempts
                    CountingPolicy::DepthValidated => None,
                }
            }
            Phase::Open => None,
            Phase::Flexed if self.reopened(angle) => {
                let peak = self.peak_excursion.take();
                self.phase = Phase::Open;
                let credited = match self.policy {
                    CountingPolicy::EagerAttempt => true,
                    CountingPolicy::DepthValidated => {
                        peak.is_some_and(|p| self.traveled_range(p) >= self.required_depth)
                    }
                };
                if credited {
                    self.completions += 1;
                    Some(RepEventKind::Completion)
                } else {
                    None
                }
            }
            Phase::Flexed => {
                if let Some(peak) = self.peak_excursion {
                    if self.more_extreme(angle, peak) {
                        self.peak_excursion = Some(angle);
                    }
                }
                None
            }
        }
    }

    /// Whether the exercise closes toward smaller angles
    fn closes_downward(&self) -> bool {
        self.start_angle > self.end_angle
    }

    fn crossed_threshold(&self, angle: f64) -> bool {
        if self.closes_downward() {
            angle <= self.threshold_angle
        } else {
            angle >= self.threshold_angle
        }
    }

    fn reopened(&self, angle: f64) -> bool {
        if self.closes_downward() {
            angle >= self.start_angle
        } else {
            angle <= self.start_angle
        }
    }

    fn more_extreme(&self, angle: f64, peak: f64) -> bool {
        if self.closes_downward() {
            angle < peak
        } else {
            angle > peak
        }
    }

    fn traveled_range(&self, peak: f64) -> f64 {
        (self.start_angle - peak).abs()
    }
}
