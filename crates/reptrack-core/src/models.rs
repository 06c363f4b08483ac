// ABOUTME: Domain models for repetition counting - points, joint sets, frames, events, results
// ABOUTME: Plain serde-derived data types shared across the RepTrack workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepTrack Contributors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A 2D coordinate in arbitrary consistent units (pixel or normalized).
///
/// No invariant is enforced beyond what downstream geometry requires;
/// non-finite coordinates are treated as "no detection" when an angle is
/// computed from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point2D {
    /// Create a point from raw coordinates
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ordered triple of body-landmark indices defining one trackable angle.
///
/// The angle is measured at `vertex` between the rays toward `proximal` and
/// `distal` (e.g., shoulder-elbow-wrist for an elbow angle). Immutable once
/// a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointSet {
    /// Landmark on the proximal side of the joint (closer to the torso)
    pub proximal: usize,
    /// Landmark at the joint itself - the angle vertex
    pub vertex: usize,
    /// Landmark on the distal side of the joint
    pub distal: usize,
}

impl JointSet {
    /// Create a joint set from three landmark indices
    #[must_use]
    pub const fn new(proximal: usize, vertex: usize, distal: usize) -> Self {
        Self {
            proximal,
            vertex,
            distal,
        }
    }
}

/// One frame of pose-estimation output: landmark index mapped to coordinate.
///
/// An empty frame models "no detection" - the pose model found nobody in the
/// frame. Individual landmarks may also be absent, in which case joint sets
/// that need them simply receive no sample for this frame.
#[derive(Debug, Clone, Default)]
pub struct PoseFrame {
    landmarks: HashMap<usize, Point2D>,
}

impl PoseFrame {
    /// Create an empty frame (no detection)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one landmark coordinate
    pub fn insert(&mut self, landmark: usize, point: Point2D) {
        self.landmarks.insert(landmark, point);
    }

    /// Builder-style landmark insertion
    #[must_use]
    pub fn with_landmark(mut self, landmark: usize, point: Point2D) -> Self {
        self.insert(landmark, point);
        self
    }

    /// Coordinate of one landmark, if detected this frame
    #[must_use]
    pub fn get(&self, landmark: usize) -> Option<Point2D> {
        self.landmarks.get(&landmark).copied()
    }

    /// All three coordinates of a joint set, or `None` if any is missing
    #[must_use]
    pub fn joint_points(&self, set: JointSet) -> Option<(Point2D, Point2D, Point2D)> {
        Some((
            self.get(set.proximal)?,
            self.get(set.vertex)?,
            self.get(set.distal)?,
        ))
    }

    /// Number of detected landmarks in this frame
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Whether the frame carries no detection at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

impl FromIterator<(usize, Point2D)> for PoseFrame {
    fn from_iter<I: IntoIterator<Item = (usize, Point2D)>>(iter: I) -> Self {
        Self {
            landmarks: iter.into_iter().collect(),
        }
    }
}

/// Which counting lineage a session follows.
///
/// The two policies come from historically divergent rep counters and are
/// modeled explicitly rather than merged:
///
/// - `EagerAttempt` credits an attempt the instant the range-of-motion
///   threshold is crossed and a completion unconditionally on return to the
///   open reference.
/// - `DepthValidated` counts no attempts; a completion is credited on return
///   only when the peak excursion sustained the required depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountingPolicy {
    /// Threshold crossing is sufficient intent signal; completions are
    /// credited unconditionally on return
    #[default]
    EagerAttempt,
    /// Stricter ROM enforcement: only excursions that sustained the required
    /// depth are credited
    DepthValidated,
}

/// Kind of detected repetition event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepEventKind {
    /// A joint set crossed into the flexed threshold zone
    Attempt,
    /// A joint set returned to the open reference after a qualifying
    /// excursion
    Completion,
}

/// One detected transition, in chronological (frame arrival) order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepEvent {
    /// Frame at which the transition fired (0-based submission order)
    pub frame_index: u64,
    /// Index into the exercise's joint-set list
    pub joint_set_index: usize,
    /// Attempt or completion
    pub kind: RepEventKind,
    /// Angle sample that triggered the transition, in degrees
    pub angle: f64,
}

/// Attempt/completion counts for one joint set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointSetTally {
    /// Threshold crossings credited as attempts
    pub attempts: u32,
    /// Qualifying returns to the open reference
    pub completions: u32,
}

/// Immutable aggregate view of one finished analysis session.
///
/// Produced by `Session::finish`; per-joint-set tallies are keyed by index
/// in the exercise's `joint_sets` order, and `events` is the full
/// chronological log, untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    /// Unique id stamped on the session at creation
    pub session_id: Uuid,
    /// Registry id of the analyzed exercise
    pub exercise_id: String,
    /// Display name of the exercise
    pub exercise_name: String,
    /// Human-readable exercise description
    pub description: String,
    /// Per-joint-set counts, in `joint_sets` order
    pub per_joint_set: Vec<JointSetTally>,
    /// Attempts summed across joint sets
    pub total_attempts: u32,
    /// Completions summed across joint sets
    pub total_completions: u32,
    /// Frames submitted to the session, including no-detection frames
    pub frames_processed: u64,
    /// Open/extended reference angle in degrees
    pub start_angle: f64,
    /// Flexed/closed reference angle in degrees
    pub end_angle: f64,
    /// Fraction of full ROM required to credit a rep
    pub threshold_fraction: f64,
    /// Counting policy the session ran under
    pub policy: CountingPolicy,
    /// Chronological event log
    pub events: Vec<RepEvent>,
}

impl SessionResult {
    /// Tally for one joint set, if the index is in range
    #[must_use]
    pub fn joint_set(&self, index: usize) -> Option<JointSetTally> {
        self.per_joint_set.get(index).copied()
    }
}
