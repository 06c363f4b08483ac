// ABOUTME: Session orchestration - routes per-frame angles into joint trackers
// ABOUTME: One Session per analysis request; finish() assembles the immutable result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepTrack Contributors

//! Session orchestration.
//!
//! [`RepetitionEngine`] owns only the immutable exercise registry; every
//! analysis request gets its own [`Session`], constructed explicitly and
//! dropped when the caller is done. There is no shared mutable state across
//! requests.

use crate::geometry;
use crate::options::SessionOptions;
use crate::registry::{ExerciseDefinition, ExerciseRegistry};
use crate::tracker::JointTracker;
use reptrack_core::errors::EngineResult;
use reptrack_core::models::{
    CountingPolicy, JointSetTally, PoseFrame, RepEvent, SessionResult,
};
use tracing::{debug, info};
use uuid::Uuid;

/// Entry point for starting analysis sessions.
#[derive(Debug, Clone, Default)]
pub struct RepetitionEngine {
    registry: ExerciseRegistry,
}

impl RepetitionEngine {
    /// Engine over the baked-in exercise catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine over a caller-supplied registry
    #[must_use]
    pub const fn with_registry(registry: ExerciseRegistry) -> Self {
        Self { registry }
    }

    /// The exercise catalog this engine resolves ids against
    #[must_use]
    pub const fn registry(&self) -> &ExerciseRegistry {
        &self.registry
    }

    /// Start a session for a registered exercise.
    ///
    /// Selection is atomic: either a fully initialized session is returned,
    /// with one tracker per joint set all in the open phase, or a typed
    /// error and nothing was created.
    ///
    /// # Errors
    ///
    /// [`reptrack_core::errors::EngineError::UnknownExercise`] for an
    /// unregistered id, or `InvalidConfiguration` when the options fail
    /// validation.
    pub fn begin_session(
        &self,
        exercise_id: &str,
        options: &SessionOptions,
    ) -> EngineResult<Session> {
        let definition = self.registry.lookup(exercise_id)?.clone();
        Session::start(definition, options)
    }

    /// Start a session for an ad-hoc exercise that is not in the registry.
    ///
    /// The definition must satisfy the same invariants as registered ones,
    /// `start_angle != end_angle` included.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when the definition or options fail
    /// validation.
    pub fn begin_custom_session(
        &self,
        definition: ExerciseDefinition,
        options: &SessionOptions,
    ) -> EngineResult<Session> {
        Session::start(definition, options)
    }
}

/// One in-flight analysis: exclusive owner of its trackers and event log.
///
/// Frames are numbered from 0 in submission order, which guarantees the
/// sample ordering the state machine depends on. The session is
/// single-threaded; a host that parallelizes pose estimation must
/// re-serialize frames before submitting them.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    definition: ExerciseDefinition,
    threshold_fraction: f64,
    policy: CountingPolicy,
    trackers: Vec<JointTracker>,
    events: Vec<RepEvent>,
    frames_processed: u64,
}

impl Session {
    fn start(definition: ExerciseDefinition, options: &SessionOptions) -> EngineResult<Self> {
        options.validate()?;
        definition.validate()?;

        let policy = options.policy.unwrap_or(definition.default_policy);
        let trackers = definition
            .joint_sets
            .iter()
            .map(|_| {
                JointTracker::new(
                    definition.start_angle,
                    definition.end_angle,
                    options.threshold_fraction,
                    policy,
                )
            })
            .collect();

        let session = Self {
            id: Uuid::new_v4(),
            definition,
            threshold_fraction: options.threshold_fraction,
            policy,
            trackers,
            events: Vec::new(),
            frames_processed: 0,
        };
        info!(
            session_id = %session.id,
            exercise = %session.definition.id,
            joint_sets = session.trackers.len(),
            threshold_fraction = session.threshold_fraction,
            policy = ?session.policy,
            "session started"
        );
        Ok(session)
    }

    /// Unique id stamped at creation
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The exercise this session analyzes
    #[must_use]
    pub const fn definition(&self) -> &ExerciseDefinition {
        &self.definition
    }

    /// Frames submitted so far, no-detection frames included
    #[must_use]
    pub const fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// Chronological event log so far
    #[must_use]
    pub fn events(&self) -> &[RepEvent] {
        &self.events
    }

    /// Submit the next frame of pose output.
    ///
    /// Each joint set whose three landmarks are present gets one angle
    /// sample; joint sets with missing landmarks, and frames whose geometry
    /// is degenerate, receive no sample and keep their state. The frame
    /// counter always advances.
    pub fn submit_frame(&mut self, frame: &PoseFrame) {
        let frame_index = self.frames_processed;
        self.frames_processed += 1;

        for set_index in 0..self.definition.joint_sets.len() {
            let joint_set = self.definition.joint_sets[set_index];
            let Some((proximal, vertex, distal)) = frame.joint_points(joint_set) else {
                continue; // no detection for this joint set this frame
            };
            let Some(angle) = geometry::included_angle(proximal, vertex, distal) else {
                debug!(frame_index, set_index, "degenerate angle sample skipped");
                continue;
            };
            if let Some(kind) = self.trackers[set_index].observe(angle) {
                debug!(frame_index, set_index, ?kind, angle, "transition");
                self.events.push(RepEvent {
                    frame_index,
                    joint_set_index: set_index,
                    kind,
                    angle,
                });
            }
        }
    }

    /// Assemble the immutable aggregate view.
    ///
    /// Pure aggregation over the current state: calling it twice yields
    /// identical results, and nothing is mutated.
    #[must_use]
    pub fn finish(&self) -> SessionResult {
        let per_joint_set: Vec<JointSetTally> = self
            .trackers
            .iter()
            .map(|tracker| JointSetTally {
                attempts: tracker.attempts(),
                completions: tracker.completions(),
            })
            .collect();
        let total_attempts = per_joint_set.iter().map(|tally| tally.attempts).sum();
        let total_completions = per_joint_set.iter().map(|tally| tally.completions).sum();

        info!(
            session_id = %self.id,
            total_completions,
            frames = self.frames_processed,
            "session finished"
        );

        SessionResult {
            session_id: self.id,
            exercise_id: self.definition.id.clone(),
            exercise_name: self.definition.name.clone(),
            description: self.definition.description.clone(),
            per_joint_set,
            total_attempts,
            total_completions,
            frames_processed: self.frames_processed,
            start_angle: self.definition.start_angle,
            end_angle: self.definition.end_angle,
            threshold_fraction: self.threshold_fraction,
            policy: self.policy,
            events: self.events.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reptrack_core::errors::{ConfigError, EngineError};
    use reptrack_core::landmarks;
    use reptrack_core::models::Point2D;

    /// Place the distal landmark so the elbow reads the requested angle
    fn arm_at(frame: &mut PoseFrame, shoulder: usize, elbow: usize, wrist: usize, degrees: f64) {
        let vertex = Point2D::new(0.5, 0.5);
        frame.insert(shoulder, Point2D::new(1.5, 0.5));
        frame.insert(elbow, vertex);
        frame.insert(
            wrist,
            Point2D::new(
                vertex.x + degrees.to_radians().cos(),
                vertex.y + degrees.to_radians().sin(),
            ),
        );
    }

    fn curl_frame(left_degrees: f64, right_degrees: f64) -> PoseFrame {
        let mut frame = PoseFrame::new();
        arm_at(
            &mut frame,
            landmarks::LEFT_SHOULDER,
            landmarks::LEFT_ELBOW,
            landmarks::LEFT_WRIST,
            left_degrees,
        );
        arm_at(
            &mut frame,
            landmarks::RIGHT_SHOULDER,
            landmarks::RIGHT_ELBOW,
            landmarks::RIGHT_WRIST,
            right_degrees,
        );
        frame
    }

    #[test]
    fn bad_threshold_never_creates_a_session() {
        let engine = RepetitionEngine::new();
        let options = SessionOptions::default().with_threshold_fraction(0.0);
        let err = engine.begin_session("bicep-curl", &options).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidConfiguration(ConfigError::ThresholdOutOfRange(_))
        ));
    }

    #[test]
    fn both_arms_count_in_lockstep() {
        let engine = RepetitionEngine::new();
        let mut session = engine
            .begin_session("bicep-curl", &SessionOptions::default())
            .unwrap();

        for angle in [170.0, 75.0, 165.0, 70.0, 160.0] {
            session.submit_frame(&curl_frame(angle, angle));
        }

        let result = session.finish();
        assert_eq!(result.per_joint_set.len(), 2);
        for tally in &result.per_joint_set {
            assert_eq!(tally.attempts, 2);
            assert_eq!(tally.completions, 2);
        }
        assert_eq!(result.total_attempts, 4);
        assert_eq!(result.total_completions, 4);
        assert_eq!(result.frames_processed, 5);
    }

    #[test]
    fn finish_is_idempotent() {
        let engine = RepetitionEngine::new();
        let mut session = engine
            .begin_session("bicep-curl", &SessionOptions::default())
            .unwrap();
        session.submit_frame(&curl_frame(170.0, 170.0));
        session.submit_frame(&curl_frame(75.0, 75.0));

        let first = session.finish();
        let second = session.finish();
        assert_eq!(first, second);
    }
}
