// ABOUTME: Exercise definitions and the immutable process-wide exercise registry
// ABOUTME: Ships baked-in bicep-curl, squat, and push-up configurations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepTrack Contributors

//! Exercise configuration.
//!
//! The registry is populated at startup and read-only thereafter. Selecting
//! an exercise never mutates it; ad-hoc definitions bypass the registry via
//! [`crate::session::RepetitionEngine::begin_custom_session`] but satisfy
//! the same validation.

use reptrack_core::errors::{ConfigError, EngineError, EngineResult};
use reptrack_core::landmarks;
use reptrack_core::models::{CountingPolicy, JointSet};
use serde::{Deserialize, Serialize};

/// Static configuration for one supported exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseDefinition {
    /// Unique registry key, e.g. `bicep-curl`
    pub id: String,
    /// Display name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Open/extended reference angle in degrees
    pub start_angle: f64,
    /// Flexed/closed reference angle in degrees
    pub end_angle: f64,
    /// Joint sets tracked independently, in a stable order
    pub joint_sets: Vec<JointSet>,
    /// Counting policy used when the session options name none
    pub default_policy: CountingPolicy,
}

impl ExerciseDefinition {
    /// Check the definition invariants: finite reference angles, a
    /// non-degenerate range of motion, and at least one joint set.
    ///
    /// # Errors
    ///
    /// The [`ConfigError`] variant naming the violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.start_angle.is_finite() {
            return Err(ConfigError::NonFiniteReferenceAngle(self.start_angle));
        }
        if !self.end_angle.is_finite() {
            return Err(ConfigError::NonFiniteReferenceAngle(self.end_angle));
        }
        if (self.start_angle - self.end_angle).abs() < f64::EPSILON {
            return Err(ConfigError::EmptyRangeOfMotion(self.start_angle));
        }
        if self.joint_sets.is_empty() {
            return Err(ConfigError::NoJointSets);
        }
        Ok(())
    }
}

/// Immutable lookup table of exercise definitions.
///
/// Build once at startup via [`ExerciseRegistry::default`] (baked-in
/// exercises) or [`ExerciseRegistry::with_exercises`] for embedders that
/// supply their own catalog.
#[derive(Debug, Clone)]
pub struct ExerciseRegistry {
    exercises: Vec<ExerciseDefinition>,
}

impl Default for ExerciseRegistry {
    fn default() -> Self {
        Self {
            exercises: builtin_exercises(),
        }
    }
}

impl ExerciseRegistry {
    /// Registry with the baked-in exercise catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry over a caller-supplied catalog; every definition is
    /// validated up front so an invalid catalog fails loudly at startup.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` for the first definition that fails
    /// validation.
    pub fn with_exercises(exercises: Vec<ExerciseDefinition>) -> EngineResult<Self> {
        for definition in &exercises {
            definition.validate()?;
        }
        Ok(Self { exercises })
    }

    /// Resolve an exercise id.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownExercise`] listing the valid ids when the id is
    /// not registered.
    pub fn lookup(&self, id: &str) -> EngineResult<&ExerciseDefinition> {
        self.exercises
            .iter()
            .find(|definition| definition.id == id)
            .ok_or_else(|| EngineError::UnknownExercise {
                id: id.to_owned(),
                valid_ids: self.ids(),
            })
    }

    /// Every registered id, in registration order
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.exercises
            .iter()
            .map(|definition| definition.id.clone())
            .collect()
    }

    /// Iterate the registered definitions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ExerciseDefinition> {
        self.exercises.iter()
    }

    /// Number of registered exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

fn builtin_exercises() -> Vec<ExerciseDefinition> {
    vec![
        ExerciseDefinition {
            id: "bicep-curl".to_owned(),
            name: "Bicep Curl".to_owned(),
            description: "Standing curl tracked at the elbow; left and right arm are counted independently".to_owned(),
            start_angle: 160.0,
            end_angle: 60.0,
            joint_sets: vec![
                JointSet::new(
                    landmarks::LEFT_SHOULDER,
                    landmarks::LEFT_ELBOW,
                    landmarks::LEFT_WRIST,
                ),
                JointSet::new(
                    landmarks::RIGHT_SHOULDER,
                    landmarks::RIGHT_ELBOW,
                    landmarks::RIGHT_WRIST,
                ),
            ],
            default_policy: CountingPolicy::EagerAttempt,
        },
        ExerciseDefinition {
            id: "squat".to_owned(),
            name: "Squat".to_owned(),
            description: "Bodyweight squat tracked at the knee".to_owned(),
            start_angle: 170.0,
            end_angle: 90.0,
            joint_sets: vec![JointSet::new(
                landmarks::LEFT_HIP,
                landmarks::LEFT_KNEE,
                landmarks::LEFT_ANKLE,
            )],
            default_policy: CountingPolicy::DepthValidated,
        },
        ExerciseDefinition {
            id: "push-up".to_owned(),
            name: "Push-Up".to_owned(),
            description: "Push-up tracked at the elbow".to_owned(),
            start_angle: 160.0,
            end_angle: 90.0,
            joint_sets: vec![JointSet::new(
                landmarks::LEFT_SHOULDER,
                landmarks::LEFT_ELBOW,
                landmarks::LEFT_WRIST,
            )],
            default_policy: CountingPolicy::DepthValidated,
        },
    ]
}
