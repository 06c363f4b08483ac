// ABOUTME: Main library entry point for the RepTrack repetition counting platform
// ABOUTME: Re-exports the workspace crates and hosts the offline frame loader
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepTrack Contributors

#![deny(unsafe_code)]

//! # RepTrack
//!
//! A repetition counting engine for exercise analysis. RepTrack consumes a
//! stream of already-computed 2D body-landmark coordinates, measures one
//! joint angle per configured joint set, and runs a hysteresis state machine
//! that turns the noisy angle signal into discrete attempt and completion
//! events validated against a range-of-motion threshold.
//!
//! Video decoding, pose estimation, and any transport layer are external
//! collaborators: the engine starts where joint coordinates exist and ends
//! at a serializable [`SessionResult`].
//!
//! ## Architecture
//!
//! - **`reptrack-core`**: domain models, landmark constants, error types
//! - **`reptrack-engine`**: geometry, exercise registry, joint trackers,
//!   session orchestration
//! - this facade crate: stable re-exports, the landmark-frame file loader,
//!   and the `reptrack-cli` binary
//!
//! ## Example
//!
//! ```rust
//! use reptrack::{PoseFrame, Point2D, RepetitionEngine, SessionOptions};
//! use reptrack::landmarks;
//!
//! let engine = RepetitionEngine::new();
//! let mut session = engine
//!     .begin_session("squat", &SessionOptions::default())
//!     .expect("squat is a built-in exercise");
//!
//! let frame = PoseFrame::new()
//!     .with_landmark(landmarks::LEFT_HIP, Point2D::new(0.4, 0.2))
//!     .with_landmark(landmarks::LEFT_KNEE, Point2D::new(0.4, 0.5))
//!     .with_landmark(landmarks::LEFT_ANKLE, Point2D::new(0.4, 0.8));
//! session.submit_frame(&frame);
//!
//! let result = session.finish();
//! assert_eq!(result.frames_processed, 1);
//! ```

/// Landmark-frame file loading for offline analysis
pub mod input;

// Re-export the workspace crates under stable paths
pub use reptrack_core::{errors, landmarks, models};
pub use reptrack_engine::{geometry, options, registry, session, tracker};

// Re-export the working set so callers rarely need the submodule paths
pub use reptrack_core::errors::{ConfigError, EngineError, EngineResult};
pub use reptrack_core::models::{
    CountingPolicy, JointSet, JointSetTally, Point2D, PoseFrame, RepEvent, RepEventKind,
    SessionResult,
};
pub use reptrack_engine::options::SessionOptions;
pub use reptrack_engine::registry::{ExerciseDefinition, ExerciseRegistry};
pub use reptrack_engine::session::{RepetitionEngine, Session};
pub use reptrack_engine::tracker::{JointTracker, Phase, DEFAULT_THRESHOLD_FRACTION};
