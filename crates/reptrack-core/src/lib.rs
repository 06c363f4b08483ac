// ABOUTME: Core library entry point for RepTrack domain types
// ABOUTME: Exposes models, body-landmark constants, and error types shared by all crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepTrack Contributors

//! # RepTrack Core
//!
//! Foundation crate for the RepTrack repetition counting engine: domain
//! models shared across the workspace, the body-landmark numbering used by
//! pose-estimation collaborators, and the typed error enums every layer
//! returns.
//!
//! This crate is intentionally free of I/O, clocks, and async - everything
//! here is plain data.

/// Typed error enums and result aliases
pub mod errors;
/// Body-landmark index constants (33-point numbering)
pub mod landmarks;
/// Domain models: points, joint sets, frames, events, session results
pub mod models;

pub use errors::{ConfigError, EngineError, EngineResult};
pub use models::{
    CountingPolicy, JointSet, JointSetTally, Point2D, PoseFrame, RepEvent, RepEventKind,
    SessionResult,
};
