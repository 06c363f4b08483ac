// ABOUTME: Body-landmark index constants for the 33-point pose numbering scheme
// ABOUTME: Names the landmark indices exercise definitions reference in joint sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepTrack Contributors

//! Body-landmark numbering used by pose-estimation collaborators.
//!
//! The engine itself never interprets these indices - they are opaque keys
//! into a [`PoseFrame`](crate::models::PoseFrame) - but exercise definitions
//! reference them by name, so the full 33-point scheme is spelled out here.

/// Number of landmarks in the fixed numbering scheme
pub const LANDMARK_COUNT: usize = 33;

/// Nose tip
pub const NOSE: usize = 0;
/// Left eye, inner corner
pub const LEFT_EYE_INNER: usize = 1;
/// Left eye center
pub const LEFT_EYE: usize = 2;
/// Left eye, outer corner
pub const LEFT_EYE_OUTER: usize = 3;
/// Right eye, inner corner
pub const RIGHT_EYE_INNER: usize = 4;
/// Right eye center
pub const RIGHT_EYE: usize = 5;
/// Right eye, outer corner
pub const RIGHT_EYE_OUTER: usize = 6;
/// Left ear
pub const LEFT_EAR: usize = 7;
/// Right ear
pub const RIGHT_EAR: usize = 8;
/// Left mouth corner
pub const MOUTH_LEFT: usize = 9;
/// Right mouth corner
pub const MOUTH_RIGHT: usize = 10;
/// Left shoulder
pub const LEFT_SHOULDER: usize = 11;
/// Right shoulder
pub const RIGHT_SHOULDER: usize = 12;
/// Left elbow
pub const LEFT_ELBOW: usize = 13;
/// Right elbow
pub const RIGHT_ELBOW: usize = 14;
/// Left wrist
pub const LEFT_WRIST: usize = 15;
/// Right wrist
pub const RIGHT_WRIST: usize = 16;
/// Left pinky knuckle
pub const LEFT_PINKY: usize = 17;
/// Right pinky knuckle
pub const RIGHT_PINKY: usize = 18;
/// Left index knuckle
pub const LEFT_INDEX: usize = 19;
/// Right index knuckle
pub const RIGHT_INDEX: usize = 20;
/// Left thumb knuckle
pub const LEFT_THUMB: usize = 21;
/// Right thumb knuckle
pub const RIGHT_THUMB: usize = 22;
/// Left hip
pub const LEFT_HIP: usize = 23;
/// Right hip
pub const RIGHT_HIP: usize = 24;
/// Left knee
pub const LEFT_KNEE: usize = 25;
/// Right knee
pub const RIGHT_KNEE: usize = 26;
/// Left ankle
pub const LEFT_ANKLE: usize = 27;
/// Right ankle
pub const RIGHT_ANKLE: usize = 28;
/// Left heel
pub const LEFT_HEEL: usize = 29;
/// Right heel
pub const RIGHT_HEEL: usize = 30;
/// Left foot index (toe)
pub const LEFT_FOOT_INDEX: usize = 31;
/// Right foot index (toe)
pub const RIGHT_FOOT_INDEX: usize = 32;
