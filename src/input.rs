// ABOUTME: Loads precomputed landmark frames from JSON files for offline analysis
// ABOUTME: Bridges pose-estimation output on disk into PoseFrame values for the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepTrack Contributors

//! Landmark-frame file loading.
//!
//! The on-disk format is a JSON array with one entry per video frame:
//! `null` for a frame where the pose model detected nobody, otherwise an
//! object mapping landmark index to an `[x, y]` coordinate pair:
//!
//! ```json
//! [
//!   {"11": [0.42, 0.31], "13": [0.44, 0.47], "15": [0.43, 0.63]},
//!   null,
//!   {"11": [0.41, 0.30], "13": [0.44, 0.46], "15": [0.42, 0.61]}
//! ]
//! ```
//!
//! The engine crates stay free of I/O; this module is the only place that
//! touches the filesystem.

use reptrack_core::models::{Point2D, PoseFrame};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// One frame as stored on disk: absent pose, or landmark index to `[x, y]`
type RawFrame = Option<HashMap<usize, [f64; 2]>>;

/// Frame-file loading failures
#[derive(Debug, Error)]
pub enum InputError {
    /// The frame file could not be read
    #[error("failed to read frame file: {0}")]
    Io(#[from] std::io::Error),

    /// The frame file is not valid frame JSON
    #[error("malformed frame file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a landmark-frame file into engine-ready frames.
///
/// A `null` entry becomes an empty [`PoseFrame`] (no detection), so the
/// frame still advances the session's frame counter when submitted.
///
/// # Errors
///
/// [`InputError::Io`] when the file cannot be read, [`InputError::Parse`]
/// when the JSON does not match the frame format.
pub fn read_frames(path: &Path) -> Result<Vec<PoseFrame>, InputError> {
    let raw: Vec<RawFrame> = serde_json::from_str(&fs::read_to_string(path)?)?;
    Ok(raw
        .into_iter()
        .map(|frame| {
            frame.map_or_else(PoseFrame::new, |points| {
                points
                    .into_iter()
                    .map(|(landmark, [x, y])| (landmark, Point2D::new(x, y)))
                    .collect()
            })
        })
        .collect())
}
