// ABOUTME: Integration tests for the landmark-frame file loader
// ABOUTME: Covers the on-disk JSON format, null frames, and loader error paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use reptrack::input::{read_frames, InputError};
use reptrack::{RepetitionEngine, SessionOptions};
use std::io::Write;
use tempfile::NamedTempFile;

fn frame_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_frames_with_null_detections() {
    let file = frame_file(
        r#"[
            {"11": [1.5, 0.5], "13": [0.5, 0.5], "15": [1.0, 0.5]},
            null,
            {"11": [1.5, 0.5], "13": [0.5, 0.5], "15": [0.5, 1.0]}
        ]"#,
    );

    let frames = read_frames(file.path()).unwrap();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].len(), 3);
    assert!(frames[1].is_empty());
    assert!(frames[2].get(15).is_some());
}

#[test]
fn loaded_frames_drive_a_session_end_to_end() {
    // Left elbow straight, then bent to 75 degrees, then straight again:
    // one full push-up rep (threshold angle 104 at fraction 0.8).
    let file = frame_file(
        r#"[
            {"11": [1.5, 0.5], "13": [0.5, 0.5], "15": [-0.48, 0.67]},
            {"11": [1.5, 0.5], "13": [0.5, 0.5], "15": [0.76, 1.47]},
            {"11": [1.5, 0.5], "13": [0.5, 0.5], "15": [-0.48, 0.67]}
        ]"#,
    );

    let frames = read_frames(file.path()).unwrap();
    let engine = RepetitionEngine::new();
    let mut session = engine
        .begin_session("push-up", &SessionOptions::default())
        .unwrap();
    for frame in &frames {
        session.submit_frame(frame);
    }

    let result = session.finish();
    assert_eq!(result.frames_processed, 3);
    assert_eq!(result.total_completions, 1);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = read_frames(std::path::Path::new("/nonexistent/frames.json")).unwrap_err();
    assert!(matches!(err, InputError::Io(_)));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let file = frame_file(r#"{"not": "an array"}"#);
    let err = read_frames(file.path()).unwrap_err();
    assert!(matches!(err, InputError::Parse(_)));
}

#[test]
fn frame_entry_with_wrong_shape_is_a_parse_error() {
    let file = frame_file(r#"[{"11": [1.0]}]"#);
    let err = read_frames(file.path()).unwrap_err();
    assert!(matches!(err, InputError::Parse(_)));
}
