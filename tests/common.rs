// ABOUTME: Shared fixtures for RepTrack integration tests
// ABOUTME: Builds pose frames whose joint sets read requested angles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepTrack Contributors

#![allow(dead_code, missing_docs, clippy::must_use_candidate)]

use reptrack::landmarks;
use reptrack::{JointSet, Point2D, PoseFrame};

/// Place a joint set so the vertex reads the requested included angle:
/// proximal along +x from the vertex, distal rotated by `degrees`.
pub fn set_joint_angle(frame: &mut PoseFrame, set: JointSet, degrees: f64) {
    let vertex = Point2D::new(0.5, 0.5);
    frame.insert(set.proximal, Point2D::new(1.5, 0.5));
    frame.insert(set.vertex, vertex);
    frame.insert(
        set.distal,
        Point2D::new(
            vertex.x + degrees.to_radians().cos(),
            vertex.y + degrees.to_radians().sin(),
        ),
    );
}

pub fn left_arm() -> JointSet {
    JointSet::new(
        landmarks::LEFT_SHOULDER,
        landmarks::LEFT_ELBOW,
        landmarks::LEFT_WRIST,
    )
}

pub fn right_arm() -> JointSet {
    JointSet::new(
        landmarks::RIGHT_SHOULDER,
        landmarks::RIGHT_ELBOW,
        landmarks::RIGHT_WRIST,
    )
}

pub fn left_leg() -> JointSet {
    JointSet::new(
        landmarks::LEFT_HIP,
        landmarks::LEFT_KNEE,
        landmarks::LEFT_ANKLE,
    )
}

/// Frame with both arms at the given elbow angles
pub fn curl_frame(left_degrees: f64, right_degrees: f64) -> PoseFrame {
    let mut frame = PoseFrame::new();
    set_joint_angle(&mut frame, left_arm(), left_degrees);
    set_joint_angle(&mut frame, right_arm(), right_degrees);
    frame
}

/// Frame with the left knee at the given angle
pub fn squat_frame(knee_degrees: f64) -> PoseFrame {
    let mut frame = PoseFrame::new();
    set_joint_angle(&mut frame, left_leg(), knee_degrees);
    frame
}
