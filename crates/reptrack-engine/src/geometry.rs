// ABOUTME: Included-angle calculation at a joint vertex from three 2D landmarks
// ABOUTME: Arctangent-difference method with reflex normalization into [0, 180]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepTrack Contributors

//! Pure geometry: the included angle at a joint vertex.
//!
//! Angles use the principal, non-reflex interpretation: every result lies in
//! `[0, 180]` degrees. Some historical angle-calculation variants left
//! reflex values above 180 unclamped; here the normalization is applied
//! unconditionally.

use reptrack_core::models::Point2D;

/// Included angle at `vertex` between the rays toward `proximal` and
/// `distal`, in degrees within `[0, 180]`.
///
/// Returns `None` for degenerate input - a zero-length ray or any
/// non-finite coordinate - which callers treat as a missing sample rather
/// than a failure.
#[must_use]
pub fn included_angle(proximal: Point2D, vertex: Point2D, distal: Point2D) -> Option<f64> {
    let ray_a = (proximal.x - vertex.x, proximal.y - vertex.y);
    let ray_b = (distal.x - vertex.x, distal.y - vertex.y);
    if !is_usable_ray(ray_a) || !is_usable_ray(ray_b) {
        return None;
    }

    let raw = ray_b.1.atan2(ray_b.0) - ray_a.1.atan2(ray_a.0);
    let mut degrees = raw.to_degrees().abs();
    // Reflex angles fold back into the principal range
    if degrees > 180.0 {
        degrees = 360.0 - degrees;
    }
    Some(degrees)
}

fn is_usable_ray((dx, dy): (f64, f64)) -> bool {
    dx.is_finite() && dy.is_finite() && dx.hypot(dy) > f64::EPSILON
}
