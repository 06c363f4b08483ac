// ABOUTME: Criterion benchmarks for the repetition detection engine
// ABOUTME: Measures angle geometry and full-session frame throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepTrack Contributors

//! Criterion benchmarks for the repetition detection engine.
//!
//! Measures the included-angle calculation in isolation and full sessions
//! over synthetic curl sequences.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use reptrack::geometry::included_angle;
use reptrack::landmarks;
use reptrack::{Point2D, PoseFrame, RepetitionEngine, SessionOptions};

/// Frame counts for session throughput benchmarks
const FRAME_COUNTS: [usize; 3] = [100, 1_000, 10_000];

/// Synthesize a curl session: both elbows sweep a sine wave between roughly
/// 50 and 170 degrees, several reps per hundred frames.
fn generate_curl_frames(count: usize) -> Vec<PoseFrame> {
    (0..count)
        .map(|index| {
            let phase = index as f64 * 0.12;
            let degrees = 110.0 + 60.0 * phase.sin();
            let vertex = Point2D::new(0.5, 0.5);
            let distal = Point2D::new(
                vertex.x + degrees.to_radians().cos(),
                vertex.y + degrees.to_radians().sin(),
            );
            let mut frame = PoseFrame::new();
            for (shoulder, elbow, wrist) in [
                (
                    landmarks::LEFT_SHOULDER,
                    landmarks::LEFT_ELBOW,
                    landmarks::LEFT_WRIST,
                ),
                (
                    landmarks::RIGHT_SHOULDER,
                    landmarks::RIGHT_ELBOW,
                    landmarks::RIGHT_WRIST,
                ),
            ] {
                frame.insert(shoulder, Point2D::new(1.5, 0.5));
                frame.insert(elbow, vertex);
                frame.insert(wrist, distal);
            }
            frame
        })
        .collect()
}

fn bench_included_angle(c: &mut Criterion) {
    let proximal = Point2D::new(1.5, 0.5);
    let vertex = Point2D::new(0.5, 0.5);
    let distal = Point2D::new(0.73, 1.41);

    c.bench_function("geometry/included_angle", |b| {
        b.iter(|| included_angle(black_box(proximal), black_box(vertex), black_box(distal)));
    });
}

fn bench_session_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/curl_frames");
    for count in FRAME_COUNTS {
        let frames = generate_curl_frames(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &frames, |b, frames| {
            let engine = RepetitionEngine::new();
            b.iter(|| {
                let mut session = engine
                    .begin_session("bicep-curl", &SessionOptions::default())
                    .unwrap();
                for frame in frames {
                    session.submit_frame(frame);
                }
                black_box(session.finish())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_included_angle, bench_session_throughput);
criterion_main!(benches);
