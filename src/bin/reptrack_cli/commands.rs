// ABOUTME: Subcommand implementations for the RepTrack CLI
// ABOUTME: Exercise catalog listing and offline session analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepTrack Contributors

use anyhow::Context;
use reptrack::input;
use reptrack::{CountingPolicy, RepetitionEngine, SessionOptions};
use std::path::Path;
use tracing::info;

/// Print the registered exercise catalog
pub fn list_exercises() {
    let engine = RepetitionEngine::new();
    for definition in engine.registry().iter() {
        println!("{} - {}", definition.id, definition.name);
        println!("    {}", definition.description);
        println!(
            "    start {}°, end {}°, {} joint set(s), default policy {:?}",
            definition.start_angle,
            definition.end_angle,
            definition.joint_sets.len(),
            definition.default_policy
        );
    }
}

/// Load a frame file, run one session, and print the result JSON
pub fn analyze(
    input_path: &Path,
    exercise_id: &str,
    threshold_fraction: Option<f64>,
    policy: Option<CountingPolicy>,
    pretty: bool,
) -> anyhow::Result<()> {
    let frames = input::read_frames(input_path)
        .with_context(|| format!("loading frames from {}", input_path.display()))?;
    info!(frames = frames.len(), "loaded landmark frames");

    let mut options = SessionOptions::default();
    if let Some(fraction) = threshold_fraction {
        options.threshold_fraction = fraction;
    }
    options.policy = policy;

    let engine = RepetitionEngine::new();
    let mut session = engine.begin_session(exercise_id, &options)?;
    for frame in &frames {
        session.submit_frame(frame);
    }

    let result = session.finish();
    let rendered = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{rendered}");
    Ok(())
}
