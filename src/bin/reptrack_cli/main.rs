// ABOUTME: RepTrack CLI - offline repetition analysis over precomputed landmark frames
// ABOUTME: Lists registered exercises and runs analysis sessions from frame files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepTrack Contributors
//!
//! Usage:
//! ```bash
//! # List the registered exercises
//! reptrack-cli exercises
//!
//! # Count reps from a landmark-frame file
//! reptrack-cli analyze --input frames.json --exercise bicep-curl
//!
//! # Stricter ROM enforcement with a custom threshold
//! reptrack-cli analyze --input frames.json --exercise squat \
//!     --threshold-fraction 0.9 --policy depth-validated --pretty
//! ```

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use reptrack::CountingPolicy;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "reptrack-cli",
    about = "RepTrack repetition analysis CLI",
    long_about = "Offline repetition counting over precomputed pose landmark frames. \
                  Pose estimation runs elsewhere; this tool consumes its output."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List registered exercises and their configuration
    Exercises,

    /// Run one analysis session over a landmark-frame file
    Analyze {
        /// Path to the frame file (JSON array of frames)
        #[arg(long)]
        input: PathBuf,

        /// Exercise id to analyze
        #[arg(long, default_value = "bicep-curl")]
        exercise: String,

        /// Fraction of full ROM required to credit a rep, in (0, 1]
        #[arg(long)]
        threshold_fraction: Option<f64>,

        /// Override the exercise's default counting policy
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,

        /// Pretty-print the result JSON
        #[arg(long)]
        pretty: bool,
    },
}

/// CLI-facing counting policy names
#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Credit attempts at threshold crossing, completions unconditionally
    EagerAttempt,
    /// Credit only excursions that sustained the required depth
    DepthValidated,
}

impl From<PolicyArg> for CountingPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::EagerAttempt => Self::EagerAttempt,
            PolicyArg::DepthValidated => Self::DepthValidated,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Exercises => {
            commands::list_exercises();
            Ok(())
        }
        Command::Analyze {
            input,
            exercise,
            threshold_fraction,
            policy,
            pretty,
        } => commands::analyze(
            &input,
            &exercise,
            threshold_fraction,
            policy.map(CountingPolicy::from),
            pretty,
        ),
    }
}
