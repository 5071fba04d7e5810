// ABOUTME: Demo binary for the tracker metrics engine
// ABOUTME: Decodes the built-in sample packets and prints one summary per workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Developers

//! # Fittrack Report Binary
//!
//! Runs the metrics engine over a fixed set of sample sensor packets and
//! prints one summary line per packet, in input order.
//!
//! Usage:
//! ```bash
//! # Human-readable report lines
//! cargo run --bin fittrack
//!
//! # One JSON object per workout
//! cargo run --bin fittrack -- --format json
//! ```

use anyhow::Result;
use clap::{Parser, ValueEnum};
use fittrack::{logging, parse_packet, SensorPacket};
use tracing::error;

#[derive(Parser)]
#[command(name = "fittrack", about = "Fitness tracker metrics report")]
struct Args {
    /// Output format for workout summaries
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Fixed-template report lines
    Text,
    /// One JSON object per workout
    Json,
}

/// Sample packets as recorded by the tracker, in report order
fn sample_packets() -> Vec<SensorPacket> {
    vec![
        SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPacket::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_from_env()?;

    for packet in sample_packets() {
        let workout = match parse_packet(&packet) {
            Ok(workout) => workout,
            Err(e) => {
                error!(code = %packet.code, "failed to decode sensor packet: {e}");
                return Err(e.into());
            }
        };

        let summary = workout.summary();
        match args.format {
            OutputFormat::Text => println!("{summary}"),
            OutputFormat::Json => println!("{}", serde_json::to_string(&summary)?),
        }
    }

    Ok(())
}
