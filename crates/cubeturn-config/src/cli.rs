//! Command-line argument parsing for cubeturn hosts.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, TopologyKind};

/// cubeturn command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "cubeturn", about = "Gesture-driven cube face navigation")]
pub struct CliArgs {
    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Face-topology strategy.
    #[arg(long, value_enum)]
    pub strategy: Option<TopologyKind>,

    /// Per-frame interpolation factor.
    #[arg(long)]
    pub lerp_speed: Option<f32>,

    /// Use the reduced-motion animation profile.
    #[arg(long)]
    pub reduced_motion: bool,

    /// Use the low-performance animation profile.
    #[arg(long)]
    pub low_performance: bool,

    /// Touch swipe threshold (after the touch multiplier).
    #[arg(long)]
    pub swipe_threshold: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// RON input script to replay instead of the built-in tour.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 60)]
    pub fps: u32,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(strategy) = args.strategy {
            self.topology.strategy = strategy;
        }
        if let Some(speed) = args.lerp_speed {
            self.animation.lerp_speed = speed;
        }
        if args.reduced_motion {
            self.animation.reduced_motion = true;
        }
        if args.low_performance {
            self.animation.low_performance = true;
        }
        if let Some(threshold) = args.swipe_threshold {
            self.gesture.swipe_threshold = threshold;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
