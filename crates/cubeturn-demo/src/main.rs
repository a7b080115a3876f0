//! Headless cubeturn host.
//!
//! Loads `config.ron`, applies CLI overrides, then replays an input script (or
//! a built-in tour) against a rotation controller and prints every accepted
//! direction and front-face change with the panel configured for that face.
//!
//! Run with `cargo run -p cubeturn-demo`, or
//! `cargo run -p cubeturn-demo -- --strategy parity-euler --script tour.ron`.

mod runner;
mod script;

use clap::Parser;
use cubeturn_config::{CliArgs, Config, ContentConfig, TopologyKind};
use cubeturn_cube::{CameraRelativeTopology, ControllerSettings, ParityEulerTopology};
use tracing::info;

use crate::runner::{Report, RunSummary, run};
use crate::script::Script;

fn print_summary(summary: &RunSummary, content: &ContentConfig) {
    for step in &summary.steps {
        let secs = step.at.as_secs_f32();
        match step.report {
            Report::Rotated(direction) => println!("{secs:>8.3}s  swipe {direction:?}"),
            Report::FrontFace(face) => {
                let header = content
                    .panel(face.index())
                    .map_or("", |panel| panel.header.as_str());
                println!("{secs:>8.3}s  front face {face}: {header}");
            }
        }
    }
    println!(
        "{} frames, resting on {}",
        summary.frames, summary.final_face
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(Config::default_dir)
        .ok_or("no config directory available, pass --config")?;

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);
    config.validate()?;

    let log_dir = config_dir.join("logs");
    cubeturn_log::init_logging(Some(&log_dir), config.debug.log_to_file, Some(&config));

    let script = match &args.script {
        Some(path) => Script::load(path)?,
        None => Script::tour(),
    };
    let settings = ControllerSettings::from_config(&config)?;
    info!(
        strategy = ?config.topology.strategy,
        lerp_speed = settings.animation.lerp_speed,
        fps = args.fps,
        "starting replay"
    );

    let summary = match config.topology.strategy {
        TopologyKind::Quaternion => run(
            CameraRelativeTopology::default(),
            settings,
            &script,
            args.fps,
        ),
        TopologyKind::ParityEuler => run(ParityEulerTopology::new(), settings, &script, args.fps),
    };
    print_summary(&summary, &config.content);
    Ok(())
}
