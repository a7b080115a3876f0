//! Configuration system for cubeturn.
//!
//! Provides runtime-tunable gesture, animation, and topology settings that
//! persist to disk as RON files. Supports CLI overrides via clap, hot-reload
//! detection, and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    AnimationConfig, Config, ContentConfig, DebugConfig, FacePanel, GestureConfig,
    TopologyConfig, TopologyKind,
};
pub use error::ConfigError;
