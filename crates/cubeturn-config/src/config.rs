//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of faces on the cube; the content table must have exactly this many panels.
const FACE_COUNT: usize = 6;

/// Finer snap thresholds are below f32 spacing at large accumulated angles.
const MIN_EULER_SNAP_DEGREES: f32 = 1e-3;
const MAX_EULER_SNAP_DEGREES: f32 = 45.0;
/// Above this, `dot` may never exceed the threshold in f32.
const MAX_SETTLE_DOT: f32 = 0.999_999;
const MIN_SETTLE_DOT: f32 = 0.99;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Gesture recognition thresholds and timeouts.
    pub gesture: GestureConfig,
    /// Rotation animation settings.
    pub animation: AnimationConfig,
    /// Which face-topology strategy drives rotations.
    pub topology: TopologyConfig,
    /// Per-face content panels shown by the host.
    pub content: ContentConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Gesture recognizer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GestureConfig {
    /// Window after an accepted wheel gesture during which further wheel events are ignored.
    pub wheel_timeout_ms: u64,
    /// Minimum wheel delta (either axis) that can open a new wheel gesture.
    pub wheel_min_delta: f32,
    /// Accumulated (multiplied) touch displacement that triggers a swipe.
    pub swipe_threshold: f32,
    /// Multiplier applied to raw touch displacement before accumulation.
    pub touch_multiplier: f32,
    /// Raw displacement in pixels required before the touch axis is locked.
    pub dead_zone: f32,
    /// Minimum spacing between two accepted arrow-key presses.
    pub key_debounce_ms: u64,
}

/// Rotation animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Fraction of the remaining distance covered per frame.
    pub lerp_speed: f32,
    /// Use the reduced-motion speed profile.
    pub reduced_motion: bool,
    /// Speed used when `reduced_motion` is set.
    pub reduced_motion_lerp_speed: f32,
    /// Use the low-performance speed profile.
    pub low_performance: bool,
    /// Speed used when `low_performance` is set.
    pub low_performance_lerp_speed: f32,
    /// Residual (degrees) below which an Euler axis snaps to its target.
    pub euler_snap_degrees: f32,
    /// Quaternion dot product above which the rotation snaps to its target.
    pub settle_dot: f32,
    /// When set, `lerp_speed` is defined per frame at this rate and rescaled by `dt`.
    pub reference_fps: Option<f32>,
}

/// Face-topology strategy selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum TopologyKind {
    /// Camera-relative 90° quaternion composition.
    #[default]
    Quaternion,
    /// Per-axis Euler step counters keyed by vertical flip parity.
    ParityEuler,
}

/// Face topology settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TopologyConfig {
    /// Rotation strategy.
    pub strategy: TopologyKind,
    /// Face index (0-5) expected to face the viewer at rest. A controller
    /// refuses settings where this disagrees with the resolved face.
    pub initial_front_face: u8,
}

/// One content panel, keyed by face index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacePanel {
    /// Panel heading.
    pub header: String,
    /// Short description.
    pub description: String,
    /// Link opened when the face is activated.
    pub link: String,
}

/// Content table for the six faces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContentConfig {
    /// Panels in face-index order (right, left, top, bottom, front, back).
    pub panels: Vec<FacePanel>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write JSON logs to a file in the config directory.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            wheel_timeout_ms: 500,
            wheel_min_delta: 5.0,
            swipe_threshold: 75.0,
            touch_multiplier: 2.0,
            dead_zone: 10.0,
            key_debounce_ms: 300,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            lerp_speed: 0.1,
            reduced_motion: false,
            reduced_motion_lerp_speed: 0.2,
            low_performance: false,
            low_performance_lerp_speed: 0.15,
            euler_snap_degrees: 0.1,
            settle_dot: 0.99999,
            reference_fps: None,
        }
    }
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            strategy: TopologyKind::default(),
            initial_front_face: 4,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        let panel = |header: &str, description: &str, path: &str| FacePanel {
            header: header.to_string(),
            description: description.to_string(),
            link: format!("https://example.com/{path}"),
        };
        Self {
            panels: vec![
                panel("Services", "Explore our range of services.", "services"),
                panel("Web Design", "Learn about our web design offerings.", "web-design"),
                panel("App Development", "Discover our app development work.", "apps"),
                panel("Automation", "Explore automation solutions.", "automation"),
                panel("Home", "Welcome.", ""),
                panel("Digitization", "Bring your business online.", "digitization"),
            ],
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

impl AnimationConfig {
    /// Per-frame interpolation factor after applying the motion profiles.
    ///
    /// Reduced motion wins over low performance when both are set.
    #[must_use]
    pub fn effective_lerp_speed(&self) -> f32 {
        if self.reduced_motion {
            self.reduced_motion_lerp_speed
        } else if self.low_performance {
            self.low_performance_lerp_speed
        } else {
            self.lerp_speed
        }
    }
}

impl ContentConfig {
    /// Panel for a face index, if present.
    #[must_use]
    pub fn panel(&self, face_index: usize) -> Option<&FacePanel> {
        self.panels.get(face_index)
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Per-user config directory (`<config_dir>/cubeturn`), if the platform has one.
    #[must_use]
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cubeturn"))
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            config.validate()?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        new_config.validate()?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Reject values the gesture recognizer or animator cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                })
            }
        }
        fn in_range(
            field: &'static str,
            value: f32,
            min: f32,
            max: f32,
        ) -> Result<(), ConfigError> {
            if (min..=max).contains(&value) {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be in [{min}, {max}], got {value}"),
                })
            }
        }
        fn unit_speed(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value > 0.0 && value <= 1.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be in (0, 1], got {value}"),
                })
            }
        }

        positive("gesture.wheel_min_delta", self.gesture.wheel_min_delta)?;
        positive("gesture.swipe_threshold", self.gesture.swipe_threshold)?;
        positive("gesture.touch_multiplier", self.gesture.touch_multiplier)?;
        positive("gesture.dead_zone", self.gesture.dead_zone)?;
        unit_speed("animation.lerp_speed", self.animation.lerp_speed)?;
        unit_speed(
            "animation.reduced_motion_lerp_speed",
            self.animation.reduced_motion_lerp_speed,
        )?;
        unit_speed(
            "animation.low_performance_lerp_speed",
            self.animation.low_performance_lerp_speed,
        )?;
        in_range(
            "animation.euler_snap_degrees",
            self.animation.euler_snap_degrees,
            MIN_EULER_SNAP_DEGREES,
            MAX_EULER_SNAP_DEGREES,
        )?;
        in_range(
            "animation.settle_dot",
            self.animation.settle_dot,
            MIN_SETTLE_DOT,
            MAX_SETTLE_DOT,
        )?;
        if let Some(fps) = self.animation.reference_fps {
            positive("animation.reference_fps", fps)?;
        }
        if usize::from(self.topology.initial_front_face) >= FACE_COUNT {
            return Err(ConfigError::Invalid {
                field: "topology.initial_front_face",
                reason: format!("face index must be 0-5, got {}", self.topology.initial_front_face),
            });
        }
        if self.content.panels.len() != FACE_COUNT {
            return Err(ConfigError::Invalid {
                field: "content.panels",
                reason: format!("expected {FACE_COUNT} panels, got {}", self.content.panels.len()),
            });
        }
        Ok(())
    }
}
