//! Exponential interpolation toward the target orientation.

use cubeturn_config::AnimationConfig;
use tracing::trace;

use crate::orientation::{Orientation, SettleTolerance};

/// Interpolation speed and settle thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSettings {
    /// Fraction of the remaining distance covered per frame.
    pub lerp_speed: f32,
    /// When set, `lerp_speed` is per frame at this rate and rescaled by `dt`.
    pub reference_fps: Option<f32>,
    /// Snap thresholds.
    pub tolerance: SettleTolerance,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            lerp_speed: 0.1,
            reference_fps: None,
            tolerance: SettleTolerance::default(),
        }
    }
}

impl From<&AnimationConfig> for AnimationSettings {
    fn from(config: &AnimationConfig) -> Self {
        Self {
            lerp_speed: config.effective_lerp_speed(),
            reference_fps: config.reference_fps,
            tolerance: SettleTolerance {
                euler_snap_degrees: config.euler_snap_degrees,
                settle_dot: config.settle_dot,
            },
        }
    }
}

impl AnimationSettings {
    /// Interpolation factor for a frame of `dt` seconds.
    #[must_use]
    pub fn factor(&self, dt: f32) -> f32 {
        let factor = match self.reference_fps {
            None => self.lerp_speed,
            Some(fps) => 1.0 - (1.0 - self.lerp_speed).powf(dt.max(0.0) * fps),
        };
        factor.clamp(0.0, 1.0)
    }
}

/// Result of one animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to animate.
    Idle,
    /// Moved toward the target, not there yet.
    Moving,
    /// Reached and snapped onto the target this frame.
    Settled,
}

/// Drives the current orientation toward a target, one frame at a time.
#[derive(Debug, Clone)]
pub struct RotationAnimator<O: Orientation> {
    current: O,
    target: O,
    animating: bool,
    settings: AnimationSettings,
}

impl<O: Orientation> RotationAnimator<O> {
    /// Creates an animator at rest in the identity pose.
    #[must_use]
    pub fn new(settings: AnimationSettings) -> Self {
        Self {
            current: O::identity(),
            target: O::identity(),
            animating: false,
            settings,
        }
    }

    /// Orientation shown this frame.
    #[must_use]
    pub fn current(&self) -> &O {
        &self.current
    }

    /// Orientation being approached (equal to `current` at rest).
    #[must_use]
    pub fn target(&self) -> &O {
        &self.target
    }

    /// Whether the orientation is still moving.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    /// Replaces the settings; takes effect on the next frame.
    pub fn set_settings(&mut self, settings: AnimationSettings) {
        self.settings = settings;
    }

    /// Starts animating toward `target`.
    pub fn set_target(&mut self, target: O) {
        self.target = target;
        self.animating = true;
    }

    /// Advances one frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> TickOutcome {
        if !self.animating {
            return TickOutcome::Idle;
        }
        let factor = self.settings.factor(dt);
        if self
            .current
            .step_toward(&self.target, factor, &self.settings.tolerance)
        {
            self.current = self.target;
            self.animating = false;
            trace!(orientation = ?self.current, "settled");
            TickOutcome::Settled
        } else {
            TickOutcome::Moving
        }
    }
}
