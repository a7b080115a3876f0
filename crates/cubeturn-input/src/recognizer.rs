//! Discrete swipe recognition from wheel, pointer, and keyboard input.
//!
//! [`GestureRecognizer`] consumes raw input callbacks and returns at most one
//! [`Direction`] per physical gesture.
//!
//! # Usage
//!
//! 1. Forward host input via the `on_*` methods.
//! 2. When a direction is accepted, call [`suspend`](GestureRecognizer::suspend)
//!    until the resulting animation settles, then [`resume`](GestureRecognizer::resume).
//!    All input is rejected while suspended.

use glam::Vec2;
use std::time::Duration;
use tracing::{debug, trace, warn};

use crate::clock::{Clock, MonotonicClock};
use crate::direction::Direction;
use crate::gesture::{Axis, GestureId, GestureSource, GestureState};
use crate::key::Key;

/// Thresholds and timeouts for gesture recognition.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSettings {
    /// Wheel events within this window of an accepted wheel gesture are ignored.
    pub wheel_timeout: Duration,
    /// A wheel event must exceed this magnitude on some axis to open a gesture.
    pub wheel_min_delta: f32,
    /// Accumulated (multiplied) pointer displacement that fires a swipe.
    pub swipe_threshold: f32,
    /// Multiplier applied to raw pointer displacement.
    pub touch_multiplier: f32,
    /// Raw displacement required before the pointer axis locks.
    pub dead_zone: f32,
    /// Minimum spacing between accepted key presses.
    pub key_debounce: Duration,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            wheel_timeout: Duration::from_millis(500),
            wheel_min_delta: 5.0,
            swipe_threshold: 75.0,
            touch_multiplier: 2.0,
            dead_zone: 10.0,
            key_debounce: Duration::from_millis(300),
        }
    }
}

/// Turns continuous input into discrete swipe directions.
#[derive(Debug)]
pub struct GestureRecognizer<C: Clock = MonotonicClock> {
    settings: GestureSettings,
    clock: C,
    state: GestureState,
    next_id: u64,
    last_key_at: Option<Duration>,
    suspended: bool,
}

impl GestureRecognizer<MonotonicClock> {
    /// Creates a recognizer on the wall clock.
    #[must_use]
    pub fn new(settings: GestureSettings) -> Self {
        Self::with_clock(settings, MonotonicClock::new())
    }
}

impl<C: Clock> GestureRecognizer<C> {
    /// Creates a recognizer on the given clock.
    #[must_use]
    pub fn with_clock(settings: GestureSettings, clock: C) -> Self {
        Self {
            settings,
            clock,
            state: GestureState::default(),
            next_id: 0,
            last_key_at: None,
            suspended: false,
        }
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &GestureSettings {
        &self.settings
    }

    /// Replaces the settings; the gesture in progress is dropped.
    pub fn set_settings(&mut self, settings: GestureSettings) {
        self.settings = settings;
        self.state.clear();
    }

    /// The gesture in progress.
    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Whether input is currently rejected.
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Rejects all input until [`resume`](Self::resume).
    ///
    /// Accumulators are reset; a pointer drag in progress is marked processed
    /// so it cannot fire after the lock is lifted.
    pub fn suspend(&mut self) {
        self.suspended = true;
        self.state.reset_accumulators();
        if self.state.is_active(GestureSource::Pointer) {
            self.state.processed = true;
        }
    }

    /// Accepts input again.
    pub fn resume(&mut self) {
        self.suspended = false;
    }

    // ── Wheel ───────────────────────────────────────────────────────

    /// Process one wheel event. Positive `delta_y` scrolls down, positive `delta_x` right.
    pub fn on_wheel(&mut self, delta_x: f32, delta_y: f32, shift_held: bool) -> Option<Direction> {
        if self.suspended {
            trace!("wheel rejected while animating");
            return None;
        }
        let now = self.clock.now();
        if self.state.is_active(GestureSource::Wheel) {
            if now.saturating_sub(self.state.started_at) <= self.settings.wheel_timeout {
                trace!(gesture = ?self.state.id, "wheel event inside open window");
                return None;
            }
            self.state.clear();
        }

        let delta = if shift_held {
            // Shift forces the horizontal axis; some platforms leave the delta in Y.
            let dx = if delta_x != 0.0 { delta_x } else { delta_y };
            Vec2::new(dx, 0.0)
        } else {
            Vec2::new(delta_x, delta_y)
        };
        let min = self.settings.wheel_min_delta;
        if !(delta.x.abs() > min || delta.y.abs() > min) {
            return None;
        }

        let direction = if delta.y.abs() >= delta.x.abs() {
            Direction::vertical(delta.y)
        } else {
            Direction::horizontal(delta.x)
        };
        let id = self.begin(GestureSource::Wheel, now);
        self.state.processed = true;
        debug!(gesture = id.0, ?direction, "wheel gesture recognized");
        Some(direction)
    }

    // ── Pointer ─────────────────────────────────────────────────────

    /// Process a pointer/touch start at window coordinates.
    pub fn on_pointer_start(&mut self, x: f32, y: f32) {
        if self.suspended {
            trace!("pointer start rejected while animating");
            return;
        }
        let now = self.clock.now();
        let id = self.begin(GestureSource::Pointer, now);
        self.state.pointer_origin = Some(Vec2::new(x, y));
        debug!(gesture = id.0, x, y, "pointer gesture started");
    }

    /// Process a pointer/touch move. Fires at most once per drag.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Option<Direction> {
        if self.suspended || !self.state.is_active(GestureSource::Pointer) || self.state.processed
        {
            return None;
        }
        let origin = self.state.pointer_origin?;
        let displacement = origin - Vec2::new(x, y);

        let axis = match self.state.locked_axis {
            Some(axis) => axis,
            None => {
                let dead_zone = self.settings.dead_zone;
                if !(displacement.x.abs() > dead_zone || displacement.y.abs() > dead_zone) {
                    return None;
                }
                let axis = if displacement.x.abs() >= displacement.y.abs() {
                    Axis::X
                } else {
                    Axis::Y
                };
                debug!(gesture = ?self.state.id, ?axis, "pointer axis locked");
                self.state.locked_axis = Some(axis);
                axis
            }
        };

        let scaled = displacement * self.settings.touch_multiplier;
        self.state.accumulated = match axis {
            Axis::X => Vec2::new(scaled.x, 0.0),
            Axis::Y => Vec2::new(0.0, scaled.y),
        };

        if !self.state.is_consistent() {
            warn!(state = ?self.state, "inconsistent gesture state, resetting");
            self.state.reset_accumulators();
            return None;
        }

        let amount = match axis {
            Axis::X => self.state.accumulated.x,
            Axis::Y => self.state.accumulated.y,
        };
        if amount.abs() <= self.settings.swipe_threshold {
            return None;
        }

        let direction = match axis {
            Axis::X => Direction::horizontal(amount),
            Axis::Y => Direction::vertical(amount),
        };
        self.state.processed = true;
        self.state.reset_accumulators();
        debug!(gesture = ?self.state.id, ?direction, "pointer swipe recognized");
        Some(direction)
    }

    /// Process a pointer/touch end. Always accepted, even while suspended.
    pub fn on_pointer_end(&mut self) {
        if self.state.is_active(GestureSource::Pointer) {
            trace!(gesture = ?self.state.id, "pointer gesture ended");
            self.state.clear();
        }
    }

    // ── Keyboard ────────────────────────────────────────────────────

    /// Process a key press.
    pub fn on_key(&mut self, key: Key) -> Option<Direction> {
        if self.suspended {
            trace!(?key, "key rejected while animating");
            return None;
        }
        let now = self.clock.now();
        if let Some(last) = self.last_key_at
            && now.saturating_sub(last) < self.settings.key_debounce
        {
            trace!(?key, "key debounced");
            return None;
        }
        self.last_key_at = Some(now);
        let id = self.begin(GestureSource::Key, now);
        self.state.processed = true;
        let direction = key.direction();
        debug!(gesture = id.0, ?direction, "key gesture recognized");
        Some(direction)
    }

    /// Process a key press by name (e.g. `"ArrowLeft"`); other keys are ignored.
    pub fn on_key_name(&mut self, name: &str) -> Option<Direction> {
        Key::from_name(name).and_then(|key| self.on_key(key))
    }

    /// Opens a new gesture, discarding whatever was in progress.
    fn begin(&mut self, source: GestureSource, now: Duration) -> GestureId {
        self.next_id += 1;
        let id = GestureId(self.next_id);
        self.state = GestureState {
            id: Some(id),
            source: Some(source),
            started_at: now,
            ..GestureState::default()
        };
        id
    }
}
