//! Per-gesture accumulator state.

use glam::Vec2;
use std::time::Duration;

/// Monotonically increasing identifier of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GestureId(pub u64);

/// Which input path opened a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureSource {
    /// One wheel window.
    Wheel,
    /// One pointer drag, start to end.
    Pointer,
    /// One key press.
    Key,
}

/// Input axis a pointer gesture is locked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

/// Mutable state of the gesture in progress.
///
/// At most one direction is emitted per gesture; `processed` records that it
/// has been.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureState {
    /// Identifier of the current gesture, `None` when idle.
    pub id: Option<GestureId>,
    /// Input path of the current gesture.
    pub source: Option<GestureSource>,
    /// Clock time at which the gesture started.
    pub started_at: Duration,
    /// Accumulated displacement; only the locked axis may be non-zero.
    pub accumulated: Vec2,
    /// Axis chosen once the dead zone was exceeded.
    pub locked_axis: Option<Axis>,
    /// A direction has already been emitted for this gesture.
    pub processed: bool,
    /// Pointer position at gesture start.
    pub pointer_origin: Option<Vec2>,
}

impl GestureState {
    /// Returns to idle.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Zeroes the accumulators and releases the axis lock, keeping the gesture identity.
    pub fn reset_accumulators(&mut self) {
        self.accumulated = Vec2::ZERO;
        self.locked_axis = None;
    }

    /// Whether a gesture from `source` is in progress.
    #[must_use]
    pub fn is_active(&self, source: GestureSource) -> bool {
        self.id.is_some() && self.source == Some(source)
    }

    /// Whether the accumulators agree with the axis lock.
    ///
    /// Unlocked gestures accumulate nothing and a locked gesture accumulates
    /// only on its own axis.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if !self.accumulated.is_finite() {
            return false;
        }
        match self.locked_axis {
            None => self.accumulated == Vec2::ZERO,
            Some(Axis::X) => self.accumulated.y == 0.0,
            Some(Axis::Y) => self.accumulated.x == 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle_and_consistent() {
        let state = GestureState::default();
        assert!(state.id.is_none());
        assert!(state.is_consistent());
        assert!(!state.is_active(GestureSource::Wheel));
    }

    #[test]
    fn test_lock_mismatch_is_inconsistent() {
        let state = GestureState {
            locked_axis: Some(Axis::X),
            accumulated: Vec2::new(10.0, 3.0),
            ..GestureState::default()
        };
        assert!(!state.is_consistent());
    }

    #[test]
    fn test_unlocked_with_accumulation_is_inconsistent() {
        let state = GestureState {
            accumulated: Vec2::new(1.0, 0.0),
            ..GestureState::default()
        };
        assert!(!state.is_consistent());
    }

    #[test]
    fn test_nan_accumulation_is_inconsistent() {
        let state = GestureState {
            locked_axis: Some(Axis::Y),
            accumulated: Vec2::new(0.0, f32::NAN),
            ..GestureState::default()
        };
        assert!(!state.is_consistent());
    }

    #[test]
    fn test_reset_accumulators_keeps_identity() {
        let mut state = GestureState {
            id: Some(GestureId(3)),
            source: Some(GestureSource::Pointer),
            locked_axis: Some(Axis::Y),
            accumulated: Vec2::new(0.0, 40.0),
            ..GestureState::default()
        };
        state.reset_accumulators();
        assert_eq!(state.id, Some(GestureId(3)));
        assert!(state.locked_axis.is_none());
        assert_eq!(state.accumulated, Vec2::ZERO);
    }
}
