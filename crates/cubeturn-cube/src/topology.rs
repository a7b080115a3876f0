//! Face topology: how a swipe direction changes the target orientation.
//!
//! Two interchangeable strategies:
//!
//! - [`CameraRelativeTopology`] composes a world-space 90° quaternion turn
//!   about a camera-relative axis. Swipes always feel the same to the viewer,
//!   whatever the body's accumulated orientation.
//! - [`ParityEulerTopology`] keeps per-axis step counters. After an odd number
//!   of vertical flips the body's side axis has swapped roles with its depth
//!   axis, so horizontal swipes step Z instead of Y.

use cubeturn_input::Direction;
use glam::{Mat3, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;
use tracing::trace;

use crate::orientation::{EulerDegrees, Orientation};

/// Maps a swipe direction to the next target orientation.
///
/// Every call turns the target by exactly one quarter turn, and a direction
/// followed by its opposite restores the previous target.
pub trait FaceTopology {
    /// Orientation representation this strategy produces.
    type Orientation: Orientation;

    /// Target orientation after applying `direction` to `current`.
    fn next_orientation(
        &mut self,
        current: &Self::Orientation,
        direction: Direction,
    ) -> Self::Orientation;

    /// Updates the viewer orientation. Strategies that ignore the camera keep the default.
    fn set_camera(&mut self, _camera: Quat) {}
}

// ── Camera-relative quaternion ──────────────────────────────────────

/// Camera-relative quarter turns composed in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRelativeTopology {
    camera: Quat,
}

impl Default for CameraRelativeTopology {
    fn default() -> Self {
        Self::new(Quat::IDENTITY)
    }
}

impl CameraRelativeTopology {
    /// Creates the strategy for a camera with the given world orientation.
    #[must_use]
    pub fn new(camera: Quat) -> Self {
        Self { camera }
    }

    /// World-space rotation axis for a swipe.
    #[must_use]
    pub fn rotation_axis(&self, direction: Direction) -> Vec3 {
        let camera_axis = match direction {
            Direction::Up => Vec3::NEG_X,
            Direction::Down => Vec3::X,
            Direction::Left => Vec3::Y,
            Direction::Right => Vec3::NEG_Y,
        };
        (self.camera * camera_axis).normalize()
    }
}

/// Snaps a rotation onto the nearest cube symmetry if it is already within
/// float noise of one; other rotations are only renormalized.
fn square_up(rotation: Quat) -> Quat {
    let m = Mat3::from_quat(rotation);
    let rounded = Mat3::from_cols(
        m.x_axis.round(),
        m.y_axis.round(),
        m.z_axis.round(),
    );
    let drift = [
        m.x_axis - rounded.x_axis,
        m.y_axis - rounded.y_axis,
        m.z_axis - rounded.z_axis,
    ]
    .iter()
    .map(|column| column.abs().max_element())
    .fold(0.0_f32, f32::max);
    if drift > 1e-3 || (rounded.determinant() - 1.0).abs() > 1e-3 {
        return rotation.normalize();
    }
    let snapped = Quat::from_mat3(&rounded).normalize();
    // Stay in the caller's hemisphere so interpolation starts from the short side.
    if snapped.dot(rotation) < 0.0 {
        -snapped
    } else {
        snapped
    }
}

impl FaceTopology for CameraRelativeTopology {
    type Orientation = Quat;

    fn next_orientation(&mut self, current: &Quat, direction: Direction) -> Quat {
        let axis = self.rotation_axis(direction);
        let turn = Quat::from_axis_angle(axis, FRAC_PI_2);
        // Pre-multiply: the turn happens in world space, not body space.
        let target = square_up(turn * *current);
        trace!(?direction, ?axis, ?target, "camera-relative target");
        target
    }

    fn set_camera(&mut self, camera: Quat) {
        self.camera = camera.normalize();
    }
}

// ── Parity-indexed Euler ────────────────────────────────────────────

/// Per-axis quarter-turn counters keyed by vertical flip parity.
///
/// `Up`/`Down` step the vertical counter and set X to `-90 × vertical`.
/// `Left` increments and `Right` decrements the Y counter while the vertical
/// counter is even, the Z counter while it is odd; Y and Z are `90 × counter`.
///
/// The horizontal mapping is screen-consistent from rest and after a single
/// `Up`; deeper flip sequences are not guaranteed to match the camera-relative
/// strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParityEulerTopology {
    vertical: i32,
    horizontal_y: i32,
    horizontal_z: i32,
}

impl ParityEulerTopology {
    /// Creates counters at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Net `Up` minus `Down` gestures.
    #[must_use]
    pub fn vertical_index(&self) -> i32 {
        self.vertical
    }

    fn flipped(&self) -> bool {
        self.vertical.rem_euclid(2) == 1
    }
}

impl FaceTopology for ParityEulerTopology {
    type Orientation = EulerDegrees;

    fn next_orientation(&mut self, current: &EulerDegrees, direction: Direction) -> EulerDegrees {
        let mut target = *current;
        let step = match direction {
            Direction::Up | Direction::Left => 1,
            Direction::Down | Direction::Right => -1,
        };
        if direction.is_vertical() {
            self.vertical += step;
            target.x = -90.0 * self.vertical as f32;
        } else if self.flipped() {
            self.horizontal_z += step;
            target.z = 90.0 * self.horizontal_z as f32;
        } else {
            self.horizontal_y += step;
            target.y = 90.0 * self.horizontal_y as f32;
        }
        trace!(?direction, ?target, vertical = self.vertical, "parity-euler target");
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::same_rotation;

    #[test]
    fn test_camera_axes_at_rest() {
        let topology = CameraRelativeTopology::default();
        assert_eq!(topology.rotation_axis(Direction::Up), Vec3::NEG_X);
        assert_eq!(topology.rotation_axis(Direction::Down), Vec3::X);
        assert_eq!(topology.rotation_axis(Direction::Left), Vec3::Y);
        assert_eq!(topology.rotation_axis(Direction::Right), Vec3::NEG_Y);
    }

    #[test]
    fn test_camera_axis_follows_camera() {
        let topology = CameraRelativeTopology::new(Quat::from_rotation_y(FRAC_PI_2));
        let axis = topology.rotation_axis(Direction::Down);
        assert!((axis - Vec3::NEG_Z).length() < 1e-6, "got {axis:?}");
    }

    #[test]
    fn test_quarter_turn_per_direction() {
        for direction in Direction::ALL {
            let mut topology = CameraRelativeTopology::default();
            let target = topology.next_orientation(&Quat::IDENTITY, direction);
            let angle = Quat::IDENTITY.angle_between(target);
            assert!(
                (angle - FRAC_PI_2).abs() < 1e-4,
                "{direction:?} turned by {angle}"
            );
        }
    }

    #[test]
    fn test_composition_is_world_space() {
        let mut topology = CameraRelativeTopology::default();
        let after_up = topology.next_orientation(&Quat::IDENTITY, Direction::Up);
        let after_left = topology.next_orientation(&after_up, Direction::Left);
        // Left is +90° about world Y: the face at world +Z moves to world +X.
        let facing = after_left.inverse() * Vec3::X;
        let expected = after_up.inverse() * Vec3::Z;
        assert!((facing - expected).length() < 1e-5);
    }

    #[test]
    fn test_opposite_restores_target_exactly() {
        let mut topology = CameraRelativeTopology::default();
        for direction in Direction::ALL {
            let there = topology.next_orientation(&Quat::IDENTITY, direction);
            let back = topology.next_orientation(&there, direction.opposite());
            assert!(same_rotation(back, Quat::IDENTITY, 1e-7), "{direction:?}");
        }
    }

    #[test]
    fn test_square_up_removes_drift() {
        let noisy = Quat::from_rotation_y(FRAC_PI_2 + 1e-5);
        let clean = square_up(noisy);
        assert!(same_rotation(clean, Quat::from_rotation_y(FRAC_PI_2), 1e-6));
    }

    #[test]
    fn test_square_up_keeps_non_symmetric_rotations() {
        let tilted = Quat::from_rotation_y(0.3);
        assert!(same_rotation(square_up(tilted), tilted, 1e-6));
    }

    #[test]
    fn test_parity_vertical_steps_x() {
        let mut topology = ParityEulerTopology::new();
        let up = topology.next_orientation(&EulerDegrees::identity(), Direction::Up);
        assert_eq!(up, EulerDegrees::new(-90.0, 0.0, 0.0));
        let down = topology.next_orientation(&up, Direction::Down);
        assert_eq!(down, EulerDegrees::identity());
        assert_eq!(topology.vertical_index(), 0);
    }

    #[test]
    fn test_parity_horizontal_uses_y_when_even() {
        let mut topology = ParityEulerTopology::new();
        let left = topology.next_orientation(&EulerDegrees::identity(), Direction::Left);
        assert_eq!(left, EulerDegrees::new(0.0, 90.0, 0.0));
        let right = topology.next_orientation(&left, Direction::Right);
        assert_eq!(right, EulerDegrees::identity());
    }

    #[test]
    fn test_parity_each_direction_turns_one_axis_from_rest() {
        let expected = [
            (Direction::Up, EulerDegrees::new(-90.0, 0.0, 0.0)),
            (Direction::Down, EulerDegrees::new(90.0, 0.0, 0.0)),
            (Direction::Left, EulerDegrees::new(0.0, 90.0, 0.0)),
            (Direction::Right, EulerDegrees::new(0.0, -90.0, 0.0)),
        ];
        for (direction, want) in expected {
            let mut topology = ParityEulerTopology::new();
            let got = topology.next_orientation(&EulerDegrees::identity(), direction);
            assert_eq!(got, want, "{direction:?}");
            let changed = [got.x, got.y, got.z]
                .iter()
                .filter(|angle| **angle != 0.0)
                .count();
            assert_eq!(changed, 1, "{direction:?}");
        }
    }

    #[test]
    fn test_parity_horizontal_uses_z_when_odd() {
        let mut topology = ParityEulerTopology::new();
        let up = topology.next_orientation(&EulerDegrees::identity(), Direction::Up);
        let right = topology.next_orientation(&up, Direction::Right);
        assert_eq!(right, EulerDegrees::new(-90.0, 0.0, -90.0));
    }

    #[test]
    fn test_parity_negative_vertical_is_odd() {
        let mut topology = ParityEulerTopology::new();
        let down = topology.next_orientation(&EulerDegrees::identity(), Direction::Down);
        let left = topology.next_orientation(&down, Direction::Left);
        assert_eq!(left, EulerDegrees::new(90.0, 0.0, 90.0));
    }

    #[test]
    fn test_strategies_agree_after_one_flip() {
        let mut euler = ParityEulerTopology::new();
        let mut quat = CameraRelativeTopology::default();
        for horizontal in [Direction::Left, Direction::Right] {
            let e = euler.next_orientation(&EulerDegrees::identity(), Direction::Up);
            let e = euler.next_orientation(&e, horizontal);
            let q = quat.next_orientation(&Quat::IDENTITY, Direction::Up);
            let q = quat.next_orientation(&q, horizontal);
            assert!(same_rotation(e.to_quat(), q, 1e-5), "{horizontal:?}");
            euler = ParityEulerTopology::new();
        }
    }
}
