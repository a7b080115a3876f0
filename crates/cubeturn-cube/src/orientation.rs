//! Orientation representations of the rotating body.
//!
//! Two representations exist side by side: per-axis Euler angles in degrees,
//! interpolated axis by axis, and a unit quaternion interpolated with slerp.
//! Both settle by snapping exactly onto their target.

use glam::Quat;
use std::fmt;

/// Thresholds at which an interpolating orientation snaps onto its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleTolerance {
    /// Per-axis residual in degrees below which an Euler axis snaps.
    pub euler_snap_degrees: f32,
    /// `|dot(current, target)|` above which a quaternion snaps.
    pub settle_dot: f32,
}

impl Default for SettleTolerance {
    fn default() -> Self {
        Self {
            euler_snap_degrees: 0.1,
            settle_dot: 0.99999,
        }
    }
}

/// An orientation the animator can interpolate.
pub trait Orientation: Copy + fmt::Debug + PartialEq {
    /// The rest pose.
    fn identity() -> Self;

    /// Equivalent rotation as a unit quaternion.
    fn to_quat(&self) -> Quat;

    /// Moves one interpolation step toward `target`.
    ///
    /// Returns `true` once `self` has been snapped exactly onto `target`. A
    /// step that can no longer move in f32 also snaps. A zero `factor` waits.
    fn step_toward(&mut self, target: &Self, factor: f32, tolerance: &SettleTolerance) -> bool;
}

/// Rotation about the world X, Y and Z axes in degrees, applied in XYZ order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EulerDegrees {
    /// Degrees about X.
    pub x: f32,
    /// Degrees about Y.
    pub y: f32,
    /// Degrees about Z.
    pub z: f32,
}

impl EulerDegrees {
    /// Creates an orientation from three angles in degrees.
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Advances one axis; returns `true` if it was snapped.
fn approach_axis(current: &mut f32, target: f32, factor: f32, snap: f32) -> bool {
    let residual = target - *current;
    let next = *current + residual * factor;
    if residual.abs() > snap && (next != *current || factor <= 0.0) {
        *current = next;
        false
    } else {
        *current = target;
        true
    }
}

impl Orientation for EulerDegrees {
    fn identity() -> Self {
        Self::default()
    }

    fn to_quat(&self) -> Quat {
        Quat::from_rotation_x(self.x.to_radians())
            * Quat::from_rotation_y(self.y.to_radians())
            * Quat::from_rotation_z(self.z.to_radians())
    }

    fn step_toward(&mut self, target: &Self, factor: f32, tolerance: &SettleTolerance) -> bool {
        let snap = tolerance.euler_snap_degrees;
        // Evaluate every axis; no short-circuit.
        let x = approach_axis(&mut self.x, target.x, factor, snap);
        let y = approach_axis(&mut self.y, target.y, factor, snap);
        let z = approach_axis(&mut self.z, target.z, factor, snap);
        x && y && z
    }
}

impl Orientation for Quat {
    fn identity() -> Self {
        Quat::IDENTITY
    }

    fn to_quat(&self) -> Quat {
        *self
    }

    fn step_toward(&mut self, target: &Self, factor: f32, tolerance: &SettleTolerance) -> bool {
        // q and -q are the same rotation; interpolate within one hemisphere.
        let aligned = if self.dot(*target) < 0.0 {
            -*target
        } else {
            *target
        };
        if factor <= 0.0 {
            return false;
        }
        let before = self.dot(aligned);
        *self = self.slerp(aligned, factor);
        let after = self.dot(aligned);
        if after > tolerance.settle_dot || after <= before {
            *self = *target;
            true
        } else {
            false
        }
    }
}

/// Whether two quaternions describe the same rotation within `epsilon`.
#[must_use]
pub(crate) fn same_rotation(a: Quat, b: Quat, epsilon: f32) -> bool {
    a.dot(b).abs() > 1.0 - epsilon
}
