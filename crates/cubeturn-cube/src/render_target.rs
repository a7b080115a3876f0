//! Objects kept in sync with the animated orientation.

use glam::Quat;
use std::cell::Cell;
use std::rc::Rc;

/// Something the controller rotates: the body itself or an outline/glow mirror.
pub trait RenderTarget {
    /// Applies the controller's current orientation verbatim.
    fn set_rotation(&mut self, rotation: Quat);
}

/// A rotation slot shared between the controller and the host's scene.
///
/// Clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct SharedRotation(Rc<Cell<Quat>>);

impl SharedRotation {
    /// Creates a slot holding the identity rotation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest rotation written by the controller.
    #[must_use]
    pub fn get(&self) -> Quat {
        self.0.get()
    }
}

impl RenderTarget for SharedRotation {
    fn set_rotation(&mut self, rotation: Quat) {
        self.0.set(rotation);
    }
}
