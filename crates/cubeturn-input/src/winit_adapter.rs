//! Conversions from winit events for hosts that use winit windows.
//!
//! winit reports scroll as content motion (positive = content moves right/down),
//! the recognizer expects wheel deltas in the scroll convention (positive =
//! scroll right/down), so both axes are negated.

use glam::Vec2;
use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode;

use crate::key::Key;

/// Pixels per scrolled line.
pub const LINE_HEIGHT_PX: f32 = 40.0;

/// Converts a winit scroll delta into a pixel wheel delta.
#[must_use]
pub fn wheel_delta(delta: MouseScrollDelta) -> Vec2 {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => Vec2::new(-x, -y) * LINE_HEIGHT_PX,
        MouseScrollDelta::PixelDelta(pos) => Vec2::new(-pos.x as f32, -pos.y as f32),
    }
}

impl Key {
    /// Maps a physical winit key code to a navigation key.
    #[must_use]
    pub fn from_key_code(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::ArrowUp => Some(Key::ArrowUp),
            KeyCode::ArrowDown => Some(Key::ArrowDown),
            KeyCode::ArrowLeft => Some(Key::ArrowLeft),
            KeyCode::ArrowRight => Some(Key::ArrowRight),
            _ => None,
        }
    }
}
