//! Arrow keys recognized as swipe gestures.

use crate::direction::Direction;

/// A navigation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
}

impl Key {
    /// Parses a key name as reported by browsers and winit's `KeyCode` debug output.
    ///
    /// Returns `None` for keys that do not navigate.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Key> {
        Some(match name {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => return None,
        })
    }

    /// The swipe direction this key produces.
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Key::ArrowUp => Direction::Up,
            Key::ArrowDown => Direction::Down,
            Key::ArrowLeft => Direction::Left,
            Key::ArrowRight => Direction::Right,
        }
    }
}
