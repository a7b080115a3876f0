//! The four discrete swipe directions.

use serde::{Deserialize, Serialize};

/// A recognized swipe direction.
///
/// Names follow the scroll convention: positive wheel/drag displacement
/// along Y is `Up`, along X is `Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Vertical, positive.
    Up,
    /// Vertical, negative.
    Down,
    /// Horizontal, negative.
    Left,
    /// Horizontal, positive.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction that undoes this one.
    #[must_use]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Whether this is `Up` or `Down`.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Direction for a signed displacement on the vertical axis.
    pub(crate) fn vertical(delta: f32) -> Direction {
        if delta > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Direction for a signed displacement on the horizontal axis.
    pub(crate) fn horizontal(delta: f32) -> Direction {
        if delta > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn test_opposite_preserves_axis() {
        for direction in Direction::ALL {
            assert_eq!(direction.is_vertical(), direction.opposite().is_vertical());
        }
    }

    #[test]
    fn test_direction_ron_names() {
        let s = ron::to_string(&Direction::Left).unwrap();
        assert_eq!(s, "Left");
        let back: Direction = ron::from_str("Up").unwrap();
        assert_eq!(back, Direction::Up);
    }
}
