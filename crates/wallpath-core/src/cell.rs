//! The [`Cell`] type — a single maze square and its walls.

use crate::wall::{Direction, WallMask};

/// One maze cell. Only its walls matter to movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub walls: WallMask,
}

impl Cell {
    /// A cell with no walls.
    pub const OPEN: Self = Self {
        walls: WallMask::NONE,
    };

    /// A cell walled on every side.
    pub const CLOSED: Self = Self {
        walls: WallMask::ALL,
    };

    /// Add a wall on one side (builder).
    #[inline]
    pub const fn with_wall(mut self, dir: Direction) -> Self {
        self.walls = WallMask(self.walls.0 | dir.wall().0);
        self
    }
}

impl From<WallMask> for Cell {
    #[inline]
    fn from(walls: WallMask) -> Self {
        Self { walls }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_builder() {
        let c = Cell::OPEN
            .with_wall(Direction::Left)
            .with_wall(Direction::Down);
        assert_eq!(c.walls, WallMask::LEFT | WallMask::DOWN);
        assert_eq!(Cell::default(), Cell::OPEN);
        assert_eq!(Cell::from(WallMask::ALL), Cell::CLOSED);
        assert_eq!(Cell::from(WallMask::UP).walls, WallMask::UP);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let c = Cell::OPEN.with_wall(Direction::Right).with_wall(Direction::Up);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"walls":6}"#);
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
