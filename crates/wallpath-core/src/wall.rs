//! Cardinal movement: [`Direction`] and the per-cell [`WallMask`].

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::geom::Point;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four axis directions a cell can be left through.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order neighbours are expanded during search.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit offset of one step in this direction. Up is `+y`.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
            Direction::Up => Point::new(0, 1),
            Direction::Down => Point::new(0, -1),
        }
    }

    /// The direction pointing back.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// The wall bit closing this side of a cell.
    #[inline]
    pub const fn wall(self) -> WallMask {
        match self {
            Direction::Left => WallMask::LEFT,
            Direction::Right => WallMask::RIGHT,
            Direction::Up => WallMask::UP,
            Direction::Down => WallMask::DOWN,
        }
    }

    /// The direction of a unit cardinal offset, if `d` is one.
    pub fn from_offset(d: Point) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.offset() == d)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// WallMask
// ---------------------------------------------------------------------------

/// Bitmask of the impassable sides of a cell.
///
/// Walls are declared per cell, so two neighbours may disagree about their
/// shared edge. Movement across an edge is blocked when either side
/// declares it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallMask(pub u8);

impl WallMask {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);
    pub const UP: Self = Self(1 << 2);
    pub const DOWN: Self = Self(1 << 3);
    pub const ALL: Self = Self(0b1111);

    /// Build a mask from the low four bits of `bits`; higher bits are dropped.
    #[inline]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether the side facing `dir` is walled.
    #[inline]
    pub const fn blocks(self, dir: Direction) -> bool {
        self.contains(dir.wall())
    }

    /// Whether a step in `dir` from a cell walled by `from` into a cell
    /// walled by `to` is blocked. Either side declaring the shared edge
    /// blocks it.
    #[inline]
    pub const fn blocks_step(from: Self, to: Self, dir: Direction) -> bool {
        from.blocks(dir) || to.blocks(dir.opposite())
    }

    /// Set the bits of `other`.
    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clear the bits of `other`.
    #[inline]
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl BitOr for WallMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for WallMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for WallMask {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl From<Direction> for WallMask {
    #[inline]
    fn from(d: Direction) -> Self {
        d.wall()
    }
}
