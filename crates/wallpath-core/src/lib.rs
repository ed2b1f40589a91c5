//! **wallpath-core** — grid maze primitives.
//!
//! This crate provides the types shared across the *wallpath* workspace:
//! geometry primitives, the four cardinal [`Direction`]s, per-cell
//! [`WallMask`]s, and an owned [`Grid`] of wall-carrying [`Cell`]s.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod wall;

pub use cell::Cell;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use wall::{Direction, WallMask};
