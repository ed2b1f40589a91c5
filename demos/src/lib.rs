//! Text front end for wallpath mazes, shared by the `maze-route` command and
//! its tests.
//!
//! A maze file holds one line per row, **top row first** (the highest `y`),
//! and one hex digit per cell giving its [`WallMask`](wallpath_core::WallMask) bits:
//! `1` left, `2` right, `4` up, `8` down. Blank lines and lines starting
//! with `#` are skipped.
//!
//! ```text
//! # 3x2, a wall between the two bottom-left cells
//! 000
//! 210
//! ```

mod maze_text;
mod render;

pub use maze_text::{MazeParseError, parse_maze, parse_point};
pub use render::render_route;
