//! Shortest walkable routes through grid mazes with per-cell walls.
//!
//! A cell may wall off any of its four sides independently of its
//! neighbours. A step between two cardinal neighbours is blocked when either
//! cell declares a wall on the shared edge.
//!
//! The search is a 4-connected A* over a flattened copy of the maze's wall
//! masks, driven through [`Pathfinder`]:
//!
//! ```
//! use wallpath_core::{Direction, Grid, Point};
//! use wallpath_paths::Pathfinder;
//!
//! let mut grid = Grid::new(3, 2);
//! grid.build_wall(Point::new(0, 0), Direction::Right);
//!
//! let mut pf = Pathfinder::new();
//! let path = pf.find_path(Point::new(0, 0), Point::new(1, 0), &grid);
//! assert_eq!(path, vec![Point::new(0, 1), Point::new(1, 1), Point::new(1, 0)]);
//! ```
//!
//! Returned paths exclude the start cell and end with the goal. An empty
//! path means "do not move"; [`Pathfinder::try_find_path`] reports why.

mod distance;
mod error;
mod node;
mod pathfinder;
mod route;
mod traits;

pub use distance::{STRAIGHT_COST, manhattan, step_cost};
pub use error::PathError;
pub use pathfinder::{Pathfinder, find_path};
pub use route::Route;
pub use traits::WallGrid;
