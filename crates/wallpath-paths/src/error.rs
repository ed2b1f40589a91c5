use std::fmt;

use wallpath_core::Point;

/// Why a search produced no route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The goal lies outside the maze.
    InvalidTarget { target: Point, size: Point },
    /// The start lies outside the maze.
    InvalidStart { start: Point, size: Point },
    /// Both ends are inside the maze but walls separate them.
    Unreachable { start: Point, target: Point },
}

impl PathError {
    /// Severity at which [`Pathfinder::find_path`](crate::Pathfinder::find_path)
    /// reports this error.
    pub fn level(&self) -> log::Level {
        match self {
            Self::InvalidTarget { .. } | Self::InvalidStart { .. } => log::Level::Warn,
            Self::Unreachable { .. } => log::Level::Info,
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget { target, size } => {
                write!(f, "target {target} is outside the {}x{} maze", size.x, size.y)
            }
            Self::InvalidStart { start, size } => {
                write!(f, "start {start} is outside the {}x{} maze", size.x, size.y)
            }
            Self::Unreachable { start, target } => {
                write!(f, "no path from {start} to {target}")
            }
        }
    }
}

impl std::error::Error for PathError {}
