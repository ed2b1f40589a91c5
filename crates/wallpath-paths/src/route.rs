use std::collections::VecDeque;

use wallpath_core::{Direction, Point};

use crate::distance::STRAIGHT_COST;
use crate::traits::WallGrid;

/// Waypoints to visit in order, consumed from the front as a mover arrives.
///
/// The mover's own cell is never part of a route; the last waypoint is the
/// goal. An empty route means "do not move".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    waypoints: VecDeque<Point>,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining waypoints, next first.
    pub fn waypoints(&self) -> impl Iterator<Item = Point> + '_ {
        self.waypoints.iter().copied()
    }

    /// Remaining number of steps.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Movement cost of the remaining steps.
    pub fn cost(&self) -> i32 {
        STRAIGHT_COST * self.waypoints.len() as i32
    }

    pub fn goal(&self) -> Option<Point> {
        self.waypoints.back().copied()
    }

    /// The waypoint to head for now.
    pub fn next_waypoint(&self) -> Option<Point> {
        self.waypoints.front().copied()
    }

    /// Drop the front waypoint once it has been reached and return it.
    pub fn advance(&mut self) -> Option<Point> {
        self.waypoints.pop_front()
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.waypoints.into()
    }

    /// Whether a mover standing on `start` can follow the whole route on
    /// `grid`: every step is one cardinal move that stays inside the maze and
    /// crosses no wall declared by either cell.
    pub fn is_walkable_on<G: WallGrid + ?Sized>(&self, start: Point, grid: &G) -> bool {
        let mut from = start;
        for to in self.waypoints() {
            let Some(dir) = Direction::from_offset(to - from) else {
                return false;
            };
            if !grid.can_step(from, dir) {
                return false;
            }
            from = to;
        }
        true
    }
}

impl From<Vec<Point>> for Route {
    fn from(path: Vec<Point>) -> Self {
        Self {
            waypoints: path.into(),
        }
    }
}

impl IntoIterator for Route {
    type Item = Point;
    type IntoIter = std::collections::vec_deque::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.into_iter()
    }
}
