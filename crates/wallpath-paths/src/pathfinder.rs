use std::collections::BinaryHeap;

use log::{debug, log};
use wallpath_core::{Direction, Point, Range, WallMask};

use crate::distance::step_cost;
use crate::error::PathError;
use crate::node::{NO_PARENT, Node, NodeRef, NodeState};
use crate::route::Route;
use crate::traits::WallGrid;

/// Grid A* over wall-masked cells.
///
/// A `Pathfinder` only keeps scratch buffers between calls. Every search
/// re-reads the maze size, re-flattens its walls and resets all nodes, so
/// results never depend on earlier calls. Searches take `&mut self`; run
/// parallel searches with one `Pathfinder` each.
#[derive(Debug, Default)]
pub struct Pathfinder {
    size: Point,
    walls: Vec<WallMask>,
    nodes: Vec<Node>,
    open: BinaryHeap<NodeRef>,
}

/// Find a path with a throwaway [`Pathfinder`].
///
/// See [`Pathfinder::find_path`].
pub fn find_path<G: WallGrid + ?Sized>(start: Point, end: Point, grid: &G) -> Vec<Point> {
    Pathfinder::new().find_path(start, end, grid)
}

impl Pathfinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortest walkable path from `start` to `end`.
    ///
    /// The path excludes `start` and ends with `end`. It is empty when `end`
    /// (or `start`) lies outside the maze, when walls separate the two, and
    /// when `start == end`. Failures are logged: out-of-bounds endpoints at
    /// warn level, unreachable goals at info level.
    pub fn find_path<G: WallGrid + ?Sized>(
        &mut self,
        start: Point,
        end: Point,
        grid: &G,
    ) -> Vec<Point> {
        match self.try_find_path(start, end, grid) {
            Ok(path) => path,
            Err(e) => {
                log!(e.level(), "{e}");
                Vec::new()
            }
        }
    }

    /// Like [`find_path`](Self::find_path), wrapped as a [`Route`].
    pub fn route<G: WallGrid + ?Sized>(&mut self, start: Point, end: Point, grid: &G) -> Route {
        Route::from(self.find_path(start, end, grid))
    }

    /// Shortest walkable path from `start` to `end`, or the reason there is
    /// none. `start == end` yields `Ok` with an empty path.
    pub fn try_find_path<G: WallGrid + ?Sized>(
        &mut self,
        start: Point,
        end: Point,
        grid: &G,
    ) -> Result<Vec<Point>, PathError> {
        self.size = grid.size();
        let bounds = Range::with_size(self.size);
        if !bounds.contains(end) {
            return Err(PathError::InvalidTarget {
                target: end,
                size: self.size,
            });
        }
        if !bounds.contains(start) {
            return Err(PathError::InvalidStart {
                start,
                size: self.size,
            });
        }

        self.flatten(grid, bounds);
        self.reset_nodes(end, bounds);

        let start_idx = self.idx(start);
        let goal_idx = self.idx(end);
        if start_idx == goal_idx {
            debug!("start {start} is already the goal");
            return Ok(Vec::new());
        }

        let expanded = self.search(start_idx, goal_idx);
        let path = self.reconstruct(goal_idx).ok_or(PathError::Unreachable {
            start,
            target: end,
        })?;
        debug!(
            "path {start} -> {end}: {} steps, {expanded} nodes expanded",
            path.len()
        );
        Ok(path)
    }

    /// Copy the maze's wall masks in flat-index order.
    fn flatten<G: WallGrid + ?Sized>(&mut self, grid: &G, bounds: Range) {
        self.walls.clear();
        self.walls.extend(bounds.iter().map(|p| grid.wall_mask(p)));
    }

    fn reset_nodes(&mut self, goal: Point, bounds: Range) {
        self.nodes.clear();
        self.nodes
            .extend(bounds.iter().map(|p| Node::new(step_cost(p, goal))));
        self.open.clear();
    }

    /// Run A* until the goal is selected or the open set runs dry. Returns
    /// the number of expanded (closed) nodes.
    fn search(&mut self, start_idx: usize, goal_idx: usize) -> usize {
        let mut seq: u32 = 0;
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.state = NodeState::Open;
            self.open.push(NodeRef {
                idx: start_idx,
                f: node.f(),
                h: node.h,
                seq,
            });
        }

        let mut expanded = 0;
        while let Some(current) = self.open.pop() {
            let ci = current.idx;

            // Skip entries superseded by a cheaper push or already closed.
            if self.nodes[ci].state != NodeState::Open || current.f != self.nodes[ci].f() {
                continue;
            }

            if ci == goal_idx {
                break;
            }

            self.nodes[ci].state = NodeState::Closed;
            expanded += 1;

            let current_point = self.point(ci);
            let current_g = self.nodes[ci].g;
            let current_walls = self.walls[ci];

            for dir in Direction::ALL {
                let np = current_point + dir.offset();
                if !self.contains(np) {
                    continue;
                }
                let ni = self.idx(np);
                if self.nodes[ni].state == NodeState::Closed
                    || WallMask::blocks_step(current_walls, self.walls[ni], dir)
                {
                    continue;
                }

                let tentative_g = current_g + step_cost(current_point, np);
                let n = &mut self.nodes[ni];
                if tentative_g >= n.g {
                    continue;
                }
                n.g = tentative_g;
                n.parent = ci;
                n.state = NodeState::Open;

                seq += 1;
                self.open.push(NodeRef {
                    idx: ni,
                    f: n.f(),
                    h: n.h,
                    seq,
                });
            }
        }
        expanded
    }

    /// Walk parents back from the goal. `None` if the goal was never reached.
    fn reconstruct(&self, goal_idx: usize) -> Option<Vec<Point>> {
        if self.nodes[goal_idx].parent == NO_PARENT {
            return None;
        }
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while self.nodes[ci].parent != NO_PARENT {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    #[inline]
    fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.size.x && p.y < self.size.y
    }

    /// Flat index of an in-bounds point: `x + y * width`.
    #[inline]
    fn idx(&self, p: Point) -> usize {
        p.x as usize + p.y as usize * self.size.x as usize
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        let w = self.size.x as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::distance::manhattan;
    use proptest::prelude::*;
    use std::collections::VecDeque;
    use wallpath_core::Grid;

    /// Brute-force step count from `start` to `end` by breadth-first search.
    fn bfs_steps(grid: &Grid, start: Point, end: Point) -> Option<usize> {
        let mut dist = vec![usize::MAX; grid.bounds().len()];
        let index = |p: Point| (p.x + p.y * grid.width()) as usize;
        let mut queue = VecDeque::new();
        dist[index(start)] = 0;
        queue.push_back(start);
        while let Some(cur) = queue.pop_front() {
            if cur == end {
                return Some(dist[index(cur)]);
            }
            for dir in Direction::ALL {
                if !grid.can_step(cur, dir) {
                    continue;
                }
                let next = cur + dir.offset();
                if dist[index(next)] == usize::MAX {
                    dist[index(next)] = dist[index(cur)] + 1;
                    queue.push_back(next);
                }
            }
        }
        None
    }

    fn maze() -> impl Strategy<Value = (Grid, Point, Point)> {
        (1i32..7, 1i32..7).prop_flat_map(|(w, h)| {
            let mask = prop_oneof![2 => Just(0u8), 3 => 0u8..16];
            (
                proptest::collection::vec(mask, (w * h) as usize),
                0..w,
                0..h,
                0..w,
                0..h,
            )
                .prop_map(move |(masks, sx, sy, ex, ey)| {
                    let mut grid = Grid::new(w, h);
                    for (p, m) in grid.bounds().iter().zip(masks) {
                        grid.set_walls(p, WallMask::from_bits_truncate(m));
                    }
                    (grid, Point::new(sx, sy), Point::new(ex, ey))
                })
        })
    }

    proptest! {
        #[test]
        fn path_is_shortest_and_walkable((grid, start, end) in maze()) {
            let path = find_path(start, end, &grid);
            match bfs_steps(&grid, start, end) {
                None | Some(0) => prop_assert!(path.is_empty()),
                Some(steps) => {
                    prop_assert_eq!(path.len(), steps);
                    prop_assert_eq!(path.last(), Some(&end));
                    prop_assert!(!path.contains(&start));
                    prop_assert!(Route::from(path).is_walkable_on(start, &grid));
                }
            }
        }

        #[test]
        fn open_grid_path_is_manhattan(
            w in 1i32..10,
            h in 1i32..10,
            sx in 0i32..10,
            sy in 0i32..10,
            ex in 0i32..10,
            ey in 0i32..10,
        ) {
            let grid = Grid::new(w, h);
            let start = Point::new(sx % w, sy % h);
            let end = Point::new(ex % w, ey % h);
            let path = find_path(start, end, &grid);
            prop_assert_eq!(path.len() as i32, manhattan(start, end));
        }
    }
}
