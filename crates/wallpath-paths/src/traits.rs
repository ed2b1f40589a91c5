use wallpath_core::{Direction, Grid, Point, Range, WallMask};

/// Read access to a maze's wall masks, all the search needs from it.
///
/// Dimensions are re-read on every search, so an implementor may change size
/// between calls.
pub trait WallGrid {
    /// Width (`x`) and height (`y`) in cells.
    fn size(&self) -> Point;

    /// Walls of the in-bounds cell `p`.
    fn wall_mask(&self, p: Point) -> WallMask;

    /// Whether `p` lies inside the maze.
    fn contains(&self, p: Point) -> bool {
        Range::with_size(self.size()).contains(p)
    }

    /// Whether one step from `from` in `dir` stays inside the maze and is
    /// not walled off by either cell.
    fn can_step(&self, from: Point, dir: Direction) -> bool {
        let to = from + dir.offset();
        self.contains(from)
            && self.contains(to)
            && !WallMask::blocks_step(self.wall_mask(from), self.wall_mask(to), dir)
    }
}

impl WallGrid for Grid {
    #[inline]
    fn size(&self) -> Point {
        Grid::size(self)
    }

    #[inline]
    fn wall_mask(&self, p: Point) -> WallMask {
        self.walls(p).unwrap_or(WallMask::ALL)
    }
}

/// Column-major `grid[x][y]` masks, as a 2-D array exported by an engine.
///
/// The height is taken from the first column; ragged columns are a caller
/// bug and panic on access.
impl WallGrid for Vec<Vec<WallMask>> {
    fn size(&self) -> Point {
        let height = self.first().map_or(0, Vec::len);
        Point::new(self.len() as i32, height as i32)
    }

    fn wall_mask(&self, p: Point) -> WallMask {
        self[p.x as usize][p.y as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_can_step() {
        let mut g = Grid::new(2, 2);
        g.set_walls(Point::new(1, 0), WallMask::LEFT);
        assert!(!g.can_step(Point::new(0, 0), Direction::Right));
        assert!(!g.can_step(Point::new(1, 0), Direction::Left));
        assert!(g.can_step(Point::new(0, 0), Direction::Up));
        assert!(!g.can_step(Point::new(0, 0), Direction::Down));
        assert!(!g.can_step(Point::new(5, 5), Direction::Up));
    }

    #[test]
    fn nested_vec_is_column_major() {
        // 2 columns, 3 rows.
        let mut cols = vec![vec![WallMask::NONE; 3]; 2];
        cols[1][2] = WallMask::DOWN;
        assert_eq!(WallGrid::size(&cols), Point::new(2, 3));
        assert_eq!(cols.wall_mask(Point::new(1, 2)), WallMask::DOWN);
        assert!(!cols.can_step(Point::new(1, 1), Direction::Up));
        assert!(cols.can_step(Point::new(0, 1), Direction::Up));
        assert_eq!(WallGrid::size(&Vec::<Vec<WallMask>>::new()), Point::ZERO);
    }
}
