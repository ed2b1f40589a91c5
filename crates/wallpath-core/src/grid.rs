//! An owned, fixed-size grid of maze cells.
//!
//! Cells are stored row-major: the cell at `(x, y)` lives at `x + y * width`.

use crate::cell::Cell;
use crate::geom::{Point, Range};
use crate::wall::{Direction, WallMask};

/// A rectangular maze of [`Cell`]s addressed by `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a new grid with no walls. Negative sizes are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            cells: vec![Cell::OPEN; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The range `[0, width) x [0, height)`.
    pub fn bounds(&self) -> Range {
        Range::with_size(self.size())
    }

    /// Whether the grid contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.x as usize + p.y as usize * self.width as usize)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Wall mask of the cell at a point, or `None` if out of bounds.
    pub fn walls(&self, p: Point) -> Option<WallMask> {
        self.at(p).map(|c| c.walls)
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Replace the wall mask of one cell only. Its neighbours are untouched,
    /// which allows one-sided walls.
    pub fn set_walls(&mut self, p: Point, walls: WallMask) {
        if let Some(i) = self.index(p) {
            self.cells[i].walls = walls;
        }
    }

    /// Wall off the edge between `p` and its neighbour in `dir`, on both
    /// sides. The neighbour half is skipped if it lies outside the grid.
    pub fn build_wall(&mut self, p: Point, dir: Direction) {
        if let Some(i) = self.index(p) {
            self.cells[i].walls.insert(dir.wall());
        }
        if let Some(j) = self.index(p + dir.offset()) {
            self.cells[j].walls.insert(dir.opposite().wall());
        }
    }

    /// Open the edge between `p` and its neighbour in `dir`, on both sides.
    pub fn remove_wall(&mut self, p: Point, dir: Direction) {
        if let Some(i) = self.index(p) {
            self.cells[i].walls.remove(dir.wall());
        }
        if let Some(j) = self.index(p + dir.offset()) {
            self.cells[j].walls.remove(dir.opposite().wall());
        }
    }

    /// Wall off all four edges of `p`.
    pub fn enclose(&mut self, p: Point) {
        for dir in Direction::ALL {
            self.build_wall(p, dir);
        }
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_size() {
        let g = Grid::new(10, 5);
        assert_eq!(g.size(), Point::new(10, 5));
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.iter().count(), 50);
        assert_eq!(Grid::new(-3, 2).size(), Point::new(0, 2));
    }

    #[test]
    fn test_set_and_at() {
        let mut g = Grid::new(4, 4);
        let p = Point::new(2, 3);
        g.set(p, Cell::CLOSED);
        assert_eq!(g.at(p), Some(Cell::CLOSED));
        assert_eq!(g.at(Point::new(0, 0)), Some(Cell::OPEN));
        assert_eq!(g.at(Point::new(10, 10)), None);
        assert_eq!(g.walls(Point::new(-1, 0)), None);
        // Out-of-bounds writes are ignored.
        g.set(Point::new(4, 0), Cell::CLOSED);
        assert_eq!(g.iter().filter(|(_, c)| *c == Cell::CLOSED).count(), 1);
    }

    #[test]
    fn test_set_walls_is_one_sided() {
        let mut g = Grid::new(2, 1);
        g.set_walls(Point::new(0, 0), WallMask::RIGHT);
        assert_eq!(g.walls(Point::new(0, 0)), Some(WallMask::RIGHT));
        assert_eq!(g.walls(Point::new(1, 0)), Some(WallMask::NONE));
    }

    #[test]
    fn test_build_and_remove_wall() {
        let mut g = Grid::new(3, 3);
        let p = Point::new(1, 1);
        g.build_wall(p, Direction::Up);
        assert_eq!(g.walls(p), Some(WallMask::UP));
        assert_eq!(g.walls(Point::new(1, 2)), Some(WallMask::DOWN));
        g.remove_wall(Point::new(1, 2), Direction::Down);
        assert_eq!(g.walls(p), Some(WallMask::NONE));
        assert_eq!(g.walls(Point::new(1, 2)), Some(WallMask::NONE));
    }

    #[test]
    fn test_build_wall_on_border() {
        let mut g = Grid::new(2, 2);
        g.build_wall(Point::new(0, 0), Direction::Left);
        assert_eq!(g.walls(Point::new(0, 0)), Some(WallMask::LEFT));
    }

    #[test]
    fn test_enclose() {
        let mut g = Grid::new(3, 3);
        let p = Point::new(1, 1);
        g.enclose(p);
        assert_eq!(g.walls(p), Some(WallMask::ALL));
        assert_eq!(g.walls(Point::new(0, 1)), Some(WallMask::RIGHT));
        assert_eq!(g.walls(Point::new(2, 1)), Some(WallMask::LEFT));
        assert_eq!(g.walls(Point::new(1, 0)), Some(WallMask::UP));
        assert_eq!(g.walls(Point::new(1, 2)), Some(WallMask::DOWN));
        assert_eq!(g.walls(Point::new(0, 0)), Some(WallMask::NONE));
    }

    #[test]
    fn test_iter() {
        let mut g = Grid::new(3, 2);
        g.set(Point::new(1, 0), Cell::CLOSED);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Point::new(1, 0), Cell::CLOSED));
        assert_eq!(items[3].0, Point::new(0, 1));
    }
}
