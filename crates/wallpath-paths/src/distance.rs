use wallpath_core::Point;

/// Cost of one cardinal step. Costs stay integral.
pub const STRAIGHT_COST: i32 = 10;

/// Step cost and A* heuristic: `STRAIGHT_COST * |dx - dy|`.
///
/// Between cardinal neighbours this is exactly [`STRAIGHT_COST`]. As an
/// estimate to the goal it never exceeds `STRAIGHT_COST * manhattan`, and it
/// changes by at most one step per move, so it stays admissible and
/// consistent on a 4-connected grid.
#[inline]
pub fn step_cost(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    STRAIGHT_COST * (dx - dy).abs()
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
