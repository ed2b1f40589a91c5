use std::collections::HashSet;

use wallpath_core::{Direction, Grid, Point};
use wallpath_paths::Route;

/// Draw `grid` as ASCII with `route` overlaid, top row first.
///
/// `S` marks `start`, `E` the goal, `*` the other waypoints and `.` every
/// other cell. Edges walled by either neighbour are drawn as `|` or `-`;
/// `+` marks corners.
pub fn render_route(grid: &Grid, start: Point, route: &Route) -> String {
    let on_route: HashSet<Point> = route.waypoints().collect();
    let goal = route.goal();
    let mut out = String::new();

    for y in (0..grid.height()).rev() {
        horizontal_edges(&mut out, grid, y, Direction::Up);

        let first = Point::new(0, y);
        out.push(if edge_walled(grid, first, Direction::Left) { '|' } else { ' ' });
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let glyph = if p == start {
                'S'
            } else if Some(p) == goal {
                'E'
            } else if on_route.contains(&p) {
                '*'
            } else {
                '.'
            };
            out.push(glyph);
            out.push(if edge_walled(grid, p, Direction::Right) { '|' } else { ' ' });
        }
        out.push('\n');
    }
    if grid.height() > 0 {
        horizontal_edges(&mut out, grid, 0, Direction::Down);
    }
    out
}

fn horizontal_edges(out: &mut String, grid: &Grid, y: i32, dir: Direction) {
    for x in 0..grid.width() {
        out.push('+');
        out.push(if edge_walled(grid, Point::new(x, y), dir) { '-' } else { ' ' });
    }
    out.push_str("+\n");
}

/// Whether either cell on the edge of `p` facing `dir` declares a wall.
fn edge_walled(grid: &Grid, p: Point, dir: Direction) -> bool {
    let mine = grid.walls(p).is_some_and(|m| m.blocks(dir));
    let theirs = grid
        .walls(p + dir.offset())
        .is_some_and(|m| m.blocks(dir.opposite()));
    mine || theirs
}
