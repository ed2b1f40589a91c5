use std::fmt;

use wallpath_core::{Grid, Point, WallMask};

/// Errors that can occur when parsing a maze file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeParseError {
    /// No rows at all.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is not a hex digit.
    InvalidChar { ch: char, line: usize, column: usize },
    /// A dimension does not fit a grid coordinate.
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for MazeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: no rows"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "maze: line {line} has {found} cells, expected {expected}"
            ),
            Self::InvalidChar { ch, line, column } => {
                write!(f, "maze: invalid cell {ch:?} at line {line}, column {column}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "maze: {width}x{height} cells is too large")
            }
        }
    }
}

impl std::error::Error for MazeParseError {}

/// Parse a maze in the hex wall-mask format. Line and column numbers in
/// errors are 1-based and count skipped lines.
pub fn parse_maze(s: &str) -> Result<Grid, MazeParseError> {
    let mut rows: Vec<Vec<WallMask>> = Vec::new();

    for (i, line) in s.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut row = Vec::with_capacity(line.len());
        for (col, ch) in line.chars().enumerate() {
            let Some(bits) = ch.to_digit(16) else {
                return Err(MazeParseError::InvalidChar {
                    ch,
                    line: i + 1,
                    column: col + 1,
                });
            };
            row.push(WallMask::from_bits_truncate(bits as u8));
        }
        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(MazeParseError::InconsistentWidth {
                    line: i + 1,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }

    let Some(width) = rows.first().map(Vec::len) else {
        return Err(MazeParseError::Empty);
    };
    let height = rows.len();
    let (w, h) = grid_size(width, height)?;

    // The file lists the top row first; the grid stores y = 0 first.
    let mut grid = Grid::new(w, h);
    for (y, row) in (0..h).rev().zip(rows) {
        for (x, walls) in (0..w).zip(row) {
            grid.set_walls(Point::new(x, y), walls);
        }
    }
    Ok(grid)
}

/// Row and column counts as grid coordinates.
fn grid_size(width: usize, height: usize) -> Result<(i32, i32), MazeParseError> {
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(MazeParseError::TooLarge { width, height }),
    }
}

/// Parse an `X,Y` coordinate, as given on the command line.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x
        .trim()
        .parse()
        .map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y
        .trim()
        .parse()
        .map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_row_is_highest_y() {
        let g = parse_maze("48\n21\n").unwrap();
        assert_eq!(g.size(), Point::new(2, 2));
        assert_eq!(g.walls(Point::new(0, 1)), Some(WallMask::UP));
        assert_eq!(g.walls(Point::new(1, 1)), Some(WallMask::DOWN));
        assert_eq!(g.walls(Point::new(0, 0)), Some(WallMask::RIGHT));
        assert_eq!(g.walls(Point::new(1, 0)), Some(WallMask::LEFT));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let g = parse_maze("# a maze\n\n  f0f  \n\n000\n").unwrap();
        assert_eq!(g.size(), Point::new(3, 2));
        assert_eq!(g.walls(Point::new(0, 1)), Some(WallMask::ALL));
        assert_eq!(g.walls(Point::new(2, 1)), Some(WallMask::ALL));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_maze(""), Err(MazeParseError::Empty));
        assert_eq!(parse_maze("# only a comment\n"), Err(MazeParseError::Empty));
        assert_eq!(
            parse_maze("00\n000\n"),
            Err(MazeParseError::InconsistentWidth {
                line: 2,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            parse_maze("00\n0x\n"),
            Err(MazeParseError::InvalidChar {
                ch: 'x',
                line: 2,
                column: 2
            })
        );
        let msg = parse_maze("0g").unwrap_err().to_string();
        assert_eq!(msg, "maze: invalid cell 'g' at line 1, column 2");
    }

    #[test]
    fn oversized_dimensions() {
        let big = i32::MAX as usize + 1;
        assert_eq!(grid_size(3, 2), Ok((3, 2)));
        assert_eq!(grid_size(i32::MAX as usize, 1), Ok((i32::MAX, 1)));
        assert_eq!(
            grid_size(big, 1),
            Err(MazeParseError::TooLarge { width: big, height: 1 })
        );
        assert_eq!(
            grid_size(1, big),
            Err(MazeParseError::TooLarge { width: 1, height: big })
        );
        let msg = MazeParseError::TooLarge { width: 5, height: big }.to_string();
        assert_eq!(msg, format!("maze: 5x{big} cells is too large"));
    }

    #[test]
    fn points() {
        assert_eq!(parse_point("3,4"), Ok(Point::new(3, 4)));
        assert_eq!(parse_point(" -1 , 2"), Ok(Point::new(-1, 2)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }
}
