//! Board grid, coordinates, and the line-of-sight connectivity scan

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board side length
pub const BOARD_SIZE: i8 = 8;

/// Piece color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Grid coordinates; x is the column, y is the row, both counted from the
/// top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Check if this coordinate is on the board
    pub fn on_board(&self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// The four corner cells never hold a piece
    pub fn is_corner(&self) -> bool {
        (self.x == 0 || self.x == BOARD_SIZE - 1) && (self.y == 0 || self.y == BOARD_SIZE - 1)
    }

    /// Whether this cell lies on one of `color`'s two goal edges.
    ///
    /// Black owns the top and bottom rows (y = 0 and y = 7), White owns the
    /// left and right columns (x = 0 and x = 7). The assignment is fixed; the
    /// opposing side may never place a piece on these cells.
    pub fn in_home_rows(&self, color: Color) -> bool {
        match color {
            Color::Black => self.y == 0 || self.y == BOARD_SIZE - 1,
            Color::White => self.x == 0 || self.x == BOARD_SIZE - 1,
        }
    }

    fn step(&self, dir: Direction) -> Coord {
        let (dx, dy) = dir.delta();
        Coord::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass direction of one hop between connected pieces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Ray scan order used by [`Grid::connections`]. Callers may rely on every
/// direct connection appearing exactly once, but not on the order itself.
pub const SCAN_ORDER: [Direction; 8] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
    Direction::NorthEast,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::NorthWest,
];

impl Direction {
    /// Unit step in grid coordinates (dx, dy); north is decreasing y
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Direction of the straight line from `a` to `b`. The two coordinates
    /// must be distinct and aligned along one of the eight compass rays.
    pub fn between(a: Coord, b: Coord) -> Direction {
        match ((b.x - a.x).signum(), (b.y - a.y).signum()) {
            (0, -1) => Direction::North,
            (1, -1) => Direction::NorthEast,
            (1, 0) => Direction::East,
            (1, 1) => Direction::SouthEast,
            (0, 1) => Direction::South,
            (-1, 1) => Direction::SouthWest,
            (-1, 0) => Direction::West,
            (-1, -1) => Direction::NorthWest,
            _ => unreachable!("direction between identical coordinates"),
        }
    }
}

/// 8x8 cell store; `None` is an empty cell
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<Color>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Piece at `at`, if any
    pub fn piece(&self, at: Coord) -> Option<Color> {
        self.cells[at.x as usize][at.y as usize]
    }

    /// Put a `color` piece on the empty cell `at`
    pub fn place(&mut self, color: Color, at: Coord) {
        debug_assert!(at.on_board());
        debug_assert!(self.cells[at.x as usize][at.y as usize].is_none());
        self.cells[at.x as usize][at.y as usize] = Some(color);
    }

    /// Take the piece off cell `at`
    pub fn lift(&mut self, at: Coord) {
        debug_assert!(at.on_board());
        debug_assert!(self.cells[at.x as usize][at.y as usize].is_some());
        self.cells[at.x as usize][at.y as usize] = None;
    }

    /// All cells directly connected to the `color` piece assumed at `from`.
    ///
    /// A connection is the first piece met along one of the eight compass
    /// rays, and only if it has the same color; a first-met opposing piece
    /// blocks the ray. Edge rules shape the scan so networks advance from a
    /// starting edge toward the far one:
    ///
    /// - a piece on a far goal edge (x = 7 or y = 7) has no connections at
    ///   all, since a network never extends past its goal;
    /// - vertical rays are skipped in the left home column (x = 0) and
    ///   horizontal rays in the top home row (y = 0);
    /// - no ray ever lands on row 0 or column 0 along an axis it moves on.
    pub fn connections(&self, color: Color, from: Coord) -> Vec<Coord> {
        if from.x == BOARD_SIZE - 1 || from.y == BOARD_SIZE - 1 {
            return Vec::new();
        }

        let mut found = Vec::new();
        for dir in SCAN_ORDER {
            let (dx, dy) = dir.delta();
            if dx == 0 && from.x == 0 {
                continue;
            }
            if dy == 0 && from.y == 0 {
                continue;
            }
            let mut at = from.step(dir);
            while at.on_board() && (dx == 0 || at.x != 0) && (dy == 0 || at.y != 0) {
                match self.piece(at) {
                    Some(c) if c == color => {
                        found.push(at);
                        break;
                    }
                    Some(_) => break,
                    None => at = at.step(dir),
                }
            }
        }
        found
    }
}

impl fmt::Display for Grid {
    /// Debug text form: one row per line, 'B'/'W'/'0' per cell
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let ch = match self.piece(Coord::new(x, y)) {
                    Some(Color::Black) => 'B',
                    Some(Color::White) => 'W',
                    None => '0',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Mid-game position with known connections and a completed network for
/// each side, shared by the crate's test suites.
#[cfg(test)]
pub(crate) fn fixture_grid() -> Grid {
    let mut grid = Grid::new();
    for (x, y) in [
        (1, 0),
        (5, 0),
        (6, 2),
        (1, 3),
        (4, 3),
        (4, 4),
        (2, 6),
        (4, 6),
        (4, 7),
        (6, 7),
    ] {
        grid.place(Color::Black, Coord::new(x, y));
    }
    for (x, y) in [
        (3, 1),
        (5, 1),
        (2, 2),
        (5, 2),
        (0, 4),
        (2, 4),
        (7, 4),
        (5, 5),
        (1, 6),
        (6, 6),
    ] {
        grid.place(Color::White, Coord::new(x, y));
    }
    grid
}
