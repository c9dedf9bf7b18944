//! Board geometry: grid positions and movement directions.
//!
//! The board origin is the top-left wall cell; `x` grows rightward and `y`
//! grows downward, matching how every frontend addresses its cells.

/// A cell position on the board grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column, 0-based from the left wall.
    pub x: i32,
    /// Row, 0-based from the top wall.
    pub y: i32,
}

impl Point {
    /// Create a point from column and row coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring point one cell away in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A movement direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the top wall (decreasing `y`).
    Up,
    /// Toward the bottom wall (increasing `y`).
    Down,
    /// Toward the left wall (decreasing `x`).
    Left,
    /// Toward the right wall (increasing `x`).
    Right,
}

impl Direction {
    /// The opposing direction: Up/Down and Left/Right swap.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when `other` is the exact opposite of `self`.
    pub fn is_opposite(self, other: Self) -> bool {
        self.opposite() == other
    }

    /// The `(dx, dy)` offset of one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}
