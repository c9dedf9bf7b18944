//! The snake: an ordered body of grid cells and a heading.

use std::collections::VecDeque;

use crate::geometry::{Direction, Point};

/// Number of segments a snake starts with.
pub const INITIAL_LENGTH: usize = 4;

/// The player-controlled snake. Head first, tail last; insertion order is
/// physical order along the body.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Point>,
    direction: Direction,
}

impl Snake {
    /// Create a snake with `length` segments (at least 1), head at `head`,
    /// the rest of the body trailing opposite to `direction`.
    pub fn new(head: Point, direction: Direction, length: usize) -> Self {
        let length = length.max(1);
        let mut body = VecDeque::with_capacity(length);
        let mut cell = head;
        for _ in 0..length {
            body.push_back(cell);
            cell = cell.step(direction.opposite());
        }
        Self { body, direction }
    }

    /// Current head position.
    pub fn head(&self) -> Point {
        self.body[0]
    }

    /// Body segments in order, head first.
    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    /// Number of body segments.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// True when the body has no segments. A constructed snake always has
    /// at least one.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Current movement direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advance one cell: a new head is pushed in front, the tail cell is
    /// dropped. No bounds or collision checks happen here.
    pub fn advance(&mut self) {
        let head = self.next_head();
        self.body.push_front(head);
        self.body.pop_back();
    }

    /// Extend one cell: a new head is pushed in front and the tail is kept,
    /// so the body grows by one.
    pub fn grow(&mut self) {
        let head = self.next_head();
        self.body.push_front(head);
    }

    /// True when `pos` lies on any segment, head included.
    pub fn occupies(&self, pos: Point) -> bool {
        self.body.contains(&pos)
    }

    /// True when the head overlaps any other segment.
    pub fn self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&seg| seg == head)
    }

    /// Turn the snake. A request for the exact opposite of the current
    /// direction is ignored, so the head can never fold onto its neck; the
    /// check runs here, at input time, never after a move.
    pub fn set_direction(&mut self, dir: Direction) {
        if dir.is_opposite(self.direction) {
            return;
        }
        self.direction = dir;
    }

    fn next_head(&self) -> Point {
        self.head().step(self.direction)
    }
}
