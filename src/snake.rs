use crate::board::{Cell, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// One step from `from`, wrapping off any edge onto the opposite one.
    pub fn step(self, from: Cell) -> Cell {
        let Cell { row, col } = from;
        match self {
            Direction::Up => Cell::new((row + ROWS - 1) % ROWS, col),
            Direction::Down => Cell::new((row + 1) % ROWS, col),
            Direction::Left => Cell::new(row, (col + COLS - 1) % COLS),
            Direction::Right => Cell::new(row, (col + 1) % COLS),
        }
    }
}

/// Endpoints and heading of the body. The segments in between live in the
/// board's chain, not here.
#[derive(Debug, Clone)]
pub struct Snake {
    pub head: Cell,
    pub tail: Cell,
    dir: Direction,
    prev_dir: Direction,
}

impl Snake {
    pub fn new(at: Cell, dir: Direction) -> Snake {
        Snake {
            head: at,
            tail: at,
            dir,
            prev_dir: dir,
        }
    }

    /// Applies a requested turn. Turning straight back into the neck is
    /// dropped; every other request wins, including repeats.
    pub fn steer(&mut self, dir: Direction) {
        if dir != self.dir.opposite() {
            self.dir = dir;
        }
    }

    /// The cell the head enters if the next move succeeds.
    pub fn next_head(&self) -> Cell {
        self.dir.step(self.head)
    }

    /// Commits a successful move of the head onto `to`.
    pub fn advanced(&mut self, to: Cell) {
        self.head = to;
        self.prev_dir = self.dir;
    }

    pub fn direction(&self) -> Direction {
        self.dir
    }

    /// Headings of the previous move and the upcoming one, in that order.
    /// The renderer picks the neck glyph from this pair.
    pub fn turn(&self) -> (Direction, Direction) {
        (self.prev_dir, self.dir)
    }
}
