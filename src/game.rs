use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Cell, COLS, ROWS};
use crate::levels::{self, LEVELS};
use crate::snake::{Direction, Snake};

/// Where every round's snake is seeded, heading right along row 8. All nine
/// levels keep this runway clear.
const SPAWN: Cell = Cell {
    row: ROWS / 2,
    col: COLS / 2 - 4,
};

/// Segments the snake starts a round with.
const START_LEN: usize = 3;

/// Outcome of one simulation tick.
pub enum Tick {
    Step(Step),
    GameOver,
    LevelClear,
}

/// The cells one successful move touched, so the renderer can repaint just
/// those instead of the whole playfield.
pub struct Step {
    /// Cell the head moved out of.
    pub neck: Cell,
    /// Cell the head moved into.
    pub head: Cell,
    /// Heading of the previous move and of this one. Picks the neck glyph.
    pub was: Direction,
    pub now: Direction,
    /// Old tail cell, open again, unless the move ate.
    pub freed: Option<Cell>,
    /// Fresh food position, when the move ate.
    pub food: Option<Cell>,
}

pub struct Game {
    board: Board,
    snake: Snake,
    level: usize,
    score: u32,
    best: [u32; LEVELS],
    food: Cell,
    rng: StdRng,
}

impl Game {
    pub fn new() -> Game {
        Game::with_rng(StdRng::from_entropy())
    }

    pub fn with_rng(rng: StdRng) -> Game {
        let mut game = Game {
            board: Board::new(),
            snake: Snake::new(SPAWN, Direction::Right),
            level: 0,
            score: 0,
            best: [0; LEVELS],
            food: SPAWN,
            rng,
        };
        game.start_round();
        game
    }

    /// Begins a fresh round on the current level: records any new best,
    /// rebuilds the board from the level's walls, seeds the starting body on
    /// the runway and drops the first food.
    pub fn start_round(&mut self) {
        self.commit_best();
        self.score = 0;

        let level = self.level;
        self.board.reset(|cell| levels::is_blocked(level, cell));

        self.board.seed(SPAWN);
        self.snake = Snake::new(SPAWN, Direction::Right);
        for _ in 1..START_LEN {
            let next = self.snake.next_head();
            let ok = self
                .board
                .advance_head(self.snake.head, self.snake.tail, next);
            assert!(ok, "level {level} walls the spawn runway");
            self.snake.advanced(next);
        }

        self.food = self
            .board
            .random_open(&mut self.rng)
            .expect("level leaves no cell open for food");
    }

    /// Moves to the level `delta` steps away, wrapping past either end, and
    /// starts a round there. The running score counts toward the level it
    /// was earned on, not the new one.
    pub fn switch_level(&mut self, delta: isize) {
        self.commit_best();
        self.score = 0;
        let levels = LEVELS as isize;
        self.level = (self.level as isize + delta).rem_euclid(levels) as usize;
        self.start_round();
    }

    fn commit_best(&mut self) {
        if self.score > self.best[self.level] {
            self.best[self.level] = self.score;
        }
    }

    pub fn steer(&mut self, dir: Direction) {
        self.snake.steer(dir);
    }

    /// Runs one tick: the head moves one cell along its heading. Entering a
    /// wall or body cell ends the round; entering the food cell grows the
    /// body and scores; anything else shifts the body forward by releasing
    /// the tail.
    pub fn advance(&mut self) -> Tick {
        let (was, now) = self.snake.turn();
        let neck = self.snake.head;
        let next = self.snake.next_head();

        if !self
            .board
            .advance_head(self.snake.head, self.snake.tail, next)
        {
            return Tick::GameOver;
        }
        self.snake.advanced(next);

        let mut step = Step {
            neck,
            head: next,
            was,
            now,
            freed: None,
            food: None,
        };

        if next == self.food {
            self.score += 1;
            match self.board.random_open(&mut self.rng) {
                Some(cell) => {
                    self.food = cell;
                    step.food = Some(cell);
                }
                None => return Tick::LevelClear,
            }
        } else {
            step.freed = Some(self.snake.tail);
            self.snake.tail = self.board.release_tail(self.snake.head, self.snake.tail);
        }

        Tick::Step(step)
    }

    /// Body cells from tail to head, following the board's chain.
    pub fn body(&self) -> impl Iterator<Item = Cell> + '_ {
        let mut cell = self.snake.tail;
        (0..self.board.body_len()).map(move |_| {
            let here = cell;
            cell = self.board.next_segment(cell);
            here
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Best score recorded for the current level.
    pub fn best(&self) -> u32 {
        self.best[self.level]
    }

    /// Test support: replaces the round's body with an explicit chain.
    /// `cells` runs tail first; consecutive entries need not be adjacent.
    /// Score, level and bests are left alone, and food moves to some open
    /// cell.
    pub fn debug_set_snake(&mut self, cells: &[Cell], dir: Direction) {
        assert!(!cells.is_empty(), "a snake needs at least one segment");

        let level = self.level;
        self.board.reset(|cell| levels::is_blocked(level, cell));
        self.board.seed(cells[0]);

        let mut head = cells[0];
        for &next in &cells[1..] {
            let ok = self.board.advance_head(head, cells[0], next);
            assert!(ok, "body cells must be open and distinct");
            head = next;
        }

        self.snake = Snake::new(head, dir);
        self.snake.tail = cells[0];
        self.food = self
            .board
            .random_open(&mut self.rng)
            .expect("body covers the whole playfield");
    }

    /// Test support: pins the food to a known open cell.
    pub fn debug_set_food(&mut self, cell: Cell) {
        assert!(self.board.is_open(cell), "food must sit on an open cell");
        self.food = cell;
    }
}
