use std::io::{self, stdout, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use thiserror::Error;

use crate::board::{Cell, COLS, ROWS};
use crate::game::{Game, Step};
use crate::snake::Direction;

/// Smallest terminal the fixed layout fits in.
pub const MIN_COLS: u16 = 52;
pub const MIN_ROWS: u16 = 22;

const STATUS_Y: u16 = 0;
const SCORE_X: u16 = 7;
const LEVEL_X: u16 = 29;
const BEST_X: u16 = 49;
const BANNER_X: u16 = 14;
const BANNER_Y: u16 = 9;

const STATUS: &str = "Score:                Level:               Best:    ";
const TOP: &str = "┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┓";
const SIDE: &str = "┃                                                  ┃";
const BOTTOM: &str = "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛";
const HELP: &str = " arrows steer · n/p switch level · q quits";

const GAME_OVER: [&str; 3] = [
    "┏━━━━━━━━━━━━━━━━━━━━━━┓",
    "┃      GAME  OVER      ┃",
    "┗━━━━━━━━━━━━━━━━━━━━━━┛",
];
const LEVEL_CLEAR: [&str; 3] = [
    "┏━━━━━━━━━━━━━━━━━━━━━━┓",
    "┃     LEVEL  CLEAR     ┃",
    "┗━━━━━━━━━━━━━━━━━━━━━━┛",
];

// Every cell is two terminal columns wide so the playfield looks square.
const H_SEG: &str = "▆▆";
const V_SEG: &str = "█▌";
const WALL: &str = "▓▓";
const FOOD: &str = "● ";
const BLANK: &str = "  ";

/// Terminal column of a cell's left half.
fn cell_x(col: u16) -> u16 {
    2 * col + 1
}

/// Terminal row of a cell. Row 0 is the status line, row 1 the border.
fn cell_y(row: u16) -> u16 {
    row + 2
}

fn straight(dir: Direction) -> &'static str {
    match dir {
        Direction::Left | Direction::Right => H_SEG,
        Direction::Up | Direction::Down => V_SEG,
    }
}

/// Glyph for the cell the head just left, from the headings entering and
/// leaving it. Reversals are filtered before they get here.
fn corner(was: Direction, now: Direction) -> &'static str {
    use Direction::*;
    match (was, now) {
        (Down, Right) | (Left, Up) => "█▆",
        (Up, Right) | (Left, Down) => "▆▆",
        (Down, Left) | (Right, Up) => "█▌",
        (Up, Left) | (Right, Down) => "▆▌",
        _ => straight(now),
    }
}

/// Errors that stop the game before the terminal is touched.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("terminal too small: need {}x{}, have {cols}x{rows}", MIN_COLS, MIN_ROWS)]
    TooSmall { cols: u16, rows: u16 },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Owns the terminal for the lifetime of a session: raw mode on an
/// alternate screen with the cursor hidden, all undone on drop.
pub struct Screen {
    out: Stdout,
}

impl Screen {
    pub fn open() -> Result<Screen, SetupError> {
        let (cols, rows) = terminal::size()?;
        if cols < MIN_COLS || rows < MIN_ROWS {
            return Err(SetupError::TooSmall { cols, rows });
        }

        terminal::enable_raw_mode()?;
        let mut screen = Screen { out: stdout() };
        execute!(screen.out, EnterAlternateScreen, Hide)?;
        Ok(screen)
    }

    /// Repaints everything: frame, status values, walls, body and food.
    /// Used at round start and after level switches; ticks go through
    /// [`Screen::draw_step`].
    pub fn draw_round(&mut self, game: &Game) -> io::Result<()> {
        self.draw_frame(game)?;

        queue!(self.out, SetForegroundColor(Color::Red))?;
        for row in 0..ROWS {
            for col in 0..COLS {
                let cell = Cell::new(row, col);
                if game.board().is_blocked(cell) {
                    self.put(cell, WALL)?;
                }
            }
        }

        // A fresh round always lies straight along its heading.
        let glyph = straight(game.snake().direction());
        let body: Vec<Cell> = game.body().collect();
        if let Some((&head, rest)) = body.split_last() {
            queue!(self.out, SetForegroundColor(Color::DarkGreen))?;
            for &cell in rest {
                self.put(cell, glyph)?;
            }
            queue!(self.out, SetForegroundColor(Color::Green))?;
            self.put(head, glyph)?;
        }

        queue!(self.out, SetForegroundColor(Color::Yellow))?;
        self.put(game.food(), FOOD)?;
        self.out.flush()
    }

    /// Repaints only the cells one tick touched.
    pub fn draw_step(&mut self, game: &Game, step: &Step) -> io::Result<()> {
        queue!(self.out, SetForegroundColor(Color::DarkGreen))?;
        self.put(step.neck, corner(step.was, step.now))?;
        queue!(self.out, SetForegroundColor(Color::Green))?;
        self.put(step.head, straight(step.now))?;

        if let Some(cell) = step.freed {
            self.put(cell, BLANK)?;
        }
        if let Some(cell) = step.food {
            queue!(self.out, SetForegroundColor(Color::Yellow))?;
            self.put(cell, FOOD)?;
            queue!(
                self.out,
                SetForegroundColor(Color::White),
                MoveTo(SCORE_X, STATUS_Y),
                Print(game.score())
            )?;
        }
        self.out.flush()
    }

    pub fn draw_game_over(&mut self) -> io::Result<()> {
        self.draw_banner(&GAME_OVER)
    }

    pub fn draw_level_clear(&mut self) -> io::Result<()> {
        self.draw_banner(&LEVEL_CLEAR)
    }

    fn draw_frame(&mut self, game: &Game) -> io::Result<()> {
        queue!(self.out, SetForegroundColor(Color::White))?;
        queue!(self.out, MoveTo(0, STATUS_Y), Print(STATUS))?;
        queue!(self.out, MoveTo(0, 1), Print(TOP))?;
        for row in 0..ROWS {
            queue!(self.out, MoveTo(0, cell_y(row)), Print(SIDE))?;
        }
        queue!(self.out, MoveTo(0, cell_y(ROWS)), Print(BOTTOM))?;
        queue!(self.out, MoveTo(0, cell_y(ROWS) + 1), Print(HELP))?;

        // Levels are shown one-based.
        queue!(
            self.out,
            MoveTo(SCORE_X, STATUS_Y),
            Print(game.score()),
            MoveTo(LEVEL_X, STATUS_Y),
            Print(game.level() + 1),
            MoveTo(BEST_X, STATUS_Y),
            Print(game.best())
        )
    }

    fn draw_banner(&mut self, lines: &[&str; 3]) -> io::Result<()> {
        queue!(self.out, SetForegroundColor(Color::White))?;
        for (i, line) in lines.iter().enumerate() {
            queue!(self.out, MoveTo(BANNER_X, BANNER_Y + i as u16), Print(line))?;
        }
        self.out.flush()
    }

    fn put(&mut self, cell: Cell, glyph: &str) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(cell_x(cell.col), cell_y(cell.row)),
            Print(glyph)
        )
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        // Restore in reverse order of setup; nothing useful to do on error.
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
        let _ = terminal::disable_raw_mode();
    }
}
