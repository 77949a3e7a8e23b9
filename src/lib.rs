//! Multi-level snake for the terminal, on a playfield that wraps at every
//! edge.
//!
//! The interesting part lives in [`board`]: one pair of index arrays tracks
//! which cells are open, which are walls and how the body chains from tail
//! to head, so a tick costs the same whether the snake is three segments
//! long or four hundred, and food lands uniformly on the open cells with a
//! single random draw.

pub mod board;
pub mod game;
pub mod input;
pub mod levels;
pub mod screen;
pub mod snake;

pub use board::{Board, Cell, CELLS, COLS, ROWS};
pub use game::{Game, Step, Tick};
pub use snake::{Direction, Snake};
