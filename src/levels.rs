//! Fixed level layouts.
//!
//! Each layout is a packed bitmask over the grid, one bit per cell in
//! row-major order with the most significant bit of each byte first. Set
//! bits are walls. Every layout leaves row 8 open from column 3 through 21,
//! which is the runway the snake spawns onto, and keeps the open cells in
//! one connected region so food is always reachable.

use crate::board::{Cell, CELLS};

pub const LEVELS: usize = 9;

const MAP_BYTES: usize = (CELLS + 7) / 8;

/// True when `cell` is a wall on `level`.
pub fn is_blocked(level: usize, cell: Cell) -> bool {
    mask_bit(&MAPS[level], cell.index())
}

fn mask_bit(mask: &[u8], bit: usize) -> bool {
    mask[bit / 8] & (0x80 >> (bit % 8)) != 0
}

static MAPS: [[u8; MAP_BYTES]; LEVELS] = [
    // open field
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // twin rails
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x7f, 0xff, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x7f, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // four posts
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x80, 0x0e,
        0x01, 0xc0, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x70, 0x01, 0xc0, 0x38,
        0x00, 0xe0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // pillars
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x41, 0x04, 0x00, 0x20, 0x82, 0x00, 0x10, 0x41,
        0x00, 0x08, 0x20, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x82, 0x08, 0x00, 0x41,
        0x04, 0x00, 0x20, 0x82, 0x00, 0x10, 0x41, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // broken box
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xf8, 0xff,
        0x02, 0x00, 0x00, 0x81, 0x00, 0x00, 0x40, 0x80, 0x00,
        0x20, 0x40, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x01, 0x02, 0x00,
        0x00, 0x81, 0x00, 0x00, 0x40, 0x80, 0x00, 0x20, 0x7f,
        0x8f, 0xf0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // studs
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x22, 0x22,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x44, 0x44,
        0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x11,
        0x11, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x22,
        0x22, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // chicanes
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x1f, 0xff, 0xf0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x01, 0xff, 0xff, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1f, 0xff,
        0xf0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x01, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00,
    ],
    // scissors
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x02,
        0x00, 0x80, 0x02, 0x00, 0x20, 0x02, 0x00, 0x08, 0x02,
        0x00, 0x02, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x02,
        0x80, 0x00, 0x02, 0x20, 0x00, 0x02, 0x08, 0x00, 0x02,
        0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // combs
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x88, 0x88,
        0x84, 0x44, 0x44, 0x42, 0x22, 0x22, 0x21, 0x11, 0x11,
        0x10, 0x88, 0x88, 0x88, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x02, 0x22, 0x22, 0x01, 0x11,
        0x11, 0x00, 0x88, 0x88, 0x80, 0x44, 0x44, 0x40, 0x22,
        0x22, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
];
