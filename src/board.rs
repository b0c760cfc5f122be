//! Text rendering of a stepped path on the board.

use alloc::string::String;
use core::fmt::Write;

use crate::bitboard::BitBoard;
use crate::config::{column_letter, BOARD_SIZE};
use crate::coord::Coordinate;

/// One bit per cell; row index 0 is board row 1.
pub type PathBoard = BitBoard<u16, { BOARD_SIZE as usize }>;

/// Mark every cell of `path`.
pub fn path_mask(path: &[Coordinate]) -> PathBoard {
    let mut mask = PathBoard::new();
    for cell in path {
        // coordinates are always on the board
        let _ = mask.set(cell.row() as usize - 1, cell.col() as usize);
    }
    mask
}

/// Draw the board with row 15 on top: `S` marks the start, `X` the rest of the
/// path, `.` empty cells.
pub fn render_path(path: &[Coordinate]) -> String {
    let mask = path_mask(path);
    let start = path.first();
    let mut out = String::new();
    for r in (0..BOARD_SIZE as usize).rev() {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..BOARD_SIZE as usize {
            let is_start = start.map_or(false, |s| {
                s.row() as usize == r + 1 && s.col() as usize == c
            });
            let ch = if is_start {
                'S'
            } else if mask.get(r, c).unwrap_or(false) {
                'X'
            } else {
                '.'
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out.push_str("   ");
    for c in 0..BOARD_SIZE {
        if let Some(letter) = column_letter(c) {
            let _ = write!(out, " {}", letter);
        }
    }
    out.push('\n');
    out
}
