//! Fixed geometry of the 15×15 board.

/// Number of columns and rows on the board.
pub const BOARD_SIZE: u8 = 15;
/// Letter of the leftmost column.
pub const FIRST_COLUMN: char = 'A';
/// Letter of the rightmost column.
pub const LAST_COLUMN: char = (b'A' + BOARD_SIZE - 1) as char;
/// Lowest row number (bottom edge).
pub const MIN_ROW: u8 = 1;
/// Highest row number (top edge).
pub const MAX_ROW: u8 = BOARD_SIZE;

/// Separator placed between coordinates in the joined output.
pub const SEPARATOR: &str = ", ";

/// Letter labelling the zero-based column `index`, or `None` past the edge.
pub fn column_letter(index: u8) -> Option<char> {
    if index < BOARD_SIZE {
        Some((FIRST_COLUMN as u8 + index) as char)
    } else {
        None
    }
}

/// Zero-based column index for a letter, case-insensitive. Returns `None` for
/// non-letters and for letters beyond [`LAST_COLUMN`].
pub fn column_index(letter: char) -> Option<u8> {
    let upper = letter.to_ascii_uppercase();
    if (FIRST_COLUMN..=LAST_COLUMN).contains(&upper) {
        Some(upper as u8 - FIRST_COLUMN as u8)
    } else {
        None
    }
}
