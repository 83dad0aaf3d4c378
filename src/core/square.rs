//! Board coordinates.
//!
//! Squares are row/column pairs in 0..8 × 0..8, row 0 at Black's back
//! rank. Pieces only ever occupy dark squares (`(row + col) % 2 == 1`);
//! diagonal stepping preserves that parity, so movegen never has to
//! check it.

use serde::{Deserialize, Serialize};

/// Board width and height.
pub const BOARD_SIZE: u8 = 8;

/// The four diagonal step directions as `(row, col)` deltas.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Create a square, or `None` if outside the board.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Whether both coordinates are on the board.
    ///
    /// `Square` fields are public, so moves received from a caller are
    /// re-checked with this before they touch the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Whether this is a dark square. Only dark squares ever hold pieces.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Step by a diagonal delta; `None` when the result leaves the board.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterate every square on the board, row-major.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
