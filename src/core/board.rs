//! The 8×8 board.
//!
//! Row 0 is Black's back rank. The standard starting position places
//! twelve Black men on the dark squares of rows 0–2 and twelve Red men
//! on the dark squares of rows 5–7.

use serde::{Deserialize, Serialize};

use super::piece::{Cell, Side};
use super::square::{Square, BOARD_SIZE};

/// An 8×8 grid of cells.
///
/// Light squares stay `Empty` for the whole game; the rules only ever
/// read and write dark squares.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// The standard starting position.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for sq in Square::all().filter(|s| s.is_dark()) {
            if sq.row <= 2 {
                board.set(sq, Cell::man(Side::Black));
            } else if sq.row >= 5 {
                board.set(sq, Cell::man(Side::Red));
            }
        }
        board
    }

    /// The cell at `sq`.
    #[must_use]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.row as usize][sq.col as usize]
    }

    /// Set the cell at `sq`.
    pub fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.row as usize][sq.col as usize] = cell;
    }

    /// Number of pieces `side` has on the board.
    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        Square::all().filter(|&sq| self.get(sq).side() == Some(side)).count()
    }

    /// Squares currently holding a piece of `side`, row-major.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.get(sq).side() == Some(side))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let cell = self.cells[row as usize][col as usize];
                write!(f, "{}", cell.glyph())?;
                if col + 1 < BOARD_SIZE {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
