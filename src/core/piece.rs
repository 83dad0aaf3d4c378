//! Sides and cell contents.
//!
//! ## Side
//!
//! The two players. Red starts on rows 5–7 and advances toward row 0;
//! Black starts on rows 0–2 and advances toward row 7.
//!
//! ## Cell
//!
//! Closed variant for one board cell. There are no integer piece codes:
//! every rule reads pieces through `side()` and `is_king()`.

use serde::{Deserialize, Serialize};

/// A player color, doubling as the side-to-move marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    Black,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Row delta a man of this side advances by.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }

    /// The row where a man of this side is crowned.
    #[must_use]
    pub const fn crowning_row(self) -> u8 {
        match self {
            Side::Red => 0,
            Side::Black => 7,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    RedMan,
    RedKing,
    BlackMan,
    BlackKing,
}

impl Cell {
    /// The man of a side.
    #[must_use]
    pub const fn man(side: Side) -> Cell {
        match side {
            Side::Red => Cell::RedMan,
            Side::Black => Cell::BlackMan,
        }
    }

    /// The king of a side.
    #[must_use]
    pub const fn king(side: Side) -> Cell {
        match side {
            Side::Red => Cell::RedKing,
            Side::Black => Cell::BlackKing,
        }
    }

    /// Which side owns this piece, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::RedMan | Cell::RedKing => Some(Side::Red),
            Cell::BlackMan | Cell::BlackKing => Some(Side::Black),
        }
    }

    /// Whether this piece is a king.
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, Cell::RedKing | Cell::BlackKing)
    }

    /// Whether the cell holds no piece.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// This piece promoted: men become kings, kings and empty cells are
    /// unchanged.
    #[must_use]
    pub const fn crowned(self) -> Cell {
        match self {
            Cell::RedMan => Cell::RedKing,
            Cell::BlackMan => Cell::BlackKing,
            other => other,
        }
    }

    /// One-character glyph used by the board renderer.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::RedMan => 'r',
            Cell::RedKing => 'R',
            Cell::BlackMan => 'b',
            Cell::BlackKing => 'B',
        }
    }
}
