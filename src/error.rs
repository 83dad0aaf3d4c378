//! Rejection taxonomy.
//!
//! Every error is local and recoverable: a rejected call leaves the game
//! state untouched, and callers re-query `legal_moves` and retry with
//! corrected input. Nothing here is fatal and nothing is swallowed.

use thiserror::Error;

use crate::core::Side;

/// Why a `legal_moves` or `apply_move` call was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Coordinate outside the 8×8 grid.
    #[error("coordinate ({row}, {col}) is outside the board")]
    OutOfBounds { row: u8, col: u8 },

    /// The origin cell is empty, holds an opposing piece, or is not the
    /// piece locked into an active capture chain.
    #[error("cell does not hold a piece the side to move may act with")]
    NotCurrentPlayersPiece,

    /// The supplied move is not in the current legal set for its origin.
    #[error("move is not legal in the current position")]
    IllegalMove,

    /// The game has ended; only `reset` is accepted.
    #[error("game is already over, won by {winner}")]
    GameAlreadyOver { winner: Side },
}
