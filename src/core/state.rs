//! Complete game state.
//!
//! One `GameState` composes the board, the side to move, the forced
//! multi-jump continuation (if a capture chain is in progress), and the
//! winner once the game has ended. The engine owns exactly one of these
//! and mutates it only through `apply_move` and `reset`.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::piece::Side;
use super::square::Square;

/// Board, turn, and terminal state for one game.
///
/// Serde-derived so a host can snapshot it across a bridge; the engine
/// itself never persists anything.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,

    /// Whose turn it is. Does not change while `forced` is set.
    pub side_to_move: Side,

    /// Piece locked into continuing a capture chain. While set, the only
    /// legal moves are further captures by the piece on this square.
    pub forced: Option<Square>,

    /// Set when the game has ended; terminal until `reset`.
    pub winner: Option<Side>,
}

impl GameState {
    /// The starting position with `first_mover` to act.
    #[must_use]
    pub fn new(first_mover: Side) -> Self {
        Self {
            board: Board::starting(),
            side_to_move: first_mover,
            forced: None,
            winner: None,
        }
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}
