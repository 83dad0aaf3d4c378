//! The checkers engine.
//!
//! Owns one `GameState` and answers two kinds of request: "what moves
//! can this cell make right now" (`legal_moves`) and "apply this move"
//! (`apply_move`), plus `reset`. All rule evaluation happens here;
//! rendering, input handling, and persistence belong to the caller.
//!
//! Every operation is synchronous and runs to completion; the engine
//! performs no locking and assumes one call at a time, matching an
//! interactive UI's input queue. Hosts embedding it in a multi-threaded
//! program hold an exclusive lock around each query/apply pair.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, EngineConfig, GameState, Side, Square};
use crate::error::EngineError;
use crate::events::GameObserver;

use super::movegen;
use super::moves::{Move, MoveList};

/// Outcome of a successfully applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The capture chain continues: the same player must jump again with
    /// the piece now on `at`.
    Continued { at: Square },

    /// The turn passed to the other side.
    TurnPassed(Side),

    /// The game ended.
    GameOver { winner: Side },
}

/// A checkers game.
///
/// Construct with `new` / `with_config` for a standard game, or
/// `from_position` to start mid-game. State is mutated only through
/// `apply_move` and `reset`; every rejected call leaves it unchanged.
pub struct CheckersEngine {
    config: EngineConfig,
    state: GameState,
    observer: Option<Box<dyn GameObserver>>,
}

impl CheckersEngine {
    /// A fresh game with the default configuration (Black moves first).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// A fresh game with an explicit configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            state: GameState::new(config.first_mover),
            observer: None,
        }
    }

    /// A game starting from an arbitrary position.
    ///
    /// No winner is declared even if `side_to_move` is already stuck;
    /// the game-over check runs when a move produces a state, so queries
    /// on a dead position simply return empty lists. `reset` returns to
    /// the standard starting position.
    #[must_use]
    pub fn from_position(board: Board, side_to_move: Side) -> Self {
        Self {
            config: EngineConfig::default(),
            state: GameState {
                board,
                side_to_move,
                forced: None,
                winner: None,
            },
            observer: None,
        }
    }

    /// Attach the observer that receives turn and game-over callbacks.
    /// Replaces any previous observer.
    pub fn set_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observer = Some(observer);
    }

    /// The current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whose turn it is.
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.state.side_to_move
    }

    /// The winner, once the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.state.winner
    }

    /// Reinitialize to the starting position and notify the observer of
    /// the configured first mover. The only way out of a finished game.
    pub fn reset(&mut self) {
        self.state = GameState::new(self.config.first_mover);
        debug!("game reset, {} to move", self.state.side_to_move);
        self.notify_turn(self.state.side_to_move);
    }

    /// Legal moves for the piece on `(row, col)`.
    ///
    /// Mandatory capture is evaluated over the whole board: when any
    /// piece of the side to move can capture, the result holds exactly
    /// the captures available from this cell — possibly none, in which
    /// case this piece cannot move at all this turn. During a multi-jump
    /// only the continuing piece gets a non-empty result. Empty cells
    /// and opposing pieces yield an empty list.
    pub fn legal_moves(&self, row: u8, col: u8) -> Result<MoveList, EngineError> {
        if let Some(winner) = self.state.winner {
            return Err(EngineError::GameAlreadyOver { winner });
        }
        let from = Square::new(row, col).ok_or(EngineError::OutOfBounds { row, col })?;
        Ok(self.legal_for(from))
    }

    /// Apply a move previously returned by `legal_moves`.
    ///
    /// Anything not in the current legal set is rejected without
    /// touching state. A capture that leaves another jump for the same
    /// piece returns `Continued` and locks the turn to that piece;
    /// promotion always ends the turn, even when the new king could jump
    /// again.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveResult, EngineError> {
        if let Some(winner) = self.state.winner {
            return Err(EngineError::GameAlreadyOver { winner });
        }
        self.validate(&mv)?;

        let side = self.state.side_to_move;
        let cell = self.state.board.get(mv.from);

        self.state.board.set(mv.from, Cell::Empty);
        if let Some(captured) = mv.captured {
            self.state.board.set(captured, Cell::Empty);
            debug!("{side} {} -> {}, capturing {captured}", mv.from, mv.to);
        } else {
            debug!("{side} {} -> {}", mv.from, mv.to);
        }

        let crowned = !cell.is_king() && mv.to.row == side.crowning_row();
        self.state.board.set(mv.to, if crowned { cell.crowned() } else { cell });

        if !crowned && mv.is_capture() && !movegen::captures_from(&self.state.board, mv.to).is_empty() {
            self.state.forced = Some(mv.to);
            return Ok(MoveResult::Continued { at: mv.to });
        }

        self.state.forced = None;
        let next = side.opponent();
        if self.state.board.count(next) == 0 || !movegen::side_can_move(&self.state.board, next) {
            self.state.winner = Some(side);
            info!("game over, {side} wins");
            self.notify_game_over(side);
            return Ok(MoveResult::GameOver { winner: side });
        }

        self.state.side_to_move = next;
        self.notify_turn(next);
        Ok(MoveResult::TurnPassed(next))
    }

    /// The legal set for one origin, shared by the query path and move
    /// validation so both always agree.
    fn legal_for(&self, from: Square) -> MoveList {
        if let Some(forced) = self.state.forced {
            if forced == from {
                movegen::captures_from(&self.state.board, from)
            } else {
                MoveList::new()
            }
        } else {
            movegen::moves_for(&self.state.board, self.state.side_to_move, from)
        }
    }

    fn validate(&self, mv: &Move) -> Result<(), EngineError> {
        for sq in [Some(mv.from), Some(mv.to), mv.captured].into_iter().flatten() {
            if !sq.in_bounds() {
                return Err(EngineError::OutOfBounds {
                    row: sq.row,
                    col: sq.col,
                });
            }
        }

        if let Some(forced) = self.state.forced {
            if forced != mv.from {
                return Err(EngineError::NotCurrentPlayersPiece);
            }
        }
        if self.state.board.get(mv.from).side() != Some(self.state.side_to_move) {
            return Err(EngineError::NotCurrentPlayersPiece);
        }

        if self.legal_for(mv.from).contains(mv) {
            Ok(())
        } else {
            Err(EngineError::IllegalMove)
        }
    }

    fn notify_turn(&mut self, side: Side) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_turn_changed(side);
        }
    }

    fn notify_game_over(&mut self, winner: Side) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_game_over(winner);
        }
    }
}

impl Default for CheckersEngine {
    fn default() -> Self {
        Self::new()
    }
}
