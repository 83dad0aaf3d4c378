//! # checkers-core
//!
//! A checkers rules engine: move legality, mandatory captures,
//! multi-jump sequencing, king promotion, and win detection.
//!
//! ## Design Principles
//!
//! 1. **Request/response only**: the engine owns one `GameState` and
//!    answers `legal_moves` / `apply_move` / `reset`. It draws nothing,
//!    reads nothing, and persists nothing — presentation layers sit on
//!    top and render what it reports.
//!
//! 2. **Every rejection is recoverable**: a refused call leaves state
//!    untouched and returns an `EngineError` naming the problem;
//!    callers re-query and retry.
//!
//! 3. **Synchronous and single-threaded**: operations run to completion
//!    with no suspension points. Observer callbacks fire inline from
//!    `apply_move` and `reset`. Callers serialize access.
//!
//! ## Example
//!
//! ```
//! use checkers_core::{CheckersEngine, MoveResult, Side};
//!
//! let mut engine = CheckersEngine::new();
//!
//! // Black opens by default; the man on (2, 1) has two diagonal steps.
//! let moves = engine.legal_moves(2, 1).unwrap();
//! assert_eq!(moves.len(), 2);
//!
//! let result = engine.apply_move(moves[0]).unwrap();
//! assert_eq!(result, MoveResult::TurnPassed(Side::Red));
//! ```
//!
//! ## Modules
//!
//! - `core`: squares, pieces, the board, game state, configuration
//! - `rules`: move values, move generation, the engine
//! - `error`: rejection taxonomy
//! - `events`: synchronous observer callbacks

pub mod core;
pub mod error;
pub mod events;
pub mod rules;

// Re-export the public surface.
pub use crate::core::{Board, Cell, EngineConfig, GameState, Side, Square, BOARD_SIZE};
pub use crate::error::EngineError;
pub use crate::events::GameObserver;
pub use crate::rules::{CheckersEngine, Move, MoveList, MoveResult};
