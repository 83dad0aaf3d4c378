//! Core board-game types: squares, pieces, the board, game state, and
//! configuration.
//!
//! Everything here is plain data; the rules live in `crate::rules`.

pub mod board;
pub mod config;
pub mod piece;
pub mod square;
pub mod state;

pub use board::Board;
pub use config::EngineConfig;
pub use piece::{Cell, Side};
pub use square::{Square, BOARD_SIZE, DIAGONALS};
pub use state::GameState;
