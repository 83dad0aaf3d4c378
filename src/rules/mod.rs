//! Rule evaluation: move values, move generation, and the engine.
//!
//! `movegen` is pure functions over a `Board`; `engine` layers turn
//! state, the mandatory-capture and continuation rules, and win
//! detection on top.

pub mod engine;
pub mod movegen;
pub mod moves;

pub use engine::{CheckersEngine, MoveResult};
pub use moves::{Move, MoveList};
