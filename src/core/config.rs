//! Engine configuration.
//!
//! Rule variants of the source implementations disagreed on who moves
//! first, so it is a configurable rather than a fixed rule. Everything
//! else about standard checkers is hardcoded.

use serde::{Deserialize, Serialize};

use super::piece::Side;

/// Configuration applied at engine construction and on every `reset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Which side moves first at game start and after `reset`.
    pub first_mover: Side,
}

impl Default for EngineConfig {
    /// Black moves first, per the standard rule that the darker side
    /// opens the game.
    fn default() -> Self {
        Self {
            first_mover: Side::Black,
        }
    }
}
