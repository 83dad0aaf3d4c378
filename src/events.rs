//! Observer contract.
//!
//! The engine's only outputs besides return values are these callbacks,
//! fired synchronously from inside `apply_move` and `reset`. No
//! threading or queueing is implied; a presentation layer redraws from
//! whatever they report.

use crate::core::Side;

/// Receives turn and game-over notifications from the engine.
///
/// Both methods default to no-ops so observers implement only what they
/// display.
pub trait GameObserver {
    /// The side to move changed. Also fired by `reset` with the
    /// configured first mover.
    fn on_turn_changed(&mut self, side: Side) {
        let _ = side;
    }

    /// The game ended.
    fn on_game_over(&mut self, winner: Side) {
        let _ = winner;
    }
}
