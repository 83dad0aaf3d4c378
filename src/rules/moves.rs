//! Move values.
//!
//! A `Move` is a candidate action: origin, destination, and the captured
//! square when it is a jump. Moves are plain values produced by
//! `legal_moves` and consumed by `apply_move`; nothing retains them past
//! one turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Square;

/// One candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell the piece moves from.
    pub from: Square,

    /// Cell the piece lands on.
    pub to: Square,

    /// Square of the opposing piece removed by this move, when it is a
    /// jump. `None` for a simple step.
    pub captured: Option<Square>,
}

impl Move {
    /// A simple one-step diagonal move.
    #[must_use]
    pub const fn step(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    /// A single-jump capture over `captured`.
    #[must_use]
    pub const fn jump(from: Square, to: Square, captured: Square) -> Self {
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }

    /// Whether this move captures a piece.
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Moves available to one piece.
///
/// A piece has at most one move per diagonal, so four inline slots cover
/// every case without allocating.
pub type MoveList = SmallVec<[Move; 4]>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_step_is_not_capture() {
        let mv = Move::step(sq(2, 1), sq(3, 2));

        assert_eq!(mv.from, sq(2, 1));
        assert_eq!(mv.to, sq(3, 2));
        assert!(!mv.is_capture());
    }

    #[test]
    fn test_jump_records_captured_square() {
        let mv = Move::jump(sq(2, 1), sq(4, 3), sq(3, 2));

        assert!(mv.is_capture());
        assert_eq!(mv.captured, Some(sq(3, 2)));
    }

    #[test]
    fn test_move_equality() {
        let a = Move::jump(sq(2, 1), sq(4, 3), sq(3, 2));
        let b = Move::jump(sq(2, 1), sq(4, 3), sq(3, 2));
        let c = Move::step(sq(2, 1), sq(4, 3));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serde_round_trip() {
        let mv = Move::jump(sq(2, 1), sq(4, 3), sq(3, 2));
        let json = serde_json::to_string(&mv).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();

        assert_eq!(mv, back);
    }
}
