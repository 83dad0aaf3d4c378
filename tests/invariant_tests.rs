//! Randomized playouts checking the engine's invariants: mandatory
//! capture, piece conservation, promotion ending the turn, continuation
//! bookkeeping, and reset idempotence.

use proptest::prelude::*;

use checkers_core::{CheckersEngine, Move, MoveResult, Side};

/// Every legal move for the side to move.
fn all_moves(engine: &CheckersEngine) -> Vec<Move> {
    let mut out = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            if let Ok(list) = engine.legal_moves(row, col) {
                out.extend(list);
            }
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn random_playouts_preserve_invariants(
        choices in prop::collection::vec(any::<prop::sample::Index>(), 1..120),
    ) {
        let mut engine = CheckersEngine::new();

        for choice in choices {
            if engine.winner().is_some() {
                break;
            }

            let moves = all_moves(&engine);
            prop_assert!(!moves.is_empty(), "non-terminal position must have moves");

            // Mandatory capture: captures and steps never mix in the
            // legal set of one position.
            if moves.iter().any(Move::is_capture) {
                prop_assert!(moves.iter().all(Move::is_capture));
            }

            let mv = moves[choice.index(moves.len())];
            let mover = engine.side_to_move();
            let was_man = !engine.state().board.get(mv.from).is_king();
            let red_before = engine.state().board.count(Side::Red);
            let black_before = engine.state().board.count(Side::Black);

            let result = engine.apply_move(mv).unwrap();

            // Piece conservation: counts never grow, and exactly one
            // piece leaves the board per executed capture.
            let red_after = engine.state().board.count(Side::Red);
            let black_after = engine.state().board.count(Side::Black);
            prop_assert!(red_after <= red_before);
            prop_assert!(black_after <= black_before);
            if mv.is_capture() {
                prop_assert_eq!(red_after + black_after + 1, red_before + black_before);
            } else {
                prop_assert_eq!((red_after, black_after), (red_before, black_before));
            }

            // Promotion always ends the turn.
            if was_man && mv.to.row == mover.crowning_row() {
                let continued = matches!(result, MoveResult::Continued { .. });
                prop_assert!(!continued);
            }

            match result {
                MoveResult::Continued { at } => {
                    // Chain: same side, same piece, captures only.
                    prop_assert_eq!(engine.side_to_move(), mover);
                    prop_assert_eq!(engine.state().forced, Some(at));

                    let follow = all_moves(&engine);
                    prop_assert!(!follow.is_empty());
                    prop_assert!(follow.iter().all(|m| m.from == at && m.is_capture()));
                }
                MoveResult::TurnPassed(next) => {
                    prop_assert_eq!(next, mover.opponent());
                    prop_assert_eq!(engine.state().forced, None);
                }
                MoveResult::GameOver { winner } => {
                    prop_assert_eq!(winner, mover);
                    prop_assert_eq!(engine.winner(), Some(mover));
                }
            }
        }
    }

    #[test]
    fn reset_is_idempotent(
        choices in prop::collection::vec(any::<prop::sample::Index>(), 0..60),
    ) {
        let mut engine = CheckersEngine::new();

        for choice in choices {
            if engine.winner().is_some() {
                break;
            }
            let moves = all_moves(&engine);
            engine.apply_move(moves[choice.index(moves.len())]).unwrap();
        }

        engine.reset();
        let fresh = CheckersEngine::new();
        prop_assert_eq!(engine.state(), fresh.state());
    }
}
