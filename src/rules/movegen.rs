//! Move generation.
//!
//! Three layers: per-piece steps and captures, board-wide capture
//! availability (the mandatory-capture rule keys off the whole board,
//! not one piece), and the combined `moves_for` the engine exposes.
//!
//! Captures are always single jumps: adjacent opposing piece, empty
//! landing cell two steps away in the same direction. Flying kings are
//! not supported.

use crate::core::{Board, Cell, Side, Square, DIAGONALS};

use super::moves::{Move, MoveList};

/// Directions the piece on a cell may move in: kings use all four
/// diagonals, men only the two toward their crowning row.
fn directions(cell: Cell) -> &'static [(i8, i8)] {
    match cell {
        Cell::RedKing | Cell::BlackKing => &DIAGONALS,
        Cell::RedMan => &[(-1, -1), (-1, 1)],
        Cell::BlackMan => &[(1, -1), (1, 1)],
        Cell::Empty => &[],
    }
}

/// Single-jump captures available to the piece on `from`.
pub fn captures_from(board: &Board, from: Square) -> MoveList {
    let mut out = MoveList::new();
    let cell = board.get(from);
    let side = match cell.side() {
        Some(side) => side,
        None => return out,
    };

    for &(dr, dc) in directions(cell) {
        if let (Some(over), Some(to)) = (from.offset(dr, dc), from.offset(2 * dr, 2 * dc)) {
            if board.get(over).side() == Some(side.opponent()) && board.get(to).is_empty() {
                out.push(Move::jump(from, to, over));
            }
        }
    }
    out
}

/// Simple one-step moves available to the piece on `from`.
pub fn steps_from(board: &Board, from: Square) -> MoveList {
    let mut out = MoveList::new();
    let cell = board.get(from);
    if cell.side().is_none() {
        return out;
    }

    for &(dr, dc) in directions(cell) {
        if let Some(to) = from.offset(dr, dc) {
            if board.get(to).is_empty() {
                out.push(Move::step(from, to));
            }
        }
    }
    out
}

/// Whether any piece of `side` has a capture available.
#[must_use]
pub fn side_has_capture(board: &Board, side: Side) -> bool {
    board.pieces(side).any(|sq| !captures_from(board, sq).is_empty())
}

/// Whether `side` can move at all (capture or step). A side that cannot
/// loses, piece count notwithstanding.
#[must_use]
pub fn side_can_move(board: &Board, side: Side) -> bool {
    board
        .pieces(side)
        .any(|sq| !captures_from(board, sq).is_empty() || !steps_from(board, sq).is_empty())
}

/// Moves the piece on `from` may make under the mandatory-capture rule.
///
/// When any capture exists anywhere for `side`, only captures from
/// `from` are returned; a piece with no capture of its own gets an empty
/// list even if it could step. Empty cells and opposing pieces yield an
/// empty list.
pub fn moves_for(board: &Board, side: Side, from: Square) -> MoveList {
    if board.get(from).side() != Some(side) {
        return MoveList::new();
    }
    if side_has_capture(board, side) {
        captures_from(board, from)
    } else {
        steps_from(board, from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_man_steps_forward_only() {
        let mut board = Board::empty();
        board.set(sq(5, 2), Cell::RedMan);

        let moves = steps_from(&board, sq(5, 2));
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.to.row == 4));
    }

    #[test]
    fn test_king_steps_all_diagonals() {
        let mut board = Board::empty();
        board.set(sq(4, 3), Cell::BlackKing);

        let moves = steps_from(&board, sq(4, 3));
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn test_capture_needs_empty_landing() {
        let mut board = Board::empty();
        board.set(sq(2, 1), Cell::BlackMan);
        board.set(sq(3, 2), Cell::RedMan);

        assert_eq!(captures_from(&board, sq(2, 1)).len(), 1);

        board.set(sq(4, 3), Cell::RedMan);
        assert!(captures_from(&board, sq(2, 1)).is_empty());
    }

    #[test]
    fn test_cannot_jump_own_piece() {
        let mut board = Board::empty();
        board.set(sq(2, 1), Cell::BlackMan);
        board.set(sq(3, 2), Cell::BlackMan);

        assert!(captures_from(&board, sq(2, 1)).is_empty());
    }

    #[test]
    fn test_mandatory_capture_suppresses_steps() {
        let mut board = Board::empty();
        board.set(sq(2, 1), Cell::BlackMan);
        board.set(sq(3, 2), Cell::RedMan);
        board.set(sq(2, 5), Cell::BlackMan);

        // (2,5) could step, but (2,1) has a capture somewhere on the board.
        assert!(side_has_capture(&board, Side::Black));
        assert!(moves_for(&board, Side::Black, sq(2, 5)).is_empty());

        let moves = moves_for(&board, Side::Black, sq(2, 1));
        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_capture());
    }

    #[test]
    fn test_moves_for_rejects_wrong_owner() {
        let board = Board::starting();

        assert!(moves_for(&board, Side::Black, sq(5, 2)).is_empty());
        assert!(moves_for(&board, Side::Black, sq(3, 2)).is_empty());
    }

    #[test]
    fn test_side_can_move_detects_blocked_side() {
        let mut board = Board::empty();
        board.set(sq(7, 0), Cell::RedMan);
        board.set(sq(6, 1), Cell::BlackMan);
        board.set(sq(5, 2), Cell::BlackMan);

        // Step blocked by (6,1); jump over it lands on occupied (5,2).
        assert!(!side_can_move(&board, Side::Red));
        assert!(side_can_move(&board, Side::Black));
    }
}
