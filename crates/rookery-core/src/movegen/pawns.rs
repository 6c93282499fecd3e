//! Pawn move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Generate pseudo-legal pawn moves: pushes onto empty squares and diagonal captures.
pub(super) fn gen_pawn(board: &Board, src: Square, us: Color) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    let dir = us.forward();

    // --- Pushes ---
    if let Some(one) = src.offset(dir, 0).filter(|&sq| !board.is_occupied(sq)) {
        targets.insert(one);

        // The double step needs both squares clear; the first was checked above.
        if src.row() == us.pawn_row() {
            if let Some(two) = one.offset(dir, 0).filter(|&sq| !board.is_occupied(sq)) {
                targets.insert(two);
            }
        }
    }

    // --- Captures ---
    for d_col in [-1, 1] {
        let Some(dst) = src.offset(dir, d_col) else {
            continue;
        };
        if board.color_on(dst) == Some(us.flip()) {
            targets.insert(dst);
        }
    }

    targets
}
