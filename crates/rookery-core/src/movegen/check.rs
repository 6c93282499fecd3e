//! Attack and check detection.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::piece_moves;

/// Return `true` if any piece of `by_color` has a pseudo-legal move onto `sq`.
///
/// This is reachability rather than control: a pawn reaches the empty square in
/// front of it but never an empty diagonal. For a square holding an opposing
/// piece, such as a king, the two notions agree.
pub fn is_attacked(board: &Board, sq: Square, by_color: Color) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color() == by_color)
        .any(|(src, piece)| piece_moves(board, src, piece).contains(sq))
}

/// Return `true` if `color`'s king can be captured by an enemy piece.
///
/// A side without a king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king_sq) => is_attacked(board, king_sq, color.flip()),
        None => false,
    }
}
