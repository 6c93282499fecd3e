//! King move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::gen_steps;

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generate pseudo-legal king moves: the eight neighbours. No castling.
///
/// Whether a neighbour is attacked is not considered here; that is the job of
/// the legality filter.
pub(super) fn gen_king(board: &Board, src: Square, us: Color) -> SquareSet {
    gen_steps(board, src, us, &KING_OFFSETS)
}
