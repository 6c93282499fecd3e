//! Knight move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::gen_steps;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Generate pseudo-legal knight moves. Knights jump, so occupancy in between is irrelevant.
pub(super) fn gen_knight(board: &Board, src: Square, us: Color) -> SquareSet {
    gen_steps(board, src, us, &KNIGHT_OFFSETS)
}
