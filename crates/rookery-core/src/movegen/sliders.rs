//! Bishop, rook, and queen move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Walk each ray until the edge or the first occupied square.
///
/// An enemy blocker is included and ends the ray; a friendly blocker ends it
/// without being included.
fn slide(board: &Board, src: Square, us: Color, directions: &[(i8, i8)]) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    for &(d_row, d_col) in directions {
        let mut cursor = src;
        while let Some(dst) = cursor.offset(d_row, d_col) {
            match board.color_on(dst) {
                None => targets.insert(dst),
                Some(color) => {
                    if color != us {
                        targets.insert(dst);
                    }
                    break;
                }
            }
            cursor = dst;
        }
    }
    targets
}

pub(super) fn gen_bishop(board: &Board, src: Square, us: Color) -> SquareSet {
    slide(board, src, us, &DIAGONALS)
}

pub(super) fn gen_rook(board: &Board, src: Square, us: Color) -> SquareSet {
    slide(board, src, us, &ORTHOGONALS)
}

/// Queen moves are the union of the rook and bishop sets from the same square.
pub(super) fn gen_queen(board: &Board, src: Square, us: Color) -> SquareSet {
    gen_rook(board, src, us) | gen_bishop(board, src, us)
}
