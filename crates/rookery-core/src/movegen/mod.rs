//! Move generation: pseudo-legal patterns per piece kind and the legality filter.

mod check;
mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

pub use self::check::{is_attacked, is_in_check};

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{gen_bishop, gen_queen, gen_rook};

/// Collect single-step targets that are on the board and not occupied by `us`.
fn gen_steps(board: &Board, src: Square, us: Color, offsets: &[(i8, i8)]) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| src.offset(d_row, d_col))
        .filter(|&dst| board.color_on(dst) != Some(us))
        .collect()
}

/// Destinations `piece` could reach from `src` by its movement pattern alone.
pub(crate) fn piece_moves(board: &Board, src: Square, piece: Piece) -> SquareSet {
    let us = piece.color();
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, src, us),
        PieceKind::Knight => gen_knight(board, src, us),
        PieceKind::Bishop => gen_bishop(board, src, us),
        PieceKind::Rook => gen_rook(board, src, us),
        PieceKind::Queen => gen_queen(board, src, us),
        PieceKind::King => gen_king(board, src, us),
    }
}

/// Pseudo-legal destinations for the piece on `sq`, ignoring whether the move
/// would leave its own king in check. Empty if `sq` is empty.
pub fn pseudo_legal_moves(board: &Board, sq: Square) -> SquareSet {
    match board.get(sq) {
        Some(piece) => piece_moves(board, sq, piece),
        None => SquareSet::EMPTY,
    }
}

/// Legal destinations for the piece on `sq`.
///
/// Each pseudo-legal candidate is played on its own copy of the board, and kept
/// only if the mover's king is not in check afterwards.
pub fn legal_moves(board: &Board, sq: Square) -> SquareSet {
    let Some(piece) = board.get(sq) else {
        return SquareSet::EMPTY;
    };
    piece_moves(board, sq, piece)
        .filter(|&dst| {
            let after = board.make_move(Move::new(sq, dst));
            !is_in_check(&after, piece.color())
        })
        .collect()
}

/// Every legal move available to `color`, in row-major order of source square.
pub fn generate_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .side(color)
        .flat_map(|src| legal_moves(board, src).map(move |dst| Move::new(src, dst)))
        .collect()
}

/// Return `true` if `color` has at least one legal move. Stops at the first one found.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .side(color)
        .any(|src| !legal_moves(board, src).is_empty())
}
