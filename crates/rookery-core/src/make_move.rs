//! Move execution via copy-make.

use crate::board::Board;
use crate::chess_move::Move;

impl Board {
    /// Apply a move and return the resulting board. Copy-make: `self` is not modified.
    ///
    /// Whatever stood on the destination is captured and discarded. No legality
    /// checking happens here; if the source square is empty the board is
    /// returned unchanged.
    pub fn make_move(&self, mv: Move) -> Board {
        let mut b = *self;
        let Some(piece) = b.get(mv.from()) else {
            return b;
        };
        b.set(mv.to(), Some(piece));
        b.set(mv.from(), None);
        b
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn quiet_move_relocates_piece() {
        let board = Board::starting_position();
        let after = board.make_move(Move::new(Square::E2, Square::E4));
        assert_eq!(after.get(Square::E4), Some(Piece::WHITE_PAWN));
        assert_eq!(after.get(Square::E2), None);
        assert_eq!(after.occupied().count(), 32);
    }

    #[test]
    fn original_board_is_untouched() {
        let board = Board::starting_position();
        let _ = board.make_move(Move::new(Square::G1, Square::F3));
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn capture_removes_occupant() {
        let board = Board::from_placement("8/8/8/3p4/4P3/8/8/8").unwrap();
        let after = board.make_move(Move::new(Square::E4, Square::D5));
        assert_eq!(after.get(Square::D5), Some(Piece::WHITE_PAWN));
        assert_eq!(after.occupied().count(), 1);
    }

    #[test]
    fn only_source_and_destination_change() {
        let board = Board::starting_position();
        let mv = Move::new(Square::B8, Square::C6);
        let after = board.make_move(mv);
        for sq in Square::all() {
            if sq != mv.from() && sq != mv.to() {
                assert_eq!(after.get(sq), board.get(sq), "{sq} changed");
            }
        }
    }

    #[test]
    fn empty_source_is_a_no_op() {
        let board = Board::starting_position();
        assert_eq!(board.make_move(Move::new(Square::E4, Square::E5)), board);
    }
}
