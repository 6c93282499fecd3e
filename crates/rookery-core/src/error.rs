//! Error types for position parsing and move application.

use crate::color::Color;
use crate::square::Square;

/// Errors that occur when parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement does not have exactly 8 `/`-separated ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank} describes {length} squares, expected 8")]
    BadRankLength {
        /// Rank label, 8 for the first rank in the string.
        rank: u8,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not `w` or `b`.
    #[error("invalid side to move: \"{found}\"")]
    InvalidColor {
        /// The invalid field.
        found: String,
    },
}

/// Reasons a requested move was not applied. The game is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The game has already ended in checkmate or stalemate.
    #[error("the game is over")]
    GameOver,
    /// There is no piece on the source square.
    #[error("no piece on {square}")]
    EmptySource {
        /// The empty source square.
        square: Square,
    },
    /// The piece on the source square belongs to the side not on move.
    #[error("it is {turn}'s turn")]
    WrongTurn {
        /// The side to move.
        turn: Color,
    },
    /// The destination is not among the piece's legal moves.
    #[error("{from} to {to} is not a legal move")]
    IllegalDestination {
        /// Source square.
        from: Square,
        /// Requested destination.
        to: Square,
    },
}

#[cfg(test)]
mod tests {
    use super::{MoveError, PlacementError};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn placement_error_display() {
        let err = PlacementError::WrongRankCount { found: 7 };
        assert_eq!(format!("{err}"), "expected 8 ranks in piece placement, found 7");
        let err = PlacementError::InvalidPieceChar { character: 'x' };
        assert_eq!(format!("{err}"), "invalid piece character: 'x'");
    }

    #[test]
    fn move_error_display() {
        assert_eq!(MoveError::GameOver.to_string(), "the game is over");
        assert_eq!(
            MoveError::EmptySource { square: Square::E4 }.to_string(),
            "no piece on e4"
        );
        assert_eq!(
            MoveError::WrongTurn { turn: Color::Black }.to_string(),
            "it is Black's turn"
        );
        assert_eq!(
            MoveError::IllegalDestination {
                from: Square::E2,
                to: Square::E5
            }
            .to_string(),
            "e2 to e5 is not a legal move"
        );
    }
}
