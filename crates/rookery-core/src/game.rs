//! Game state: board, side to move, and end-of-game tracking.

use std::fmt;

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::{MoveError, PlacementError};
use crate::movegen::{self, has_legal_move, is_in_check};
use crate::piece::Piece;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Outcome of evaluating a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The side to move has at least one legal move.
    Ongoing,
    /// The side to move is in check and has no legal move.
    Checkmate {
        /// The side that was mated.
        loser: Color,
    },
    /// The side to move is not in check and has no legal move.
    Stalemate,
}

impl Status {
    /// Return `true` for checkmate and stalemate.
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, Status::Ongoing)
    }

    /// The winning side, if the game ended in checkmate.
    pub const fn winner(self) -> Option<Color> {
        match self {
            Status::Checkmate { loser } => Some(loser.flip()),
            _ => None,
        }
    }

    /// End-of-game announcement, or `None` while the game continues.
    pub fn message(self) -> Option<String> {
        match self {
            Status::Ongoing => None,
            Status::Checkmate { loser } => Some(format!("Checkmate! {} wins.", loser.flip())),
            Status::Stalemate => Some("Stalemate! It's a draw.".to_string()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ongoing => f.write_str("ongoing"),
            Status::Checkmate { loser } => write!(f, "checkmate, {} wins", loser.flip()),
            Status::Stalemate => f.write_str("stalemate"),
        }
    }
}

/// Classify the position for `side`, the side about to move.
pub fn evaluate(board: &Board, side: Color) -> Status {
    if has_legal_move(board, side) {
        Status::Ongoing
    } else if is_in_check(board, side) {
        Status::Checkmate { loser: side }
    } else {
        Status::Stalemate
    }
}

/// What a successfully applied move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move that was played.
    pub mv: Move,
    /// The piece that moved.
    pub piece: Piece,
    /// The piece that stood on the destination, if any.
    pub captured: Option<Piece>,
    /// Status for the side now to move.
    pub status: Status,
}

/// A game in progress: the board, whose turn it is, and whether it has ended.
///
/// Each value is an independent game; nothing is shared between instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Color,
    status: Status,
}

impl GameState {
    /// Start a new game from the standard position, White to move.
    pub fn new() -> GameState {
        GameState {
            board: Board::starting_position(),
            turn: Color::White,
            status: Status::Ongoing,
        }
    }

    /// Start a game from an arbitrary board. The position is evaluated
    /// immediately, so a board with no legal move for `turn` is already over.
    pub fn from_board(board: Board, turn: Color) -> GameState {
        let status = evaluate(&board, turn);
        GameState {
            board,
            turn,
            status,
        }
    }

    /// Start a game from a piece placement string and a side to move.
    pub fn from_placement(placement: &str, turn: Color) -> Result<GameState, PlacementError> {
        let board = Board::from_placement(placement)?;
        Ok(GameState::from_board(board, turn))
    }

    /// The current position.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Status for the side to move, as of the last applied move.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Return `true` once checkmate or stalemate has been reached. Never reverts.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Return `true` if the side to move is in check.
    pub fn in_check(&self) -> bool {
        is_in_check(&self.board, self.turn)
    }

    /// Legal destinations for the piece on `sq`, whichever side it belongs to.
    /// Empty once the game is over.
    pub fn legal_moves(&self, sq: Square) -> SquareSet {
        if self.is_over() {
            return SquareSet::EMPTY;
        }
        movegen::legal_moves(&self.board, sq)
    }

    /// Every legal move for the side to move. Empty once the game is over.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        movegen::generate_legal_moves(&self.board, self.turn)
    }

    /// Check that moving `from` to `to` is allowed right now.
    fn validate(&self, from: Square, to: Square) -> Result<Piece, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let piece = self
            .board
            .get(from)
            .ok_or(MoveError::EmptySource { square: from })?;
        if piece.color() != self.turn {
            return Err(MoveError::WrongTurn { turn: self.turn });
        }
        if !self.legal_moves(from).contains(to) {
            return Err(MoveError::IllegalDestination { from, to });
        }
        Ok(piece)
    }

    /// Play a move for the side to move.
    ///
    /// On success the destination's occupant is captured, the turn passes to the
    /// other side, and the position is re-evaluated for that side. On failure
    /// nothing changes.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        let piece = match self.validate(from, to) {
            Ok(piece) => piece,
            Err(err) => {
                debug!(%from, %to, error = %err, "move rejected");
                return Err(err);
            }
        };

        let mv = Move::new(from, to);
        let captured = self.board.get(to);
        self.board = self.board.make_move(mv);
        self.turn = self.turn.flip();
        self.status = evaluate(&self.board, self.turn);
        trace!(%mv, piece = %piece, "move applied");

        if let Some(message) = self.status.message() {
            info!(status = %self.status, "{message}");
        }

        Ok(MoveOutcome {
            mv,
            piece,
            captured,
            status: self.status,
        })
    }

    /// Play a move given as a [`Move`].
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        self.apply_move(mv.from(), mv.to())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{GameState, Status, evaluate};
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::MoveError;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn new_game_is_ongoing_with_white_to_move() {
        let game = GameState::new();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.status(), Status::Ongoing);
        assert!(!game.is_over());
        assert_eq!(*game.board(), Board::starting_position());
    }

    #[test]
    fn apply_move_flips_turn_and_relocates() {
        let mut game = GameState::new();
        let outcome = game.apply_move(Square::E2, Square::E4).unwrap();
        assert_eq!(outcome.piece, Piece::WHITE_PAWN);
        assert_eq!(outcome.captured, None);
        assert_eq!(outcome.status, Status::Ongoing);
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.board().get(Square::E4), Some(Piece::WHITE_PAWN));
        assert_eq!(game.board().get(Square::E2), None);
    }

    #[test]
    fn capture_is_reported() {
        let mut game = GameState::new();
        game.apply_move(Square::E2, Square::E4).unwrap();
        game.apply_move(Square::D7, Square::D5).unwrap();
        let outcome = game.apply_move(Square::E4, Square::D5).unwrap();
        assert_eq!(outcome.captured, Some(Piece::BLACK_PAWN));
        assert_eq!(game.board().occupied().count(), 31);
    }

    #[test]
    fn rejections_leave_state_untouched() {
        let mut game = GameState::new();
        let before = game.clone();

        assert_eq!(
            game.apply_move(Square::E4, Square::E5),
            Err(MoveError::EmptySource { square: Square::E4 })
        );
        assert_eq!(
            game.apply_move(Square::E7, Square::E5),
            Err(MoveError::WrongTurn { turn: Color::White })
        );
        assert_eq!(
            game.apply_move(Square::E2, Square::E5),
            Err(MoveError::IllegalDestination {
                from: Square::E2,
                to: Square::E5
            })
        );
        assert_eq!(
            game.apply_move(Square::A1, Square::A2),
            Err(MoveError::IllegalDestination {
                from: Square::A1,
                to: Square::A2
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn checkmate_queen_protected_by_king() {
        // White king h1, black queen g2 guarded by the black king on f3.
        let game = GameState::from_placement("8/8/8/8/8/5k2/6q1/7K", Color::White).unwrap();
        assert!(game.in_check());
        assert_eq!(game.status(), Status::Checkmate { loser: Color::White });
        assert_eq!(game.status().winner(), Some(Color::Black));
        assert!(game.all_legal_moves().is_empty());
    }

    #[test]
    fn unprotected_queen_is_not_mate() {
        // Same queen, but the black king is far away: the white king captures on g2.
        let game = GameState::from_placement("k7/8/8/8/8/8/6q1/7K", Color::White).unwrap();
        assert!(game.in_check());
        assert_eq!(game.status(), Status::Ongoing);
        assert!(game.legal_moves(Square::H1).contains(Square::G2));
    }

    #[test]
    fn stalemate_king_in_corner() {
        // Lone white king on a1; the queen on b3 covers a2, b1 and b2 without giving check.
        let game = GameState::from_placement("7k/8/8/8/8/1q6/8/K7", Color::White).unwrap();
        assert!(!game.in_check());
        assert_eq!(game.status(), Status::Stalemate);
        assert_eq!(game.status().winner(), None);
    }

    #[test]
    fn stalemate_king_and_rook() {
        // White king a8: the black king on c8 covers b7/b8, the rook on h7 covers a7.
        let game = GameState::from_placement("K1k5/7r/8/8/8/8/8/8", Color::White).unwrap();
        assert!(!game.in_check());
        assert_eq!(game.status(), Status::Stalemate);
        assert!(game.legal_moves(Square::A8).is_empty());
    }

    #[test]
    fn no_moves_after_game_over() {
        let mut game = GameState::from_placement("8/8/8/8/8/5k2/6q1/7K", Color::White).unwrap();
        let before = game.clone();
        assert_eq!(game.apply_move(Square::H1, Square::G1), Err(MoveError::GameOver));
        assert_eq!(game.apply_move(Square::H1, Square::G2), Err(MoveError::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn no_destinations_after_game_over() {
        let game = GameState::from_placement("8/8/8/8/8/5k2/6q1/7K", Color::White).unwrap();
        assert!(game.legal_moves(Square::G2).is_empty());
        assert!(game.legal_moves(Square::F3).is_empty());
        assert!(!crate::movegen::legal_moves(game.board(), Square::G2).is_empty());
    }

    #[test]
    fn fools_mate() {
        let mut game = GameState::new();
        game.apply_move(Square::F2, Square::F3).unwrap();
        game.apply_move(Square::E7, Square::E5).unwrap();
        game.apply_move(Square::G2, Square::G4).unwrap();
        let outcome = game.apply_move(Square::D8, Square::H4).unwrap();
        assert_eq!(outcome.status, Status::Checkmate { loser: Color::White });
        assert!(game.is_over());
        assert_eq!(
            game.status().message().as_deref(),
            Some("Checkmate! Black wins.")
        );
    }

    #[test]
    fn evaluate_is_for_the_given_side() {
        // White is mated here, but Black (not on move) has moves of its own.
        let board = Board::from_placement("8/8/8/8/8/5k2/6q1/7K").unwrap();
        assert_eq!(evaluate(&board, Color::White), Status::Checkmate { loser: Color::White });
        assert_eq!(evaluate(&board, Color::Black), Status::Ongoing);
    }

    #[test]
    fn status_messages() {
        assert_eq!(Status::Ongoing.message(), None);
        assert_eq!(
            Status::Checkmate { loser: Color::Black }.message().as_deref(),
            Some("Checkmate! White wins.")
        );
        assert_eq!(Status::Stalemate.message().as_deref(), Some("Stalemate! It's a draw."));
    }
}
