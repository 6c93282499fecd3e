//! Core chess types: board representation, move generation, and game rules.

mod board;
mod chess_move;
mod color;
mod error;
mod game;
mod make_move;
pub mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod placement;
mod square;
mod square_set;

pub use board::{Board, PrettyBoard};
pub use chess_move::Move;
pub use color::Color;
pub use error::{MoveError, PlacementError};
pub use game::{GameState, MoveOutcome, Status, evaluate};
pub use movegen::{
    generate_legal_moves, has_legal_move, is_attacked, is_in_check, legal_moves,
    pseudo_legal_moves,
};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use square::Square;
pub use square_set::SquareSet;
