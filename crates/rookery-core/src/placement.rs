//! Piece-placement notation (the first field of FEN) for [`Board`].

use std::fmt::Write as _;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::PlacementError;
use crate::piece::Piece;
use crate::square::Square;

/// Piece placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Parse a piece placement such as [`STARTING_PLACEMENT`].
    ///
    /// Ranks are listed from rank 8 (row 0) down to rank 1 (row 7).
    pub fn from_placement(placement: &str) -> Result<Board, PlacementError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 8 - row as u8;
            let mut col: usize = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                    continue;
                }

                let piece =
                    Piece::from_letter(c).ok_or(PlacementError::InvalidPieceChar { character: c })?;
                if col >= 8 {
                    return Err(PlacementError::BadRankLength {
                        rank,
                        length: col + 1,
                    });
                }
                board.set(Square::at(row as u8, col as u8), Some(piece));
                col += 1;
            }

            if col != 8 {
                return Err(PlacementError::BadRankLength { rank, length: col });
            }
        }

        Ok(board)
    }

    /// Render the piece placement, the inverse of [`Board::from_placement`].
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in 0u8..8 {
            let mut empty = 0u8;
            for col in 0u8..8 {
                match self.get(Square::at(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            let _ = write!(out, "{empty}");
                            empty = 0;
                        }
                        out.push(piece.letter());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                let _ = write!(out, "{empty}");
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    /// Accepts a bare placement or a full FEN record; fields after the first are ignored.
    fn from_str(s: &str) -> Result<Board, PlacementError> {
        let placement = s.split_whitespace().next().unwrap_or("");
        Board::from_placement(placement)
    }
}

impl FromStr for Color {
    type Err = PlacementError;

    /// Parses the side-to-move field: `w`/`b`, or the full color name.
    fn from_str(s: &str) -> Result<Color, PlacementError> {
        match s.to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Color::White),
            "b" | "black" => Ok(Color::Black),
            _ => Err(PlacementError::InvalidColor {
                found: s.to_string(),
            }),
        }
    }
}
