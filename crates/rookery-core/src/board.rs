//! The chess board: an 8x8 grid of optional pieces.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Piece placement, one cell per square.
///
/// The board only stores pieces. Movement rules live in [`crate::movegen`].
/// It is `Copy` so that move simulation can work on a scratch copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (col, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                let col = col as u8;
                board.set(Square::at(color.back_row(), col), Some(Piece::new(kind, color)));
                board.set(
                    Square::at(color.pawn_row(), col),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Place a piece on (or clear) the given square, replacing any occupant.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.index()] = piece;
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(Piece::color)
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_some()
    }

    /// Iterate over occupied squares and their pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Squares holding a piece of the given color.
    pub fn side(&self, color: Color) -> SquareSet {
        self.pieces()
            .filter(|(_, piece)| piece.color() == color)
            .map(|(sq, _)| sq)
            .collect()
    }

    /// All occupied squares.
    pub fn occupied(&self) -> SquareSet {
        self.pieces().map(|(sq, _)| sq).collect()
    }

    /// Return the square of `color`'s king, or `None` if it has none.
    ///
    /// With more than one king of a color the last in row-major order is returned.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces()
            .filter(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
            .last()
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            coordinates: true,
            glyphs: false,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.placement())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, row 0 at the top.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    coordinates: bool,
    glyphs: bool,
}

impl PrettyBoard<'_> {
    /// Toggle the rank digits and file letters around the grid.
    pub fn coordinates(mut self, on: bool) -> Self {
        self.coordinates = on;
        self
    }

    /// Draw pieces as Unicode chess symbols instead of letters.
    pub fn glyphs(mut self, on: bool) -> Self {
        self.glyphs = on;
        self
    }
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            if self.coordinates {
                write!(f, "{}  ", 8 - row)?;
            }
            for col in 0u8..8 {
                let c = match self.board.get(Square::at(row, col)) {
                    Some(piece) if self.glyphs => piece.glyph(),
                    Some(piece) => piece.letter(),
                    None => '.',
                };
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            if row < 7 || self.coordinates {
                writeln!(f)?;
            }
        }
        if self.coordinates {
            write!(f, "   a b c d e f g h")?;
        }
        Ok(())
    }
}
