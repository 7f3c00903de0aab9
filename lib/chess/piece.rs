use crate::chess::{Color, Role};
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::str::FromStr;

/// A chess [piece][`Role`] of a certain [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Piece {
    WhitePawn,
    BlackPawn,
    WhiteKnight,
    BlackKnight,
    WhiteBishop,
    BlackBishop,
    WhiteRook,
    BlackRook,
    WhiteQueen,
    BlackQueen,
    WhiteKing,
    BlackKing,
}

impl Piece {
    /// Constructs [`Piece`] from a pair of [`Role`] and [`Color`].
    pub fn new(r: Role, c: Color) -> Self {
        use {Color::*, Piece::*};
        match (r, c) {
            (Role::Pawn, White) => WhitePawn,
            (Role::Pawn, Black) => BlackPawn,
            (Role::Knight, White) => WhiteKnight,
            (Role::Knight, Black) => BlackKnight,
            (Role::Bishop, White) => WhiteBishop,
            (Role::Bishop, Black) => BlackBishop,
            (Role::Rook, White) => WhiteRook,
            (Role::Rook, Black) => BlackRook,
            (Role::Queen, White) => WhiteQueen,
            (Role::Queen, Black) => BlackQueen,
            (Role::King, White) => WhiteKing,
            (Role::King, Black) => BlackKing,
        }
    }

    /// This piece's [`Role`].
    pub fn role(&self) -> Role {
        use Piece::*;
        match self {
            WhitePawn | BlackPawn => Role::Pawn,
            WhiteKnight | BlackKnight => Role::Knight,
            WhiteBishop | BlackBishop => Role::Bishop,
            WhiteRook | BlackRook => Role::Rook,
            WhiteQueen | BlackQueen => Role::Queen,
            WhiteKing | BlackKing => Role::King,
        }
    }

    /// This piece's [`Color`].
    pub fn color(&self) -> Color {
        use Piece::*;
        match self {
            WhitePawn | WhiteKnight | WhiteBishop | WhiteRook | WhiteQueen | WhiteKing => {
                Color::White
            }
            BlackPawn | BlackKnight | BlackBishop | BlackRook | BlackQueen | BlackKing => {
                Color::Black
            }
        }
    }

    /// Mirrors this piece's [`Color`].
    pub fn flip(&self) -> Self {
        Piece::new(self.role(), !self.color())
    }

    fn figurine(&self) -> char {
        use Piece::*;
        match self {
            WhitePawn => '♙',
            WhiteKnight => '♘',
            WhiteBishop => '♗',
            WhiteRook => '♖',
            WhiteQueen => '♕',
            WhiteKing => '♔',
            BlackPawn => '♟',
            BlackKnight => '♞',
            BlackBishop => '♝',
            BlackRook => '♜',
            BlackQueen => '♛',
            BlackKing => '♚',
        }
    }
}

impl From<Piece> for char {
    fn from(p: Piece) -> char {
        let c = p.role().to_string().remove(0);
        match p.color() {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

/// Prints the piece's letter in [FEN], upper case for white.
///
/// The alternate flag `{:#}` prints its Unicode figurine instead.
///
/// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = if f.alternate() {
            self.figurine()
        } else {
            (*self).into()
        };

        f.write_char(c)
    }
}

/// The reason why parsing [`Piece`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected one of `PNBRQK` or `pnbrqk`")]
pub struct ParsePieceError;

impl TryFrom<char> for Piece {
    type Error = ParsePieceError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        let role = c.to_ascii_lowercase().to_string().parse();
        role.map(|r| Piece::new(r, color))
            .map_err(|_| ParsePieceError)
    }
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => Err(ParsePieceError),
        }
    }
}
