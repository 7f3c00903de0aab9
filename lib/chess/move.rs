use crate::chess::{ParseSquareError, Piece, Square};
use derive_more::{Constructor, Display, Error};
use std::str::FromStr;

/// A chess move, from one [`Square`] to another.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{_0}{_1}")]
pub struct Move(Square, Square);

impl Move {
    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.1
    }
}

/// Represents an illegal [`Move`] of a [`Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "moving `{_0}` by `{_1}` is illegal")]
#[error(ignore)]
pub struct IllegalMove(pub Piece, pub Move);

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "failed to parse move; {}")]
pub enum ParseMoveError {
    #[display(fmt = "invalid 'from' square")]
    InvalidFromSquare(ParseSquareError),

    #[display(fmt = "invalid 'to' square")]
    InvalidToSquare(ParseSquareError),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParseMoveError::*;

        let i = s.char_indices().nth(2).map_or_else(|| s.len(), |(i, _)| i);

        Ok(Move(
            s[..i].parse().map_err(InvalidFromSquare)?,
            s[i..].parse().map_err(InvalidToSquare)?,
        ))
    }
}
