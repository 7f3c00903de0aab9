use derive_more::{Display, Error};
use shakmaty as sm;
use std::{fmt, ops::Sub, str::FromStr};

/// A square on the chess board, addressed by row and column.
///
/// Row 0 is black's back rank and row 7 is white's back rank, while column 0
/// is the `a` file. A [`Square`] is always within the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Square {
    #[cfg_attr(test, strategy(0u8..8))]
    row: u8,
    #[cfg_attr(test, strategy(0u8..8))]
    col: u8,
}

impl Square {
    /// Constructs [`Square`] from a pair of row and column.
    ///
    /// # Panics
    ///
    /// Panics if either `row` or `col` is not in the range (0..=7).
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square ({row}, {col}) is off the board");
        Square { row, col }
    }

    /// This square's row in the range (0..=7).
    #[inline(always)]
    pub fn row(&self) -> u8 {
        self.row
    }

    /// This square's column in the range (0..=7).
    #[inline(always)]
    pub fn col(&self) -> u8 {
        self.col
    }

    /// Returns the square displaced by `(dr, dc)`, if it is still on the board.
    #[inline(always)]
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Self> {
        let row = (self.row as i8).checked_add(dr)?;
        let col = (self.col as i8).checked_add(dc)?;
        (row, col).try_into().ok()
    }

    /// Returns an iterator over all [`Square`]s, row by row.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..64u8).map(|i| Square::new(i / 8, i % 8))
    }
}

/// The displacement `(dr, dc)` from `rhs` to `self`.
impl Sub for Square {
    type Output = (i8, i8);

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        (
            self.row as i8 - rhs.row as i8,
            self.col as i8 - rhs.col as i8,
        )
    }
}

/// The reason why converting [`Square`] from coordinates failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "expected coordinates in the range `(0..=7)`")]
pub struct SquareOutOfRange;

impl TryFrom<(i8, i8)> for Square {
    type Error = SquareOutOfRange;

    fn try_from((row, col): (i8, i8)) -> Result<Self, Self::Error> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square::new(row as u8, col as u8))
        } else {
            Err(SquareOutOfRange)
        }
    }
}

/// Prints the square in algebraic notation, e.g. row 7 column 4 is `e1`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "expected a file in `a..=h` followed by a rank in `1..=8`")]
pub struct ParseSquareError;

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            &[f @ b'a'..=b'h', r @ b'1'..=b'8'] => Ok(Square::new(b'8' - r, f - b'a')),
            _ => Err(ParseSquareError),
        }
    }
}

#[doc(hidden)]
impl From<Square> for sm::Square {
    fn from(s: Square) -> Self {
        sm::Square::new(u32::from((7 - s.row) * 8 + s.col))
    }
}
