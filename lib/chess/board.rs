use crate::chess::{Color, ParsePieceError, Piece, Role, Square, SquareOutOfRange};
use derive_more::{Display, Error, From};
use std::fmt::{self, Write};
use std::{ops::Index, str::FromStr};

/// The chess board.
///
/// This type does not validate whether the placement it holds is reachable
/// according to any set of chess rules.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

// We provide a custom implementation of Arbitrary rather than deriving,
// otherwise proptest overflows the stack generating large arrays.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{collection::vec, option::weighted, prelude::*};

        vec(weighted(0.25, any::<Piece>()), 64)
            .prop_map(|v| {
                let mut board = Board::empty();

                board
                    .squares
                    .iter_mut()
                    .flatten()
                    .zip(v)
                    .for_each(|(s, p)| *s = p);

                board
            })
            .boxed()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl Board {
    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting position.
    pub fn initial() -> Self {
        use Role::*;

        const BACK_RANK: [Role; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = Board::empty();

        for (col, role) in BACK_RANK.into_iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(role, Color::Black));
            board.squares[1][col] = Some(Piece::new(Pawn, Color::Black));
            board.squares[6][col] = Some(Piece::new(Pawn, Color::White));
            board.squares[7][col] = Some(Piece::new(role, Color::White));
        }

        board
    }

    /// The [`Piece`] at the given coordinates, if any.
    pub fn piece_at(&self, row: i8, col: i8) -> Result<Option<Piece>, SquareOutOfRange> {
        let sq: Square = (row, col).try_into()?;
        Ok(self[sq])
    }

    /// Places a [`Piece`] on a [`Square`], or clears it, returning what was there.
    pub fn set(&mut self, sq: Square, p: Option<Piece>) -> Option<Piece> {
        let s = &mut self.squares[sq.row() as usize][sq.col() as usize];
        std::mem::replace(s, p)
    }

    /// Removes the [`Piece`] on a [`Square`], if any.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.set(sq, None)
    }

    /// An iterator over all pieces on the board, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|sq| self[sq].map(|p| (sq, p)))
    }

    /// [`Square`] occupied by the king of a [`Color`].
    ///
    /// If there happens to be more than one, the first one row by row.
    pub fn king(&self, side: Color) -> Option<Square> {
        let king = Piece::new(Role::King, side);
        self.iter().find_map(|(sq, p)| (p == king).then_some(sq))
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.row() as usize][sq.col() as usize]
    }
}

/// Prints the piece placement field of the [FEN], starting from row 0.
///
/// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.squares.iter().enumerate() {
            if i > 0 {
                f.write_char('/')?;
            }

            let mut empty = 0;

            for &p in row {
                match p {
                    None => empty += 1,
                    Some(p) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }

                        write!(f, "{p}")?;
                    }
                }
            }

            if empty > 0 {
                write!(f, "{empty}")?;
            }
        }

        Ok(())
    }
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse board; {}")]
pub enum ParseBoardError {
    #[display(fmt = "expected 8 rows separated by `/`")]
    #[from(ignore)]
    WrongNumberOfRows,

    #[display(fmt = "expected row {_0} to span exactly 8 squares")]
    #[from(ignore)]
    #[error(ignore)]
    WrongRowLength(usize),

    #[display(fmt = "invalid piece")]
    InvalidPiece(ParsePieceError),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParseBoardError::*;

        let rows: Vec<_> = s.split('/').collect();
        if rows.len() != 8 {
            return Err(WrongNumberOfRows);
        }

        let mut board = Board::empty();

        for (r, row) in rows.into_iter().enumerate() {
            let mut col = 0;

            for c in row.chars() {
                match c.to_digit(10) {
                    Some(n @ 1..=8) => col += n as usize,
                    _ => {
                        if col >= 8 {
                            return Err(WrongRowLength(r));
                        }

                        board.squares[r][col] = Some(c.try_into()?);
                        col += 1;
                    }
                }
            }

            if col != 8 {
                return Err(WrongRowLength(r));
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn initial_board_has_sixteen_pieces_of_each_color() {
        let board = Board::initial();
        for c in Color::ALL {
            assert_eq!(board.iter().filter(|(_, p)| p.color() == c).count(), 16);
        }
    }

    #[test]
    fn initial_board_has_standard_back_ranks() {
        let board = Board::initial();
        let back: Vec<_> = (0..8).map(|c| board[Square::new(0, c)]).collect();
        let front: Vec<_> = (0..8).map(|c| board[Square::new(1, c)]).collect();

        assert_eq!(
            back,
            "rnbqkbnr".chars().map(|c| Piece::try_from(c).ok()).collect::<Vec<_>>()
        );

        assert_eq!(front, vec![Some(Piece::BlackPawn); 8]);

        for c in 0..8 {
            assert_eq!(board[Square::new(7, c)], back[c as usize].map(|p| p.flip()));
            assert_eq!(board[Square::new(6, c)], Some(Piece::WhitePawn));
        }
    }

    #[test]
    fn initial_board_has_empty_middle_rows() {
        let board = Board::initial();
        assert!(Square::iter()
            .filter(|sq| (2..=5).contains(&sq.row()))
            .all(|sq| board[sq].is_none()));
    }

    #[test]
    fn default_board_is_the_initial_board() {
        assert_eq!(Board::default(), Board::initial());
    }

    #[test]
    fn initial_board_prints_as_fen_placement() {
        assert_eq!(
            Board::initial().to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }

    #[test]
    fn empty_board_has_no_pieces() {
        assert_eq!(Board::empty().iter().count(), 0);
        assert_eq!(Board::empty().to_string(), "8/8/8/8/8/8/8/8");
    }

    #[proptest]
    fn piece_at_agrees_with_indexing(b: Board, sq: Square) {
        assert_eq!(b.piece_at(sq.row() as i8, sq.col() as i8), Ok(b[sq]));
    }

    #[proptest]
    fn piece_at_fails_out_of_range(b: Board, #[strategy(8i8..)] row: i8, col: i8) {
        assert_eq!(b.piece_at(row, col), Err(SquareOutOfRange));
        assert_eq!(b.piece_at(col, row), Err(SquareOutOfRange));
    }

    #[proptest]
    fn set_replaces_piece_on_square(mut b: Board, sq: Square, p: Option<Piece>) {
        let prev = b[sq];
        assert_eq!(b.set(sq, p), prev);
        assert_eq!(b[sq], p);
    }

    #[proptest]
    fn take_clears_square(mut b: Board, sq: Square) {
        let prev = b[sq];
        assert_eq!(b.take(sq), prev);
        assert_eq!(b[sq], None);
    }

    #[proptest]
    fn iter_visits_every_occupied_square(b: Board) {
        for (sq, p) in b.iter() {
            assert_eq!(b[sq], Some(p));
        }

        assert_eq!(
            b.iter().count(),
            Square::iter().filter(|&sq| b[sq].is_some()).count()
        );
    }

    #[proptest]
    fn king_finds_the_first_king_of_a_color(b: Board, c: Color) {
        let expected = Square::iter().find(|&sq| b[sq] == Some(Piece::new(Role::King, c)));
        assert_eq!(b.king(c), expected);
    }

    #[test]
    fn initial_kings_stand_on_the_e_file() {
        let board = Board::initial();
        assert_eq!(board.king(Color::White), Some(Square::new(7, 4)));
        assert_eq!(board.king(Color::Black), Some(Square::new(0, 4)));
    }

    #[proptest]
    fn parsing_printed_board_is_an_identity(b: Board) {
        assert_eq!(b.to_string().parse(), Ok(b));
    }

    #[test]
    fn parsing_board_fails_if_wrong_number_of_rows() {
        assert_eq!(
            "8/8/8/8/8/8/8".parse::<Board>(),
            Err(ParseBoardError::WrongNumberOfRows)
        );
    }

    #[test]
    fn parsing_board_fails_if_row_is_too_short_or_too_long() {
        assert_eq!(
            "8/8/7/8/8/8/8/8".parse::<Board>(),
            Err(ParseBoardError::WrongRowLength(2))
        );

        assert_eq!(
            "8/8/8/8/8/8/8/8p".parse::<Board>(),
            Err(ParseBoardError::WrongRowLength(7))
        );
    }

    #[test]
    fn parsing_board_fails_if_piece_is_invalid() {
        assert_eq!(
            "8/8/8/8/8/8/8/7x".parse::<Board>(),
            Err(ParseBoardError::InvalidPiece(ParsePieceError))
        );
    }
}
