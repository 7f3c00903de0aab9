use crate::chess::{Board, Color, IllegalMove, Move, Piece, Role, Square};
use arrayvec::ArrayVec;
use tracing::{debug, instrument};

/// The squares strictly between two squares on a common line or diagonal.
///
/// The squares must be aligned, otherwise the walk never meets `whither`.
fn between(whence: Square, whither: Square) -> ArrayVec<Square, 6> {
    let (dr, dc) = whither - whence;
    let (sr, sc) = (dr.signum(), dc.signum());

    let mut squares = ArrayVec::new();
    let mut sq = whence.offset(sr, sc);

    while let Some(s) = sq.filter(|&s| s != whither) {
        squares.push(s);
        sq = s.offset(sr, sc);
    }

    squares
}

impl Board {
    /// Whether no piece stands strictly between two squares.
    fn is_clear(&self, whence: Square, whither: Square) -> bool {
        between(whence, whither).into_iter().all(|sq| self[sq].is_none())
    }

    fn is_pawn_move(&self, c: Color, whence: Square, whither: Square) -> bool {
        let (dr, dc) = whither - whence;
        let forward = c.forward();

        match (dr, dc.abs(), self[whither]) {
            (dr, 0, None) if dr == forward => true,
            (dr, 0, None) if dr == 2 * forward => {
                let home = match c {
                    Color::White => 6,
                    Color::Black => 1,
                };

                let skipped = whence.offset(forward, 0);
                whence.row() == home && skipped.map_or(false, |s| self[s].is_none())
            }

            (dr, 1, Some(p)) => dr == forward && p.color() != c,
            _ => false,
        }
    }

    /// Whether `piece` may move by [`Move`] on this board.
    ///
    /// Only the movement rules of each role are considered, so this neither
    /// checks whose turn it is, nor whether `piece` actually stands on the
    /// source square, nor whether the move leaves its own king in check.
    pub fn is_legal(&self, piece: Piece, m: Move) -> bool {
        let (whence, whither) = (m.whence(), m.whither());

        if whence == whither || self[whither].map(|p| p.color()) == Some(piece.color()) {
            return false;
        }

        let (dr, dc) = whither - whence;

        let (orthogonal, diagonal) = (dr == 0 || dc == 0, dr.abs() == dc.abs());

        let reachable = match piece.role() {
            Role::Pawn => self.is_pawn_move(piece.color(), whence, whither),
            Role::Knight => matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1)),
            Role::King => dr.abs() <= 1 && dc.abs() <= 1,
            Role::Bishop => diagonal,
            Role::Rook => orthogonal,
            Role::Queen => orthogonal || diagonal,
        };

        reachable && (!piece.role().is_slider() || self.is_clear(whence, whither))
    }

    /// Moves `piece` by [`Move`], if [legal][`Board::is_legal`] on this board.
    ///
    /// Returns the captured [`Piece`], if any, or leaves the board untouched if
    /// the move is illegal.
    #[instrument(level = "trace", skip(self, piece, m), fields(%piece, %m), ret, err)]
    pub fn make(&mut self, piece: Piece, m: Move) -> Result<Option<Piece>, IllegalMove> {
        if !self.is_legal(piece, m) {
            return Err(IllegalMove(piece, m));
        }

        self.take(m.whence());
        let capture = self.set(m.whither(), Some(piece));

        if let Some(p) = capture {
            debug!(%piece, %m, captured = %p);
        }

        Ok(capture)
    }

    /// Every [legal][`Board::is_legal`] move of the pieces of a [`Color`].
    ///
    /// Moves are ordered by source and then by destination square, row by row.
    pub fn moves(&self, side: Color) -> Vec<Move> {
        self.iter()
            .filter(|(_, p)| p.color() == side)
            .flat_map(|(whence, p)| {
                Square::iter()
                    .map(move |whither| Move::new(whence, whither))
                    .filter(move |&m| self.is_legal(p, m))
            })
            .collect()
    }
}
