use crate::chess::{Board, Color, Move, Outcome, Square};

impl Board {
    /// Whether any piece of color `by` may move onto `king`.
    ///
    /// The square is tested as an ordinary destination of each attacker, so
    /// pawns only attack it diagonally and only while something stands on it.
    pub fn is_check(&self, king: Square, by: Color) -> bool {
        self.iter()
            .filter(|(_, p)| p.color() == by)
            .any(|(sq, p)| self.is_legal(p, Move::new(sq, king)))
    }

    /// The [`Square`] of the first king found in check, white before black.
    pub fn checked_king(&self) -> Option<Square> {
        Color::ALL.into_iter().find_map(|c| {
            let king = self.king(c)?;
            self.is_check(king, !c).then_some(king)
        })
    }

    /// The [`Outcome`] of the game, if it is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match (self.king(Color::White), self.king(Color::Black)) {
            (Some(_), Some(_)) => None,
            (Some(_), None) => Some(Outcome::KingCaptured(Color::White)),
            (None, Some(_)) => Some(Outcome::KingCaptured(Color::Black)),
            (None, None) => Some(Outcome::NoKings),
        }
    }

    /// Whether either king is missing from the board.
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }
}
