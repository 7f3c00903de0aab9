use crate::chess::Color;
use derive_more::Display;

/// One of the possible outcomes of a chess game.
///
/// A game is only ever decided by the capture of a king.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Outcome {
    #[display(fmt = "the {_0} player captured the opposing king")]
    KingCaptured(Color),

    #[display(fmt = "neither king is on the board")]
    NoKings,
}

impl Outcome {
    /// The winning side, if any.
    pub fn winner(&self) -> Option<Color> {
        match *self {
            Outcome::KingCaptured(c) => Some(c),
            Outcome::NoKings => None,
        }
    }
}
