use crate::chess::{Board, Color, IllegalMove, Move, Outcome, Piece, Square};
use derive_more::Display;
use tracing::{debug, info, instrument};

/// The stage a [`Session`] is at.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Waiting for the side to move to pick one of its pieces.
    SelectingPiece,
    /// A piece has been picked and is waiting for its destination.
    PieceSelected(Piece, Square),
    /// A king has been captured and no further moves are accepted.
    GameOver(Outcome),
}

/// What happened in response to [`Session::activate`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Event {
    /// The input had no effect.
    Ignored,
    /// A piece of the side to move was picked.
    Selected(Piece, Square),
    /// The selected piece moved, possibly capturing and ending the game.
    Moved {
        piece: Piece,
        r#move: Move,
        capture: Option<Piece>,
        outcome: Option<Outcome>,
    },
    /// The selected piece could not move there and was dropped.
    Rejected(IllegalMove),
}

/// The status line of a [`Session`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Status {
    #[display(fmt = "White's Turn")]
    WhiteToMove,
    #[display(fmt = "Black's Turn")]
    BlackToMove,
    #[display(fmt = "Game Over")]
    GameOver,
}

/// A game of chess driven by one activated [`Square`] at a time.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Session {
    board: Board,
    turn: Color,
    phase: Phase,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    /// A game from the standard starting position, white to move.
    pub fn new() -> Self {
        Session::with_board(Board::initial(), Color::White)
    }

    /// A game from an arbitrary [`Board`], with `turn` to move.
    pub fn with_board(board: Board, turn: Color) -> Self {
        let phase = match board.outcome() {
            None => Phase::SelectingPiece,
            Some(o) => Phase::GameOver(o),
        };

        Session { board, turn, phase }
    }

    /// The current [`Board`].
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The current [`Phase`].
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The [`Square`] of a king in check, if any.
    pub fn checked_king(&self) -> Option<Square> {
        self.board.checked_king()
    }

    /// The current [`Status`].
    pub fn status(&self) -> Status {
        match (self.phase, self.turn) {
            (Phase::GameOver(_), _) => Status::GameOver,
            (_, Color::White) => Status::WhiteToMove,
            (_, Color::Black) => Status::BlackToMove,
        }
    }

    /// Feeds one activated [`Square`] into the session.
    ///
    /// The first activation selects a piece of the side to move, the second
    /// attempts to move it there. The selection is dropped either way.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn), ret)]
    pub fn activate(&mut self, sq: Square) -> Event {
        match self.phase {
            Phase::GameOver(_) => Event::Ignored,

            Phase::SelectingPiece => match self.board[sq] {
                Some(p) if p.color() == self.turn => {
                    self.phase = Phase::PieceSelected(p, sq);
                    Event::Selected(p, sq)
                }

                _ => Event::Ignored,
            },

            Phase::PieceSelected(piece, whence) => {
                let m = Move::new(whence, sq);
                self.phase = Phase::SelectingPiece;

                match self.board.make(piece, m) {
                    Err(e) => Event::Rejected(e),
                    Ok(capture) => {
                        debug!(%piece, %m, "move accepted");

                        self.turn = !self.turn;
                        let outcome = self.board.outcome();

                        if let Some(o) = outcome {
                            info!(outcome = %o, "game over");
                            self.phase = Phase::GameOver(o);
                        }

                        Event::Moved {
                            piece,
                            r#move: m,
                            capture,
                            outcome,
                        }
                    }
                }
            }
        }
    }

    /// Activates the source and then the destination of a [`Move`].
    ///
    /// Any piece selected beforehand is dropped first. Stops early if the
    /// source square does not select a piece.
    pub fn play(&mut self, m: Move) -> Event {
        if let Phase::PieceSelected(..) = self.phase {
            self.phase = Phase::SelectingPiece;
        }

        match self.activate(m.whence()) {
            Event::Selected(..) => self.activate(m.whither()),
            e => e,
        }
    }
}
