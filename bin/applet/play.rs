use crate::{io::Io, view::View};
use anyhow::Error as Anyhow;
use clap::Parser;
use derive_more::{Display, Error};
use lib::chess::{Board, Color, Move, Square};
use lib::session::{Event, Phase, Session};
use std::io::{stdin, stdout, ErrorKind, Read, Write};
use std::str::FromStr;
use tracing::{field::display, info, instrument, warn, Span};

/// Play a game of chess on the terminal.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The initial placement of the pieces in FEN notation.
    #[clap(short, long, default_value_t)]
    board: Board,

    /// The side to move first.
    #[clap(short, long, default_value_t)]
    turn: Color,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let session = Session::with_board(self.board, self.turn);
        let mut io = Io::new(stdout(), stdin());
        drive(session, &mut io)?;
        Ok(())
    }
}

/// A line typed by the user.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Input {
    Quit,
    Square(Square),
    Move(Move),
}

/// The reason why parsing [`Input`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected a square like `e2`, a move like `e2e4`, or `quit`")]
struct ParseInputError;

impl FromStr for Input {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s == "quit" {
            Ok(Input::Quit)
        } else if let Ok(sq) = s.parse() {
            Ok(Input::Square(sq))
        } else if let Ok(m) = s.parse() {
            Ok(Input::Move(m))
        } else {
            Err(ParseInputError)
        }
    }
}

/// Feeds lines from `io` into the [`Session`] until the game ends or input runs out.
#[instrument(level = "debug", skip(session, io), err, fields(outcome))]
fn drive<W: Write, R: Read>(mut session: Session, io: &mut Io<W, R>) -> Result<Session, Anyhow> {
    loop {
        io.send(View(&session))?;

        if let Phase::GameOver(o) = session.phase() {
            Span::current().record("outcome", display(o));
            io.send(o)?;
            io.flush()?;
            break;
        }

        io.flush()?;

        let line = match io.recv() {
            Ok(line) => line,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        };

        let event = match line.parse() {
            Ok(Input::Quit) => break,
            Ok(Input::Square(sq)) => session.activate(sq),
            Ok(Input::Move(m)) => session.play(m),
            Err(e) => {
                warn!(%line, "{}", e);
                io.send(e)?;
                continue;
            }
        };

        match event {
            Event::Ignored => io.send("nothing to select there")?,
            Event::Rejected(e) => {
                warn!("{}", e);
                io.send(e)?;
            }

            Event::Moved {
                r#move: m,
                capture: Some(p),
                ..
            } => info!(%m, capture = %p),

            Event::Selected(..) | Event::Moved { .. } => {}
        }
    }

    Ok(session)
}
